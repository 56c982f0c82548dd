//! Named, typed values: fields, parameters, methods and harvested locals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Private,
    Protected,
    /// No modifier (package-private)
    #[default]
    Package,
}

impl Accessibility {
    /// Single-character symbol used in class diagrams.
    pub fn symbol(self) -> char {
        match self {
            Accessibility::Public => '+',
            Accessibility::Private => '-',
            Accessibility::Protected => '#',
            Accessibility::Package => '~',
        }
    }

    /// Map an access modifier keyword, if it is one.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Accessibility::Public),
            "private" => Some(Accessibility::Private),
            "protected" => Some(Accessibility::Protected),
            _ => None,
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Anything with a name and an (optional) type.
///
/// Array brackets trailing the name are moved onto the type, so `String args[]` and
/// `String[] args` produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueInfo {
    /// Identifier
    pub name: String,

    /// Declared type; `None` for constructors and enum constants
    pub type_name: Option<String>,

    /// Declared `final`
    pub is_final: bool,
}

impl ValueInfo {
    pub fn new(name: impl Into<String>, type_name: Option<String>, is_final: bool) -> Self {
        let mut name = name.into();
        let split = name.trim_end_matches(['[', ']']).len();
        let suffix = name.split_off(split);
        Self {
            name,
            type_name: type_name.map(|type_name| type_name + &suffix),
            is_final,
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

impl fmt::Display for ValueInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " : {type_name}")?;
        }
        if self.is_final {
            f.write_str(" (final)")?;
        }
        Ok(())
    }
}

/// Method parameters carry no accessibility of their own.
pub type ParameterInfo = ValueInfo;

/// A class member: a value plus accessibility and `static`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberInfo {
    #[serde(flatten)]
    pub value: ValueInfo,
    pub accessibility: Accessibility,
    pub is_static: bool,
}

impl MemberInfo {
    pub fn new(
        accessibility: Accessibility,
        name: impl Into<String>,
        type_name: Option<String>,
        is_final: bool,
        is_static: bool,
    ) -> Self {
        Self {
            value: ValueInfo::new(name, type_name, is_final),
            accessibility,
            is_static,
        }
    }

    pub fn name(&self) -> &str {
        &self.value.name
    }

    pub fn type_name(&self) -> Option<&str> {
        self.value.type_name()
    }

    pub fn is_final(&self) -> bool {
        self.value.is_final
    }

    /// Drop the member-only attributes, keeping name, type and `final`.
    pub fn into_value(self) -> ValueInfo {
        self.value
    }

    fn write_with(&self, f: &mut fmt::Formatter<'_>, parameters: Option<&[ParameterInfo]>) -> fmt::Result {
        write!(f, "{} {}", self.accessibility, self.value.name)?;
        if let Some(parameters) = parameters {
            f.write_str("(")?;
            for (i, parameter) in parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{parameter}")?;
            }
            f.write_str(")")?;
        }
        if let Some(type_name) = &self.value.type_name {
            write!(f, " : {type_name}")?;
        }
        if self.value.is_final {
            f.write_str(" (final)")?;
        }
        Ok(())
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, None)
    }
}

/// Fields add nothing to a plain member.
pub type FieldInfo = MemberInfo;

/// A method or constructor with its parameters and harvested local variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Name, return type (`None` for constructors), accessibility and flags
    #[serde(flatten)]
    pub member: MemberInfo,

    /// Parameters in declaration order
    pub parameters: Vec<ParameterInfo>,

    /// Local variable declarations found in the body, in encounter order
    pub variables: Vec<ValueInfo>,
}

impl MethodInfo {
    pub fn new(member: MemberInfo, parameters: Vec<ParameterInfo>, variables: Vec<ValueInfo>) -> Self {
        Self {
            member,
            parameters,
            variables,
        }
    }

    pub fn name(&self) -> &str {
        self.member.name()
    }

    /// Return type; `None` for constructors.
    pub fn return_type(&self) -> Option<&str> {
        self.member.type_name()
    }

    pub fn accessibility(&self) -> Accessibility {
        self.member.accessibility
    }

    pub fn is_static(&self) -> bool {
        self.member.is_static
    }

    pub fn is_constructor(&self) -> bool {
        self.member.value.type_name.is_none()
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.member.write_with(f, Some(&self.parameters))
    }
}
