//! Data model for extracted type structure.

mod record;
mod value;

pub use record::{qualify, ClassKind, ClassRecord, ImportTable};
pub use value::{Accessibility, FieldInfo, MemberInfo, MethodInfo, ParameterInfo, ValueInfo};
