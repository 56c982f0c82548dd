//! # classview
//!
//! Structural view of Java-like source code: which types exist, what they contain,
//! and how they refer to each other.
//!
//! ## Architecture
//!
//! ```text
//! Language parsers (classview-java)
//!     ↓  ClassBuilder per type body
//! ClassRegistry (append-only, keyed by full name)
//!     ↓  on-demand name resolution
//! Relations / exporters (text, JSON, DOT)
//! ```
//!
//! Records store cross-references (super type, interfaces, enclosing type, member
//! types) as the names written in the source. They are resolved against the
//! registry only when asked, so forward references, types outside the parsed set,
//! and nested types referring to each other all stay representable.
//!
//! ## Example
//!
//! ```rust
//! use classview::{ClassBuilder, ClassKind, ClassRegistry};
//!
//! let mut registry = ClassRegistry::new();
//! let mut circle = ClassBuilder::new("shapes.Circle", ClassKind::Class);
//! circle.set_super_class_name("Shape");
//! registry.register(circle.build()).unwrap();
//! registry.register(ClassBuilder::new("shapes.Shape", ClassKind::Class).build()).unwrap();
//!
//! let circle = registry.get("shapes.Circle").unwrap();
//! assert_eq!(registry.super_class(circle).unwrap().name, "Shape");
//! ```

#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod export;
pub mod model;
pub mod registry;
pub mod relations;
pub mod resolver;

// Re-export main types
pub use builder::ClassBuilder;
pub use error::{RegistryError, Result};
pub use model::{
    qualify, Accessibility, ClassKind, ClassRecord, FieldInfo, ImportTable, MemberInfo,
    MethodInfo, ParameterInfo, ValueInfo,
};
pub use registry::ClassRegistry;
pub use relations::{derive_relations, Relation, RelationKind};
pub use resolver::base_type_name;
