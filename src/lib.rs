//! Typed path templates for Rust.
//!
//! Describe a path as a sequence of literal segments and segments bound to
//! properties of a schema trait, then render schema instances into paths or
//! validate incoming path elements against property-derived patterns.
//!
//! # Core Components
//!
//! - [`schema!`] - Declare a schema trait whose properties can be bound
//! - [`TemplateBuilder`] - Fluent construction of templates
//! - [`Template`] - Rendering and matching over an immutable node list
//! - [`pairs`] - Key/value pair scanner
//! - [`maps`] - Two-map reconciliation
//!
//! # Quick Start
//!
//! ```rust
//! use typed_path_template::{Template, schema};
//!
//! schema! {
//!     pub trait Bean {
//!         fn int32(&self) -> i32;
//!         fn str(&self) -> String;
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let template = Template::<dyn Bean>::builder()
//!     .add_literal("beans")
//!     .add_property(Bean::int32)?
//!     .add_property(Bean::str)?
//!     .build()?;
//!
//! assert!(template.matches(["beans", "1234", "Alpha"]));
//! assert!(!template.matches(["beans", "1234"]));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod maps;
pub mod pairs;
pub mod pattern;
pub mod schema;
pub mod template;

// Re-export commonly used types for convenience
pub use error::{ScanError, ScanResult, TemplateError, TemplateResult};
pub use pattern::NodePattern;
pub use schema::{Decimal, PropertyRecorder, PropertyType, Schema};
pub use template::{Node, NodeDescriptor, PathConfig, PathElement, Template, TemplateBuilder};
