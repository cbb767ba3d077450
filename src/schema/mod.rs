//! Schema declarations and property capture.
//!
//! A schema is a trait of zero-argument getters. Declaring it through
//! [`schema!`](crate::schema!) makes it usable as the schema type of a
//! [`Template`](crate::Template): the macro implements the trait for
//! [`PropertyRecorder`] so accessors can be resolved to a property name and
//! type without the caller spelling the name out.
//!
//! # Examples
//!
//! ```rust
//! use typed_path_template::{Decimal, schema};
//!
//! schema! {
//!     /// An account as seen by the routing layer.
//!     pub trait Account {
//!         fn id(&self) -> i64;
//!         fn owner(&self) -> String;
//!         fn balance(&self) -> Decimal;
//!     }
//! }
//! ```
//!
//! # Key Types
//!
//! - [`Schema`] - Recording view of a schema trait object
//! - [`PropertyRecorder`] - Synthetic instance capturing property reads
//! - [`PropertyType`] - Supported property kinds and their patterns

pub mod recorder;
pub mod types;

pub use recorder::{CapturedProperty, PropertyRecorder, RecordedProperty};
pub use types::{Decimal, PropertyType};

/// A schema type whose property reads can be recorded.
///
/// Implemented by [`schema!`](crate::schema!) for the trait object of every
/// declared schema trait.
pub trait Schema {
    /// View the recorder as an instance of the schema.
    fn recording(recorder: &PropertyRecorder) -> &Self;
}

/// Declare a schema trait usable with [`Template`](crate::Template).
///
/// Getters must take `&self` only and return a type implementing
/// `Default + 'static`. Supertraits are limited to traits the recorder
/// implements (`Debug`, `Display`).
#[macro_export]
macro_rules! schema {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident $(: $first:ident $(+ $rest:ident)*)? {
            $(
                $(#[$getter_meta:meta])*
                fn $getter:ident(&self) -> $ty:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name $(: $first $(+ $rest)*)? {
            $(
                $(#[$getter_meta])*
                fn $getter(&self) -> $ty;
            )*
        }

        impl $name for $crate::schema::PropertyRecorder {
            $(
                fn $getter(&self) -> $ty {
                    self.record::<$ty>(stringify!($getter))
                }
            )*
        }

        impl $crate::schema::Schema for dyn $name {
            fn recording(recorder: &$crate::schema::PropertyRecorder) -> &Self {
                recorder
            }
        }
    };
}
