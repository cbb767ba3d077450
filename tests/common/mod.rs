//! Shared fixtures for template integration tests.
//!
//! Declares the `Bean` schema used across the test suite together with a
//! fixed instance and a helper that builds the standard templates.

#![allow(dead_code)]

use typed_path_template::{Decimal, Template, TemplateResult, schema};

schema! {
    /// Schema covering every supported property type.
    pub trait Bean {
        fn int32(&self) -> i32;
        fn int64(&self) -> i64;
        fn bool(&self) -> bool;
        fn real(&self) -> f64;
        fn str(&self) -> String;
        fn decimal(&self) -> Decimal;
    }
}

/// A bean with fixed property values.
#[derive(Debug, Clone)]
pub struct FixedBean {
    pub int32: i32,
    pub int64: i64,
    pub bool: bool,
    pub real: f64,
    pub str: String,
    pub decimal: Decimal,
}

impl Default for FixedBean {
    fn default() -> Self {
        Self {
            int32: 1234,
            int64: 5678,
            bool: true,
            real: 3.14159,
            str: "Alpha".to_string(),
            decimal: decimal("1.23456789"),
        }
    }
}

impl Bean for FixedBean {
    fn int32(&self) -> i32 {
        self.int32
    }
    fn int64(&self) -> i64 {
        self.int64
    }
    fn bool(&self) -> bool {
        self.bool
    }
    fn real(&self) -> f64 {
        self.real
    }
    fn str(&self) -> String {
        self.str.clone()
    }
    fn decimal(&self) -> Decimal {
        self.decimal.clone()
    }
}

/// Parse a decimal literal used in fixtures.
pub fn decimal(text: &str) -> Decimal {
    text.parse().expect("fixture decimal must parse")
}

/// [literal "beans", int32, int64, str]
pub fn beans_template() -> TemplateResult<Template<dyn Bean>> {
    Template::<dyn Bean>::builder()
        .add_literal("beans")
        .add_property(Bean::int32)?
        .add_property(Bean::int64)?
        .add_property(Bean::str)?
        .build()
}

/// [literal "beans", int32, int64, str, real, decimal]
pub fn full_template() -> TemplateResult<Template<dyn Bean>> {
    Template::<dyn Bean>::builder()
        .add_literal("beans")
        .add_property(Bean::int32)?
        .add_property(Bean::int64)?
        .add_property(Bean::str)?
        .add_property(Bean::real)?
        .add_property(Bean::decimal)?
        .build()
}

/// Install a test logger once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
