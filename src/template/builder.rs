//! Builder pattern for assembling path templates.
//!
//! Nodes are appended in order and their patterns are computed as they are
//! added. The property recorder lives here and nowhere else, so a built
//! [`Template`] carries no capture state and can be shared freely.

use crate::error::TemplateResult;
use crate::pattern::NodePattern;
use crate::schema::{PropertyRecorder, Schema};
use crate::template::Template;
use crate::template::config::PathConfig;
use crate::template::node::{LiteralNode, Node, PropertyNode};
use log::debug;
use std::fmt::Display;

/// Fluent builder for [`Template`].
///
/// # Example
///
/// ```rust
/// use typed_path_template::{TemplateBuilder, schema};
///
/// schema! {
///     pub trait Order {
///         fn id(&self) -> i64;
///         fn express(&self) -> bool;
///     }
/// }
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let template = TemplateBuilder::<dyn Order>::new()
///         .add_literal("orders")
///         .add_property(Order::id)?
///         .add_property(Order::express)?
///         .build()?;
///
///     assert!(template.matches(["orders", "17", "true"]));
///     Ok(())
/// }
/// ```
pub struct TemplateBuilder<S: Schema + ?Sized> {
    nodes: Vec<Node<S>>,
    config: PathConfig,
    recorder: PropertyRecorder,
}

impl<S: Schema + ?Sized> TemplateBuilder<S> {
    /// Create an empty builder with the default path configuration.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            config: PathConfig::default(),
            recorder: PropertyRecorder::new(),
        }
    }

    /// Use the given path configuration.
    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a literal segment.
    pub fn add_literal(mut self, text: impl Into<String>) -> Self {
        let node = LiteralNode::new(text);
        debug!("Adding literal node '{}' at position {}", node.value(), self.nodes.len());
        self.nodes.push(Node::Literal(node));
        self
    }

    /// Append a segment bound to the property `accessor` reads.
    ///
    /// The accessor is invoked once against the property recorder to find out
    /// which property it reads; afterwards it is only called on real
    /// instances during rendering.
    ///
    /// # Errors
    ///
    /// * [`TemplateError::AccessorCapture`](crate::TemplateError::AccessorCapture)
    ///   if the accessor reads no property
    /// * [`TemplateError::UnsupportedPropertyType`](crate::TemplateError::UnsupportedPropertyType)
    ///   if the property's type has no pattern
    pub fn add_property<F, V>(mut self, accessor: F) -> TemplateResult<Self>
    where
        F: Fn(&S) -> V + Send + Sync + 'static,
        V: Display,
    {
        let captured = self.recorder.capture::<S, F, V>(&accessor)?;
        let pattern = NodePattern::for_property(captured.property_type)?;
        debug!(
            "Adding property node '{}' ({}) at position {}",
            captured.name,
            captured.property_type,
            self.nodes.len()
        );

        let evaluator = Box::new(move |instance: &S| accessor(instance).to_string());
        self.nodes.push(Node::Property(PropertyNode::new(
            captured.name,
            captured.property_type,
            evaluator,
            pattern,
        )));
        Ok(self)
    }

    /// Number of nodes added so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been added yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// * [`TemplateError::InvalidArgument`](crate::TemplateError::InvalidArgument)
    ///   if the path configuration is invalid
    pub fn build(self) -> TemplateResult<Template<S>> {
        self.config.validate()?;
        debug!("Built template with {} nodes", self.nodes.len());
        Ok(Template::new(self.nodes, self.config))
    }
}

impl<S: Schema + ?Sized> Default for TemplateBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;

    crate::schema! {
        trait Shelf {
            fn row(&self) -> i32;
            fn label(&self) -> String;
            fn tags(&self) -> Vec<String>;
        }
    }

    #[test]
    fn test_nodes_kept_in_order() {
        let builder = TemplateBuilder::<dyn Shelf>::new()
            .add_literal("shelves")
            .add_property(Shelf::row)
            .unwrap()
            .add_property(Shelf::label)
            .unwrap();
        assert_eq!(builder.len(), 3);

        let template = builder.build().unwrap();
        let names: Vec<_> = template.nodes().iter().map(Node::property_name).collect();
        assert_eq!(names, vec![None, Some("row"), Some("label")]);
    }

    #[test]
    fn test_constant_accessor_rejected() {
        let result = TemplateBuilder::<dyn Shelf>::new().add_property(|_| "fixed");
        assert!(matches!(result, Err(TemplateError::AccessorCapture)));
    }

    #[test]
    fn test_unsupported_property_rejected() {
        let result = TemplateBuilder::<dyn Shelf>::new().add_property(|shelf| shelf.tags().len());
        match result {
            Err(TemplateError::UnsupportedPropertyType { property, type_name }) => {
                assert_eq!(property, "tags");
                assert!(type_name.contains("Vec"));
            }
            Err(other) => panic!("Expected UnsupportedPropertyType, got: {:?}", other),
            Ok(_) => panic!("Expected UnsupportedPropertyType, got a builder"),
        }
    }

    #[test]
    fn test_build_rejects_empty_separator() {
        let config: PathConfig = serde_json::from_str(r#"{"separator": ""}"#).unwrap();
        let result = TemplateBuilder::<dyn Shelf>::new()
            .with_config(config)
            .add_literal("shelves")
            .add_property(Shelf::row)
            .unwrap()
            .build();

        assert!(matches!(result, Err(TemplateError::InvalidArgument { .. })));
    }

    #[test]
    fn test_default_is_empty() {
        let builder: TemplateBuilder<dyn Shelf> = TemplateBuilder::default();
        assert!(builder.is_empty());
        assert!(builder.build().unwrap().is_empty());
    }
}
