//! Template nodes: literal segments and property-bound segments.

use crate::pattern::NodePattern;
use crate::schema::PropertyType;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Boxed accessor producing the textual value of a bound property.
pub(crate) type Evaluator<S> = Box<dyn Fn(&S) -> String + Send + Sync>;

/// One segment of a template.
pub enum Node<S: ?Sized> {
    /// Fixed text
    Literal(LiteralNode),
    /// Segment bound to a schema property
    Property(PropertyNode<S>),
}

/// A fixed-text segment.
#[derive(Debug, Clone)]
pub struct LiteralNode {
    value: String,
    pattern: NodePattern,
}

impl LiteralNode {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let pattern = NodePattern::literal(value.as_str());
        Self { value, pattern }
    }

    /// The literal text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A segment bound to a schema property.
pub struct PropertyNode<S: ?Sized> {
    name: &'static str,
    property_type: PropertyType,
    evaluator: Evaluator<S>,
    pattern: NodePattern,
}

impl<S: ?Sized> PropertyNode<S> {
    pub(crate) fn new(
        name: &'static str,
        property_type: PropertyType,
        evaluator: Evaluator<S>,
        pattern: NodePattern,
    ) -> Self {
        Self {
            name,
            property_type,
            evaluator,
            pattern,
        }
    }

    /// Name of the bound property.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the bound property.
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }
}

impl<S: ?Sized> Node<S> {
    /// Text this node contributes when rendering `instance`.
    pub fn eval<'a>(&'a self, instance: &S) -> Cow<'a, str> {
        match self {
            Node::Literal(literal) => Cow::Borrowed(&literal.value),
            Node::Property(property) => Cow::Owned((property.evaluator)(instance)),
        }
    }

    /// The pattern candidate elements are checked against.
    pub fn pattern(&self) -> &NodePattern {
        match self {
            Node::Literal(literal) => &literal.pattern,
            Node::Property(property) => &property.pattern,
        }
    }

    /// Whether `candidate` fully matches this node's pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.pattern().is_full_match(candidate)
    }

    /// Bound property name, `None` for literals.
    pub fn property_name(&self) -> Option<&'static str> {
        match self {
            Node::Literal(_) => None,
            Node::Property(property) => Some(property.name),
        }
    }

    /// Serializable description of this node.
    pub fn describe(&self) -> NodeDescriptor {
        match self {
            Node::Literal(literal) => NodeDescriptor::Literal {
                value: literal.value.clone(),
                pattern: literal.pattern.as_str().to_string(),
            },
            Node::Property(property) => NodeDescriptor::Property {
                property: property.name.to_string(),
                property_type: property.property_type,
                pattern: property.pattern.as_str().to_string(),
            },
        }
    }
}

impl<S: ?Sized> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(literal) => f.write_str(&literal.value),
            Node::Property(property) => write!(f, "{{{}:{}}}", property.name, property.pattern),
        }
    }
}

impl<S: ?Sized> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Node::Property(property) => f.debug_tuple("Property").field(property).finish(),
        }
    }
}

impl<S: ?Sized> fmt::Debug for PropertyNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyNode")
            .field("name", &self.name)
            .field("property_type", &self.property_type)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Serializable description of a template node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeDescriptor {
    /// Fixed text segment
    #[serde(rename_all = "camelCase")]
    Literal { value: String, pattern: String },
    /// Property-bound segment
    #[serde(rename_all = "camelCase")]
    Property {
        property: String,
        property_type: PropertyType,
        pattern: String,
    },
}
