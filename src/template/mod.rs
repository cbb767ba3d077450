//! Path templates over a schema type.
//!
//! A [`Template`] is an ordered list of [`Node`]s. Rendering walks the nodes
//! and evaluates each against a schema instance; matching walks the nodes in
//! lockstep with candidate path elements and requires every element to fully
//! match its node's pattern, with no element left over on either side.
//!
//! # Examples
//!
//! ```rust
//! use typed_path_template::{Template, schema};
//!
//! schema! {
//!     pub trait Bean {
//!         fn id(&self) -> i32;
//!         fn name(&self) -> String;
//!     }
//! }
//!
//! struct Coffee;
//!
//! impl Bean for Coffee {
//!     fn id(&self) -> i32 {
//!         7
//!     }
//!     fn name(&self) -> String {
//!         "Arabica".to_string()
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let template = Template::<dyn Bean>::builder()
//!         .add_literal("beans")
//!         .add_property(Bean::id)?
//!         .add_property(Bean::name)?
//!         .build()?;
//!
//!     let path = template.render(&Coffee, "/");
//!     assert_eq!(path, "/beans/7/Arabica");
//!     assert!(template.matches_path(&path));
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod node;

pub use builder::TemplateBuilder;
pub use config::PathConfig;
pub use node::{LiteralNode, Node, NodeDescriptor, PropertyNode};

use crate::schema::Schema;
use log::trace;
use std::borrow::Cow;
use std::fmt;

/// An immutable, ordered sequence of path nodes for schema type `S`.
///
/// Built templates hold no mutable state and are `Send + Sync`, so a single
/// template can render and match from any number of threads.
pub struct Template<S: ?Sized> {
    nodes: Vec<Node<S>>,
    config: PathConfig,
}

impl<S: Schema + ?Sized> Template<S> {
    /// Start building a template.
    pub fn builder() -> TemplateBuilder<S> {
        TemplateBuilder::new()
    }
}

impl<S: ?Sized> Template<S> {
    pub(crate) fn new(nodes: Vec<Node<S>>, config: PathConfig) -> Self {
        Self { nodes, config }
    }

    /// The nodes in insertion order.
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Number of nodes, which is also the number of elements a match needs.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the template has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The path configuration used by [`render_path`](Self::render_path)
    /// and [`matches_path`](Self::matches_path).
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Render `instance`, placing `separator` before every segment.
    ///
    /// Rendered values are not checked against their node's pattern.
    pub fn render(&self, instance: &S, separator: &str) -> String {
        self.nodes.iter().fold(String::new(), |mut path, node| {
            path.push_str(separator);
            path.push_str(&node.eval(instance));
            path
        })
    }

    /// Render `instance` with the configured separator.
    pub fn render_path(&self, instance: &S) -> String {
        self.render(instance, &self.config.separator)
    }

    /// Match candidate elements against the nodes.
    ///
    /// Succeeds only when there is exactly one element per node and every
    /// element fully matches its node's pattern. An absent element (`None`)
    /// never matches.
    pub fn matches<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: PathElement,
    {
        let mut elements = elements.into_iter();
        for (position, node) in self.nodes.iter().enumerate() {
            let Some(element) = elements.next() else {
                trace!("Too few elements: ran out at node {}", position);
                return false;
            };
            let Some(text) = element.as_element() else {
                trace!("Absent element at node {}", position);
                return false;
            };
            if !node.is_match(text) {
                trace!("Element '{}' does not match node {} ({})", text, position, node);
                return false;
            }
        }

        let exhausted = elements.next().is_none();
        if !exhausted {
            trace!("Too many elements: more than {} supplied", self.nodes.len());
        }
        exhausted
    }

    /// Split `path` on the configured separator and match the elements.
    ///
    /// One leading separator is skipped, so the output of
    /// [`render_path`](Self::render_path) is accepted as is.
    pub fn matches_path(&self, path: &str) -> bool {
        let separator = self.config.separator.as_str();
        let rest = path.strip_prefix(separator).unwrap_or(path);
        if rest.is_empty() {
            return self.matches(std::iter::empty::<&str>());
        }
        self.matches(rest.split(separator))
    }

    /// Serializable description of every node.
    pub fn describe(&self) -> Vec<NodeDescriptor> {
        self.nodes.iter().map(Node::describe).collect()
    }
}

impl<S: ?Sized> fmt::Display for Template<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}{}", self.config.separator, node)?;
        }
        Ok(())
    }
}

impl<S: ?Sized> fmt::Debug for Template<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("nodes", &self.nodes)
            .field("config", &self.config)
            .finish()
    }
}

/// A candidate path element.
///
/// `None` stands for an absent element and never matches.
pub trait PathElement {
    /// The element text, if present.
    fn as_element(&self) -> Option<&str>;
}

impl PathElement for str {
    fn as_element(&self) -> Option<&str> {
        Some(self)
    }
}

impl PathElement for String {
    fn as_element(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PathElement for Cow<'_, str> {
    fn as_element(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: PathElement> PathElement for Option<T> {
    fn as_element(&self) -> Option<&str> {
        self.as_ref().and_then(PathElement::as_element)
    }
}

impl<T: PathElement + ?Sized> PathElement for &T {
    fn as_element(&self) -> Option<&str> {
        (**self).as_element()
    }
}
