//! Core type definitions for the document tree.
//!
//! Key design principles:
//! 1. Use u32 indices (4 bytes vs 8-byte pointers), all links are `Option<NodeId>`
//! 2. Attributes are an ordered list, not a map: source markup may carry
//!    duplicate keys, and the first occurrence wins for value retrieval
//! 3. Use SmallVec for attribute lists (most elements have few attributes)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Node identifier (index into the arena).
/// u32 allows 4 billion nodes, enough for any document.
pub type NodeId = u32;

/// Node type, matching the DOM specification numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
    Doctype = 10,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            3 => Some(NodeType::Text),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::Doctype),
            _ => None,
        }
    }
}

/// A single element attribute.
///
/// Two attributes are equal when namespace, key and value all agree; an
/// attribute *name* is just namespace + key (see [`Attribute::has_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Attribute in the empty namespace.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn namespaced(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Name equality: namespace and key agree, value is ignored.
    pub fn has_name(&self, namespace: &str, key: &str) -> bool {
        self.namespace == namespace && self.key == key
    }
}

/// One node of the parsed document tree.
///
/// Structure links are arena indices. `last_child` exists so child appends
/// are O(1); traversal only ever reads `first_child`, `next_sibling` and
/// `prev_sibling`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    /// Tag name, meaningful only for `Element` nodes.
    pub tag: String,
    /// Text or comment content; doctype name.
    pub value: String,
    /// Ordered attribute list. Duplicate keys permitted.
    pub attributes: SmallVec<[Attribute; 4]>,

    // Structure links (wired by the arena)
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl DomNode {
    fn bare(node_type: NodeType) -> Self {
        Self {
            node_id: 0,
            node_type,
            tag: String::new(),
            value: String::new(),
            attributes: SmallVec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    pub fn document() -> Self {
        Self::bare(NodeType::Document)
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::bare(NodeType::Element)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::bare(NodeType::Text)
        }
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::bare(NodeType::Comment)
        }
    }

    pub fn doctype(name: impl Into<String>) -> Self {
        Self {
            value: name.into(),
            ..Self::bare(NodeType::Doctype)
        }
    }

    /// Attach an attribute in the empty namespace (builder style).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Attach a namespaced attribute (builder style).
    pub fn with_ns_attr(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push(Attribute::namespaced(namespace, key, value));
        self
    }

    /// Get tag name for element nodes.
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.tag)
        } else {
            None
        }
    }

    /// Check if node is an element.
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if node is text.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Value of the first attribute with the given name, in attribute order.
    /// `None` when no such attribute exists (distinct from an empty value).
    pub fn attr(&self, namespace: &str, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.has_name(namespace, key))
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute with the given name is present.
    pub fn has_attr(&self, namespace: &str, key: &str) -> bool {
        self.attributes.iter().any(|a| a.has_name(namespace, key))
    }

    /// Check if the node carries *every* attribute in `wanted` (exact
    /// namespace + key + value). Vacuously true for an empty slice.
    pub fn has_attrs(&self, wanted: &[Attribute]) -> bool {
        wanted.iter().all(|w| self.attributes.iter().any(|a| a == w))
    }

    /// Whitespace-split entries of the `class` attribute. Empty for nodes
    /// without one.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("", "class").unwrap_or("").split_whitespace()
    }
}
