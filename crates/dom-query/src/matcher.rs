//! Predicate combinators for the traversal engine.
//!
//! Leaf matchers test one criterion and append accepted nodes to the
//! accumulator; gate combinators wrap an inner visitor and run it only for
//! nodes that pass the gate. Gates never append anything themselves.
//!
//! Matchers constructed with `first_only` signal [`Flow::Stop`] right after
//! their first accepted node, which the engine turns into a whole-walk abort.

use ahash::AHashSet;
use regex::Regex;

use crate::arena::DomArena;
use crate::error::Result;
use crate::traverse::{Flow, Matches, Visit};
use crate::types::{Attribute, NodeId, NodeType};

fn accept(node: NodeId, first_only: bool, out: &mut Matches) -> Flow {
    out.push(node);
    if first_only {
        Flow::Stop
    } else {
        Flow::Continue
    }
}

/// Accepts nodes carrying *every* attribute in `wanted` (exact
/// namespace + key + value). AND semantics; an empty set accepts every node.
pub struct AttrSetMatcher<'a> {
    wanted: &'a [Attribute],
    first_only: bool,
}

impl<'a> AttrSetMatcher<'a> {
    pub fn new(wanted: &'a [Attribute], first_only: bool) -> Self {
        Self { wanted, first_only }
    }
}

impl Visit for AttrSetMatcher<'_> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        if !arena.node(node).has_attrs(self.wanted) {
            return Flow::Continue;
        }
        accept(node, self.first_only, out)
    }
}

/// Accepts nodes that have an attribute with the given name whose value
/// matches the pattern. The first attribute satisfying the test wins.
///
/// Collects every match; the pattern is compiled up front so a malformed
/// expression fails here, before any traversal begins.
#[derive(Debug)]
pub struct AttrValueMatcher<'a> {
    namespace: &'a str,
    key: &'a str,
    pattern: Regex,
}

impl<'a> AttrValueMatcher<'a> {
    pub fn new(namespace: &'a str, key: &'a str, pattern: &str) -> Result<Self> {
        Ok(Self {
            namespace,
            key,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Visit for AttrValueMatcher<'_> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        let found = arena
            .node(node)
            .attributes
            .iter()
            .any(|a| a.has_name(self.namespace, self.key) && self.pattern.is_match(&a.value));
        if found {
            out.push(node);
        }
        Flow::Continue
    }
}

/// Accepts nodes whose tag equals any of the given tags. OR semantics.
pub struct TagMatcher<'a> {
    tags: &'a [&'a str],
    first_only: bool,
}

impl<'a> TagMatcher<'a> {
    pub fn new(tags: &'a [&'a str], first_only: bool) -> Self {
        Self { tags, first_only }
    }
}

impl Visit for TagMatcher<'_> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        let tag = &arena.node(node).tag;
        if !self.tags.iter().any(|t| tag == t) {
            return Flow::Continue;
        }
        accept(node, self.first_only, out)
    }
}

/// Accepts nodes whose whitespace-split `class` attribute contains any of
/// the given names. OR semantics; a node without a `class` attribute never
/// matches.
pub struct ClassMatcher<'a> {
    names: AHashSet<&'a str>,
    first_only: bool,
}

impl<'a> ClassMatcher<'a> {
    pub fn new(names: &'a [&'a str], first_only: bool) -> Self {
        Self {
            names: names.iter().copied().collect(),
            first_only,
        }
    }
}

impl Visit for ClassMatcher<'_> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        let hit = arena.node(node).classes().any(|c| self.names.contains(c));
        if !hit {
            return Flow::Continue;
        }
        accept(node, self.first_only, out)
    }
}

/// Runs `inner` only for nodes of the required type; everything else
/// continues untouched.
pub struct TypeGate<V> {
    required: NodeType,
    inner: V,
}

impl<V: Visit> TypeGate<V> {
    pub fn new(required: NodeType, inner: V) -> Self {
        Self { required, inner }
    }
}

impl<V: Visit> Visit for TypeGate<V> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        if arena.node(node).node_type != self.required {
            return Flow::Continue;
        }
        self.inner.pre(arena, node, out)
    }
}

/// Runs `inner` only for nodes with the required tag.
pub struct TagGate<'a, V> {
    tag: &'a str,
    inner: V,
}

impl<'a, V: Visit> TagGate<'a, V> {
    pub fn new(tag: &'a str, inner: V) -> Self {
        Self { tag, inner }
    }
}

impl<V: Visit> Visit for TagGate<'_, V> {
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        if arena.node(node).tag != self.tag {
            return Flow::Continue;
        }
        self.inner.pre(arena, node, out)
    }
}
