//! High-level lookup functions.
//!
//! Each function allocates an accumulator, composes a matcher chain and
//! drives the traversal engine from the caller-given node. "No result" is
//! always `None`: multi-result lookups return `Option<Vec<NodeId>>` and
//! never a `Some` holding an empty vector, so zero matches is
//! distinguishable from any successful query.
//!
//! All lookups walk in document pre-order (the start node itself included)
//! unless they are sibling lookups.

use crate::arena::DomArena;
use crate::error::Result;
use crate::matcher::{
    AttrSetMatcher, AttrValueMatcher, ClassMatcher, TagGate, TagMatcher, TypeGate,
};
use crate::traverse::{depth_first, siblings, Direction, Flow, Matches, VisitFn};
use crate::types::{Attribute, NodeId, NodeType};

fn non_empty(out: Matches) -> Option<Vec<NodeId>> {
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Value of the first attribute of `node` with the given namespace and key,
/// or `None` if no such attribute exists.
pub fn attr_val<'a>(
    arena: &'a DomArena,
    node: NodeId,
    namespace: &str,
    key: &str,
) -> Option<&'a str> {
    arena.get(node).ok()?.attr(namespace, key)
}

/// Whether `node` has an attribute with the given namespace and key.
pub fn has_attr(arena: &DomArena, node: NodeId, namespace: &str, key: &str) -> bool {
    arena
        .get(node)
        .map(|n| n.has_attr(namespace, key))
        .unwrap_or(false)
}

/// Whether `node` carries every attribute in `wanted`. Vacuously true for an
/// empty slice.
pub fn match_attrs(arena: &DomArena, node: NodeId, wanted: &[Attribute]) -> bool {
    arena
        .get(node)
        .map(|n| n.has_attrs(wanted))
        .unwrap_or(false)
}

/// First element (in pre-order) carrying an `id` attribute with the given
/// value.
pub fn element_by_id(arena: &DomArena, start: NodeId, id: &str) -> Option<NodeId> {
    tracing::trace!("[Query] element_by_id: \"{}\"", id);
    let wanted = [Attribute::new("id", id)];
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, AttrSetMatcher::new(&wanted, true));
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// First node (in pre-order) of the given type.
pub fn first_node_by_type(
    arena: &DomArena,
    start: NodeId,
    node_type: NodeType,
) -> Option<NodeId> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(
        node_type,
        VisitFn(|_: &DomArena, node: NodeId, out: &mut Matches| {
            out.push(node);
            Flow::Stop
        }),
    );
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// All elements carrying every attribute in `wanted`, in document order.
pub fn elements_by_attr(
    arena: &DomArena,
    start: NodeId,
    wanted: &[Attribute],
) -> Option<Vec<NodeId>> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, AttrSetMatcher::new(wanted, false));
    depth_first(arena, start, &mut m, &mut out);
    non_empty(out)
}

/// First element carrying every attribute in `wanted`.
pub fn first_element_by_attr(
    arena: &DomArena,
    start: NodeId,
    wanted: &[Attribute],
) -> Option<NodeId> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, AttrSetMatcher::new(wanted, true));
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// All elements that have an attribute with the given namespace and key
/// whose value matches `pattern`.
///
/// A malformed pattern fails with [`crate::DomError::InvalidPattern`] before
/// the walk begins.
pub fn elements_by_attr_match(
    arena: &DomArena,
    start: NodeId,
    namespace: &str,
    key: &str,
    pattern: &str,
) -> Result<Option<Vec<NodeId>>> {
    let mut m = TypeGate::new(
        NodeType::Element,
        AttrValueMatcher::new(namespace, key, pattern)?,
    );
    tracing::trace!("[Query] elements_by_attr_match: /{}/ on {}:{}", pattern, namespace, key);
    let mut out = Matches::new();
    depth_first(arena, start, &mut m, &mut out);
    Ok(non_empty(out))
}

/// All elements whose class list contains any of `names`, in document order.
pub fn elements_by_class_name(
    arena: &DomArena,
    start: NodeId,
    names: &[&str],
) -> Option<Vec<NodeId>> {
    let mut out = Matches::new();
    let mut m = ClassMatcher::new(names, false);
    depth_first(arena, start, &mut m, &mut out);
    non_empty(out)
}

/// First element whose class list contains any of `names`.
pub fn first_element_by_class_name(
    arena: &DomArena,
    start: NodeId,
    names: &[&str],
) -> Option<NodeId> {
    let mut out = Matches::new();
    let mut m = ClassMatcher::new(names, true);
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// All elements matching at least one of `tags`, in document order.
pub fn elements_by_tag(arena: &DomArena, start: NodeId, tags: &[&str]) -> Option<Vec<NodeId>> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, TagMatcher::new(tags, false));
    depth_first(arena, start, &mut m, &mut out);
    non_empty(out)
}

/// First element matching at least one of `tags`.
pub fn first_element_by_tag(arena: &DomArena, start: NodeId, tags: &[&str]) -> Option<NodeId> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, TagMatcher::new(tags, true));
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// All elements with the given tag carrying every attribute in `wanted`.
pub fn elements_by_tag_and_attr(
    arena: &DomArena,
    start: NodeId,
    tag: &str,
    wanted: &[Attribute],
) -> Option<Vec<NodeId>> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(
        NodeType::Element,
        TagGate::new(tag, AttrSetMatcher::new(wanted, false)),
    );
    depth_first(arena, start, &mut m, &mut out);
    non_empty(out)
}

/// First element with the given tag carrying every attribute in `wanted`.
pub fn first_element_by_tag_and_attr(
    arena: &DomArena,
    start: NodeId,
    tag: &str,
    wanted: &[Attribute],
) -> Option<NodeId> {
    let mut out = Matches::new();
    let mut m = TypeGate::new(
        NodeType::Element,
        TagGate::new(tag, AttrSetMatcher::new(wanted, true)),
    );
    depth_first(arena, start, &mut m, &mut out);
    out.first().copied()
}

/// Next sibling of `node` that is an element, skipping text and comment
/// nodes. Plain linear skip, no matcher machinery.
pub fn next_element_sibling(arena: &DomArena, node: NodeId) -> Option<NodeId> {
    let mut next = arena.get(node).ok()?.next_sibling;
    while let Some(id) = next {
        let n = arena.node(id);
        if n.is_element() {
            return Some(id);
        }
        next = n.next_sibling;
    }
    None
}

/// Previous sibling of `node` that is an element.
pub fn prev_element_sibling(arena: &DomArena, node: NodeId) -> Option<NodeId> {
    let mut prev = arena.get(node).ok()?.prev_sibling;
    while let Some(id) = prev {
        let n = arena.node(id);
        if n.is_element() {
            return Some(id);
        }
        prev = n.prev_sibling;
    }
    None
}

/// Next sibling element of `node` matching at least one of `tags`. Document
/// order decides; the order of `tags` does not.
pub fn next_sibling_by_tag(arena: &DomArena, node: NodeId, tags: &[&str]) -> Option<NodeId> {
    if arena.get(node).is_err() {
        return None;
    }
    let mut out = Matches::new();
    let mut m = TypeGate::new(NodeType::Element, TagMatcher::new(tags, true));
    siblings(arena, node, Direction::Forward, &mut m, &mut out);
    out.first().copied()
}
