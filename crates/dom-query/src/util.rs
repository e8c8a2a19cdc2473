//! Utility functions layered on the traversal engine.

use crate::arena::DomArena;
use crate::traverse::{depth_first, Flow, Matches, VisitFn};
use crate::types::NodeId;

/// All text content from `node` and its descendants, concatenated in
/// document order and trimmed.
pub fn text_content(arena: &DomArena, node: NodeId) -> String {
    let mut out = Matches::new();
    let mut collect = VisitFn(|arena: &DomArena, id: NodeId, out: &mut Matches| {
        if arena.node(id).is_text() {
            out.push(id);
        }
        Flow::Continue
    });
    depth_first(arena, node, &mut collect, &mut out);

    let mut text = String::new();
    for id in out {
        text.push_str(&arena.node(id).value);
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DomNode;

    #[test]
    fn test_text_content_concatenates_descendants() {
        let mut arena = DomArena::new();
        let li = arena.add_node(DomNode::element("li"));
        let b = arena.add_node(DomNode::element("b"));
        let t1 = arena.add_node(DomNode::text("Sibling "));
        let t2 = arena.add_node(DomNode::text("2"));
        let note = arena.add_node(DomNode::comment("not text"));
        arena.append_child(li, t1).unwrap();
        arena.append_child(li, b).unwrap();
        arena.append_child(b, t2).unwrap();
        arena.append_child(li, note).unwrap();

        assert_eq!(text_content(&arena, li), "Sibling 2");
    }

    #[test]
    fn test_text_content_of_empty_element() {
        let mut arena = DomArena::new();
        let div = arena.add_node(DomNode::element("div"));
        assert_eq!(text_content(&arena, div), "");
    }
}
