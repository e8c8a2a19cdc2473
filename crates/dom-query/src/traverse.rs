//! Traversal engine: depth-first and sibling-chain walks with early
//! termination.
//!
//! Visitors report [`Flow`] back to the engine. A single `Stop` anywhere in a
//! depth-first walk halts the *entire* traversal, not just the current
//! subtree. That gives first-match queries O(1) early exit without a
//! separate cutoff mechanism, at the documented cost that post-order hooks
//! never run on the still-open ancestors of an aborted node. Callers relying
//! on post-order cleanup must not stop mid-walk.

use crate::arena::DomArena;
use crate::types::NodeId;

/// Traversal control signal returned by visitor hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }
}

/// Walk direction along a sibling chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Ordered accumulator of matched nodes, owned by the caller and appended to
/// in visitation order. Never deduplicated.
pub type Matches = Vec<NodeId>;

/// A visitor driven by the traversal engine.
///
/// `pre` runs before a node's children, `post` after all of them completed.
/// Both default to `Continue`; implement only what you need. The accumulator
/// is threaded through explicitly so visitors hold no hidden state.
pub trait Visit {
    fn pre(&mut self, _arena: &DomArena, _node: NodeId, _out: &mut Matches) -> Flow {
        Flow::Continue
    }

    fn post(&mut self, _arena: &DomArena, _node: NodeId, _out: &mut Matches) -> Flow {
        Flow::Continue
    }
}

/// Adapter turning a closure into a pre-order-only visitor.
pub struct VisitFn<F>(pub F);

impl<F> Visit for VisitFn<F>
where
    F: FnMut(&DomArena, NodeId, &mut Matches) -> Flow,
{
    fn pre(&mut self, arena: &DomArena, node: NodeId, out: &mut Matches) -> Flow {
        (self.0)(arena, node, out)
    }
}

/// Depth-first walk of `start` and its descendants.
///
/// Visits `start` itself first. If `pre` signals `Stop` the walk aborts
/// immediately: the node's children are not visited, its `post` hook does
/// not run, and no pending `post` runs on any open ancestor. Otherwise the
/// children are walked in sibling order, any child's abort propagating the
/// same way. `post` runs once every child completed; its `Stop` aborts the
/// walk identically.
///
/// Returns `Flow::Continue` only if no hook ever signaled `Stop`. The walk
/// itself has no failure mode.
pub fn depth_first<V: Visit + ?Sized>(
    arena: &DomArena,
    start: NodeId,
    visitor: &mut V,
    out: &mut Matches,
) -> Flow {
    if visitor.pre(arena, start, out).is_stop() {
        return Flow::Stop;
    }

    let mut child = arena.node(start).first_child;
    while let Some(c) = child {
        if depth_first(arena, c, &mut *visitor, out).is_stop() {
            return Flow::Stop;
        }
        child = arena.node(c).next_sibling;
    }

    visitor.post(arena, start, out)
}

/// Walk the sibling chain of `start`, beginning at its next (or previous)
/// sibling and continuing in that direction.
///
/// `pre` runs before descending to the following sibling; `Stop` halts the
/// descent. `post` runs on the way back out (reverse chain order) and its
/// result is ignored. Unlike [`depth_first`] there is no cross-branch abort:
/// the chain is linear. Walking off the end terminates normally.
pub fn siblings<V: Visit + ?Sized>(
    arena: &DomArena,
    start: NodeId,
    direction: Direction,
    visitor: &mut V,
    out: &mut Matches,
) {
    walk_chain(arena, neighbor(arena, start, direction), direction, visitor, out);
}

fn neighbor(arena: &DomArena, node: NodeId, direction: Direction) -> Option<NodeId> {
    match direction {
        Direction::Forward => arena.node(node).next_sibling,
        Direction::Backward => arena.node(node).prev_sibling,
    }
}

fn walk_chain<V: Visit + ?Sized>(
    arena: &DomArena,
    node: Option<NodeId>,
    direction: Direction,
    visitor: &mut V,
    out: &mut Matches,
) {
    let Some(id) = node else {
        return;
    };

    if visitor.pre(arena, id, out).is_stop() {
        return;
    }

    walk_chain(arena, neighbor(arena, id, direction), direction, &mut *visitor, out);

    let _ = visitor.post(arena, id, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DomNode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Pre,
        Post,
    }

    /// Records every hook invocation; stops where told to.
    struct Recorder {
        events: Vec<(Phase, NodeId)>,
        stop_at: Option<(Phase, NodeId)>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                events: Vec::new(),
                stop_at: None,
            }
        }

        fn stopping_at(phase: Phase, node: NodeId) -> Self {
            Self {
                events: Vec::new(),
                stop_at: Some((phase, node)),
            }
        }

        fn record(&mut self, phase: Phase, node: NodeId) -> Flow {
            self.events.push((phase, node));
            if self.stop_at == Some((phase, node)) {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    impl Visit for Recorder {
        fn pre(&mut self, _arena: &DomArena, node: NodeId, _out: &mut Matches) -> Flow {
            self.record(Phase::Pre, node)
        }

        fn post(&mut self, _arena: &DomArena, node: NodeId, _out: &mut Matches) -> Flow {
            self.record(Phase::Post, node)
        }
    }

    /// doc -> html -> (head -> title, body -> (p1, p2))
    fn fixture() -> (DomArena, [NodeId; 7]) {
        let mut arena = DomArena::new();
        let doc = arena.add_node(DomNode::document());
        let html = arena.add_node(DomNode::element("html"));
        let head = arena.add_node(DomNode::element("head"));
        let title = arena.add_node(DomNode::element("title"));
        let body = arena.add_node(DomNode::element("body"));
        let p1 = arena.add_node(DomNode::element("p"));
        let p2 = arena.add_node(DomNode::element("p"));

        arena.append_child(doc, html).unwrap();
        arena.append_child(html, head).unwrap();
        arena.append_child(head, title).unwrap();
        arena.append_child(html, body).unwrap();
        arena.append_child(body, p1).unwrap();
        arena.append_child(body, p2).unwrap();
        arena.set_root(doc).unwrap();

        (arena, [doc, html, head, title, body, p1, p2])
    }

    #[test]
    fn test_depth_first_full_order() {
        let (arena, [doc, html, head, title, body, p1, p2]) = fixture();
        let mut rec = Recorder::new();
        let mut out = Matches::new();

        let flow = depth_first(&arena, doc, &mut rec, &mut out);
        assert_eq!(flow, Flow::Continue);

        use Phase::*;
        assert_eq!(
            rec.events,
            vec![
                (Pre, doc),
                (Pre, html),
                (Pre, head),
                (Pre, title),
                (Post, title),
                (Post, head),
                (Pre, body),
                (Pre, p1),
                (Post, p1),
                (Pre, p2),
                (Post, p2),
                (Post, body),
                (Post, html),
                (Post, doc),
            ]
        );
    }

    #[test]
    fn test_pre_stop_aborts_whole_walk() {
        let (arena, [doc, html, head, title, body, ..]) = fixture();
        let mut rec = Recorder::stopping_at(Phase::Pre, title);
        let mut out = Matches::new();

        let flow = depth_first(&arena, doc, &mut rec, &mut out);
        assert_eq!(flow, Flow::Stop);

        // Nothing after title's pre hook: no descent into body, and no
        // post hook for any still-open ancestor.
        use Phase::*;
        assert_eq!(
            rec.events,
            vec![(Pre, doc), (Pre, html), (Pre, head), (Pre, title)]
        );
        assert!(!rec.events.contains(&(Pre, body)));
        assert!(!rec.events.contains(&(Post, head)));
    }

    #[test]
    fn test_post_stop_aborts_whole_walk() {
        let (arena, [doc, html, head, title, ..]) = fixture();
        let mut rec = Recorder::stopping_at(Phase::Post, head);
        let mut out = Matches::new();

        let flow = depth_first(&arena, doc, &mut rec, &mut out);
        assert_eq!(flow, Flow::Stop);

        use Phase::*;
        assert_eq!(
            rec.events,
            vec![
                (Pre, doc),
                (Pre, html),
                (Pre, head),
                (Pre, title),
                (Post, title),
                (Post, head),
            ]
        );
    }

    #[test]
    fn test_depth_first_visits_leaf_start() {
        let (arena, [.., p2]) = fixture();
        let mut rec = Recorder::new();
        let mut out = Matches::new();

        depth_first(&arena, p2, &mut rec, &mut out);
        assert_eq!(rec.events, vec![(Phase::Pre, p2), (Phase::Post, p2)]);
    }

    fn chain_fixture() -> (DomArena, [NodeId; 4]) {
        let mut arena = DomArena::new();
        let parent = arena.add_node(DomNode::element("ul"));
        let a = arena.add_node(DomNode::element("li"));
        let b = arena.add_node(DomNode::element("li"));
        let c = arena.add_node(DomNode::element("li"));
        for child in [a, b, c] {
            arena.append_child(parent, child).unwrap();
        }
        (arena, [parent, a, b, c])
    }

    #[test]
    fn test_siblings_forward_posts_unwind_in_reverse() {
        let (arena, [_, a, b, c]) = chain_fixture();
        let mut rec = Recorder::new();
        let mut out = Matches::new();

        siblings(&arena, a, Direction::Forward, &mut rec, &mut out);

        use Phase::*;
        assert_eq!(
            rec.events,
            vec![(Pre, b), (Pre, c), (Post, c), (Post, b)]
        );
    }

    #[test]
    fn test_siblings_backward() {
        let (arena, [_, a, b, c]) = chain_fixture();
        let mut rec = Recorder::new();
        let mut out = Matches::new();

        siblings(&arena, c, Direction::Backward, &mut rec, &mut out);

        use Phase::*;
        assert_eq!(
            rec.events,
            vec![(Pre, b), (Pre, a), (Post, a), (Post, b)]
        );
    }

    #[test]
    fn test_siblings_pre_stop_halts_descent() {
        let mut arena = DomArena::new();
        let parent = arena.add_node(DomNode::element("ul"));
        let ids: Vec<NodeId> = (0..4)
            .map(|_| arena.add_node(DomNode::element("li")))
            .collect();
        for &id in &ids {
            arena.append_child(parent, id).unwrap();
        }

        let mut rec = Recorder::stopping_at(Phase::Pre, ids[2]);
        let mut out = Matches::new();
        siblings(&arena, ids[0], Direction::Forward, &mut rec, &mut out);

        // Descent halts at ids[2]; only the sibling already entered unwinds.
        use Phase::*;
        assert_eq!(
            rec.events,
            vec![(Pre, ids[1]), (Pre, ids[2]), (Post, ids[1])]
        );
    }

    #[test]
    fn test_siblings_of_solitary_node() {
        let mut arena = DomArena::new();
        let lone = arena.add_node(DomNode::element("div"));
        let mut rec = Recorder::new();
        let mut out = Matches::new();

        siblings(&arena, lone, Direction::Forward, &mut rec, &mut out);
        siblings(&arena, lone, Direction::Backward, &mut rec, &mut out);
        assert!(rec.events.is_empty());
    }

    #[test]
    fn test_visit_fn_adapter_collects() {
        let (arena, [doc, ..]) = fixture();
        let mut out = Matches::new();
        let mut visitor = VisitFn(|arena: &DomArena, id: NodeId, out: &mut Matches| {
            if arena.node(id).is_element() {
                out.push(id);
            }
            Flow::Continue
        });

        let flow = depth_first(&arena, doc, &mut visitor, &mut out);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out.len(), 6); // every element, document excluded
    }
}
