use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dom_query::{element_by_id, elements_by_tag, DomArena, DomNode, NodeId};

/// Balanced tree of `depth` levels with `fanout` children per node. The id
/// target sits on the very last element in document order.
fn build_tree(depth: usize, fanout: usize) -> (DomArena, NodeId) {
    let mut arena = DomArena::with_capacity(4096);
    let root = arena.add_node(DomNode::document());
    arena.set_root(root).unwrap();

    let mut frontier = vec![root];
    for level in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for &parent in &frontier {
            for i in 0..fanout {
                let tag = if i % 2 == 0 { "div" } else { "span" };
                let id = arena.add_node(DomNode::element(tag));
                arena.append_child(parent, id).unwrap();
                next.push(id);
            }
        }
        frontier = next;
        if level + 1 == depth {
            let last = *frontier.last().unwrap();
            let marker = arena.add_node(DomNode::element("p").with_attr("id", "needle"));
            arena.append_child(last, marker).unwrap();
        }
    }

    (arena, root)
}

fn bench_queries(c: &mut Criterion) {
    let (arena, root) = build_tree(5, 4);

    c.bench_function("element_by_id worst case", |b| {
        b.iter(|| element_by_id(black_box(&arena), root, black_box("needle")))
    });

    c.bench_function("element_by_id miss", |b| {
        b.iter(|| element_by_id(black_box(&arena), root, black_box("absent")))
    });

    c.bench_function("elements_by_tag full scan", |b| {
        b.iter(|| elements_by_tag(black_box(&arena), root, black_box(&["div"])))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
