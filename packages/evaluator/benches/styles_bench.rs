use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_evaluator::{build_default_styles, computed_styles, Viewport};
use pagecraft_schema::{create_node, Node, NodeType};

fn wide_tree() -> Node {
    let mut root = create_node(NodeType::Section);
    let children: Vec<Node> = (0..50)
        .map(|_| {
            let mut card = create_node(NodeType::Card);
            card.styles
                .default
                .insert("bp-mobile-padding".to_string(), "8px".to_string());
            card
        })
        .collect();
    root.children = Some(children);
    root
}

fn bench_build_default_styles(c: &mut Criterion) {
    let root = wide_tree();
    c.bench_function("build_default_styles_250_nodes", |b| {
        b.iter(|| build_default_styles(black_box(&root)))
    });
}

fn bench_computed_styles(c: &mut Criterion) {
    let node = create_node(NodeType::Button);
    c.bench_function("computed_styles_mobile", |b| {
        b.iter(|| computed_styles(black_box(&node.styles.default), Viewport::Mobile))
    });
}

criterion_group!(benches, bench_build_default_styles, bench_computed_styles);
criterion_main!(benches);
