use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vdom_attrs::{
    apply_properties, classify, render_element, to_style_text, Node, PropValue, PropertyMap,
    StyleMap,
};

fn sample_props() -> PropertyMap {
    PropertyMap::new()
        .with("id", "submit")
        .with("class", "btn btn-primary")
        .with("type", "checkbox")
        .with("checked", true)
        .with("disabled", false)
        .with("tabIndex", 0)
        .with("aria-label", "Accept terms")
        .with("data-track", "signup")
        .with("value", "yes")
        .with(
            "style",
            StyleMap::new()
                .with("marginTop", 4)
                .with("lineHeight", 1.5)
                .with("backgroundColor", "#fff"),
        )
}

/// Classification is a table lookup on every property write
fn benchmark_classify(c: &mut Criterion) {
    let names = [
        "class", "checked", "download", "tabIndex", "data-id", "aria-hidden", "onClick", "title",
    ];
    c.bench_function("classify", |b| {
        b.iter(|| {
            for name in names {
                black_box(classify(black_box(name)));
            }
        })
    });
}

/// Benchmark group for both render paths
fn benchmark_rendering(c: &mut Criterion) {
    let props = sample_props();
    let mut group = c.benchmark_group("rendering");

    group.bench_function("render_element", |b| {
        b.iter(|| black_box(render_element("input", black_box(&props), "")))
    });

    group.bench_function("apply_properties", |b| {
        b.iter(|| {
            let mut node = Node::element("input");
            black_box(apply_properties(&mut node, black_box(&props)).is_ok());
            node
        })
    });

    group.bench_function("style_text", |b| {
        let styles = match props.get("style") {
            Some(PropValue::Style(styles)) => styles.clone(),
            _ => StyleMap::new(),
        };
        b.iter(|| black_box(to_style_text(black_box(&styles))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_rendering);
criterion_main!(benches);
