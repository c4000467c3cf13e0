use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis_ui_graphics::{Point, Rect, Size};
use trellis_ui_layout::{
    Flexibility, InsetLayout, LabelLayout, LabelSpec, LayoutNode, SizeLayout, SizeSpec,
    StackDistribution, StackLayout, StackSpec, TextContext,
};

const ROW_SAMPLES: &[usize] = &[16, 64, 256];
const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn row(context: &TextContext, index: usize) -> LayoutNode {
    let avatar: LayoutNode = SizeLayout::fixed(Size::new(48.0, 48.0)).into();
    let title: LayoutNode = LabelLayout::new(
        context,
        format!("Item {index} title"),
        LabelSpec::new().flexibility(Flexibility::HIGH),
    )
    .into();
    let detail: LayoutNode = LabelLayout::new(
        context,
        format!("Detail line for item {index} that is long enough to wrap"),
        LabelSpec::new().number_of_lines(2),
    )
    .into();
    let text: LayoutNode = StackLayout::new(StackSpec::vertical().spacing(4.0), vec![title, detail]).into();
    InsetLayout::uniform(
        8.0,
        StackLayout::new(StackSpec::horizontal().spacing(12.0), vec![avatar, text]),
    )
    .into()
}

fn list(rows: usize) -> LayoutNode {
    let context = TextContext::monospaced();
    let rows = (0..rows).map(|index| row(&context, index)).collect();
    let body: LayoutNode = StackLayout::new(
        StackSpec::vertical().distribution(StackDistribution::Leading),
        rows,
    )
    .into();
    SizeLayout::wrapping(SizeSpec::new().min_width(ROOT_SIZE.width), body).into()
}

fn measure_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_list");
    for &rows in ROW_SAMPLES {
        let node = list(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &node, |b, node| {
            b.iter(|| black_box(node.measurement(black_box(ROOT_SIZE))));
        });
    }
    group.finish();
}

fn arrange_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange_list");
    for &rows in ROW_SAMPLES {
        let measurement = list(rows).measurement(ROOT_SIZE);
        group.bench_with_input(
            BenchmarkId::from_parameter(rows),
            &measurement,
            |b, measurement| {
                b.iter(|| {
                    black_box(measurement.arrangement(Rect::from_origin_size(Point::ZERO, ROOT_SIZE)))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, measure_list, arrange_list);
criterion_main!(benches);
