use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xfdf_oxide::forms::{CheckBox, ComboBox, FormField, TextField};
use xfdf_oxide::xfdf::{generate_xfdf, parse_xfdf};

fn build_fields(count: usize) -> Vec<FormField> {
    (0..count)
        .map(|i| match i % 3 {
            0 => TextField::new(format!("text_{}", i))
                .with_value(format!("Value {} & <more>", i))
                .into(),
            1 => CheckBox::new(format!("check_{}", i)).with_checked(i % 2 == 0).into(),
            _ => ComboBox::new(format!("combo_{}", i))
                .with_options(vec!["A", "B", "C"])
                .select_index(i % 3)
                .into(),
        })
        .collect()
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("xfdf_encode");

    for count in [10, 100, 1000] {
        let fields = build_fields(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &fields, |b, fields| {
            b.iter(|| generate_xfdf(black_box(fields), "form.pdf").unwrap())
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("xfdf_decode");

    for count in [10, 100, 1000] {
        let xml = generate_xfdf(&build_fields(count), "form.pdf").unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &xml, |b, xml| {
            b.iter(|| parse_xfdf(black_box(xml)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
