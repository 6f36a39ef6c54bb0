use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inifile::{from_str, to_string, IniDocument};

fn synthetic_ini(sections: usize, properties_per_section: usize) -> String {
    let mut text = String::new();
    text.push_str("# synthetic benchmark input\n");
    for s in 0..sections {
        text.push_str(&format!("[section_{:04}]\n", s));
        for p in 0..properties_per_section {
            text.push_str(&format!("key_{:04} = value number {}\n", p, p));
        }
        text.push('\n');
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for sections in [10, 100, 500] {
        let input = synthetic_ini(sections, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &input,
            |b, input| b.iter(|| from_str(black_box(input)).unwrap()),
        );
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for sections in [10, 100, 500] {
        let doc = from_str(&synthetic_ini(sections, 20)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let doc = from_str(&synthetic_ini(500, 20)).unwrap();
    c.bench_function("find_property_among_500_sections", |b| {
        b.iter(|| {
            doc.find_property(black_box(Some("section_0250")), black_box("key_0010"))
                .unwrap()
        })
    });
}

fn benchmark_build(c: &mut Criterion) {
    c.bench_function("build_500_sections_programmatically", |b| {
        b.iter(|| {
            let mut doc = IniDocument::new();
            for s in 0..500 {
                doc.add_section(&format!("section_{:04}", s)).unwrap();
                doc.add_property("key", "value").unwrap();
            }
            doc
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_lookup,
    benchmark_build
);
criterion_main!(benches);
