use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use phpdoc_typemask::{
    AnnotationParser, NamingContext, TypeContext, resolve_signature, scan_source, translate,
};

const ANNOTATIONS: &[&str] = &[
    "int",
    "string[]",
    "?Carbon",
    "array[\\App\\Models\\User]",
    "Collection|null",
    "int[][][]",
    "mixed",
    "Support\\Str",
];

fn sample_source() -> String {
    let mut source = String::from("<?php\nnamespace App;\n\nuse Carbon\\Carbon;\n\n");
    for i in 0..200 {
        source.push_str(&format!(
            "/**\n * @param Carbon[] $dates\n * @param int $limit\n * @return User{i}|null\n */\n\
             function routine_{i}(array $dates, $limit, string $label): ?string {{}}\n\n"
        ));
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let mut naming = NamingContext::with_namespace(Some("App\\Http"));
    naming.add_import("Carbon\\Carbon");
    naming.add_import("Illuminate\\Support\\Collection");
    naming.add_alias("Support", "Illuminate\\Support");
    let parser = AnnotationParser::new(Some(&naming));

    c.bench_function("parse_annotations_fresh_context", |b| {
        b.iter(|| {
            let mut ctx = TypeContext::new();
            for annotation in ANNOTATIONS {
                black_box(parser.parse_text(&mut ctx, black_box(annotation)));
            }
        });
    });

    c.bench_function("parse_annotations_warm_context", |b| {
        let mut ctx = TypeContext::new();
        b.iter(|| {
            for annotation in ANNOTATIONS {
                black_box(parser.parse_text(&mut ctx, black_box(annotation)));
            }
        });
    });
}

fn bench_translate(c: &mut Criterion) {
    let mut source = TypeContext::new();
    let parser = AnnotationParser::global();
    let masks: Vec<_> = (0..64)
        .map(|i| parser.parse_text(&mut source, &format!("\\Ns\\Class{i}[][]|int")))
        .collect();

    c.bench_function("translate_64_masks", |b| {
        b.iter(|| {
            let mut target = TypeContext::new();
            for mask in &masks {
                black_box(translate(&mut target, &source, mask));
            }
        });
    });
}

fn bench_scan(c: &mut Criterion) {
    let source = sample_source();

    c.bench_function("scan_and_resolve_200_functions", |b| {
        b.iter(|| {
            let routines = scan_source(black_box(&source));
            let mut ctx = TypeContext::new();
            for routine in &routines {
                black_box(resolve_signature(&mut ctx, routine));
            }
        });
    });
}

criterion_group!(benches, bench_parse, bench_translate, bench_scan);
criterion_main!(benches);
