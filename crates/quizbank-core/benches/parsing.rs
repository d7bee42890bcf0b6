use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizbank_core::parser::parse_transcript;
use quizbank_core::resolve::resolve;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let options: Vec<String> = vec![
        "The man is reading a newspaper".into(),
        "The woman is pouring coffee".into(),
        "They are waiting at the station".into(),
    ];

    group.bench_function("exact", |b| {
        b.iter(|| resolve(black_box(options.as_slice()), black_box("The woman is pouring coffee")))
    });

    group.bench_function("token", |b| {
        b.iter(|| resolve(black_box(options.as_slice()), black_box("waiting passengers")))
    });

    group.bench_function("fallback", |b| {
        b.iter(|| resolve(black_box(options.as_slice()), black_box("zzz qqq")))
    });

    group.finish();
}

fn bench_transcript_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_parsing");

    let small = generate_transcript(10);
    let medium = generate_transcript(100);
    let large = generate_transcript(500);

    group.bench_function("10_groups", |b| {
        b.iter(|| parse_transcript(black_box(&small)))
    });

    group.bench_function("100_groups", |b| {
        b.iter(|| parse_transcript(black_box(&medium)))
    });

    group.bench_function("500_groups", |b| {
        b.iter(|| parse_transcript(black_box(&large)))
    });

    group.finish();
}

fn generate_transcript(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        if i % 25 == 0 {
            s.push_str(&format!("TEST {} – 1.5 POUND\n\n", i / 25 + 1));
        }
        s.push_str(&format!(
            "{i}. Answer {i} - mô tả {i}\n\
             What is item {i}?\n\
             A. Answer {i}\n\
             B. Distractor {i}\n\
             C. Other {i}\n\n"
        ));
        if i % 10 == 9 {
            s.push('\u{c}');
            s.push('\n');
        }
    }
    s
}

criterion_group!(benches, bench_resolve, bench_transcript_parsing);
criterion_main!(benches);
