//! Lexer Benchmarks
//!
//! Measures scanning throughput of the Arroba lexer.
//! Run with: `cargo bench --package arbc-lex`

use arbc_lex::Lexer;
use arbc_util::SourceFile;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn lexer_token_count(file: &SourceFile) -> usize {
    Lexer::new(file).scan().map(|tokens| tokens.len()).unwrap_or(0)
}

fn file(source: &str) -> SourceFile {
    SourceFile::new(0, "bench.arb", source)
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = file("@DEF@ inc(x) @IS@ x @+@ 1 @END@");
    group.throughput(Throughput::Bytes(source.content().len() as u64));

    group.bench_function("short_block", |b| {
        b.iter(|| lexer_token_count(black_box(&file("@IF@ x @THEN@ 1 @END@"))))
    });

    group.bench_function("function_definition", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    // Line breaks are only legal at the end of a comment.
    let source = file(concat!(
        "# fibonacci\n",
        "@DEF@ fib(n) @IS@ #\n",
        "    @IF@ n @<=@ 1 @THEN@ #\n",
        "        n #\n",
        "    @ELSE@ #\n",
        "        fib(n @-@ 1) @+@ fib(n @-@ 2) #\n",
        "    @END@ #\n",
        "@END@ #\n",
        "#\n",
        "@FOR@ i @IN@ @RANGE@(0, 30) @DO@ #\n",
        "    @IF@ i @%@ 2 @==@ 0 @AND@ @NOT@ @FALSE@ @THEN@ #\n",
        "        show(fib(i), -1) #\n",
        "    @ELSEIF@ i @>@ 20 @|@ i @<@ 3 @THEN@ #\n",
        "        show(@LAMBDA@ x @:@ x @*@ x) #\n",
        "    @END@ #\n",
        "@END@ # done\n",
    ));

    group.throughput(Throughput::Bytes(source.content().len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_rewind(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_rewind");

    // Operators are only found after the keyword attempt has rewound.
    let operators = file(&"@+@ @<=@ @|@ ".repeat(100));
    let keywords = file(&"@IF@ @ELSEIF@ @TRUE@ ".repeat(100));

    group.bench_function("operators", |b| {
        b.iter(|| lexer_token_count(black_box(&operators)))
    });

    group.bench_function("keywords", |b| {
        b.iter(|| lexer_token_count(black_box(&keywords)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box(&file("123456"))))
    });

    group.bench_function("negative", |b| {
        b.iter(|| lexer_token_count(black_box(&file("-123456"))))
    });

    group.bench_function("max", |b| {
        b.iter(|| lexer_token_count(black_box(&file("9223372036854775807"))))
    });

    group.finish();
}

fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_scaling");

    for lines in [10usize, 100, 1000] {
        let source = file(&"@DEF@ f(a, b) @IS@ a @*@ b @END@ # comment\n".repeat(lines));
        group.throughput(Throughput::Bytes(source.content().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &source, |b, source| {
            b.iter(|| lexer_token_count(black_box(source)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_rewind,
    bench_lexer_numbers,
    bench_lexer_scaling
);
criterion_main!(benches);
