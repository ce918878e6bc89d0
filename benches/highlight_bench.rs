//! Benchmarks for lexing and highlighting
//!
//! Targets: 10,000 lines tokenize in under 50 ms; re-highlighting a short
//! snippet that is already cached takes under 5 ms.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use ruchy_highlight::syntax::tokenize;
use ruchy_highlight::{
    HighlightOptions, Highlighter, HighlighterOptions, LexerOptions, ReplHighlighter,
};

// =============================================================================
// Test Data
// =============================================================================

const SMALL_CODE: &str = "fn test() { return 42; }";

const MEDIUM_CODE: &str = "
fn fibonacci(n: u32) -> u32 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Product of 1..=n
fn factorial(n: u32) -> u32 {
    if n <= 1 {
        return 1;
    }
    return n * factorial(n - 1);
}
";

/// `count` actor definitions, about 16 lines each
fn actors(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "actor Service_{i} {{
    mut state: HashMap<String, i32> = HashMap::new();

    receive msg: Request {{
        match msg.type {{
            RequestType::Get(key) => {{
                let value = self.state.get(&key).unwrap_or(&0);
                send(Response::Value(*value));
            }}
            RequestType::Set(key, value) => {{
                self.state.insert(key, value);
                send(Response::Ok);
            }}
        }}
    }}
}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `count` one-line functions
fn functions(count: usize) -> String {
    (0..count)
        .map(|i| format!("fn function_{i}(x: i32, y: i32) -> i32 {{ return x + y + {i}; }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/tokenize");

    let inputs = [
        ("small", SMALL_CODE.to_string()),
        ("medium", MEDIUM_CODE.to_string()),
        ("actors_100", actors(100)),
        ("lines_10k", functions(10_000)),
    ];
    for (name, source) in &inputs {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, source| {
            b.iter(|| black_box(tokenize(source, LexerOptions::default())))
        });
    }

    group.finish();
}

fn bench_highlight_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlighter/cold");
    let options = HighlightOptions::default();
    let uncached = HighlighterOptions {
        cache_size: 0,
        ..Default::default()
    };

    for (name, source) in [("medium", MEDIUM_CODE.to_string()), ("lines_10k", functions(10_000))] {
        let mut highlighter = Highlighter::new(uncached.clone());
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(highlighter.highlight(&source, &options)))
        });
    }

    group.finish();
}

fn bench_highlight_cached(c: &mut Criterion) {
    let mut highlighter = Highlighter::default();
    let options = HighlightOptions::default();
    highlighter.highlight(MEDIUM_CODE, &options);

    c.bench_function("highlighter/cache_hit", |b| {
        b.iter(|| black_box(highlighter.highlight(MEDIUM_CODE, &options)))
    });
}

fn bench_line_numbers(c: &mut Criterion) {
    let source = actors(100);
    let options = HighlightOptions {
        line_numbers: true,
        wrap_lines: true,
        ..Default::default()
    };
    let mut highlighter = Highlighter::new(HighlighterOptions {
        cache_size: 0,
        ..Default::default()
    });

    c.bench_function("highlighter/line_numbers", |b| {
        b.iter(|| black_box(highlighter.highlight(&source, &options)))
    });
}

fn bench_repl(c: &mut Criterion) {
    let mut group = c.benchmark_group("repl/highlight");
    let repl = ReplHighlighter::default();

    for (name, source) in [("small", SMALL_CODE), ("medium", MEDIUM_CODE)] {
        group.bench_function(name, |b| b.iter(|| black_box(repl.highlight(source))));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_highlight_cold,
    bench_highlight_cached,
    bench_line_numbers,
    bench_repl,
);

criterion_main!(benches);
