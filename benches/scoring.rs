//! Benchmarks for the filtering paths and the full ranking pass

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordle_rank::core::Constraint;
use wordle_rank::corpus::{Corpus, PackWidth, PackedCorpus};
use wordle_rank::filter::{batched, row};
use wordle_rank::solver::{EngineConfig, compute_best_guesses};

/// Deterministic synthetic corpus of distinct 5-letter words
fn synthetic_corpus(len: usize) -> Corpus {
    let texts: Vec<String> = (0..len)
        .map(|i| {
            let mut chars = [b'a'; 5];
            let mut n = i;
            for slot in chars.iter_mut().rev() {
                *slot = b'a' + (n % 26) as u8;
                n /= 26;
            }
            String::from_utf8(chars.to_vec()).unwrap()
        })
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    Corpus::from_strs(&refs).unwrap()
}

fn bench_count_passing(c: &mut Criterion) {
    let corpus = synthetic_corpus(2048);
    let constraint = Constraint::from_comparison(b"aaabc", b"azzzc");

    c.bench_function("count_passing/row_major", |b| {
        b.iter(|| row::count_passing(black_box(&constraint), black_box(&corpus)));
    });

    for width in [PackWidth::W32, PackWidth::W64] {
        let packed = PackedCorpus::build(&corpus, width);
        let name = format!("count_passing/packed_w{}", width.lanes());
        c.bench_function(&name, |b| {
            b.iter(|| batched::count_passing(black_box(&constraint), black_box(&packed)));
        });
    }
}

fn bench_ranking(c: &mut Criterion) {
    let candidates = synthetic_corpus(256);
    let guesses = synthetic_corpus(512);

    for threads in [1, 4] {
        let config = EngineConfig {
            threads,
            pack_width: PackWidth::W64,
        };
        let name = format!("compute_best_guesses/threads_{threads}");
        c.bench_function(&name, |b| {
            b.iter(|| {
                compute_best_guesses(
                    black_box(&Constraint::default()),
                    black_box(&candidates),
                    black_box(&guesses),
                    50,
                    &config,
                )
                .unwrap()
            });
        });
    }
}

criterion_group!(benches, bench_count_passing, bench_ranking);
criterion_main!(benches);
