//! Benchmarks for rapid_depwalk

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_depwalk::*;

/// この薬を飲んでも肌が荒れない。 as (text, lemma, pos, dep, head relative to sentence start)
const SENTENCE: &[(&str, &str, PosTag, DepRel, usize)] = &[
    ("この", "この", PosTag::Determiner, DepRel::Det, 1),
    ("薬", "薬", PosTag::Noun, DepRel::Obj, 3),
    ("を", "を", PosTag::Adposition, DepRel::Case, 1),
    ("飲ん", "飲む", PosTag::Verb, DepRel::Advcl, 8),
    ("で", "で", PosTag::SubordinatingConjunction, DepRel::Mark, 3),
    ("も", "も", PosTag::Adposition, DepRel::Case, 3),
    ("肌", "肌", PosTag::Noun, DepRel::Nsubj, 8),
    ("が", "が", PosTag::Adposition, DepRel::Case, 6),
    ("荒れ", "荒れる", PosTag::Verb, DepRel::Root, 8),
    ("ない", "ない", PosTag::Auxiliary, DepRel::Aux, 8),
    ("。", "。", PosTag::Punctuation, DepRel::Punct, 8),
];

/// A document of `n` copies of the sample sentence, with one bunsetu per
/// case-marked phrase
fn make_doc(n: usize) -> Document {
    let mut tokens = Vec::with_capacity(n * SENTENCE.len());
    let mut sentences = Vec::with_capacity(n);
    let mut bunsetu = Vec::new();
    for s in 0..n {
        let start = tokens.len();
        for (text, lemma, pos, dep, head) in SENTENCE {
            let index = tokens.len();
            tokens.push(
                Token::new(index, *text, *pos, *dep, start + head)
                    .with_lemma(*lemma)
                    .with_sentence(s)
                    .with_stopword(*pos == PosTag::Auxiliary || *pos == PosTag::Adposition),
            );
        }
        sentences.push(Sentence::new(s, start, tokens.len()));
        for (b_start, b_end) in [(0, 1), (1, 3), (3, 6), (6, 8), (8, 11)] {
            bunsetu.push(PhraseChunk::new(start + b_start, start + b_end));
        }
    }
    Document::new(tokens, sentences)
        .and_then(|doc| doc.with_bunsetu(bunsetu))
        .expect("sample document is well formed")
}

fn benchmark_selection(c: &mut Criterion) {
    let doc = make_doc(100);

    c.bench_function("select_meaningful", |b| {
        b.iter(|| select_meaningful(black_box(&doc)))
    });
    c.bench_function("select_root_relations", |b| {
        b.iter(|| select_relation_group(black_box(&doc), DepGroup::Root))
    });
}

fn benchmark_ancestor_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_chains_by_depth");
    let doc = make_doc(100);
    for depth in [1, 3, 10].iter() {
        let walker = AncestorWalker::with_max_depth(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &doc, |b, doc| {
            b.iter(|| walker.token_chains(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_negation(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_negative_by_size");
    for size in [1, 10, 100].iter() {
        let doc = make_doc(*size);
        group.throughput(Throughput::Elements(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| is_negative(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_analyze(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let doc = make_doc(10);

    c.bench_function("analyze_document", |b| {
        b.iter(|| analyze(black_box(&doc), &config))
    });

    let docs: Vec<Document> = (0..64).map(|_| make_doc(10)).collect();
    let mut group = c.benchmark_group("analyze_batch");
    group.bench_function("sequential", |b| {
        b.iter(|| {
            docs.iter()
                .map(|d| analyze(black_box(d), &config))
                .collect::<Result<Vec<_>>>()
        })
    });
    group.bench_function("parallel", |b| {
        b.iter(|| analyze_batch(black_box(&docs), &config))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_selection,
    benchmark_ancestor_walk,
    benchmark_negation,
    benchmark_analyze,
);

criterion_main!(benches);
