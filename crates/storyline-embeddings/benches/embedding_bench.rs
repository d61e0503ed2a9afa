use criterion::{criterion_group, criterion_main, Criterion};
use storyline_core::traits::IEmbeddingProvider;
use storyline_embeddings::TfIdfFallback;

fn bench_tfidf_batch(c: &mut Criterion) {
    let provider = TfIdfFallback::new(384);
    let texts: Vec<String> = (0..200)
        .map(|i| format!("milestone {i} reached by the research vessel near the trench"))
        .collect();

    c.bench_function("tfidf_embed_batch_200", |b| {
        b.iter(|| provider.embed_batch(&texts).unwrap())
    });
}

criterion_group!(benches, bench_tfidf_batch);
criterion_main!(benches);
