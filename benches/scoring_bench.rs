use criterion::{criterion_group, criterion_main, Criterion};
use lisix::{analyze_text, LisixConfig, Strategy};
use std::hint::black_box;

fn sample_text() -> String {
    let paragraph = "Les bibliothécaires organisent méthodiquement les collections anciennes. \
                     Chaque ouvrage retrouve sa place définitive sur les rayonnages. \
                     Les lecteurs attentifs parcourent lentement les allées silencieuses. \
                     Une atmosphère studieuse enveloppe la grande salle de lecture. ";
    paragraph.repeat(50)
}

fn bench_analyze(c: &mut Criterion) {
    let config = LisixConfig::default();
    let text = sample_text();

    c.bench_function("analyze_pattern", |b| {
        b.iter(|| analyze_text(black_box(&text), &config, Strategy::Pattern).unwrap())
    });

    c.bench_function("analyze_scan", |b| {
        b.iter(|| analyze_text(black_box(&text), &config, Strategy::Scan).unwrap())
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
