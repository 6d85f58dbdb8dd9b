use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use theater_invoicing::{Invoice, Performance};
use theater_plays::{Catalog, Play};
use theater_statement::{Statement, render};

fn catalog() -> Catalog {
    Catalog::new()
        .with_play("hamlet", Play::tragedy("Hamlet"))
        .with_play("as-like", Play::comedy("As You Like It"))
        .with_play("othello", Play::tragedy("Othello"))
}

fn invoice(performances: usize) -> Invoice {
    let ids = ["hamlet", "as-like", "othello"];
    Invoice::new(
        "BenchCo",
        (0..performances)
            .map(|i| Performance::new(ids[i % ids.len()], (i % 120) as u32))
            .collect(),
    )
}

fn bench_render(c: &mut Criterion) {
    let catalog = catalog();
    let mut group = c.benchmark_group("render");

    for size in [1usize, 10, 100, 1_000] {
        let invoice = invoice(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("build", size), &invoice, |b, invoice| {
            b.iter(|| Statement::build(black_box(invoice), black_box(&catalog)))
        });

        group.bench_with_input(BenchmarkId::new("plain_text", size), &invoice, |b, invoice| {
            b.iter(|| render(black_box(invoice), black_box(&catalog)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
