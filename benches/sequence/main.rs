mod seq_nom;
mod seq_rechain;

use criterion::{black_box, criterion_group, Criterion};
use log::trace;
use seq_nom::nom_parser;
use seq_rechain::RechainParser;

const STATEMENT: &str = "let mut  total_count = 4096 ;";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("let_nom", |b| b.iter(|| nom_parser(black_box(STATEMENT))));
}

pub fn bench_rechain(c: &mut Criterion) {
    let parser = RechainParser::new();
    c.bench_function("let_rechain", |b| {
        b.iter(|| parser.parse(black_box(STATEMENT)))
    });
}

pub fn bench_rechain_build(c: &mut Criterion) {
    c.bench_function("let_rechain_build", |b| b.iter(RechainParser::new));
}

criterion_group!(benches, bench_nom, bench_rechain, bench_rechain_build);

fn main() {
    env_logger::init();
    trace!(target: "rc", "Logging enabled");
    assert_eq!(nom_parser(STATEMENT), RechainParser::new().parse(STATEMENT));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
