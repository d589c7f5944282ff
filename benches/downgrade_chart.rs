//! Benchmark for chart downgrading.

use criterion::{Criterion, Throughput};
use rpe_downgrader::rpe::{downgrade::downgrade, parse::parse_chart, version::TargetVersion};

fn bench_downgrade(c: &mut Criterion) {
    let source = include_str!("../tests/files/aurora_in.json");
    let chart = parse_chart(source).expect("fixture should parse");

    let mut group = c.benchmark_group("downgrade");
    group.throughput(Throughput::Bytes(source.len() as u64));
    for target in TargetVersion::ALL {
        group.bench_function(format!("to_{target}"), |b| {
            b.iter(|| downgrade(std::hint::black_box(&chart), target));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_downgrade(&mut criterion);
}
