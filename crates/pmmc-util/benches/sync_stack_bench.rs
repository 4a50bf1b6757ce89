//! SyncStack benchmarks
//!
//! Measures push/pop/peek and the uniform-add used on every rule
//! entry/exit during panic-mode recovery.
//! Run with: `cargo bench --bench sync_stack_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pmmc_util::SyncStack;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_then_pop", |b| {
        let mut stack = SyncStack::new();
        b.iter(|| {
            stack.push();
            black_box(stack.peek());
            stack.pop();
        })
    });

    group.finish();
}

fn bench_add_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_all");

    for depth in [1usize, 8, 32] {
        let mut stack = SyncStack::new();
        for _ in 0..depth {
            stack.push();
        }
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| {
                stack.add_all(1);
                stack.add_all(-1);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_add_all);
criterion_main!(benches);
