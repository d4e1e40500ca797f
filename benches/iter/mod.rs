use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use llrb::Llrb;

use crate::Lfsr;

/// The pivot used by the bounded walks, splitting the LFSR output roughly in
/// half.
const PIVOT: u16 = u16::MAX / 2;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = Llrb::default();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    bench_ascend(n_values, g, &t);
    bench_descend(n_values, g, &t);
    bench_first(n_values, g, &t);

    bench_ascend_above(n_values, g, &t);
    bench_descend_above(n_values, g, &t);
    bench_ascend_at_or_above(n_values, g, &t);
    bench_descend_at_or_above(n_values, g, &t);
    bench_ascend_below(n_values, g, &t);
    bench_descend_below(n_values, g, &t);
    bench_ascend_at_or_below(n_values, g, &t);
    bench_descend_at_or_below(n_values, g, &t);
}

/// Measure the cost of constructing a walk and pulling only the first value,
/// which should not depend on the size of the tree beyond its height.
fn bench_first<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Llrb<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "first",
    };

    g.throughput(Throughput::Elements(1));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(t.ascend().next()))
    });
}

macro_rules! walk_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Llrb<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for v in t.$name() {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
    (
        $name:ident, pivot
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Llrb<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for v in t.$name(&PIVOT) {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
}

walk_bench!(ascend);
walk_bench!(descend);
walk_bench!(ascend_above, pivot);
walk_bench!(descend_above, pivot);
walk_bench!(ascend_at_or_above, pivot);
walk_bench!(descend_at_or_above, pivot);
walk_bench!(ascend_below, pivot);
walk_bench!(descend_below, pivot);
walk_bench!(ascend_at_or_below, pivot);
walk_bench!(descend_at_or_below, pivot);
