use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_polygon_soup::SoupResolver;
use geo_types::LineString;

/// `n * n` cells, each holding `depth` concentric squares of alternating winding.
fn generate_soup(n: usize, depth: usize) -> Vec<LineString<f64>> {
    let mut rings = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let x = i as f64 * 10.0;
            let y = j as f64 * 10.0;
            for d in 0..depth {
                let inset = 0.5 + d as f64;
                let (x0, y0, x1, y1) = (x + inset, y + inset, x + 10.0 - inset, y + 10.0 - inset);
                let mut coords = vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)];
                if d % 2 == 1 {
                    coords.reverse();
                }
                rings.push(LineString::from(coords));
            }
        }
    }
    rings
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.sample_size(10); // Reduce sample size for speed

    for size in [5, 10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("nested_grid", size), size, |b, &size| {
            let rings = generate_soup(size, 4);
            let resolver = SoupResolver::new();
            b.iter(|| {
                resolver.resolve(rings.clone()).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
