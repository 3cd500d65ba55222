use geo::algorithm::winding_order::Winding;
use geo_polygon_soup::SoupResolver;
use geo_types::LineString;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn square(x: f64, y: f64, size: f64, ccw: bool) -> LineString<f64> {
    let mut ring = LineString::from(vec![
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ]);
    if !ccw {
        ring.make_cw_winding();
    }
    ring
}

/// Grid cells holding random stacks of concentric squares, shuffled.
/// Returns the soup together with each ring's depth inside its stack.
fn random_soup(rng: &mut StdRng, cells: usize) -> (Vec<LineString<f64>>, Vec<usize>) {
    let mut tagged = Vec::new();
    for cell in 0..cells {
        let x = (cell % 8) as f64 * 100.0;
        let y = (cell / 8) as f64 * 100.0;
        let depth = rng.gen_range(1..=6);
        for d in 0..depth {
            let inset = 1.0 + 7.0 * d as f64;
            let ring = square(x + inset, y + inset, 90.0 - 2.0 * inset + 1.0, d % 2 == 0);
            tagged.push((ring, d));
        }
    }
    tagged.shuffle(rng);
    tagged.into_iter().unzip()
}

#[test]
fn test_random_soups_partition_and_wind_correctly() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let cells = rng.gen_range(1..=24);
        let (rings, depth) = random_soup(&mut rng, cells);

        let resolver = SoupResolver::new();
        let groups = resolver.groups(&rings).unwrap();

        // Every ring lands in exactly one group.
        let mut seen = vec![0; rings.len()];
        for g in &groups {
            seen[g.outer] += 1;
            for &h in &g.holes {
                seen[h] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "partition broken: {:?}", seen);

        // Even depths are outer boundaries, odd depths are holes.
        for g in &groups {
            assert_eq!(depth[g.outer] % 2, 0);
            for &h in &g.holes {
                assert_eq!(depth[h], depth[g.outer] + 1);
            }
        }

        let polygons = resolver.resolve(rings).unwrap();
        assert_eq!(polygons.len(), groups.len());
        for poly in &polygons {
            assert!(poly.exterior().is_ccw());
            assert!(poly.interiors().iter().all(|h| h.is_cw()));
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let (rings, _) = random_soup(&mut rng, 64);

    let mut sequential = SoupResolver::new();
    sequential.parallel_threshold = usize::MAX;
    let mut parallel = SoupResolver::new();
    parallel.parallel_threshold = 0;

    assert_eq!(
        sequential.groups(&rings).unwrap(),
        parallel.groups(&rings).unwrap()
    );
    assert_eq!(
        sequential.resolve(rings.clone()).unwrap(),
        parallel.resolve(rings).unwrap()
    );
}

#[test]
fn test_resolving_output_again_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(3);
    let (rings, _) = random_soup(&mut rng, 10);
    let resolver = SoupResolver::new();
    let polygons = resolver.resolve(rings).unwrap();

    let flattened: Vec<LineString<f64>> = polygons
        .iter()
        .flat_map(|p| std::iter::once(p.exterior().clone()).chain(p.interiors().iter().cloned()))
        .collect();
    let again = resolver.resolve(flattened).unwrap();

    assert_eq!(again.len(), polygons.len());
    let mut before: Vec<_> = polygons.iter().map(|p| p.exterior().0.clone()).collect();
    let mut after: Vec<_> = again.iter().map(|p| p.exterior().0.clone()).collect();
    let key = |c: &Vec<geo_types::Coord<f64>>| (c[0].x, c[0].y, c.len());
    before.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    after.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    assert_eq!(before, after, "exterior rings must come back bit-identical");
}
