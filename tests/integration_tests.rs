use geo::algorithm::winding_order::Winding;
use geo::Area;
use geo_polygon_soup::{resolve, PolygonGroup, SoupResolver};
use geo_types::LineString;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64, ccw: bool) -> LineString<f64> {
    let mut ring = LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]);
    if !ccw {
        ring.make_cw_winding();
    }
    ring
}

//    ___________________________________
//   |    ____________________________   |
//   |   |  ______________            |  |
//   |   | |  ___         |   ____    D  |
//   |   | | A   |   ___  B  |     |  |  |
//   |   | | |___|  |_C_| |  |     E  |  |
//   |   | |______________|  |_____|  |  F
//   |   |____________________________|  |
//   |___________________________________|
//
// Listed A to F, so the outer boundaries surface as B, E, F.
fn figure() -> Vec<LineString<f64>> {
    vec![
        rect(15.0, 15.0, 30.0, 30.0, false), // A
        rect(10.0, 10.0, 60.0, 90.0, true),  // B
        rect(40.0, 15.0, 55.0, 30.0, false), // C
        rect(5.0, 5.0, 95.0, 95.0, false),   // D
        rect(70.0, 10.0, 90.0, 90.0, true),  // E
        rect(0.0, 0.0, 100.0, 100.0, true),  // F
    ]
}

#[test]
fn test_figure_resolves_into_three_polygons() {
    let groups = SoupResolver::new().groups(&figure()).unwrap();
    assert_eq!(
        groups,
        vec![
            PolygonGroup { outer: 1, holes: vec![0, 2] },
            PolygonGroup { outer: 4, holes: vec![] },
            PolygonGroup { outer: 5, holes: vec![3] },
        ]
    );

    let polygons = resolve(figure()).unwrap();
    assert_eq!(polygons.len(), 3);
    assert!((polygons[0].unsigned_area() - 3550.0).abs() < 1e-9);
    assert!((polygons[1].unsigned_area() - 1600.0).abs() < 1e-9);
    assert!((polygons[2].unsigned_area() - 1900.0).abs() < 1e-9);
}

#[test]
fn test_input_order_does_not_change_the_partition() {
    let mut reversed = figure();
    reversed.reverse();
    let groups = SoupResolver::new().groups(&reversed).unwrap();

    // Ids now count from F = 0 down to A = 5.
    assert_eq!(
        groups,
        vec![
            PolygonGroup { outer: 0, holes: vec![2] },
            PolygonGroup { outer: 1, holes: vec![] },
            PolygonGroup { outer: 4, holes: vec![3, 5] },
        ]
    );
}

#[test]
fn test_disjoint_rings_stay_separate() {
    let soup: Vec<_> = (0..6)
        .map(|i| {
            let x = i as f64 * 3.0;
            rect(x, 0.0, x + 2.0, 2.0, i % 2 == 0)
        })
        .collect();

    let polygons = resolve(soup).unwrap();
    assert_eq!(polygons.len(), 6);
    for poly in &polygons {
        assert!(poly.interiors().is_empty());
        assert!(poly.exterior().is_ccw());
    }
}

#[test]
fn test_lonely_ring_is_its_own_polygon_anywhere() {
    for position in 0..3 {
        let mut soup = vec![
            rect(0.0, 0.0, 10.0, 10.0, true),
            rect(2.0, 2.0, 8.0, 8.0, false),
        ];
        soup.insert(position, rect(20.0, 20.0, 21.0, 21.0, false));

        let groups = SoupResolver::new().groups(&soup).unwrap();
        assert_eq!(groups.len(), 2);
        let lonely = groups.iter().find(|g| g.outer == position).unwrap();
        assert!(lonely.holes.is_empty());
    }
}

#[test]
fn test_hole_sharing_the_outer_boundary_edge() {
    // The hole touches the outer ring along its left side.
    let soup = vec![
        rect(0.0, 0.0, 10.0, 10.0, true),
        rect(0.0, 2.0, 5.0, 8.0, false),
    ];
    let polygons = resolve(soup).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].interiors().len(), 1);
}

#[test]
fn test_partial_overlap_is_not_containment() {
    let soup = vec![
        rect(0.0, 0.0, 10.0, 10.0, true),
        rect(5.0, 5.0, 15.0, 15.0, false),
    ];
    let polygons = resolve(soup).unwrap();
    assert_eq!(polygons.len(), 2);
    assert!(polygons.iter().all(|p| p.interiors().is_empty()));
}
