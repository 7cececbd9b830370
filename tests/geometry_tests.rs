use approx::assert_relative_eq;
use glam::DVec2;
use monge_tangents::{
    line_intersection, outer_tangent_points, Circle, CircleId, CirclePair, Scene,
};

fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

#[test]
fn test_equal_radii_tangents_are_offset_parallels() {
    let a = DVec2::new(1.0, 2.0);
    let b = DVec2::new(4.0, 6.0);
    let r = 1.5;
    let d = b - a;

    let tangents = outer_tangent_points(a, b, r, r);

    for (start, end) in [tangents.first_line(), tangents.second_line()] {
        assert_relative_eq!(cross(end - start, d), 0.0, epsilon = 1e-12);
        assert_relative_eq!(start.distance(a), r, epsilon = 1e-12);
        assert_relative_eq!(end.distance(b), r, epsilon = 1e-12);
        // Versatz steht senkrecht auf der Zentralen
        assert_relative_eq!((start - a).dot(d), 0.0, epsilon = 1e-12);
        assert_relative_eq!((end - b).dot(d), 0.0, epsilon = 1e-12);
    }

    // Die beiden Tangenten liegen auf verschiedenen Seiten
    assert_relative_eq!(tangents.p1.distance(tangents.q1), 2.0 * r, epsilon = 1e-12);
}

#[test]
fn test_coincident_centers_return_sentinel() {
    let c = DVec2::new(-2.5, 7.0);
    let tangents = outer_tangent_points(c, c, 1.0, 1.0);
    assert_eq!(tangents.points(), [c; 4]);
}

#[test]
fn test_line_intersection_is_symmetric() {
    let (p1, p2) = (DVec2::new(-1.0, -3.0), DVec2::new(4.0, 2.5));
    let (p3, p4) = (DVec2::new(0.0, 5.0), DVec2::new(6.0, -1.0));

    let forward = line_intersection(p1, p2, p3, p4).expect("Schnittpunkt erwartet");
    let swapped = line_intersection(p3, p4, p1, p2).expect("Schnittpunkt erwartet");

    assert_relative_eq!(forward.x, swapped.x, epsilon = 1e-12);
    assert_relative_eq!(forward.y, swapped.y, epsilon = 1e-12);
}

#[test]
fn test_line_intersection_none_iff_parallel() {
    let p1 = DVec2::new(0.0, 0.0);
    let p2 = DVec2::new(2.0, 1.0);

    assert_eq!(
        line_intersection(p1, p2, DVec2::new(0.0, 3.0), DVec2::new(4.0, 5.0)),
        None
    );
    assert!(line_intersection(p1, p2, DVec2::new(0.0, 3.0), DVec2::new(4.0, 5.5)).is_some());
}

#[test]
fn test_line_intersection_is_point_pair_invariant() {
    let x = DVec2::new(2.0, 3.0);
    let dir_a = DVec2::new(1.0, 2.0);
    let dir_b = DVec2::new(3.0, -1.0);

    for (s, t) in [(-1.0, 2.0), (0.5, 4.0), (-3.0, -0.25), (7.0, 1.5)] {
        for (u, w) in [(1.0, -2.0), (0.25, 3.0), (-5.0, 5.0)] {
            let hit = line_intersection(x + dir_a * s, x + dir_a * t, x + dir_b * u, x + dir_b * w)
                .expect("Schnittpunkt erwartet");
            assert_relative_eq!(hit.x, x.x, epsilon = 1e-9);
            assert_relative_eq!(hit.y, x.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_default_configuration_has_collinear_intersections() {
    let scene = Scene::default();

    for result in scene.pairs() {
        assert!(
            result.intersection.is_some(),
            "Paar {} ohne Schnittpunkt",
            result.pair.label()
        );
    }

    let [x, y, z] = scene.connecting_line().expect("Verbindungslinie erwartet");
    assert_relative_eq!(x.x, -15.0, epsilon = 1e-9);
    assert_relative_eq!(y.x, 9.0, epsilon = 1e-9);
    assert_relative_eq!(z.x, 25.0, epsilon = 1e-9);

    let residual = scene.monge_residual().expect("Residuum erwartet");
    assert!(residual < 1e-9, "Residuum {residual}");
}

#[test]
fn test_horizontal_tangent_meets_non_horizontal_tangent() {
    // A und B mit gleichem Radius auf gleicher Höhe: Tangenten y = ±1
    let scene = Scene::new([
        Circle::new(CircleId::A, DVec2::new(0.0, 0.0), 1.0),
        Circle::new(CircleId::B, DVec2::new(4.0, 0.0), 1.0),
        Circle::new(CircleId::C, DVec2::new(2.0, 5.0), 0.5),
    ]);

    let ab = scene.pair(CirclePair::AB);
    assert_eq!(ab.intersection, None);
    let (h1, h2) = ab.tangents.first_line();
    assert_eq!(h1.y, h2.y);

    let (s1, s2) = scene.pair(CirclePair::AC).tangents.first_line();
    assert_ne!(s1.y, s2.y);

    let hit = line_intersection(h1, h2, s1, s2).expect("Schnittpunkt erwartet");
    assert!(hit.is_finite());
    assert_relative_eq!(hit.y, h1.y, epsilon = 1e-9);
    assert_relative_eq!(cross(s2 - s1, hit - s1), 0.0, epsilon = 1e-9);

    assert_eq!(scene.connecting_line(), None);
}

#[test]
fn test_vertical_tangent_meets_non_vertical_tangent() {
    // Senkrecht übereinander: Tangenten x = ±1
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(0.0, 4.0);
    let vertical = outer_tangent_points(a, b, 1.0, 1.0);
    let (v1, v2) = vertical.first_line();
    assert_eq!(v1.x, v2.x);

    let other = outer_tangent_points(a, DVec2::new(5.0, 3.0), 1.0, 0.8);
    let (o1, o2) = other.first_line();

    let hit = line_intersection(v1, v2, o1, o2).expect("Schnittpunkt erwartet");
    assert!(hit.is_finite());
    assert_relative_eq!(hit.x, v1.x, epsilon = 1e-9);
}

#[test]
fn test_recompute_twice_yields_identical_results() {
    let mut scene = Scene::default();
    scene.set_center(CircleId::C, DVec2::new(-4.0, 6.5));
    scene.recompute();
    let first = *scene.pairs();
    scene.recompute();
    assert_eq!(scene.pairs(), &first);
}
