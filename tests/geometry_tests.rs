/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use coordination_rs::atoms::Vector3D;
use coordination_rs::coordination::{angle, distance, in_range};
use rstest::rstest;

#[rstest]
#[case([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])]
#[case([1.0, 2.0, 3.0], [-4.0, 5.0, -6.0])]
#[case([0.3, -0.1, 2.5], [0.3, -0.1, 2.5])]
#[case([1.0, 1.0, 1.0], [-1.0, -1.0, -1.0])]
#[case([1e-3, 0.0, 0.0], [1e3, 1e3, 0.0])]
fn test_angle_is_symmetric_and_bounded(#[case] a: [f64; 3], #[case] b: [f64; 3]) {
    let v1 = Vector3D::from_array(a);
    let v2 = Vector3D::from_array(b);

    let forward = angle(&v1, &v2);
    let backward = angle(&v2, &v1);

    assert_relative_eq!(forward, backward, epsilon = 1e-12);
    assert!((0.0..=180.0).contains(&forward));
}

#[rstest]
#[case([2.0, 0.0, 0.0], [0.0, 0.0, 3.0], 90.0)]
#[case([2.0, 0.0, 0.0], [-5.0, 0.0, 0.0], 180.0)]
#[case([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], 45.0)]
#[case([1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], 109.47122063449069)]
fn test_known_angles(#[case] a: [f64; 3], #[case] b: [f64; 3], #[case] expected: f64) {
    let theta = angle(&Vector3D::from_array(a), &Vector3D::from_array(b));
    assert_relative_eq!(theta, expected, epsilon = 1e-9);
}

#[test]
fn test_distance_between_positions() {
    let a = Vector3D::new(1.0, 1.0, 1.0);
    let b = Vector3D::new(-1.0, 1.0, 1.0);

    assert_relative_eq!(distance(&a, &b), 2.0, epsilon = 1e-12);
    assert_eq!(distance(&a, &b), distance(&b, &a));
    assert_eq!(distance(&a, &a), 0.0);
}

#[rstest]
#[case(109.5, 109.5, 20.0, true)]
#[case(89.6, 109.5, 20.0, true)]
#[case(89.5, 109.5, 20.0, false)]
#[case(129.5, 109.5, 20.0, false)]
#[case(156.0, 180.0, 25.0, true)]
#[case(155.0, 180.0, 25.0, false)]
fn test_in_range_window(
    #[case] value: f64,
    #[case] midpoint: f64,
    #[case] width: f64,
    #[case] expected: bool,
) {
    assert_eq!(in_range(value, midpoint, width), expected);
}
