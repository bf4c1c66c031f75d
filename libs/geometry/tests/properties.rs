use approx::assert_abs_diff_eq;
use geometry::{Vector2D, Vector3D};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

fn samples_2d() -> Vec<Vector2D> {
    vec![
        Vector2D::new(3.0, 4.0),
        Vector2D::new(-3.0, 4.0),
        Vector2D::new(-1.0, -1.0),
        Vector2D::new(6.0, -8.0),
        Vector2D::new(0.25, -1e6),
        Vector2D::zero(),
    ]
}

fn samples_3d() -> Vec<Vector3D> {
    vec![
        Vector3D::new(2.0, 3.0, 4.0),
        Vector3D::new(2.0, -3.0, 4.0),
        Vector3D::new(-2.0, -1.0, -1.0),
        Vector3D::new(-4.0, 6.0, -8.0),
    ]
}

#[test]
fn zero_is_additive_identity() {
    for v in samples_2d() {
        assert_eq!(v + Vector2D::zero(), v);
        assert_eq!(v - Vector2D::zero(), v);
    }
    for v in samples_3d() {
        assert_eq!(v + Vector3D::zero(), v);
        assert_eq!(v - Vector3D::zero(), v);
    }
}

#[test]
fn binary_operators_leave_operands_untouched() {
    let a = Vector2D::new(3.0, 4.0);
    let b = Vector2D::new(-3.0, 4.0);
    let (a_bits, b_bits) = ((a.x.to_bits(), a.y.to_bits()), (b.x.to_bits(), b.y.to_bits()));

    let _ = a + b;
    let _ = a - b;
    let _ = a * 2.0;
    let _ = 2.0 * a;
    let _ = a / 2.0;
    let _ = -a;
    let _ = Vector2D::angle_between(a, b);

    assert_eq!((a.x.to_bits(), a.y.to_bits()), a_bits);
    assert_eq!((b.x.to_bits(), b.y.to_bits()), b_bits);
    assert_eq!(a, [3.0, 4.0]);
    assert_eq!(b, [-3.0, 4.0]);
}

#[test]
fn in_place_add_accumulates() {
    let mut v = Vector2D::zero();
    v += Vector2D::new(3.0, 4.0);
    assert_eq!(v, Vector2D::new(3.0, 4.0));

    let mut w = Vector3D::zero();
    w += Vector3D::new(2.0, 3.0, 4.0);
    w -= 1.0;
    assert_eq!(w, Vector3D::new(1.0, 2.0, 3.0));
}

#[test]
fn lengths_and_products() {
    assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
    assert_abs_diff_eq!(Vector3D::new(2.0, 3.0, 4.0).length(), 29f64.sqrt());
    assert_eq!(Vector2D::new(3.0, 4.0).dot(Vector2D::new(-3.0, 4.0)), 7.0);
    assert_eq!(Vector3D::new(2.0, 3.0, 4.0).dot(Vector3D::new(2.0, -3.0, 4.0)), 11.0);
    assert_eq!(
        Vector3D::new(1.0, 0.0, 0.0).cross(Vector3D::new(0.0, 1.0, 0.0)),
        Vector3D::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn length_is_never_negative() {
    for v in samples_2d() {
        assert!(v.length() >= 0.0);
        assert_eq!(v.length() == 0.0, v == Vector2D::zero());
    }
}

#[test]
fn axis_and_diagonal_angles() {
    assert_eq!(Vector2D::new(0.0, 1.0).angle(), FRAC_PI_2);
    assert_eq!(Vector2D::new(0.0, -1.0).angle(), -FRAC_PI_2);
    assert_eq!(Vector2D::new(-1.0, 0.0).angle(), PI);
    assert_eq!(Vector2D::new(1.0, 0.0).angle(), 0.0);

    assert_abs_diff_eq!(Vector2D::new(1.0, 1.0).angle(), FRAC_PI_4, epsilon = 0.01);
    assert_abs_diff_eq!(Vector2D::new(-1.0, 1.0).angle(), 3.0 * FRAC_PI_4, epsilon = 0.01);
    assert_abs_diff_eq!(Vector2D::new(1.0, -1.0).angle(), -FRAC_PI_4, epsilon = 0.01);
    assert_abs_diff_eq!(Vector2D::new(-1.0, -1.0).angle(), -3.0 * FRAC_PI_4, epsilon = 0.01);
}

#[test]
fn create_from_angle_special_triangles() {
    let v = Vector2D::create_from_angle(FRAC_PI_6, 2.0);
    assert_abs_diff_eq!(v, Vector2D::new(3f64.sqrt(), 1.0), epsilon = 1e-9);
    let v = Vector2D::create_from_angle(FRAC_PI_3, 2.0);
    assert_abs_diff_eq!(v, Vector2D::new(1.0, 3f64.sqrt()), epsilon = 1e-9);
}

#[test]
fn angle_between_boundaries() {
    let north = Vector2D::new(0.0, 1.0);
    let south = Vector2D::new(0.0, -1.0);
    let east = Vector2D::new(1.0, 0.0);
    let west = Vector2D::new(-1.0, 0.0);

    assert_abs_diff_eq!(Vector2D::angle_between(north, south), PI, epsilon = 1e-9);
    assert_abs_diff_eq!(Vector2D::angle_between(east, west), PI, epsilon = 1e-9);
    assert_abs_diff_eq!(Vector2D::angle_between(north, east), -FRAC_PI_2, epsilon = 1e-9);
    for v in samples_2d() {
        assert_eq!(Vector2D::angle_between(Vector2D::zero(), v), 0.0);
        assert_abs_diff_eq!(Vector2D::angle_between(v, v), 0.0, epsilon = 1e-7);
    }
}

#[test]
fn angle_between_southeast_northwest_is_pi() {
    let southeast = Vector2D::new(1.0, -1.0);
    let northwest = Vector2D::new(-1.0, 1.0);
    assert_abs_diff_eq!(Vector2D::angle_between(southeast, northwest), PI, epsilon = 1e-5);
}

#[test]
fn angle_between_sign_tracks_rotation_direction() {
    // Sweep a reference around the circle and compare against a quarter turn
    // either way; the sign must follow the direction of rotation.
    for degrees in (-175..=180).step_by(5) {
        let base = f64::from(degrees).to_radians();
        let reference = Vector2D::create_from_angle(base, 2.0);
        let ccw = Vector2D::create_from_angle(base + FRAC_PI_2, 0.5);
        let cw = Vector2D::create_from_angle(base - FRAC_PI_2, 3.0);

        assert_abs_diff_eq!(Vector2D::angle_between(reference, ccw), FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(Vector2D::angle_between(reference, cw), -FRAC_PI_2, epsilon = 1e-9);
    }
}

#[test]
fn angle_between_sign_holds_next_to_antiparallel() {
    // Just short of a half turn either way, one side of the target wraps past
    // ±π while the other does not. acos is coarse near -1, so only the sign
    // is exact.
    let offset = PI - 1e-9;
    for degrees in (-175..=180).step_by(5) {
        let base = f64::from(degrees).to_radians();
        let reference = Vector2D::create_from_angle(base, 2.0);
        let ccw = Vector2D::create_from_angle(base + offset, 0.5);
        let cw = Vector2D::create_from_angle(base - offset, 3.0);

        let turned_ccw = Vector2D::angle_between(reference, ccw);
        let turned_cw = Vector2D::angle_between(reference, cw);
        assert!(turned_ccw > 0.0, "{degrees}°: ccw gave {turned_ccw}");
        assert!(turned_cw < 0.0, "{degrees}°: cw gave {turned_cw}");
        assert_abs_diff_eq!(turned_ccw, offset, epsilon = 1e-6);
        assert_abs_diff_eq!(turned_cw, -offset, epsilon = 1e-6);
    }
}

#[test]
fn cross_product_anticommutes() {
    for a in samples_3d() {
        for b in samples_3d() {
            assert_eq!(a.cross(b), -b.cross(a));
        }
    }
}
