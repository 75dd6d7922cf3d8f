use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath::{Vector2, Vector2d, Vector2f};

const SAMPLES: usize = 500;

fn random_vector(rng: &mut StdRng) -> Vector2d {
    Vector2::new(rng.gen_range(-1.0e3..1.0e3), rng.gen_range(-1.0e3..1.0e3))
}

fn samples(seed: u64) -> impl Iterator<Item = (Vector2d, Vector2d)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(move |_| (random_vector(&mut rng), random_vector(&mut rng)))
}

#[test]
fn add_then_sub_round_trips() {
    for (a, b) in samples(1) {
        let back = a + b - b;
        assert_relative_eq!(back.x, a.x, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(back.y, a.y, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn division_by_zero_is_exactly_zero() {
    for (a, _) in samples(2) {
        assert_eq!(a / 0.0, Vector2d::ZERO);
        let mut c = a;
        c /= 0.0;
        assert_eq!(c, a / 0.0);
    }
    let mut f = Vector2f::new(1.0, -1.0);
    f /= 0.0;
    assert_eq!(f, Vector2f::ZERO);
}

#[test]
fn normalized_has_unit_length() {
    for (a, _) in samples(3) {
        if a == Vector2d::ZERO {
            continue;
        }
        assert_relative_eq!(a.normalized().length(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(Vector2d::ZERO.normalized(), Vector2d::ZERO);
}

#[test]
fn dot_is_symmetric_and_cross_antisymmetric() {
    for (a, b) in samples(4) {
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -b.cross(a));
    }
}

#[test]
fn lerp_hits_both_endpoints() {
    for (a, b) in samples(5) {
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

#[test]
fn cubic_interpolate_hits_both_endpoints() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let pre_a = random_vector(&mut rng);
        let post_b = random_vector(&mut rng);
        let start = a.cubic_interpolate(b, pre_a, post_b, 0.0);
        let end = a.cubic_interpolate(b, pre_a, post_b, 1.0);
        assert!(start.is_equal_approx_with(a, 1e-9));
        assert!(end.is_equal_approx_with(b, 1e-9));
    }
}

#[test]
fn distance_agrees_with_squared_distance() {
    for (a, b) in samples(7) {
        let d = a.distance_to(b);
        assert_relative_eq!(d * d, a.distance_squared_to(b), max_relative = 1e-12);
    }
}

#[test]
fn bounce_preserves_length() {
    let mut rng = StdRng::seed_from_u64(8);
    for (a, _) in samples(9) {
        let normal = Vector2d::from_angle(rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI));
        assert_relative_eq!(a.bounce(normal).length(), a.length(), max_relative = 1e-9);
    }
}

#[test]
fn from_angle_matches_angle() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..SAMPLES {
        let angle: f64 = rng.gen_range(-3.0..3.0);
        let v = Vector2d::from_angle(angle);
        assert!(v.is_normalized_with(1e-12));
        assert_relative_eq!(v.angle(), angle, epsilon = 1e-12, max_relative = 1e-9);
    }
}
