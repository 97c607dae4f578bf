#![allow(dead_code)]

use linmath::{Matrix4, Quaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLES: usize = 200;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded so failures reproduce
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6c69_6e6d_6174_68)
}

pub fn random_vector(rng: &mut impl Rng, range: f64) -> Vector3 {
    Vector3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

/// Non-degenerate axis, not normalized
pub fn random_axis(rng: &mut impl Rng) -> Vector3 {
    loop {
        let v = random_vector(rng, 1.0);
        if v.length() > 0.1 {
            return v;
        }
    }
}

pub fn random_rotation(rng: &mut impl Rng) -> Quaternion {
    let angle = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
    Quaternion::from_axis_angle(&random_axis(rng), angle)
}

/// Rotation followed by translation, no scale
pub fn random_rigid(rng: &mut impl Rng) -> Matrix4 {
    let t = random_vector(rng, 10.0);
    Matrix4::translation(t.x, t.y, t.z) * random_rotation(rng).to_matrix4()
}
