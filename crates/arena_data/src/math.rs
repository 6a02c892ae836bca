pub mod consts {
    pub use core::f32::consts::*;

    /// `sqrt(3)`, spelled out since `core::f32::consts::SQRT_3` is still unstable.
    pub const SQRT_3: f32 = 1.732_050_8;
}

pub type Float = f32;
pub type Int = i32;
pub type UInt = u32;

pub type Vec2 = vek::Vec2<Float>;

pub trait Vec2Ext {
    /// Creates a unit vector pointing at `radians`, measured from the positive x axis towards positive y.
    fn from_radians(radians: Float) -> Self;

    /// Creates a unit vector pointing at `degrees`, measured from the positive x axis towards positive y.
    fn from_degrees(degrees: Float) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn from_radians(radians: Float) -> Self {
        let (sin, cos) = radians.sin_cos();

        Vec2::new(cos, sin)
    }

    #[inline]
    fn from_degrees(degrees: Float) -> Self {
        Self::from_radians(degrees.to_radians())
    }
}

#[inline]
#[must_use]
pub fn vec2_to_radians(d: Vec2) -> Float {
    let angle = d.y.atan2(d.x);

    angle.rem_euclid(consts::TAU)
}

#[inline]
#[must_use]
pub fn vec2_to_degrees(d: Vec2) -> Float {
    vec2_to_radians(d).to_degrees().round()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn polar_construction() {
        let right = Vec2::from_degrees(0.0);
        assert_abs_diff_eq!(right.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(right.y, 0.0, epsilon = 1e-6);

        let down = Vec2::from_degrees(90.0);
        assert_abs_diff_eq!(down.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(down.y, 1.0, epsilon = 1e-6);

        for deg in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
            assert_abs_diff_eq!(vec2_to_degrees(Vec2::from_degrees(deg)), deg);
        }
    }

    #[test]
    fn add_and_scale() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(0.5, -1.0);
        assert_eq!(v, Vec2::new(1.5, 1.0));
        assert_eq!(v * 2.0, Vec2::new(3.0, 2.0));
    }
}
