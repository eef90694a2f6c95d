use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point or displacement in field units.
///
/// `Vector` is a value type: every operation returns a new vector and leaves
/// the receiver untouched.
///
/// # Examples
/// ```
/// use contagion_data::Vector;
///
/// let heading = Vector::new(3.0, 4.0).normalize();
/// assert!((heading.magnitude() - 1.0).abs() < 1e-12);
/// assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the positive x axis.
    #[must_use]
    pub fn unit_in_direction(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[must_use]
    pub fn plus(self, other: Vector) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn minus(self, other: Vector) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn times(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescales to unit length. The zero vector has no direction and is
    /// returned as-is.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 {
            self
        } else {
            self.times(1.0 / self.magnitude())
        }
    }

    #[must_use]
    pub fn reverse_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    #[must_use]
    pub fn reverse_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.minus(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.times(-1.0)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn approx(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a.plus(b), Vector::new(4.0, 1.0));
        assert_eq!(a.minus(b), Vector::new(-2.0, 3.0));
        assert_eq!(a.times(2.5), Vector::new(2.5, 5.0));
        assert_eq!(a + b, a.plus(b));
        assert_eq!(a - b, a.minus(b));
        assert_eq!(a * 2.5, a.times(2.5));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize_zero_is_fixed_point() {
        assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
        assert_eq!(Vector::new(-0.0, 0.0).normalize(), Vector::new(-0.0, 0.0));
    }

    #[test]
    fn test_reverse_axes() {
        let v = Vector::new(1.5, -2.0);
        assert_eq!(v.reverse_x(), Vector::new(-1.5, -2.0));
        assert_eq!(v.reverse_y(), Vector::new(1.5, 2.0));
        assert_eq!(v.reverse_x().reverse_x(), v);
    }

    #[test]
    fn test_unit_in_direction() {
        assert!(approx(Vector::unit_in_direction(0.0), Vector::new(1.0, 0.0)));
        assert!(approx(Vector::unit_in_direction(FRAC_PI_2), Vector::new(0.0, 1.0)));
        assert!(approx(Vector::unit_in_direction(PI), Vector::new(-1.0, 0.0)));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Vector::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let once = Vector::new(x, y).normalize();
            let twice = once.normalize();
            prop_assert!((once.x - twice.x).abs() < EPS);
            prop_assert!((once.y - twice.y).abs() < EPS);
        }

        #[test]
        fn prop_normalize_has_unit_length(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            prop_assume!(x != 0.0 || y != 0.0);
            let n = Vector::new(x, y).normalize();
            prop_assert!((n.magnitude() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_unit_in_direction_has_unit_length(angle in 0.0f64..(2.0 * PI)) {
            prop_assert!((Vector::unit_in_direction(angle).magnitude() - 1.0).abs() < 1e-12);
        }
    }
}
