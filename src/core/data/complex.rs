use std::ops::{Add, Mul};

// small hand-rolled complex type; the iteration kernel only ever needs
// squaring and addition, so pulling in num-complex buys nothing here
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared_is_sign_independent() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add_is_componentwise() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(-3.0, 7.0);

        assert_eq!(sum, Complex::new(-2.0, 9.0));
    }

    #[test]
    fn test_mul_follows_the_product_rule() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_squaring() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_mul_by_zero_annihilates() {
        assert_eq!(Complex::new(5.0, 3.0) * Complex::ZERO, Complex::ZERO);
    }
}
