//! Core vector type for the Roche sampler.
//!
//! Positions and displacements are `NVec2` (nalgebra `Vector2<f64>`), which
//! already gives difference, scale, sum and Euclidean norm.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// |v|^3, computed as the product of three norms (not `norm_squared * norm`)
#[inline]
pub fn cubed_norm(v: &NVec2) -> f64 {
    let n = v.norm();
    n * n * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubed_norm_of_3_4_5_triangle() {
        let v = NVec2::new(3.0, 4.0);
        assert!((cubed_norm(&v) - 125.0).abs() < 1e-12);
    }

    #[test]
    fn cubed_norm_of_zero_is_zero() {
        assert_eq!(cubed_norm(&NVec2::zeros()), 0.0);
    }
}
