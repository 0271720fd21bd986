//! Standard normal reference functions.
//!
//! Used to derive the theoretical bucket masses that sampled normal
//! histograms are scored against.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Complementary error function, Abramowitz and Stegun formula 7.1.26.
///
/// Maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function, P(X <= x).
///
/// Infinite arguments saturate to 0 and 1.
///
/// # Examples
/// ```
/// use variate_core::stats::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Probability mass of each interval `(checkpoints[i-1], checkpoints[i]]`
/// under the standard normal, with an implicit `-∞` before the first
/// checkpoint.
///
/// # Examples
/// ```
/// use variate_core::stats::normal_bucket_masses;
///
/// let masses = normal_bucket_masses(&[0.0, f64::INFINITY]);
/// assert!((masses[0] - 0.5).abs() < 1e-7);
/// assert!((masses[1] - 0.5).abs() < 1e-7);
/// ```
pub fn normal_bucket_masses(checkpoints: &[f64]) -> Vec<f64> {
    let mut previous = 0.0;
    checkpoints
        .iter()
        .map(|&checkpoint| {
            let cdf = norm_cdf(checkpoint);
            let mass = cdf - previous;
            previous = cdf;
            mass
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference quantiles of the standard normal
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158_655_254, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.5_f64), 0.993_790_335, epsilon = 1e-6);
        assert!(norm_cdf(-5.0_f64) < 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.3, 2.7] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_bucket_masses_sum_to_one() {
        let checkpoints = [-5.0, -2.5, -1.0, -0.5, 0.0, 0.5, 1.0, 2.5, 5.0, f64::INFINITY];
        let masses = normal_bucket_masses(&checkpoints);
        assert_eq!(masses.len(), checkpoints.len());
        assert_relative_eq!(masses.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        assert!(masses.iter().all(|&m| m >= 0.0));
    }
}
