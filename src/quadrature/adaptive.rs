//! Adaptive refinement driver.
//!
//! Runs a quadrature rule at successively doubled partition counts, using
//! Richardson extrapolation to estimate the truncation error, and stops once
//! the estimate drops below the caller's tolerance.

use crate::quadrature::error::{QuadratureError, QuadratureResult};
use crate::quadrature::rule::Rule;

/// Options for the adaptive refinement driver.
#[derive(Debug, Clone)]
pub struct AdaptiveOptions {
    /// Maximum number of partition doublings (default: 30, values above 30
    /// are clamped).
    ///
    /// Bounds `n` at 2^30 sub-intervals, past which f64 quadrature gains
    /// nothing. Exceeding the cap returns [`QuadratureError::DidNotConverge`]
    /// rather than looping forever on a tolerance the Richardson estimate
    /// cannot reach.
    pub max_refinements: u32,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            max_refinements: 30, // 2^30 is about 1 billion sub-intervals
        }
    }
}

/// Result of an adaptive integration run.
///
/// `lower_bound` and `upper_bound` are the ordered pair of the raw estimate
/// magnitude and the estimate shifted by the last Richardson correction.
/// This bracket is heuristic: it conflates |integral| with the signed error
/// correction, so for integrands that change sign over the interval it
/// carries no guarantee of containing the true value.
#[derive(Debug, Clone)]
pub struct AdaptiveResult {
    /// Partition count at convergence
    pub n: u32,
    /// Smaller of the two bracket values
    pub lower_bound: f64,
    /// Larger of the two bracket values
    pub upper_bound: f64,
}

/// Integrate `f` over `[lo, hi]` by adaptive uniform refinement.
///
/// Starting from a single partition, the driver doubles the partition count
/// until the Richardson error estimate
/// `d = (I(2n) - I(n)) / (2^p - 1)` falls within `delta`, where `p` is the
/// rule's convergence order. The estimate is self-certifying against the
/// rule's assumed convergence rate, not against the true integral: for an
/// integrand with a singularity or insufficient smoothness it is unreliable.
///
/// # Arguments
///
/// * `rule` - Quadrature rule to refine
/// * `f` - Function to integrate
/// * `lo` - Lower bound
/// * `hi` - Upper bound
/// * `delta` - Convergence threshold on the error estimate (must be positive)
///
/// # Errors
///
/// Returns an error if:
/// - `delta` is not positive and finite
/// - The estimate does not reach `delta` within 30 partition doublings
///
/// # Example
///
/// ```
/// use quadr::{Rule, adaptive_integrate};
///
/// // Integrate e^x over [0,1] = e - 1
/// let result = adaptive_integrate(Rule::Simpson, |x| x.exp(), 0.0, 1.0, 1e-3).unwrap();
/// let exact = std::f64::consts::E - 1.0;
/// assert!(result.lower_bound <= result.upper_bound);
/// assert!((result.lower_bound - exact).abs() < 1e-3);
/// ```
pub fn adaptive_integrate<F>(
    rule: Rule,
    f: F,
    lo: f64,
    hi: f64,
    delta: f64,
) -> QuadratureResult<AdaptiveResult>
where
    F: Fn(f64) -> f64,
{
    adaptive_integrate_with_options(rule, f, lo, hi, delta, &AdaptiveOptions::default())
}

/// Adaptive integration with an explicit refinement cap.
///
/// See [`adaptive_integrate`] for the algorithm.
pub fn adaptive_integrate_with_options<F>(
    rule: Rule,
    f: F,
    lo: f64,
    hi: f64,
    delta: f64,
    options: &AdaptiveOptions,
) -> QuadratureResult<AdaptiveResult>
where
    F: Fn(f64) -> f64,
{
    if !delta.is_finite() || delta <= 0.0 {
        return Err(QuadratureError::InvalidParameter {
            parameter: "delta".to_string(),
            message: "tolerance must be positive and finite".to_string(),
        });
    }

    // Cap doublings so n stays within 2^30 sub-intervals
    let max_refinements = options.max_refinements.min(30);

    let divisor = rule.richardson_divisor();
    let mut n: u32 = 1;
    let mut d: f64 = 1.0; // sentinel above any sane tolerance
    let mut refinements = 0;

    while d.abs() > delta {
        if refinements >= max_refinements {
            return Err(QuadratureError::DidNotConverge {
                refinements,
                tolerance: delta,
                context: "adaptive_integrate".to_string(),
            });
        }

        let coarse = rule.integrate(&f, lo, hi, n);
        let fine = rule.integrate(&f, lo, hi, 2 * n);
        d = (fine - coarse) / divisor;
        n *= 2;
        refinements += 1;
    }

    let estimate = rule.integrate(&f, lo, hi, n).abs();
    let mut a = estimate;
    let mut b = estimate + d;
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    Ok(AdaptiveResult {
        n,
        lower_bound: a,
        upper_bound: b,
    })
}
