//! Textual report blocks for integration results.
//!
//! Pure formatting: no numeric logic lives here, but the labels and
//! tab-separated field order are part of the external contract and are
//! asserted exactly by the tests.

use rand::Rng;

use crate::quadrature::adaptive::{AdaptiveResult, adaptive_integrate};
use crate::quadrature::error::QuadratureResult;
use crate::quadrature::monte_carlo::{MonteCarloResult, monte_carlo_integrate};
use crate::quadrature::rule::Rule;

/// Format one adaptive-quadrature block: label line, then partition count
/// and the ordered bracket, tab-separated.
///
/// # Example
///
/// ```
/// use quadr::report::quadrature_block;
/// use quadr::AdaptiveResult;
///
/// let result = AdaptiveResult { n: 16, lower_bound: 1.5, upper_bound: 2.5 };
/// assert_eq!(quadrature_block("Rectangles", &result), "Rectangles:\n\t16\t1.5\t2.5\n");
/// ```
pub fn quadrature_block(label: &str, result: &AdaptiveResult) -> String {
    format!(
        "{}:\n\t{}\t{}\t{}\n",
        label, result.n, result.lower_bound, result.upper_bound
    )
}

/// Format the Monte Carlo block: sample count and estimate, no bracket.
pub fn monte_carlo_block(result: &MonteCarloResult) -> String {
    format!("M-K:\n\t{}\t{}\n", result.n, result.estimate)
}

/// Format the closing reference-value block.
pub fn reference_block(value: f64) -> String {
    format!("True value:\n\t{}\n", value)
}

/// Run every method over [0, 1] and assemble the full comparison report.
///
/// Blocks appear in fixed order: Rectangles, Trapezium, Simpson, M-K,
/// True value. The three adaptive methods share `delta`; the Monte Carlo
/// estimator runs once with `samples` draws under `bounding_height`.
///
/// # Errors
///
/// Propagates the first parameter-validation or convergence error from the
/// underlying methods.
///
/// # Example
///
/// ```
/// use quadr::report::comparison_report;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let exact = std::f64::consts::E - 1.0;
/// let report = comparison_report(|x| x.exp(), 1e-3, 100, 3.0, exact, &mut rng).unwrap();
/// assert!(report.starts_with("Rectangles:\n"));
/// ```
pub fn comparison_report<F, R>(
    f: F,
    delta: f64,
    samples: u32,
    bounding_height: f64,
    reference: f64,
    rng: &mut R,
) -> QuadratureResult<String>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let mut out = String::new();

    for rule in [Rule::Rectangle, Rule::Trapezoid, Rule::Simpson] {
        let result = adaptive_integrate(rule, &f, 0.0, 1.0, delta)?;
        out.push_str(&quadrature_block(rule.label(), &result));
    }

    let mc = monte_carlo_integrate(&f, samples, bounding_height, rng)?;
    out.push_str(&monte_carlo_block(&mc));
    out.push_str(&reference_block(reference));

    Ok(out)
}
