//! Numerical quadrature for single-variable definite integrals.
//!
//! `quadr` approximates ∫f over a finite interval with several independent
//! methods and reports each method's converged result together with an error
//! bracket:
//!
//! - Three uniform-partition rule evaluators ([`Rule`]: Rectangle/midpoint,
//!   Trapezoid, Simpson)
//! - An adaptive refinement driver ([`adaptive_integrate`]) that doubles the
//!   partition count and stops once a Richardson extrapolation error
//!   estimate falls within the caller's tolerance
//! - An independent Monte Carlo estimator ([`monte_carlo_integrate`]) using
//!   rejection sampling over [0, 1] with a caller-supplied generator
//! - A textual [`report`] emitter for side-by-side comparison of the methods
//!
//! The convergence test is heuristic: it certifies the estimate against the
//! rule's assumed convergence order, not against the true integral, and the
//! reported bracket carries no rigorous containment guarantee. This crate is
//! a demonstration/comparison tool, not a certified quadrature library.
//!
//! # Example
//!
//! ```
//! use quadr::{Rule, adaptive_integrate};
//!
//! // Integrate e^x over [0,1] = e - 1, to within 1e-3
//! let result = adaptive_integrate(Rule::Simpson, |x| x.exp(), 0.0, 1.0, 1e-3)?;
//! let exact = std::f64::consts::E - 1.0;
//! assert!(result.lower_bound <= result.upper_bound);
//! assert!((result.upper_bound - exact).abs() < 1e-3);
//! # Ok::<(), quadr::QuadratureError>(())
//! ```

pub mod quadrature;
pub mod report;

pub use quadrature::{
    AdaptiveOptions, AdaptiveResult, MonteCarloResult, QuadratureError, QuadratureResult, Rule,
    adaptive_integrate, adaptive_integrate_with_options, monte_carlo_integrate,
};
