//! Numerical quadrature methods.
//!
//! This module approximates definite integrals of single-variable functions
//! over a finite interval.
//!
//! # Available Methods
//!
//! | Method | Kind | Accuracy |
//! |--------|------|----------|
//! | [`Rule::Rectangle`] | Midpoint rule, fixed n | O(step²) |
//! | [`Rule::Trapezoid`] | Trapezoidal rule, fixed n | O(step²) |
//! | [`Rule::Simpson`] | Simpson's rule, fixed n | O(step⁴) |
//! | [`adaptive_integrate`] | Any rule, refined to tolerance | Richardson-estimated |
//! | [`monte_carlo_integrate`] | Rejection sampling over [0, 1] | O(1/√n) std. error |
//!
//! # Choosing a Method
//!
//! - **Known resolution**: call [`Rule::integrate`] with a fixed partition
//!   count
//! - **Target tolerance**: use [`adaptive_integrate`], which doubles the
//!   partition count until the Richardson error estimate is within tolerance
//! - **Independent cross-check**: use [`monte_carlo_integrate`] — stochastic,
//!   non-adaptive, with a caller-supplied generator for reproducibility

pub mod adaptive;
pub mod error;
pub mod monte_carlo;
pub mod rule;

// Re-export all public items
pub use adaptive::{
    AdaptiveOptions, AdaptiveResult, adaptive_integrate, adaptive_integrate_with_options,
};
pub use error::{QuadratureError, QuadratureResult};
pub use monte_carlo::{MonteCarloResult, monte_carlo_integrate};
pub use rule::Rule;
