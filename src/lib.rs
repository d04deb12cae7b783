//! # cn-pde-pricer: Crank-Nicolson Finite Differences for European Options
//!
//! Prices European vanilla equity options by numerically solving the
//! Black-Scholes PDE on a finite-difference grid, reporting fair value,
//! the first-order Greeks, and numerical-quality diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use cn_pde_pricer::request::{OptionKind, PricingRequest};
//! use cn_pde_pricer::pricer::price;
//!
//! let request = PricingRequest::new("AAPL", OptionKind::Call, 100.0, 100.0, 1.0, 0.2, 0.05);
//! let result = price(&request).expect("valid grid configuration");
//! println!("fair value: {:.4}", result.fair_value);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The Black-Scholes PDE:
//! ```text
//! dV/dt + (1/2) sigma^2 S^2 d^2V/dS^2 + (r - q) S dV/dS - r V = 0
//! ```
//! is discretized on a uniform space-time grid and marched backward from the
//! terminal payoff to today using Crank-Nicolson time-stepping, which
//! averages the explicit and implicit Euler schemes for second-order
//! accuracy and unconditional stability. Each backward step solves one
//! tridiagonal linear system via the Thomas algorithm.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod request;
pub mod config;
pub mod tridiag;
pub mod grid;
pub mod boundary;
pub mod coefficients;
pub mod stepper;
pub mod interpolate;
pub mod greeks;
pub mod pricer;
pub mod analytics;

// Re-export commonly used types for convenience
pub use error::{PdeError, PdeResult};
pub use pricer::{price, Diagnostics, PricingResult};
pub use request::{OptionKind, PricingRequest};
