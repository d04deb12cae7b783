// src/config.rs
use crate::error::validation::{validate_grid_points, validate_s_max_multiplier, validate_time_steps};
use crate::error::PdeResult;
use crate::request::PricingRequest;

pub const DEFAULT_GRID_SIZE: usize = 400;
pub const DEFAULT_TIME_STEPS: usize = 800;
pub const DEFAULT_S_MAX_MULTIPLIER: f64 = 6.0;

/// Resolved grid parameters for a single Crank-Nicolson solve.
///
/// Every field here is concrete (no `Option`s) once resolved — all defaulting
/// happens once, in `resolve`, mirroring the donor crate's `McConfig`
/// defaulting pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub grid_size: usize,
    pub time_steps: usize,
    pub s_max_multiplier: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            grid_size: DEFAULT_GRID_SIZE,
            time_steps: DEFAULT_TIME_STEPS,
            s_max_multiplier: DEFAULT_S_MAX_MULTIPLIER,
        }
    }
}

impl SolverConfig {
    /// Apply defaults for any absent override in `request`, then validate the
    /// resulting bounds. This is the single place configuration errors can
    /// surface in this crate; everything downstream of a resolved
    /// `SolverConfig` is infallible.
    pub fn resolve(request: &PricingRequest) -> PdeResult<SolverConfig> {
        let grid_size = request.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
        let time_steps = request.time_steps.unwrap_or(DEFAULT_TIME_STEPS);
        let s_max_multiplier = request.s_max_multiplier.unwrap_or(DEFAULT_S_MAX_MULTIPLIER);

        validate_grid_points(grid_size)?;
        validate_time_steps(time_steps)?;
        validate_s_max_multiplier(s_max_multiplier)?;

        Ok(SolverConfig {
            grid_size,
            time_steps,
            s_max_multiplier,
        })
    }
}
