// src/pricer.rs
use crate::coefficients::Coefficients;
use crate::config::SolverConfig;
use crate::error::PdeResult;
use crate::greeks::{self, Greeks};
use crate::grid::Grid;
use crate::interpolate::interpolate;
use crate::request::{OptionKind, PricingRequest};
use crate::stepper;

const RESIDUAL_WARNING_THRESHOLD: f64 = 1e-3;

/// Numerical-quality diagnostics accompanying a `PricingResult`.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    pub grid_points: usize,
    pub time_steps: usize,
    pub residual_norm: f64,
    /// Always `None` in this implementation — explicit runtime measurement
    /// is not a feature of the pricing result; the field exists for
    /// interface parity with external collaborators that may time the call
    /// themselves.
    pub runtime_ms: Option<f64>,
    pub boundary_spread: f64,
    pub s_max: f64,
}

/// The fully assembled result of pricing a single `PricingRequest`.
#[derive(Debug, Clone)]
pub struct PricingResult {
    pub symbol: String,
    pub option_kind: OptionKind,
    pub fair_value: f64,
    pub price: f64,
    pub quantity: u32,
    pub greeks: Greeks,
    pub diagnostics: Diagnostics,
    pub warnings: Vec<String>,
}

/// Prices a European vanilla option by Crank-Nicolson finite differences,
/// reporting fair value, Greeks, and numerical diagnostics.
///
/// Resolves the grid configuration (the one fallible step in this crate),
/// runs the base solve, then drives the four bumped solves needed for Vega
/// and Rho. Never raises once past configuration resolution: degeneracy
/// downgrades to absent Greeks and warnings, per this crate's propagation
/// policy.
pub fn price(request: &PricingRequest) -> PdeResult<PricingResult> {
    let config = SolverConfig::resolve(request)?;

    let span = tracing::info_span!(
        "solve",
        grid_size = config.grid_size,
        time_steps = config.time_steps
    );
    let _enter = span.enter();

    let grid = Grid::build(request, &config);
    let coeffs = Coefficients::build(request, &grid);
    let step_result = stepper::run(request, &config, &grid, &coeffs);

    let fair_value = interpolate(&grid.nodes, &step_result.today, request.spot);
    let mut greeks = greeks::estimate(request, &config, &grid, &step_result, fair_value);

    let boundary_spread = step_result.today[0].abs() + step_result.today[grid.nodes.len() - 1].abs();

    let diagnostics = Diagnostics {
        grid_points: config.grid_size,
        time_steps: config.time_steps,
        residual_norm: step_result.residual_norm,
        runtime_ms: None,
        boundary_spread,
        s_max: grid.s_max,
    };

    let mut warnings = Vec::new();

    if !fair_value.is_finite() {
        greeks = Greeks::default();
        warnings.push("Base price is not finite; grid configuration may be unstable.".to_string());
    }

    if diagnostics.residual_norm > RESIDUAL_WARNING_THRESHOLD {
        let warning = format!(
            "High residual norm detected ({:.3e}); consider increasing grid resolution.",
            diagnostics.residual_norm
        );
        warnings.push(warning);
    }

    if diagnostics.boundary_spread > (1.0_f64).max(0.05 * fair_value) {
        warnings.push(
            "Boundary spread is large; increase s_max_multiplier or check inputs.".to_string(),
        );
    }

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let price = fair_value * request.quantity as f64;

    Ok(PricingResult {
        symbol: request.symbol.to_uppercase(),
        option_kind: request.option_kind,
        fair_value,
        price,
        quantity: request.quantity,
        greeks,
        diagnostics,
        warnings,
    })
}
