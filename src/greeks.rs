// src/greeks.rs
use crate::coefficients::Coefficients;
use crate::config::SolverConfig;
use crate::grid::Grid;
use crate::interpolate::interpolate;
use crate::request::PricingRequest;
use crate::stepper::{self, StepResult};

/// Option sensitivities. Every field is optional — an absent Greek signals
/// that its computation degenerated (non-finite bump reprice, too few grid
/// nodes, or an expiry too close to pin Theta), never that it is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeks {
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
    pub rho: Option<f64>,
}

const MIN_EFFECTIVE_VOLATILITY: f64 = 1e-4;
const RHO_BUMP: f64 = 1e-4;

/// Computes all five Greeks from the base solve's snapshots, bumping and
/// repricing for Vega/Rho.
pub fn estimate(
    request: &PricingRequest,
    config: &SolverConfig,
    grid: &Grid,
    step_result: &StepResult,
    fair_value: f64,
) -> Greeks {
    let (delta, gamma) = delta_gamma(grid, step_result, request.spot);
    let theta = theta(request, grid, step_result, fair_value);
    let vega = vega(request, config, fair_value).filter(|_| fair_value.is_finite());
    let rho = rho(request, config, fair_value).filter(|_| fair_value.is_finite());

    Greeks {
        delta: delta.filter(|_| fair_value.is_finite()),
        gamma: gamma.filter(|_| fair_value.is_finite()),
        theta: theta.filter(|_| fair_value.is_finite()),
        vega,
        rho,
    }
}

fn delta_gamma(grid: &Grid, step_result: &StepResult, spot: f64) -> (Option<f64>, Option<f64>) {
    let n_s = grid.nodes.len() - 1;
    if grid.nodes.len() < 3 {
        return (None, None);
    }
    let idx = searchsorted(&grid.nodes, spot).clamp(1, n_s - 1);
    let v = &step_result.today;
    let ds = grid.ds;

    let delta = (v[idx + 1] - v[idx - 1]) / (2.0 * ds);
    let gamma = (v[idx + 1] - 2.0 * v[idx] + v[idx - 1]) / (ds * ds);

    (delta.is_finite().then_some(delta), gamma.is_finite().then_some(gamma))
}

fn theta(
    request: &PricingRequest,
    grid: &Grid,
    step_result: &StepResult,
    fair_value: f64,
) -> Option<f64> {
    if request.expiry <= 1e-6 {
        return None;
    }
    let v_first_step = interpolate(&grid.nodes, &step_result.first_step, request.spot);
    let theta = -(v_first_step - fair_value) / grid.dtau;
    theta.is_finite().then_some(theta)
}

fn vega(request: &PricingRequest, config: &SolverConfig, _fair_value: f64) -> Option<f64> {
    let h = (0.01 * request.volatility).max(MIN_EFFECTIVE_VOLATILITY);

    let mut bumped_up = request.clone();
    bumped_up.volatility = (request.volatility + h).max(MIN_EFFECTIVE_VOLATILITY);
    let mut bumped_down = request.clone();
    bumped_down.volatility = (request.volatility - h).max(MIN_EFFECTIVE_VOLATILITY);

    let up = try_reprice(&bumped_up, config)?;
    let down = try_reprice(&bumped_down, config)?;
    let vega = (up - down) / (2.0 * h);
    vega.is_finite().then_some(vega)
}

fn rho(request: &PricingRequest, config: &SolverConfig, _fair_value: f64) -> Option<f64> {
    let mut bumped_up = request.clone();
    bumped_up.risk_free_rate = request.risk_free_rate + RHO_BUMP;
    let mut bumped_down = request.clone();
    bumped_down.risk_free_rate = request.risk_free_rate - RHO_BUMP;

    let up = try_reprice(&bumped_up, config)?;
    let down = try_reprice(&bumped_down, config)?;
    let rho = (up - down) / (2.0 * RHO_BUMP);
    rho.is_finite().then_some(rho)
}

/// Adapter that reprices under a perturbed request and never lets a
/// degenerate solve escape as anything other than `None`. A result that only
/// triggered the tridiagonal pivot floor is not treated as a failure as long
/// as it stays finite.
fn try_reprice(request: &PricingRequest, config: &SolverConfig) -> Option<f64> {
    let grid = Grid::build(request, config);
    let coeffs = Coefficients::build(request, &grid);
    let result = stepper::run(request, config, &grid, &coeffs);
    let price = interpolate(&grid.nodes, &result.today, request.spot);
    price.is_finite().then_some(price)
}

fn searchsorted(nodes: &[f64], spot: f64) -> usize {
    match nodes.binary_search_by(|probe| probe.partial_cmp(&spot).unwrap()) {
        Ok(i) => i,
        Err(i) => i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::OptionKind;

    fn call_request() -> PricingRequest {
        PricingRequest::new("aapl", OptionKind::Call, 100.0, 100.0, 1.0, 0.2, 0.05)
    }

    #[test]
    fn delta_is_within_zero_one_bounds_for_call() {
        let request = call_request();
        let config = SolverConfig::default();
        let grid = Grid::build(&request, &config);
        let coeffs = Coefficients::build(&request, &grid);
        let result = stepper::run(&request, &config, &grid, &coeffs);
        let fair_value = interpolate(&grid.nodes, &result.today, request.spot);
        let greeks = estimate(&request, &config, &grid, &result, fair_value);
        let delta = greeks.delta.expect("delta should be present");
        assert!((-1e-3..=1.0 + 1e-3).contains(&delta));
    }

    #[test]
    fn gamma_is_non_negative_within_tolerance() {
        let request = call_request();
        let config = SolverConfig::default();
        let grid = Grid::build(&request, &config);
        let coeffs = Coefficients::build(&request, &grid);
        let result = stepper::run(&request, &config, &grid, &coeffs);
        let fair_value = interpolate(&grid.nodes, &result.today, request.spot);
        let greeks = estimate(&request, &config, &grid, &result, fair_value);
        let gamma = greeks.gamma.expect("gamma should be present");
        assert!(gamma >= -1e-6);
    }

    #[test]
    fn vega_is_positive_for_vanilla_call() {
        let request = call_request();
        let config = SolverConfig::default();
        let grid = Grid::build(&request, &config);
        let coeffs = Coefficients::build(&request, &grid);
        let result = stepper::run(&request, &config, &grid, &coeffs);
        let fair_value = interpolate(&grid.nodes, &result.today, request.spot);
        let greeks = estimate(&request, &config, &grid, &result, fair_value);
        let vega = greeks.vega.expect("vega should be present");
        assert!(vega > 0.0);
    }

    #[test]
    fn theta_absent_for_vanishingly_small_expiry() {
        let mut request = call_request();
        request.expiry = 1e-9;
        let config = SolverConfig::default();
        let grid = Grid::build(&request, &config);
        let coeffs = Coefficients::build(&request, &grid);
        let result = stepper::run(&request, &config, &grid, &coeffs);
        let fair_value = interpolate(&grid.nodes, &result.today, request.spot);
        let greeks = estimate(&request, &config, &grid, &result, fair_value);
        assert!(greeks.theta.is_none());
    }
}
