// src/grid.rs
use crate::config::SolverConfig;
use crate::request::{OptionKind, PricingRequest};

/// Space-time discretization for one solve, plus the terminal payoff.
pub struct Grid {
    pub s_max: f64,
    pub ds: f64,
    pub dtau: f64,
    /// Spatial nodes `s_i = i * ds` for `i in [0, grid_size]`.
    pub nodes: Vec<f64>,
    /// Terminal payoff `V(s, tau = 0)`, aligned with `nodes`.
    pub payoff: Vec<f64>,
}

impl Grid {
    pub fn build(request: &PricingRequest, config: &SolverConfig) -> Grid {
        let s_max = config.s_max_multiplier * request.spot.max(request.strike).max(1.0);
        let ds = s_max / config.grid_size as f64;
        let dtau = request.expiry / config.time_steps as f64;

        let nodes: Vec<f64> = (0..=config.grid_size).map(|i| i as f64 * ds).collect();
        let payoff: Vec<f64> = nodes
            .iter()
            .map(|&s| match request.option_kind {
                OptionKind::Call => (s - request.strike).max(0.0),
                OptionKind::Put => (request.strike - s).max(0.0),
            })
            .collect();

        Grid {
            s_max,
            ds,
            dtau,
            nodes,
            payoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_request() -> PricingRequest {
        PricingRequest::new("aapl", OptionKind::Call, 100.0, 100.0, 1.0, 0.2, 0.05)
    }

    #[test]
    fn node_count_matches_grid_size() {
        let config = SolverConfig::default();
        let grid = Grid::build(&call_request(), &config);
        assert_eq!(grid.nodes.len(), config.grid_size + 1);
        assert_eq!(grid.payoff.len(), config.grid_size + 1);
    }

    #[test]
    fn call_payoff_is_non_negative_and_matches_formula() {
        let config = SolverConfig::default();
        let request = call_request();
        let grid = Grid::build(&request, &config);
        for (s, v) in grid.nodes.iter().zip(grid.payoff.iter()) {
            assert!(*v >= 0.0);
            assert!((*v - (s - request.strike).max(0.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn put_payoff_matches_formula() {
        let config = SolverConfig::default();
        let mut request = call_request();
        request.option_kind = OptionKind::Put;
        let grid = Grid::build(&request, &config);
        for (s, v) in grid.nodes.iter().zip(grid.payoff.iter()) {
            assert!((*v - (request.strike - s).max(0.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn s_max_scales_with_multiplier() {
        let mut config = SolverConfig::default();
        config.s_max_multiplier = 10.0;
        let request = call_request();
        let grid = Grid::build(&request, &config);
        assert!((grid.s_max - 10.0 * 100.0).abs() < 1e-9);
    }
}
