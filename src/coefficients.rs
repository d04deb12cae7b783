// src/coefficients.rs
use crate::grid::Grid;
use crate::request::PricingRequest;

/// Crank-Nicolson coefficients for the interior nodes `i in [1, grid_size-1]`,
/// stored 0-based (`j = i - 1`). Time- and solution-independent — built once
/// per solve.
pub struct Coefficients {
    /// Implicit operator A (sub-diagonal).
    pub a: Vec<f64>,
    /// Implicit operator B (main diagonal).
    pub b: Vec<f64>,
    /// Implicit operator C (super-diagonal).
    pub c: Vec<f64>,
    /// Explicit operator D (sub-diagonal contribution).
    pub d: Vec<f64>,
    /// Explicit operator E (main diagonal contribution).
    pub e: Vec<f64>,
    /// Explicit operator F (super-diagonal contribution).
    pub f: Vec<f64>,
}

impl Coefficients {
    pub fn build(request: &PricingRequest, grid: &Grid) -> Coefficients {
        let interior = grid.nodes.len() - 2;
        let mut a = vec![0.0; interior];
        let mut b = vec![0.0; interior];
        let mut c = vec![0.0; interior];
        let mut d = vec![0.0; interior];
        let mut e = vec![0.0; interior];
        let mut f = vec![0.0; interior];

        let sigma2 = request.volatility * request.volatility;
        let r = request.risk_free_rate;
        let q = request.dividend_yield;
        let ds = grid.ds;
        let dtau = grid.dtau;

        for j in 0..interior {
            let i = j + 1;
            let s_i = grid.nodes[i];
            let diffusion = sigma2 * s_i * s_i / (ds * ds);
            let drift = (r - q) * s_i / ds;

            let alpha = 0.25 * dtau * (diffusion - drift);
            let beta = -0.5 * dtau * (diffusion + r);
            let gamma = 0.25 * dtau * (diffusion + drift);

            a[j] = -alpha;
            b[j] = 1.0 - beta;
            c[j] = -gamma;

            d[j] = alpha;
            e[j] = 1.0 + beta;
            f[j] = gamma;
        }

        Coefficients { a, b, c, d, e, f }
    }
}
