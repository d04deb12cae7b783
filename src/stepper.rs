// src/stepper.rs
use crate::boundary::BoundaryOracle;
use crate::coefficients::Coefficients;
use crate::config::SolverConfig;
use crate::grid::Grid;
use crate::request::PricingRequest;
use crate::tridiag::thomas_solve;

/// Result of marching the Crank-Nicolson solution backward from expiry to
/// today.
pub struct StepResult {
    /// Solution at `tau = T` (today), aligned with `grid.nodes`.
    pub today: Vec<f64>,
    /// Solution after exactly one backward step (`tau = T - dtau`), retained
    /// for Theta.
    pub first_step: Vec<f64>,
    /// Running max over all steps of `||A * v_next - rhs_adjusted||_inf`.
    pub residual_norm: f64,
}

/// Marches the Crank-Nicolson solution backward in time, one tridiagonal
/// solve per step, using two pre-allocated snapshot buffers rotated by
/// `std::mem::swap` rather than reallocated.
pub fn run(request: &PricingRequest, config: &SolverConfig, grid: &Grid, coeffs: &Coefficients) -> StepResult {
    let n_s = grid.nodes.len() - 1;
    let interior = n_s - 1;
    let oracle = BoundaryOracle::new(request, grid.s_max);

    let mut v = grid.payoff.clone();
    let mut v_next = vec![0.0; n_s + 1];
    let mut rhs = vec![0.0; interior];

    let mut first_step: Option<Vec<f64>> = None;
    let mut residual_norm: f64 = 0.0;

    for step in 0..config.time_steps {
        let tau = step as f64 * grid.dtau;
        let tau_next = tau + grid.dtau;

        let (v0, vn) = oracle.at(tau);
        v[0] = v0;
        v[n_s] = vn;

        for j in 0..interior {
            let i = j + 1;
            rhs[j] = coeffs.d[j] * v[i - 1] + coeffs.e[j] * v[i] + coeffs.f[j] * v[i + 1];
        }

        let (v0_next, vn_next) = oracle.at(tau_next);
        rhs[0] -= coeffs.a[0] * v0_next;
        rhs[interior - 1] -= coeffs.c[interior - 1] * vn_next;

        let interior_solution = thomas_solve(&coeffs.a, &coeffs.b, &coeffs.c, &rhs);

        v_next[0] = v0_next;
        v_next[n_s] = vn_next;
        v_next[1..n_s].copy_from_slice(&interior_solution);

        let step_residual = tridiag_residual(coeffs, &interior_solution, v0_next, vn_next, &rhs);
        residual_norm = residual_norm.max(step_residual);

        if step == 0 {
            first_step = Some(v_next.clone());
        }

        std::mem::swap(&mut v, &mut v_next);
    }

    tracing::debug!(residual_norm, "backward march complete");

    StepResult {
        today: v,
        first_step: first_step.unwrap_or_else(|| grid.payoff.clone()),
        residual_norm,
    }
}

fn tridiag_residual(
    coeffs: &Coefficients,
    x: &[f64],
    boundary_lower: f64,
    boundary_upper: f64,
    rhs_adjusted: &[f64],
) -> f64 {
    let n = x.len();
    let mut max_residual: f64 = 0.0;
    for j in 0..n {
        let mut lhs = coeffs.b[j] * x[j];
        if j > 0 {
            lhs += coeffs.a[j] * x[j - 1];
        } else {
            lhs += coeffs.a[j] * boundary_lower;
        }
        if j + 1 < n {
            lhs += coeffs.c[j] * x[j + 1];
        } else {
            lhs += coeffs.c[j] * boundary_upper;
        }
        max_residual = max_residual.max((lhs - rhs_adjusted[j]).abs());
    }
    max_residual
}
