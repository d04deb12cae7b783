// src/boundary.rs
use crate::request::{OptionKind, PricingRequest};

/// Yields the spatial boundary values of the option at a given backward time
/// `tau` (time-to-expiry, `tau = 0` at expiry and `tau = T` today).
pub struct BoundaryOracle<'a> {
    request: &'a PricingRequest,
    s_max: f64,
}

impl<'a> BoundaryOracle<'a> {
    pub fn new(request: &'a PricingRequest, s_max: f64) -> Self {
        BoundaryOracle { request, s_max }
    }

    /// Returns `(V(0, tau), V(s_max, tau))`.
    pub fn at(&self, tau: f64) -> (f64, f64) {
        let r = self.request.risk_free_rate;
        let q = self.request.dividend_yield;
        let k = self.request.strike;
        match self.request.option_kind {
            OptionKind::Call => {
                let upper = self.s_max * (-q * tau).exp() - k * (-r * tau).exp();
                (0.0, upper)
            }
            OptionKind::Put => {
                let lower = k * (-r * tau).exp();
                (lower, 0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: OptionKind) -> PricingRequest {
        PricingRequest::new("aapl", kind, 100.0, 100.0, 1.0, 0.2, 0.05)
    }

    #[test]
    fn call_lower_boundary_is_always_zero() {
        let req = request(OptionKind::Call);
        let oracle = BoundaryOracle::new(&req, 600.0);
        let (lower, _) = oracle.at(0.37);
        assert_eq!(lower, 0.0);
    }

    #[test]
    fn put_upper_boundary_is_always_zero() {
        let req = request(OptionKind::Put);
        let oracle = BoundaryOracle::new(&req, 600.0);
        let (_, upper) = oracle.at(0.37);
        assert_eq!(upper, 0.0);
    }

    #[test]
    fn call_upper_boundary_at_expiry_matches_intrinsic() {
        let req = request(OptionKind::Call);
        let s_max = 600.0;
        let oracle = BoundaryOracle::new(&req, s_max);
        let (_, upper) = oracle.at(0.0);
        assert!((upper - (s_max - req.strike)).abs() < 1e-9);
    }

    #[test]
    fn put_lower_boundary_at_expiry_matches_strike() {
        let req = request(OptionKind::Put);
        let oracle = BoundaryOracle::new(&req, 600.0);
        let (lower, _) = oracle.at(0.0);
        assert!((lower - req.strike).abs() < 1e-9);
    }
}
