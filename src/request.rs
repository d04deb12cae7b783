// src/request.rs

/// European option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

/// A validated pricing request handed to the core by an external collaborator.
///
/// Symbolic validation (non-empty `symbol`, strictly-positive `spot`/`strike`/
/// `expiry`/`volatility`, non-negative `dividend_yield`, `quantity >= 1`) is the
/// collaborator's job and is assumed to already hold by the time a
/// `PricingRequest` reaches this crate. The one thing this crate validates
/// itself is the resolved grid configuration, via `SolverConfig::resolve`.
#[derive(Debug, Clone)]
pub struct PricingRequest {
    pub symbol: String,
    pub option_kind: OptionKind,
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub volatility: f64,
    pub risk_free_rate: f64,
    pub dividend_yield: f64,
    pub quantity: u32,
    pub grid_size: Option<usize>,
    pub time_steps: Option<usize>,
    pub s_max_multiplier: Option<f64>,
}

impl PricingRequest {
    /// Construct a request using this crate's defaults for dividend yield,
    /// quantity, and grid overrides.
    pub fn new(
        symbol: impl Into<String>,
        option_kind: OptionKind,
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        PricingRequest {
            symbol: symbol.into(),
            option_kind,
            spot,
            strike,
            expiry,
            volatility,
            risk_free_rate,
            dividend_yield: 0.0,
            quantity: 1,
            grid_size: None,
            time_steps: None,
            s_max_multiplier: None,
        }
    }
}
