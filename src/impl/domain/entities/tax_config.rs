use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    errors::UnknownJurisdiction,
    ext::standard_tax_configs::{KR_CONFIG, US_CONFIG},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Jurisdiction {
    #[default]
    UnitedStates,
    Korea,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxBracket {
    /// Informational only; slice widths are derived from the previous
    /// bracket's upper bound, so tables must be contiguous.
    pub min: f64,
    /// `None` marks the unbounded top bracket, which must come last.
    pub max: Option<f64>,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxConfig {
    pub jurisdiction: Jurisdiction,
    pub currency: Currency,
    pub standard_deduction: f64,
    pub brackets: Vec<TaxBracket>,
}

// --

impl Jurisdiction {
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::UnitedStates => "US",
            Jurisdiction::Korea => "KR",
        }
    }

    pub fn config(&self) -> &'static TaxConfig {
        match self {
            Jurisdiction::UnitedStates => &*US_CONFIG,
            Jurisdiction::Korea => &*KR_CONFIG,
        }
    }

    pub fn currency(&self) -> Currency {
        self.config().currency
    }

    /// The other supported jurisdiction.
    pub fn toggled(&self) -> Jurisdiction {
        match self {
            Jurisdiction::UnitedStates => Jurisdiction::Korea,
            Jurisdiction::Korea => Jurisdiction::UnitedStates,
        }
    }
}

impl FromStr for Jurisdiction {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Jurisdiction::UnitedStates),
            "KR" => Ok(Jurisdiction::Korea),
            _ => Err(UnknownJurisdiction::new(s)),
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TaxBracket {
    pub fn new(min: f64, max: Option<f64>, rate: f64) -> Self {
        Self { min, max, rate }
    }
}

impl TaxConfig {
    pub fn max_rate(&self) -> f64 {
        self.brackets.iter().map(|b| b.rate).fold(0.0, f64::max)
    }
}
