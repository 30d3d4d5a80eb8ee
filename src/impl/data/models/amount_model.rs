use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Plain decimal amount as typed by a person: thousands separators and a
/// leading currency symbol are tolerated.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let numeric_part = raw.trim().trim_start_matches(['$', '₩']).trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        if !amount.is_finite() {
            return Err(InvalidAmount::new(s));
        }
        Ok(AmountModel(amount))
    }
}

impl From<AmountModel> for f64 {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}
