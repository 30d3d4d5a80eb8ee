use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{Jurisdiction, TaxBracket, TaxConfig};

// Simplified federal schedule; not tax advice.
pub static US_CONFIG: LazyLock<TaxConfig> = LazyLock::new(|| TaxConfig {
    jurisdiction: Jurisdiction::UnitedStates,
    currency: Currency::USD,
    standard_deduction: 12_950.0,
    brackets: vec![
        TaxBracket::new(0.0, Some(11_000.0), 0.10),
        TaxBracket::new(11_001.0, Some(44_725.0), 0.12),
        TaxBracket::new(44_726.0, Some(95_375.0), 0.22),
        TaxBracket::new(95_376.0, Some(182_100.0), 0.24),
        TaxBracket::new(182_101.0, None, 0.32),
    ],
});
