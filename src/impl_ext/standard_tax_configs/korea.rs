use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{Jurisdiction, TaxBracket, TaxConfig};

// Simplified comprehensive income tax schedule; not tax advice.
pub static KR_CONFIG: LazyLock<TaxConfig> = LazyLock::new(|| TaxConfig {
    jurisdiction: Jurisdiction::Korea,
    currency: Currency::KRW,
    standard_deduction: 1_500_000.0,
    brackets: vec![
        TaxBracket::new(0.0, Some(14_000_000.0), 0.06),
        TaxBracket::new(14_000_001.0, Some(50_000_000.0), 0.15),
        TaxBracket::new(50_000_001.0, Some(88_000_000.0), 0.24),
        TaxBracket::new(88_000_001.0, None, 0.35),
    ],
});
