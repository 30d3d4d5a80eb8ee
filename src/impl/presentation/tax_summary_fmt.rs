use crate::entities::{TaxConfig, TaxSummary};

use super::utils::{format_amount, format_rate};

pub(crate) struct TaxSummaryPrinter<'a> {
    config: &'a TaxConfig,
}

impl<'a> TaxSummaryPrinter<'a> {
    pub(crate) fn new(config: &'a TaxConfig) -> Self {
        Self { config }
    }

    pub(crate) fn print(&self, summary: &TaxSummary) -> String {
        let currency = self.config.currency;
        let amount = |v: f64| format_amount(v, currency);

        let mut out = String::new();
        out.push_str(&format!(
            "Tax estimate ({}, {})\n\n",
            self.config.jurisdiction.code(),
            currency.code()
        ));
        for (label, value) in [
            ("Gross income", summary.gross_income),
            ("Total expenses", summary.total_expenses),
            ("Net profit", summary.net_profit),
            ("Standard deduction", self.config.standard_deduction),
            ("Taxable income", summary.taxable_income),
            ("Estimated tax", summary.estimated_tax),
            ("After-tax profit", summary.after_tax_profit()),
        ] {
            out.push_str(&format!("{:<20}{:>18}\n", label, amount(value)));
        }
        out.push_str(&format!(
            "{:<20}{:>18}\n",
            "Effective rate",
            format_rate(summary.effective_rate)
        ));

        if !summary.slices.is_empty() {
            out.push_str("\nBrackets applied:\n");
            for slice in &summary.slices {
                out.push_str(&format!(
                    "  {:>6} of {:>16} = {:>14}\n",
                    format_rate(slice.rate),
                    amount(slice.amount),
                    amount(slice.tax)
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BracketSlice, Jurisdiction};

    #[test]
    fn prints_figures_and_slices() {
        let summary = TaxSummary {
            gross_income: 100_000.0,
            total_expenses: 0.0,
            net_profit: 100_000.0,
            taxable_income: 87_050.0,
            estimated_tax: 14_458.5,
            effective_rate: 0.144585,
            slices: vec![BracketSlice {
                rate: 0.1,
                amount: 11_000.0,
                tax: 1_100.0,
            }],
        };
        let output =
            TaxSummaryPrinter::new(Jurisdiction::UnitedStates.config()).print(&summary);
        assert!(output.starts_with("Tax estimate (US, USD)"));
        assert!(output.contains("$87,050.00"));
        assert!(output.contains("$14,458.50"));
        assert!(output.contains("$85,541.50"));
        assert!(output.contains("14.5%"));
        assert!(output.contains("10.0% of       $11,000.00 =      $1,100.00"));
    }

    #[test]
    fn omits_bracket_section_when_nothing_is_taxable() {
        let output = TaxSummaryPrinter::new(Jurisdiction::Korea.config())
            .print(&TaxSummary::default());
        assert!(output.contains("₩1,500,000"));
        assert!(!output.contains("Brackets applied"));
    }
}
