use crate::entities::{BracketSlice, TaxConfig, TaxSummary, Transaction, TransactionType};

pub(crate) struct TaxCalculator<'a> {
    config: &'a TaxConfig,
}

impl<'a> TaxCalculator<'a> {
    pub(crate) fn new(config: &'a TaxConfig) -> Self {
        Self { config }
    }

    pub(crate) fn process<'t>(
        &self,
        transactions: impl IntoIterator<Item = &'t Transaction>,
    ) -> TaxSummary {
        let mut gross_income = 0.0;
        let mut total_expenses = 0.0;
        for tx in transactions {
            match tx.tx_type {
                TransactionType::Income => gross_income += tx.amount,
                TransactionType::Expense => total_expenses += tx.amount,
            }
        }

        // Losses do not carry into the tax base.
        let net_profit = f64::max(0.0, gross_income - total_expenses);
        let taxable_income = f64::max(0.0, net_profit - self.config.standard_deduction);

        let slices = self.apply_brackets(taxable_income);
        let estimated_tax = slices.iter().fold(0.0, |acc, s| acc + s.tax);
        let effective_rate = if gross_income > 0.0 {
            estimated_tax / gross_income
        } else {
            0.0
        };

        TaxSummary {
            gross_income,
            total_expenses,
            net_profit,
            taxable_income,
            estimated_tax,
            effective_rate,
            slices,
        }
    }

    /// Walks the brackets in order, taxing each slice at its marginal rate.
    ///
    /// Slice width is the distance from the previous bracket's upper bound,
    /// not from `min`, so the table is assumed to be contiguous. The last
    /// bracket (no upper bound) absorbs whatever income remains.
    fn apply_brackets(&self, taxable_income: f64) -> Vec<BracketSlice> {
        let mut slices = Vec::new();
        let mut remaining = taxable_income;
        let mut previous_max = 0.0;

        for bracket in &self.config.brackets {
            if remaining <= 0.0 {
                break;
            }
            let width = match bracket.max {
                Some(max) => max - previous_max,
                None => remaining,
            };
            let amount = f64::min(remaining, width);
            slices.push(BracketSlice {
                rate: bracket.rate,
                amount,
                tax: amount * bracket.rate,
            });
            remaining -= amount;
            previous_max = bracket.max.unwrap_or(f64::INFINITY);
        }

        slices
    }
}

/// Aggregates income and expenses and estimates progressive income tax under
/// the given configuration.
pub fn calculate_tax<'t>(
    transactions: impl IntoIterator<Item = &'t Transaction>,
    config: &TaxConfig,
) -> TaxSummary {
    TaxCalculator::new(config).process(transactions)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{Jurisdiction, TaxBracket, TransactionId};

    const EPS: f64 = 1e-6;

    fn tx(id: u64, tx_type: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId(id),
            date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            counterparty: "Someone".to_string(),
            amount,
            tx_type,
            category: None,
            description: None,
            receipt_ref: None,
        }
    }

    fn income(id: u64, amount: f64) -> Transaction {
        tx(id, TransactionType::Income, amount)
    }

    fn expense(id: u64, amount: f64) -> Transaction {
        tx(id, TransactionType::Expense, amount)
    }

    fn us() -> &'static TaxConfig {
        Jurisdiction::UnitedStates.config()
    }

    #[test]
    fn empty_input_yields_all_zero_summary() {
        let summary = calculate_tax(std::iter::empty(), us());
        assert_eq!(summary.gross_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.estimated_tax, 0.0);
        assert_eq!(summary.effective_rate, 0.0);
        assert!(!summary.estimated_tax.is_sign_negative());
        assert!(summary.slices.is_empty());
    }

    #[test]
    fn sample_data_stays_under_us_deduction() {
        let txs = [income(1, 5000.0), expense(2, 2000.0), expense(3, 15.0)];
        let summary = calculate_tax(&txs, us());
        assert_eq!(summary.gross_income, 5000.0);
        assert_eq!(summary.total_expenses, 2015.0);
        assert_eq!(summary.net_profit, 2985.0);
        assert_eq!(summary.taxable_income, 0.0);
        assert_eq!(summary.estimated_tax, 0.0);
        assert_eq!(summary.effective_rate, 0.0);
        assert!(!summary.estimated_tax.is_sign_negative());
        assert!(!summary.effective_rate.is_sign_negative());
    }

    #[test]
    fn us_high_income_is_taxed_slice_by_slice() {
        let summary = calculate_tax(&[income(1, 100_000.0)], us());
        assert_eq!(summary.taxable_income, 87_050.0);

        let expected = 11_000.0 * 0.10 + 33_725.0 * 0.12 + (87_050.0 - 44_725.0) * 0.22;
        assert!((summary.estimated_tax - expected).abs() < EPS);
        assert!((summary.estimated_tax - 14_458.5).abs() < EPS);
        assert!((summary.effective_rate - expected / 100_000.0).abs() < EPS);

        let amounts: Vec<f64> = summary.slices.iter().map(|s| s.amount).collect();
        assert_eq!(amounts.len(), 3);
        assert!((amounts[0] - 11_000.0).abs() < EPS);
        assert!((amounts[1] - 33_725.0).abs() < EPS);
        assert!((amounts[2] - 42_325.0).abs() < EPS);
    }

    #[test]
    fn unbounded_bracket_absorbs_the_rest() {
        let summary = calculate_tax(&[income(1, 1_000_000.0)], us());
        let last = summary.slices.last().unwrap();
        assert_eq!(last.rate, 0.32);
        let taxed: f64 = summary.slices.iter().map(|s| s.amount).sum();
        assert!((taxed - summary.taxable_income).abs() < EPS);
    }

    #[test]
    fn losses_floor_net_profit_at_zero() {
        let summary = calculate_tax(&[income(1, 1000.0), expense(2, 5000.0)], us());
        assert_eq!(summary.net_profit, 0.0);
        assert_eq!(summary.taxable_income, 0.0);
        assert_eq!(summary.estimated_tax, 0.0);
        assert_eq!(summary.after_tax_profit(), 0.0);
    }

    #[test]
    fn width_comes_from_previous_max_not_min() {
        // Hand-edited table with a gap between brackets: the gap is ignored.
        let config = TaxConfig {
            jurisdiction: Jurisdiction::UnitedStates,
            currency: Currency::USD,
            standard_deduction: 0.0,
            brackets: vec![
                TaxBracket::new(0.0, Some(100.0), 0.1),
                TaxBracket::new(500.0, Some(200.0), 0.2),
                TaxBracket::new(200.0, None, 0.5),
            ],
        };
        let summary = calculate_tax(&[income(1, 300.0)], &config);
        assert!((summary.estimated_tax - (10.0 + 20.0 + 50.0)).abs() < EPS);
    }

    #[test]
    fn tax_is_bounded_and_monotonic_in_income() {
        for config in [Jurisdiction::UnitedStates.config(), Jurisdiction::Korea.config()] {
            let mut previous = 0.0;
            for step in 0..200 {
                let gross = step as f64 * 1_250_000.0;
                let summary = calculate_tax(&[income(1, gross), expense(2, 3_000.0)], config);
                assert!(summary.estimated_tax >= 0.0);
                let ceiling = summary.taxable_income * config.max_rate();
                assert!(summary.estimated_tax <= ceiling * (1.0 + 1e-12) + EPS);
                assert!((0.0..=1.0).contains(&summary.effective_rate));
                assert!(summary.estimated_tax + EPS >= previous);
                previous = summary.estimated_tax;
            }
        }
    }

    #[test]
    fn korean_schedule_applies_its_own_deduction() {
        let config = Jurisdiction::Korea.config();
        let summary = calculate_tax(&[income(1, 30_000_000.0)], config);
        assert_eq!(summary.taxable_income, 28_500_000.0);
        let expected = 14_000_000.0 * 0.06 + 14_500_000.0 * 0.15;
        assert!((summary.estimated_tax - expected).abs() < EPS);
    }
}
