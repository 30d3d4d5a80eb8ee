/// Portion of taxable income that fell into one bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketSlice {
    pub rate: f64,
    pub amount: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaxSummary {
    pub gross_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub taxable_income: f64,
    pub estimated_tax: f64,
    pub effective_rate: f64,
    pub slices: Vec<BracketSlice>,
}

impl TaxSummary {
    /// Net profit left after the estimated tax.
    pub fn after_tax_profit(&self) -> f64 {
        self.net_profit - self.estimated_tax
    }
}
