use crate::entities::InvoiceItem;

/// Sum of `quantity * rate` over all lines. Inputs are not validated.
pub fn invoice_total<'a>(items: impl IntoIterator<Item = &'a InvoiceItem>) -> f64 {
    items
        .into_iter()
        .fold(0.0, |acc, item| acc + item.line_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InvoiceItemId;

    fn item(id: u64, quantity: f64, rate: f64) -> InvoiceItem {
        InvoiceItem {
            id: InvoiceItemId(id),
            description: String::new(),
            quantity,
            rate,
        }
    }

    #[test]
    fn single_line() {
        assert_eq!(invoice_total(&[item(1, 10.0, 85.0)]), 850.0);
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let total = invoice_total(&Vec::<InvoiceItem>::new());
        assert_eq!(total, 0.0);
        assert!(!total.is_sign_negative());
    }

    #[test]
    fn lines_are_summed() {
        let items = [item(1, 10.0, 85.0), item(2, 2.5, 40.0), item(3, 0.0, 999.0)];
        assert_eq!(invoice_total(&items), 950.0);
    }

    #[test]
    fn negative_inputs_propagate_arithmetically() {
        assert_eq!(invoice_total(&[item(1, 10.0, 85.0), item(2, -1.0, 50.0)]), 800.0);
    }
}
