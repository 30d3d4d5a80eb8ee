use iso_currency::Currency;

use crate::{domain::logic::invoice_totalizer::invoice_total, entities::Invoice};

use super::utils::format_amount;

/// Plain-text invoice preview.
pub(crate) struct InvoicePrinter {
    currency: Currency,
}

impl InvoicePrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print(&self, invoice: &Invoice) -> String {
        let mut out = String::new();

        out.push_str(&format!("INVOICE {}\n", invoice.number));
        out.push_str(&format!("Issued: {}\n", invoice.issue_date.format("%Y-%m-%d")));
        if let Some(due_date) = invoice.due_date {
            out.push_str(&format!("Due: {}\n", due_date.format("%Y-%m-%d")));
        }
        out.push('\n');

        out.push_str("Bill to:\n");
        out.push_str(&format!("  {}\n", invoice.client_name));
        if let Some(email) = &invoice.client_email {
            out.push_str(&format!("  {}\n", email));
        }
        out.push('\n');

        out.push_str(&format!(
            "{:<36} {:>8} {:>14} {:>14}\n",
            "Description", "Qty", "Rate", "Amount"
        ));
        out.push_str(&format!("{}\n", "-".repeat(75)));
        for item in &invoice.items {
            out.push_str(&format!(
                "{:<36} {:>8} {:>14} {:>14}\n",
                if item.description.is_empty() {
                    "(no description)"
                } else {
                    item.description.as_str()
                },
                item.quantity,
                format_amount(item.rate, self.currency),
                format_amount(item.line_total(), self.currency),
            ));
        }
        out.push_str(&format!("{}\n", "-".repeat(75)));
        out.push_str(&format!(
            "{:<36} {:>38}\n",
            "Total",
            format_amount(invoice_total(&invoice.items), self.currency)
        ));

        if let Some(notes) = &invoice.notes {
            out.push('\n');
            for line in textwrap::wrap(notes, 74) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}
