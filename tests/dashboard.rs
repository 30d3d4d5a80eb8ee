use std::io::Write as _;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use gigpilot::{
    entities::{ExpenseCategory, Jurisdiction, TransactionDraft, TransactionType},
    errors::ExtractionError,
    ext::standard_tax_configs::US_CONFIG,
    format::format_amount,
    logic::{calculate_tax, SCAN_FAILED_MESSAGE},
    util::Dashboard,
    vision::ReceiptVisionDatasource,
};

struct FakeVision {
    reply: Option<&'static str>,
}

#[async_trait]
impl ReceiptVisionDatasource for FakeVision {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<String, ServerError> {
        assert_eq!(mime_type, "image/jpeg");
        assert!(!image.is_empty());
        self.reply
            .map(str::to_string)
            .ok_or_else(|| ExtractionError::new("vision service unreachable"))
    }
}

fn dashboard(reply: Option<&'static str>) -> Dashboard<FakeVision> {
    Dashboard::with_sample_data(FakeVision { reply }).unwrap()
}

#[test]
fn sample_session_owes_no_tax() {
    let dashboard = dashboard(None);
    let summary = dashboard.tax_summary();
    assert_eq!(summary.net_profit, 2985.0);
    assert_eq!(summary.estimated_tax, 0.0);
    assert_eq!(summary.after_tax_profit(), 2985.0);

    let rendered = dashboard.render_tax_summary();
    assert!(rendered.contains("$2,985.00"));
    assert!(!rendered.contains("Brackets applied"));
}

#[test]
fn large_income_matches_manual_bracket_walk() {
    let mut dashboard = Dashboard::new(FakeVision { reply: None });
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    dashboard.add_transaction(TransactionDraft::income(day, "Acme Corp", 100_000.0).unwrap());

    let summary = dashboard.tax_summary();
    assert_eq!(summary.taxable_income, 87_050.0);
    assert!((summary.estimated_tax - 14_458.5).abs() < 1e-6);
    assert_eq!(summary, calculate_tax(dashboard.transactions(), &US_CONFIG));
}

#[tokio::test]
async fn scanning_a_receipt_records_an_expense() {
    let mut dashboard = dashboard(Some(
        r#"{"merchant":"Office Depot","date":"2024-01-09","total":89.99,"category":"Stationery","items":[{"name":"Paper","price":12.5},{"name":"Pens","price":77.49}]}"#,
    ));
    let before: Vec<_> = dashboard.transactions().map(|tx| tx.id).collect();

    let tx = dashboard.scan_receipt(b"\xff\xd8\xff").await.unwrap().clone();
    assert!(!before.contains(&tx.id));
    assert_eq!(tx.tx_type, TransactionType::Expense);
    assert_eq!(tx.counterparty, "Office Depot");
    assert_eq!(tx.amount, 89.99);
    assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    assert_eq!(tx.category, Some(ExpenseCategory::Other));
    assert_eq!(tx.description.as_deref(), Some("Office Depot receipt (2 items)"));
    assert!(tx
        .receipt_ref
        .as_deref()
        .is_some_and(|r| r.starts_with("data:image/jpeg;base64,")));

    assert_eq!(dashboard.transactions().len(), 4);
    assert_eq!(dashboard.transactions().next().map(|t| t.id), Some(tx.id));
    assert!((dashboard.tax_summary().total_expenses - 2104.99).abs() < 1e-9);
}

#[tokio::test]
async fn scanning_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\xff\xd8\xffreceipt").unwrap();

    let mut dashboard = dashboard(Some(r#"{"merchant":"Cafe","total":4.5,"category":"Meals"}"#));
    let tx = dashboard.scan_receipt_file(file.path()).await.unwrap();
    assert_eq!(tx.category, Some(ExpenseCategory::Meals));
    assert_eq!(tx.description.as_deref(), Some("Cafe receipt (0 items)"));
}

#[tokio::test]
async fn failed_scan_leaves_transactions_alone() {
    let mut dashboard = dashboard(None);
    let before = dashboard.render_transactions();

    assert!(dashboard.scan_receipt(b"\xff\xd8\xff").await.is_err());
    assert!(!dashboard.is_scanning());
    assert_eq!(dashboard.last_scan_error().as_deref(), Some(SCAN_FAILED_MESSAGE));
    assert_eq!(dashboard.render_transactions(), before);
}

#[tokio::test]
async fn draft_scan_does_not_touch_the_store() {
    let mut dashboard = dashboard(Some(r#"{"merchant":"Cafe","total":4.5,"category":"Meals"}"#));
    let draft = dashboard.scan_receipt_draft(b"img").await.unwrap();
    assert_eq!(dashboard.transactions().len(), 3);

    let id = dashboard.add_transaction(draft).id;
    assert_eq!(dashboard.store().get(id).map(|t| t.amount), Some(4.5));
}

#[test]
fn toggling_jurisdiction_changes_currency() {
    let mut dashboard = dashboard(None);
    assert!(dashboard.render_transactions().contains(&format_amount(
        5000.0,
        Jurisdiction::UnitedStates.currency()
    )));

    dashboard.toggle_jurisdiction();
    let rendered = dashboard.render_transactions();
    assert!(rendered.contains("₩5,000"));
    assert!(!rendered.contains('$'));
    assert!(dashboard.render_tax_summary().contains("KRW"));
}

#[test]
fn csv_file_import_appends_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"date,type,counterparty,amount,category,description\n\
          2023-11-01,INCOME,Globex,1200,,Retainer\n\
          2023-11-03,EXPENSE,Adobe,54.99,Software,Creative Cloud\n",
    )
    .unwrap();

    let mut dashboard = dashboard(None);
    assert_eq!(dashboard.import_csv_file(file.path()).unwrap(), 2);
    let names: Vec<&str> = dashboard
        .transactions()
        .take(2)
        .map(|tx| tx.counterparty.as_str())
        .collect();
    assert_eq!(names, ["Adobe", "Globex"]);
}

#[test]
fn invoice_totals_its_lines() {
    use gigpilot::entities::InvoiceItemField;

    let mut dashboard = dashboard(None);
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let invoice = dashboard.new_invoice("Globex", day, 12);
    for (description, quantity, rate) in [("Design", 10.0, 50.0), ("Hosting", 1.0, 350.0)] {
        let id = invoice.add_item();
        invoice
            .update_item(id, InvoiceItemField::Description(description.to_string()))
            .unwrap();
        invoice.update_item(id, InvoiceItemField::Quantity(quantity)).unwrap();
        invoice.update_item(id, InvoiceItemField::Rate(rate)).unwrap();
    }

    assert_eq!(dashboard.invoice().total(), 850.0);
    let rendered = dashboard.render_invoice();
    assert!(rendered.starts_with("INVOICE INV-2024-012"));
    assert!(rendered.contains("$850.00"));
}
