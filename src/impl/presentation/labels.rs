use crate::entities::{ExpenseCategory, Jurisdiction, TransactionType};

pub fn category_label(category: ExpenseCategory, jurisdiction: Jurisdiction) -> &'static str {
    match jurisdiction {
        Jurisdiction::UnitedStates => category.name(),
        Jurisdiction::Korea => match category {
            ExpenseCategory::Meals => "식대",
            ExpenseCategory::Travel => "출장/교통",
            ExpenseCategory::Equipment => "장비",
            ExpenseCategory::Software => "소프트웨어",
            ExpenseCategory::Office => "사무실",
            ExpenseCategory::Other => "기타",
        },
    }
}

pub fn type_label(tx_type: TransactionType, jurisdiction: Jurisdiction) -> &'static str {
    match (jurisdiction, tx_type) {
        (Jurisdiction::UnitedStates, TransactionType::Income) => "Income",
        (Jurisdiction::UnitedStates, TransactionType::Expense) => "Expense",
        (Jurisdiction::Korea, TransactionType::Income) => "수입",
        (Jurisdiction::Korea, TransactionType::Expense) => "지출",
    }
}
