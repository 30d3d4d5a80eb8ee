/// Demo transactions loaded into a fresh dashboard.
pub const SAMPLE_TRANSACTIONS_CSV: &str = "\
date,type,counterparty,amount,category,description
2023-10-01,INCOME,Acme Corp,5000,,Web development project
2023-10-05,EXPENSE,Apple Store,2000,Equipment,MacBook Pro purchase
2023-10-10,EXPENSE,Starbucks,15,Meals,Client meeting (coffee)
";
