#![warn(clippy::uninlined_format_args)]

pub const EXPENSE: &str = "Expense";
pub const YOUR_SHARE: &str = "Your Share";
pub const THEIR_SHARE: &str = "Their Share";
pub const TOTAL: &str = "Total";
pub const RESULTS_HEADING: &str = "Here are your fair shares";
pub const SALARY_A: &str = "Your salary";
pub const SALARY_B: &str = "Their salary";
pub const MISSING_NUMBERS: &str =
    "Oops! Looks like some numbers are missing. We need all of them to calculate your fair shares.";
pub const NO_EXPENSES: &str = "At least one expense is needed";
pub const LINK_COPIED: &str = "Share link copied to clipboard";

pub fn expense_field(index: usize) -> String {
    format!("Expense {}", index + 1)
}

pub fn share_summary(
    salary_a: impl std::fmt::Display,
    salary_b: impl std::fmt::Display,
    percent_a: impl std::fmt::Display,
    percent_b: impl std::fmt::Display,
) -> String {
    format!(
        "You earn {salary_a}, and the other person earns {salary_b}. \
You contribute {percent_a}%, and they contribute {percent_b}%. \
These percentages are used to split the expense(s) fairly."
    )
}
