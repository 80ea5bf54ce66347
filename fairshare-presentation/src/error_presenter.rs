use fairshare_domain::{Field, ValidationReport};
use fairshare_i18n as i18n;
use std::fmt::Write;

/// Renders a validation report as one aggregate message: the shared
/// heading, then one line per rejected field.
pub fn format_validation_error(report: &ValidationReport) -> String {
    let mut message = String::from(i18n::MISSING_NUMBERS);

    for field in &report.invalid_fields {
        let _ = write!(&mut message, "\n  - {}", field_label(field));
    }
    if report.missing_expenses {
        let _ = write!(&mut message, "\n  - {}", i18n::NO_EXPENSES);
    }

    message
}

fn field_label(field: &Field) -> String {
    match field {
        Field::SalaryA => i18n::SALARY_A.to_string(),
        Field::SalaryB => i18n::SALARY_B.to_string(),
        Field::Expense(index) => i18n::expense_field(*index),
    }
}
