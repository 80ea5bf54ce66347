use crate::model::{Amount, Field, ParsedInput, SharedState, ValidationReport};

/// Input validation service.
///
/// Failures accumulate across every field rather than short-circuiting, so
/// the caller can flag all offending fields in one pass. Any failure blocks
/// the calculation as a whole; partial results are never produced.
pub struct Validator;

impl Validator {
    /// A salary is acceptable iff it parsed and is strictly positive.
    pub fn validate_salary(&self, value: Option<Amount>) -> bool {
        value.is_some_and(Amount::is_positive)
    }

    pub fn validate(&self, input: ParsedInput) -> Result<SharedState, ValidationReport> {
        let mut report = ValidationReport::default();

        if !self.validate_salary(input.salary_a) {
            report.invalid_fields.push(Field::SalaryA);
        }
        if !self.validate_salary(input.salary_b) {
            report.invalid_fields.push(Field::SalaryB);
        }

        if input.expenses.is_empty() {
            report.missing_expenses = true;
        }

        let mut expenses = Vec::with_capacity(input.expenses.len());
        for (index, expense) in input.expenses.iter().enumerate() {
            match expense {
                Some(amount) if amount.is_positive() => expenses.push(*amount),
                _ => report.invalid_fields.push(Field::Expense(index)),
            }
        }

        if !report.is_empty() {
            return Err(report);
        }

        // A clean report implies both salaries are present.
        let (Some(salary_a), Some(salary_b)) = (input.salary_a, input.salary_b) else {
            return Err(report);
        };

        Ok(SharedState {
            salary_a,
            salary_b,
            expenses,
        })
    }
}
