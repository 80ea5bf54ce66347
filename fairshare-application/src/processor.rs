use crate::{
    model::{CalculationResult, RestoredInput, SharedQuery},
    ports::SalaryStore,
    state_codec,
};
use fairshare_domain::{
    Amount, ParsedInput, SharedState, ShareCalculator, ValidationReport, Validator,
};
use fairshare_format::{format_amount, parse_amount};

/// Orchestrates one calculation request: parse the raw field values,
/// validate them as a whole, compute the proportional split, and persist
/// the salaries for the next session.
///
/// Validation failure aborts the whole request; nothing is computed or
/// persisted. Store failures never fail a calculation.
pub struct CalculationProcessor<'a> {
    store: &'a dyn SalaryStore,
}

impl<'a> CalculationProcessor<'a> {
    pub fn new(store: &'a dyn SalaryStore) -> Self {
        Self { store }
    }

    pub fn calculate(&self, query: &SharedQuery) -> Result<CalculationResult, ValidationReport> {
        let parsed = ParsedInput {
            salary_a: parse_amount(&query.salary_a).map(Amount::new),
            salary_b: parse_amount(&query.salary_b).map(Amount::new),
            expenses: query
                .expenses
                .iter()
                .map(|expense| parse_amount(expense).map(Amount::new))
                .collect(),
        };

        let state = Validator.validate(parsed)?;
        let (shares, totals) =
            ShareCalculator.compute(state.salary_a, state.salary_b, &state.expenses);

        self.persist_salaries(&state);

        Ok(CalculationResult {
            state,
            shares,
            totals,
        })
    }

    /// Rebuilds the input state on startup: a complete shared link wins and
    /// triggers an immediate calculation; otherwise the stored salaries are
    /// restored with a single empty expense entry.
    pub fn restore(&self, url: Option<&str>) -> RestoredInput {
        if let Some(query) = url.and_then(state_codec::decode) {
            return RestoredInput {
                query,
                auto_calculate: true,
            };
        }

        RestoredInput {
            query: SharedQuery {
                salary_a: self.stored_salary(state_codec::SALARY_A_KEY),
                salary_b: self.stored_salary(state_codec::SALARY_B_KEY),
                expenses: vec![String::new()],
            },
            auto_calculate: false,
        }
    }

    /// Builds the shareable query string from the current field values,
    /// stripping grouping commas from the expense entries.
    pub fn share_query(&self, query: &SharedQuery) -> String {
        let normalized = SharedQuery {
            salary_a: query.salary_a.clone(),
            salary_b: query.salary_b.clone(),
            expenses: query
                .expenses
                .iter()
                .map(|expense| expense.replace(',', ""))
                .collect(),
        };
        state_codec::encode(&normalized)
    }

    fn persist_salaries(&self, state: &SharedState) {
        let entries = [
            (state_codec::SALARY_A_KEY, state.salary_a),
            (state_codec::SALARY_B_KEY, state.salary_b),
        ];
        for (key, salary) in entries {
            if let Err(err) = self.store.set(key, &format_amount(salary.value())) {
                tracing::warn!("Failed to persist {key}: {err}");
            }
        }
    }

    fn stored_salary(&self, key: &str) -> String {
        match self.store.get(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Failed to restore {key}: {err}");
                String::new()
            }
        }
    }
}
