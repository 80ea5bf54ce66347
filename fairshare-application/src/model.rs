use fairshare_domain::{SharedState, ShareResult, Totals};

/// The raw input tuple exactly as the user (or an incoming share link)
/// supplied it: display-formatted strings, not yet validated. This is the
/// unit of URL serialization; the round-trip law `decode(encode(q)) == q`
/// holds on this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedQuery {
    pub salary_a: String,
    pub salary_b: String,
    pub expenses: Vec<String>,
}

impl SharedQuery {
    /// Normalizes a validated state into plain (comma-free) decimal strings
    /// for sharing.
    pub fn from_state(state: &SharedState) -> Self {
        Self {
            salary_a: state.salary_a.value().to_string(),
            salary_b: state.salary_b.value().to_string(),
            expenses: state
                .expenses
                .iter()
                .map(|expense| expense.value().to_string())
                .collect(),
        }
    }
}

/// Everything a successful calculation produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculationResult {
    pub state: SharedState,
    pub shares: Vec<ShareResult>,
    pub totals: Totals,
}

/// Input state rebuilt on startup, either from an incoming share link
/// (which triggers an immediate calculation) or from the salary store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoredInput {
    pub query: SharedQuery,
    pub auto_calculate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairshare_domain::Amount;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    fn from_state_emits_plain_decimal_strings() {
        let state = SharedState {
            salary_a: Amount::new(Decimal::new(300000, 2)),
            salary_b: Amount::from_i64(1000),
            expenses: vec![Amount::new(Decimal::new(40050, 2))],
        };

        let query = SharedQuery::from_state(&state);

        assert_eq!(query.salary_a, "3000.00");
        assert_eq!(query.salary_b, "1000");
        assert_eq!(query.expenses, vec!["400.50".to_string()]);
    }
}
