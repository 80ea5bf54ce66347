use crate::model::SharedQuery;
use std::borrow::Cow;

pub const SALARY_A_KEY: &str = "salary1";
pub const SALARY_B_KEY: &str = "salary2";
pub const EXPENSES_KEY: &str = "expenses";

/// Serializes the input tuple as a URL query string. Salaries travel as
/// plain parameters; the expense list is a JSON array of strings inside a
/// single parameter value.
pub fn encode(query: &SharedQuery) -> String {
    let expenses_json =
        serde_json::to_string(&query.expenses).unwrap_or_else(|_| String::from("[]"));

    format!(
        "{SALARY_A_KEY}={}&{SALARY_B_KEY}={}&{EXPENSES_KEY}={}",
        urlencoding::encode(&query.salary_a),
        urlencoding::encode(&query.salary_b),
        urlencoding::encode(&expenses_json),
    )
}

/// Rebuilds the input tuple from a full URL or a bare query string.
///
/// Returns `Some` only when all three parameters are present, non-empty,
/// and the expense list parses as a JSON string array; anything else means
/// "no shared state" and the caller falls back to the salary store.
pub fn decode(input: &str) -> Option<SharedQuery> {
    let query_string = match input.split_once('?') {
        Some((_, after)) => after,
        None => input,
    };

    let mut salary_a: Option<String> = None;
    let mut salary_b: Option<String> = None;
    let mut expenses_json: Option<String> = None;

    for pair in query_string.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = percent_decode(value);
        if value.is_empty() {
            continue;
        }
        match key {
            SALARY_A_KEY => salary_a = Some(value.into_owned()),
            SALARY_B_KEY => salary_b = Some(value.into_owned()),
            EXPENSES_KEY => expenses_json = Some(value.into_owned()),
            _ => {}
        }
    }

    let expenses: Vec<String> = serde_json::from_str(&expenses_json?).ok()?;

    Some(SharedQuery {
        salary_a: salary_a?,
        salary_b: salary_b?,
        expenses,
    })
}

fn percent_decode(value: &str) -> Cow<'_, str> {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn query(salary_a: &str, salary_b: &str, expenses: &[&str]) -> SharedQuery {
        SharedQuery {
            salary_a: salary_a.to_string(),
            salary_b: salary_b.to_string(),
            expenses: expenses.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[rstest]
    fn encode_produces_three_parameters(#[values(true, false)] grouped_salary: bool) {
        let salary_a = if grouped_salary { "3,000.00" } else { "3000" };
        let encoded = encode(&query(salary_a, "1000", &["400", "200"]));

        if grouped_salary {
            assert!(encoded.starts_with("salary1=3%2C000.00&salary2=1000&"));
        } else {
            assert!(encoded.starts_with("salary1=3000&salary2=1000&"));
        }
        assert!(encoded.contains("expenses=%5B%22400%22%2C%22200%22%5D"));
    }

    #[rstest]
    #[case::bare_query("salary1=3000&salary2=1000&expenses=%5B%22400%22%2C%22200%22%5D")]
    #[case::leading_question_mark("?salary1=3000&salary2=1000&expenses=%5B%22400%22%2C%22200%22%5D")]
    #[case::full_url(
        "https://fairshare.app/calculator?salary1=3000&salary2=1000&expenses=%5B%22400%22%2C%22200%22%5D"
    )]
    #[case::unencoded_json(r#"salary1=3000&salary2=1000&expenses=["400","200"]"#)]
    fn decode_accepts_urls_and_query_strings(#[case] input: &str) {
        let decoded = decode(input).expect("state should decode");
        assert_eq!(decoded, query("3000", "1000", &["400", "200"]));
    }

    #[rstest]
    #[case::missing_salary_b("salary1=3000&expenses=%5B%22400%22%5D")]
    #[case::missing_expenses("salary1=3000&salary2=1000")]
    #[case::empty_salary("salary1=&salary2=1000&expenses=%5B%22400%22%5D")]
    #[case::expenses_not_json("salary1=3000&salary2=1000&expenses=400")]
    #[case::expenses_wrong_shape("salary1=3000&salary2=1000&expenses=%5B400%5D")]
    #[case::empty_input("")]
    fn decode_rejects_incomplete_state(#[case] input: &str) {
        assert_eq!(decode(input), None);
    }

    #[rstest]
    fn decode_ignores_unknown_parameters(#[values("extra=1&", "")] prefix: &str) {
        let input = format!("{prefix}salary1=3000&salary2=1000&expenses=%5B%5D");
        let decoded = decode(&input).expect("state should decode");
        assert_eq!(decoded.expenses, Vec::<String>::new());
    }

    proptest! {
        #[test]
        fn round_trips_well_formed_queries(
            salary_a in "[0-9]{1,7}(\\.[0-9]{1,2})?",
            salary_b in "[0-9]{1,7}(\\.[0-9]{1,2})?",
            expenses in prop::collection::vec("[0-9]{1,6}(\\.[0-9]{1,2})?", 0..=6),
        ) {
            let original = SharedQuery { salary_a, salary_b, expenses };
            let decoded = decode(&encode(&original)).expect("encoded state should decode");
            prop_assert_eq!(decoded, original);
        }
    }
}
