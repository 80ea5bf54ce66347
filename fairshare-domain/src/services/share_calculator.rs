use crate::model::{Amount, ShareResult, Totals};
use rust_decimal::Decimal;

/// Proportional share calculation service.
pub struct ShareCalculator;

impl ShareCalculator {
    /// Split each expense between the two parties in proportion to their
    /// salaries.
    ///
    /// Preconditions (guaranteed by the validator): both salaries and every
    /// expense are strictly positive.
    ///
    /// Party A's share is `salary_a / (salary_a + salary_b) * expense`;
    /// party B's share is derived as the complement within the same expense
    /// rather than computed independently, so the two shares always sum to
    /// the expense exactly.
    pub fn compute(
        &self,
        salary_a: Amount,
        salary_b: Amount,
        expenses: &[Amount],
    ) -> (Vec<ShareResult>, Totals) {
        let pool = salary_a + salary_b;
        let ratio_a = salary_a.value() / pool.value();

        let mut shares = Vec::with_capacity(expenses.len());
        let mut total_share_a = Amount::ZERO;
        let mut total_share_b = Amount::ZERO;

        for &expense in expenses {
            let share_a = Amount::new(ratio_a * expense.value());
            let share_b = expense - share_a;

            total_share_a += share_a;
            total_share_b += share_b;
            shares.push(ShareResult {
                expense,
                share_a,
                share_b,
            });
        }

        // Percentages come from the summed shares, not from the salaries,
        // so they stay consistent with the rendered rows.
        let total_expense = total_share_a + total_share_b;
        let (percent_a, percent_b) = if total_expense.is_positive() {
            let percent_a = total_share_a.value() / total_expense.value() * Decimal::ONE_HUNDRED;
            (percent_a, Decimal::ONE_HUNDRED - percent_a)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        let totals = Totals {
            total_share_a,
            total_share_b,
            total_expense,
            percent_a,
            percent_b,
        };

        (shares, totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    #[fixture]
    fn calculator() -> ShareCalculator {
        ShareCalculator
    }

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).expect("test literal should parse")
    }

    #[rstest]
    #[case::single_expense(3000, 1000, &[400], &[("300", "100")], "75", "25")]
    #[case::two_expenses(3000, 1000, &[400, 200], &[("300", "100"), ("150", "50")], "75", "25")]
    #[case::equal_salaries(2000, 2000, &[99], &[("49.5", "49.5")], "50", "50")]
    fn compute_cases(
        calculator: ShareCalculator,
        #[case] salary_a: i64,
        #[case] salary_b: i64,
        #[case] expenses: &[i64],
        #[case] expected_shares: &[(&str, &str)],
        #[case] expected_percent_a: &str,
        #[case] expected_percent_b: &str,
    ) {
        let expenses: Vec<Amount> = expenses.iter().copied().map(Amount::from_i64).collect();
        let (shares, totals) = calculator.compute(
            Amount::from_i64(salary_a),
            Amount::from_i64(salary_b),
            &expenses,
        );

        let rendered: Vec<(Decimal, Decimal)> = shares
            .iter()
            .map(|share| (share.share_a.value().normalize(), share.share_b.value().normalize()))
            .collect();
        let expected: Vec<(Decimal, Decimal)> = expected_shares
            .iter()
            .map(|(a, b)| (dec(a), dec(b)))
            .collect();

        assert_eq!(rendered, expected);
        assert_eq!(totals.percent_a.normalize(), dec(expected_percent_a));
        assert_eq!(totals.percent_b.normalize(), dec(expected_percent_b));
    }

    #[rstest]
    fn shares_sum_to_each_expense(calculator: ShareCalculator) {
        let expenses = [
            Amount::new(dec("10.01")),
            Amount::new(dec("0.03")),
            Amount::new(dec("99999.99")),
        ];

        let (shares, _) = calculator.compute(
            Amount::new(dec("1234.56")),
            Amount::new(dec("6543.21")),
            &expenses,
        );

        for share in shares {
            assert_eq!(share.share_a + share.share_b, share.expense);
        }
    }

    #[rstest]
    fn total_expense_is_sum_of_share_totals(calculator: ShareCalculator) {
        let expenses = [Amount::from_i64(7), Amount::from_i64(13)];
        let (shares, totals) = calculator.compute(
            Amount::from_i64(1700),
            Amount::from_i64(1300),
            &expenses,
        );

        let sum_a: Amount = shares.iter().map(|s| s.share_a).sum();
        let sum_b: Amount = shares.iter().map(|s| s.share_b).sum();
        assert_eq!(totals.total_share_a, sum_a);
        assert_eq!(totals.total_share_b, sum_b);
        assert_eq!(totals.total_expense, sum_a + sum_b);
    }

    #[rstest]
    fn empty_expense_list_yields_zero_totals(calculator: ShareCalculator) {
        let (shares, totals) =
            calculator.compute(Amount::from_i64(3000), Amount::from_i64(1000), &[]);

        assert!(shares.is_empty());
        assert_eq!(totals.total_expense, Amount::ZERO);
        assert_eq!(totals.percent_a, Decimal::ZERO);
        assert_eq!(totals.percent_b, Decimal::ZERO);
    }
}
