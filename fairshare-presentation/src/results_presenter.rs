use crate::text_table::{Alignment, TextTableBuilder};
use fairshare_application::CalculationResult;
use fairshare_domain::Amount;
use fairshare_format::format_amount;
use fairshare_i18n as i18n;
use rust_decimal::Decimal;
use std::borrow::Cow;

pub struct ResultsPresenter;

pub struct ResultsView {
    pub summary: String,
    pub table: String,
}

impl ResultsPresenter {
    pub fn render(result: &CalculationResult) -> ResultsView {
        ResultsView {
            summary: Self::build_summary(result),
            table: Self::build_share_table(result),
        }
    }

    fn build_summary(result: &CalculationResult) -> String {
        i18n::share_summary(
            format_amount(result.state.salary_a.value()),
            format_amount(result.state.salary_b.value()),
            format_percent(result.totals.percent_a),
            format_percent(result.totals.percent_b),
        )
    }

    fn build_share_table(result: &CalculationResult) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(""),
                Cow::Borrowed(i18n::EXPENSE),
                Cow::Borrowed(i18n::YOUR_SHARE),
                Cow::Borrowed(i18n::THEIR_SHARE),
            ]);

        for (index, share) in result.shares.iter().enumerate() {
            builder = builder.row([
                Cow::Owned(i18n::expense_field(index)),
                format_cell(share.expense),
                format_cell(share.share_a),
                format_cell(share.share_b),
            ]);
        }

        builder
            .row([
                Cow::Borrowed(i18n::TOTAL),
                format_cell(result.totals.total_expense),
                format_cell(result.totals.total_share_a),
                format_cell(result.totals.total_share_b),
            ])
            .build()
    }
}

fn format_cell(amount: Amount) -> Cow<'static, str> {
    Cow::Owned(format_amount(amount.value()))
}

/// Percentages display with at most two decimals and no trailing zeros,
/// so an even split reads "50%" rather than "50.00%".
pub fn format_percent(percent: Decimal) -> String {
    percent.round_dp(2).normalize().to_string()
}
