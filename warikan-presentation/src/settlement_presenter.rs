use crate::{
    amount_format::{format_currency, format_signed_currency},
    text_table::{Alignment, TextTableBuilder},
};
use std::{borrow::Cow, fmt};
use warikan_application::{PersonBalance, SettlementReport, TransferLine};
use warikan_domain::SettlementContext;
use warikan_i18n as i18n;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub summary: String,
    pub balance_table: String,
    pub transfer_table: Option<String>,
}

impl fmt::Display for SettlementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        if !self.balance_table.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.balance_table)?;
        }
        writeln!(f)?;
        match &self.transfer_table {
            Some(table) => write!(f, "{table}"),
            None => write!(f, "{}", i18n::NO_SETTLEMENT_NEEDED),
        }
    }
}

impl SettlementPresenter {
    pub fn render(report: &SettlementReport<'_>) -> SettlementView {
        let summary = Self::build_summary(report);
        let balance_table = Self::build_balance_table(&report.balances, report.context);
        let transfer_table = report
            .needs_settlement()
            .then(|| Self::build_transfer_table(&report.transactions));

        SettlementView {
            summary,
            balance_table,
            transfer_table,
        }
    }

    pub fn build_summary(report: &SettlementReport<'_>) -> String {
        let budget_status = if report.is_over_budget() {
            i18n::OVER_BUDGET
        } else {
            i18n::WITHIN_BUDGET
        };
        let per_head = report
            .context
            .from_atomic_units(report.per_head_share_units());

        [
            format!(
                "{}: {}",
                i18n::MEMBER_COUNT,
                i18n::member_count(report.member_count)
            ),
            format!(
                "{}: {}",
                i18n::TOTAL_BUDGET,
                format_currency(report.totals.budget)
            ),
            format!(
                "{}: {} ({budget_status})",
                i18n::TOTAL_ACTUAL,
                format_currency(report.totals.actual)
            ),
            format!(
                "{}: {}",
                i18n::SHARED_TOTAL,
                format_currency(report.shared_total)
            ),
            format!("{}: {}", i18n::PER_HEAD_SHARE, format_currency(per_head)),
        ]
        .join("\n")
    }

    /// Balances are shown rounded to whole atomic units.
    pub fn build_balance_table(
        person_balances: &[PersonBalance<'_>],
        context: SettlementContext,
    ) -> String {
        if person_balances.is_empty() {
            return String::new();
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::BALANCE)]);

        for person in person_balances {
            let rounded = context.from_atomic_units(context.to_atomic_units(person.balance));
            builder = builder.row([
                Cow::Borrowed(person.name),
                Cow::Owned(format_signed_currency(rounded)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(transfers: &[TransferLine<'_>]) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for transfer in transfers {
            builder = builder.row([
                Cow::Borrowed(transfer.from),
                Cow::Borrowed(transfer.to),
                Cow::Owned(format_currency(transfer.amount)),
            ]);
        }

        builder.build()
    }
}
