use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde_json::Number;
use warikan_application::SettlementReport;
use warikan_domain::Money;

pub struct JsonPresenter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub total_budget: Number,
    pub total_actual: Number,
    pub shared_total: Number,
    pub per_head_share: Number,
    pub member_count: usize,
    pub over_budget: bool,
    pub balances: Vec<BalanceEntry<'a>>,
    pub transactions: Vec<TransactionEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BalanceEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub balance: Number,
}

#[derive(Debug, Serialize)]
pub struct TransactionEntry<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Number,
}

impl JsonPresenter {
    pub fn document<'a>(report: &SettlementReport<'a>) -> ReportDocument<'a> {
        ReportDocument {
            total_budget: to_json_number(report.totals.budget),
            total_actual: to_json_number(report.totals.actual),
            shared_total: to_json_number(report.shared_total),
            per_head_share: to_json_number(report.per_head_share),
            member_count: report.member_count,
            over_budget: report.is_over_budget(),
            balances: report
                .balances
                .iter()
                .map(|person| BalanceEntry {
                    id: person.id.as_str(),
                    name: person.name,
                    balance: to_json_number(person.balance),
                })
                .collect(),
            transactions: report
                .transactions
                .iter()
                .map(|transfer| TransactionEntry {
                    from: transfer.from,
                    to: transfer.to,
                    amount: to_json_number(transfer.amount),
                })
                .collect(),
        }
    }

    pub fn render(report: &SettlementReport<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::document(report))
    }
}

/// Integral amounts stay JSON integers; anything else goes through `f64`.
fn to_json_number(amount: Money) -> Number {
    let value = amount.as_decimal();
    if value.fract().is_zero()
        && let Some(integer) = value.to_i64()
    {
        return Number::from(integer);
    }
    value
        .to_f64()
        .and_then(Number::from_f64)
        .unwrap_or_else(|| Number::from(0))
}
