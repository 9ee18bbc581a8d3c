use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, error::Category};
use warikan_application::{
    ExpenseRecord, MemberRecord, SnapshotParseError, SnapshotParser, TripSnapshot,
};
use warikan_domain::{INDIVIDUAL_PAYER, Money, SplitType};

#[derive(Default)]
pub struct JsonSnapshotParser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    members: Vec<RawMember>,
    #[serde(default)]
    expenses: Vec<RawExpense>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMember {
    id: String,
    name: String,
    #[serde(default)]
    created_at: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExpense {
    id: String,
    #[serde(default)]
    item: Value,
    #[serde(default)]
    category: Value,
    #[serde(default)]
    budget: Value,
    #[serde(default)]
    actual: Value,
    #[serde(default)]
    payer: Value,
    #[serde(default)]
    split_type: Value,
    #[serde(default)]
    created_at: Value,
}

impl SnapshotParser for JsonSnapshotParser {
    fn parse(&self, content: &str) -> Result<TripSnapshot, SnapshotParseError> {
        let raw: RawSnapshot = serde_json::from_str(content).map_err(map_json_error)?;

        let mut members: Vec<(f64, MemberRecord)> = raw
            .members
            .into_iter()
            .map(|member| {
                (
                    created_seconds(&member.created_at),
                    MemberRecord::new(member.id, member.name),
                )
            })
            .collect();
        let mut expenses: Vec<(f64, ExpenseRecord)> = raw
            .expenses
            .into_iter()
            .map(|expense| (created_seconds(&expense.created_at), expense.into_record()))
            .collect();

        // Stable: equal timestamps keep document order.
        members.sort_by(|a, b| a.0.total_cmp(&b.0));
        expenses.sort_by(|a, b| a.0.total_cmp(&b.0));

        tracing::debug!(
            members = members.len(),
            expenses = expenses.len(),
            "Parsed trip snapshot"
        );

        Ok(TripSnapshot::new(
            members.into_iter().map(|(_, member)| member).collect(),
            expenses.into_iter().map(|(_, expense)| expense).collect(),
        ))
    }
}

impl RawExpense {
    fn into_record(self) -> ExpenseRecord {
        let budget = coerce_amount(&self.id, "budget", &self.budget);
        let actual = coerce_amount(&self.id, "actual", &self.actual);
        let payer = match self.payer {
            Value::String(name) => name,
            Value::Null => INDIVIDUAL_PAYER.to_owned(),
            // A non-string payer never matches a member name.
            _ => String::new(),
        };
        let split_type = match &self.split_type {
            Value::String(tag) => SplitType::from_tag(tag),
            _ => SplitType::Individual,
        };

        ExpenseRecord {
            item: text_value(&self.item),
            category: text_value(&self.category),
            budget,
            actual,
            payer,
            split_type,
            id: self.id,
        }
    }
}

/// Coerces a loosely typed amount the way `Number(x || 0)` does.
///
/// Anything that does not yield a finite number becomes zero.
fn coerce_amount(expense: &str, field: &'static str, value: &Value) -> Money {
    let coerced = match value {
        // Numbers keep their source text, so out-of-range literals reach here.
        Value::Number(number) => parse_numeric_text(&number.to_string()),
        Value::String(text) => parse_numeric_text(text),
        Value::Bool(true) => Some(Money::from_i64(1)),
        Value::Bool(false) | Value::Null => Some(Money::ZERO),
        Value::Array(_) | Value::Object(_) => None,
    };

    coerced.unwrap_or_else(|| {
        tracing::debug!(expense, field, %value, "Non-numeric amount treated as zero");
        Money::ZERO
    })
}

fn parse_numeric_text(text: &str) -> Option<Money> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Money::ZERO);
    }
    if let Some(integer) = parse_prefixed_integer(trimmed) {
        return Some(integer);
    }
    if let Ok(exact) = trimmed.parse::<Decimal>() {
        return Some(Money::from_decimal(exact));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Money::from_f64_or_zero)
}

/// Unsigned `0x`/`0o`/`0b` integer literals, as `Number()` accepts them.
fn parse_prefixed_integer(text: &str) -> Option<Money> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix)
        .ok()
        .map(Money::from_i64)
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn created_seconds(created_at: &Value) -> f64 {
    created_at
        .get("seconds")
        .and_then(Value::as_f64)
        .filter(|seconds| seconds.is_finite())
        .unwrap_or(0.0)
}

fn map_json_error(err: serde_json::Error) -> SnapshotParseError {
    let line = err.line();
    let column = err.column();
    let message = err.to_string();
    let detail = message
        .split(" at line ")
        .next()
        .unwrap_or(&message)
        .to_owned();

    match err.classify() {
        Category::Syntax | Category::Eof | Category::Io => SnapshotParseError::Syntax {
            line,
            column,
            detail,
        },
        Category::Data => SnapshotParseError::InvalidDocument {
            line,
            column,
            detail,
        },
    }
}
