#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const TOTAL_BUDGET: &str = "予算合計";
    pub const TOTAL_ACTUAL: &str = "実費合計";
    pub const SHARED_TOTAL: &str = "割り勘対象";
    pub const PER_HEAD_SHARE: &str = "1人あたり";
    pub const MEMBER_COUNT: &str = "人数";
    pub const OVER_BUDGET: &str = "予算オーバー";
    pub const WITHIN_BUDGET: &str = "予算内";
    pub const NO_SETTLEMENT_NEEDED: &str = "精算の必要はありません";
    pub const CURRENCY_SYMBOL: &str = "¥";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TOTAL_BUDGET: &str = "Total budget";
    pub const TOTAL_ACTUAL: &str = "Total spent";
    pub const SHARED_TOTAL: &str = "Shared total";
    pub const PER_HEAD_SHARE: &str = "Per person";
    pub const MEMBER_COUNT: &str = "Members";
    pub const OVER_BUDGET: &str = "Over budget";
    pub const WITHIN_BUDGET: &str = "Within budget";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed";
    pub const CURRENCY_SYMBOL: &str = "¥";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TOTAL_BUDGET: &str = "Total budget";
    pub const TOTAL_ACTUAL: &str = "Total spent";
    pub const SHARED_TOTAL: &str = "Shared total";
    pub const PER_HEAD_SHARE: &str = "Per person";
    pub const MEMBER_COUNT: &str = "Members";
    pub const OVER_BUDGET: &str = "Over budget";
    pub const WITHIN_BUDGET: &str = "Within budget";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed";
    pub const CURRENCY_SYMBOL: &str = "¥";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn member_count(count: usize) -> String {
    format!("{count}人")
}

#[cfg(feature = "ja")]
pub fn failed_to_read_snapshot(path: impl std::fmt::Display) -> String {
    format!("スナップショット '{path}' を読み込めませんでした")
}

#[cfg(feature = "en")]
pub fn member_count(count: usize) -> String {
    if count == 1 {
        "1 person".to_owned()
    } else {
        format!("{count} people")
    }
}

#[cfg(feature = "en")]
pub fn failed_to_read_snapshot(path: impl std::fmt::Display) -> String {
    format!("Failed to read snapshot '{path}'")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn member_count(count: usize) -> String {
    if count == 1 {
        "1 person".to_owned()
    } else {
        format!("{count} people")
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn failed_to_read_snapshot(path: impl std::fmt::Display) -> String {
    format!("Failed to read snapshot '{path}'")
}

pub struct SyntaxErrorMessage {
    line: usize,
    column: usize,
    detail: String,
}

pub struct InvalidSnapshotMessage {
    line: usize,
    column: usize,
    detail: String,
}

pub fn syntax_error(line: usize, column: usize, detail: String) -> SyntaxErrorMessage {
    SyntaxErrorMessage {
        line,
        column,
        detail,
    }
}

pub fn invalid_snapshot(line: usize, column: usize, detail: String) -> InvalidSnapshotMessage {
    InvalidSnapshotMessage {
        line,
        column,
        detail,
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "構文エラー (行 {}, 列 {}): {}",
            self.line, self.column, self.detail
        )
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for InvalidSnapshotMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "スナップショットの形式が正しくありません (行 {}, 列 {}): {}。`members` と `expenses` は配列、メンバーの `id` と `name` は文字列で指定してください。",
            self.line, self.column, self.detail
        )
    }
}

#[cfg(feature = "en")]
impl std::fmt::Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line, self.column, self.detail
        )
    }
}

#[cfg(feature = "en")]
impl std::fmt::Display for InvalidSnapshotMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid snapshot at line {}, column {}: {}. `members` and `expenses` must be arrays and member `id`/`name` must be strings.",
            self.line, self.column, self.detail
        )
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
impl std::fmt::Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line, self.column, self.detail
        )
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
impl std::fmt::Display for InvalidSnapshotMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid snapshot at line {}, column {}: {}. `members` and `expenses` must be arrays and member `id`/`name` must be strings.",
            self.line, self.column, self.detail
        )
    }
}
