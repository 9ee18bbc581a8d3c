use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotParseError {
    #[error("syntax error at line {line}, column {column}: {detail}")]
    Syntax {
        line: usize,
        column: usize,
        detail: String,
    },
    #[error("invalid snapshot at line {line}, column {column}: {detail}")]
    InvalidDocument {
        line: usize,
        column: usize,
        detail: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("member name must not be empty")]
    EmptyName,
    #[error("member '{0}' already exists")]
    DuplicateName(String),
    #[error("member id '{0}' is already in use")]
    DuplicateId(String),
    #[error("'{0}' is reserved for expenses paid individually")]
    ReservedName(String),
    #[error("expense id '{0}' is already in use")]
    DuplicateExpenseId(String),
    #[error("no expense with id '{0}'")]
    UnknownExpense(String),
}
