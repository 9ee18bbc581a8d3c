use warikan_application::ProcessingOutcome;

/// Message for a snapshot that could not be used, or `None` on success.
pub fn format_processing_failure(
    outcome: &ProcessingOutcome,
    source: impl std::fmt::Display,
) -> Option<String> {
    match outcome {
        ProcessingOutcome::Success(_) => None,
        ProcessingOutcome::SyntaxError {
            line,
            column,
            detail,
        } => Some(format!(
            "{source}: {}",
            warikan_i18n::syntax_error(*line, *column, detail.clone())
        )),
        ProcessingOutcome::InvalidDocument {
            line,
            column,
            detail,
        } => Some(format!(
            "{source}: {}",
            warikan_i18n::invalid_snapshot(*line, *column, detail.clone())
        )),
    }
}
