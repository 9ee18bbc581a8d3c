use crate::{error::SnapshotParseError, model::TripSnapshot};

pub trait SnapshotParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<TripSnapshot, SnapshotParseError>;
}
