/// Result of one pipeline step for one photo.
///
/// The orchestrator matches on every variant so that a dropped photo is
/// always an explicit decision with a known cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Success(T),
    Absent,
    TransportFailure(String),
}

impl<T> From<Option<T>> for StepOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => StepOutcome::Success(value),
            None => StepOutcome::Absent,
        }
    }
}
