/// Date parsing subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum TemporalError {
    #[error("date parser initialization failed: {reason}")]
    InitFailed { reason: String },
}
