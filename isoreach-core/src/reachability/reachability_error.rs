#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ReachabilityError {
    #[error("target identifier '{0}' appears more than once in the target list")]
    DuplicateTarget(String),
    #[error("unreachable sentinel must be non-negative so range filters treat it as out of range, found {0}")]
    InvalidSentinel(i64),
}
