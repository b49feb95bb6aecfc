use thiserror::Error;

/// Errors returned by [`HashRing`](crate::HashRing) operations.
///
/// Every variant reflects a precondition the caller violated; the ring never
/// retries or masks them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("target '{0}' already exists")]
    DuplicateTarget(String),

    #[error("target '{0}' does not exist")]
    TargetNotFound(String),

    #[error("no targets exist")]
    NoTargets,

    #[error("weight expects a positive finite value, '{0}' provided")]
    InvalidWeight(f64),

    #[error("replicas expects a value greater than 0, '{0}' provided")]
    InvalidReplicaCount(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            RingError::DuplicateTarget("t-a".into()).to_string(),
            "target 't-a' already exists"
        );
        assert_eq!(
            RingError::TargetNotFound("not-there".into()).to_string(),
            "target 'not-there' does not exist"
        );
        assert_eq!(RingError::NoTargets.to_string(), "no targets exist");
        assert_eq!(
            RingError::InvalidWeight(-1.0).to_string(),
            "weight expects a positive finite value, '-1' provided"
        );
        assert_eq!(
            RingError::InvalidReplicaCount(0).to_string(),
            "replicas expects a value greater than 0, '0' provided"
        );
    }
}
