use thiserror::Error;

/// Failures reported by pools and the registry.
///
/// None of these abort the caller. The facade operations log them at
/// [`PoolError::level`] and hand back a sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Spawn requested while every slot is active and the pool is full.
    #[error("Max pool size reached ({max_size}) objects")]
    CapacityExhausted { max_size: usize },
    /// Operation addressed a pool identifier that was never created.
    #[error("Trying to {action} using an invalid ID: {id:?}")]
    InvalidId { id: String, action: &'static str },
    /// Destroy called on an entity with no pooling tag.
    #[error("Trying to destroy a non poolable object")]
    InvalidHandle,
    /// Create called with an identifier that is already registered.
    #[error("Trying to create a pool with a duplicate ID: {id:?}")]
    DuplicateId { id: String },
}

impl PoolError {
    /// Severity used when this error is reported through `log`.
    pub fn level(&self) -> log::Level {
        match self {
            PoolError::CapacityExhausted { .. } => log::Level::Warn,
            PoolError::InvalidId { .. }
            | PoolError::InvalidHandle
            | PoolError::DuplicateId { .. } => log::Level::Error,
        }
    }

    pub(crate) fn report(&self) {
        log::log!(self.level(), "{self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_a_warning_everything_else_an_error() {
        assert_eq!(
            PoolError::CapacityExhausted { max_size: 3 }.level(),
            log::Level::Warn
        );
        assert_eq!(PoolError::InvalidHandle.level(), log::Level::Error);
        assert_eq!(
            PoolError::InvalidId {
                id: "x".into(),
                action: "spawn"
            }
            .level(),
            log::Level::Error
        );
    }

    #[test]
    fn messages_name_the_failure() {
        let err = PoolError::InvalidId {
            id: "ghosts".into(),
            action: "expand a pool",
        };
        assert_eq!(
            err.to_string(),
            "Trying to expand a pool using an invalid ID: \"ghosts\""
        );
        assert_eq!(
            PoolError::CapacityExhausted { max_size: 50 }.to_string(),
            "Max pool size reached (50) objects"
        );
    }
}
