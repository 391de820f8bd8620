//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Record-level failures travel inside
//! [`FrameworkError::EntityError`] and are recovered with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete record error carried by `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or the boxed error is of a
    /// different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn entity_error_downcasts_to_its_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(Boom));
        assert_eq!(err.into_entity_error::<Boom>().unwrap(), Boom);
    }

    #[test]
    fn plumbing_errors_are_returned_unchanged() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.into_entity_error::<Boom>(),
            Err(FrameworkError::ActorClosed)
        ));

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            foreign.into_entity_error::<Boom>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
