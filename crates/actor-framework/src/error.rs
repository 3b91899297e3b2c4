//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity errors ride inside
//! [`FrameworkError::EntityError`] and are recovered with
//! [`FrameworkError::downcast_entity`].

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
    /// Recover the entity's own error type.
    ///
    /// Returns `Err(self)` unchanged when this is not an entity error of type `E`.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("short by {0}")]
    struct Short(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Short(3)));
        assert_eq!(err.downcast_entity::<Short>().unwrap(), Short(3));
    }

    #[test]
    fn test_downcast_entity_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast_entity::<Short>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let err = FrameworkError::NotFound("table_9".into());
        assert!(matches!(
            err.downcast_entity::<Short>(),
            Err(FrameworkError::NotFound(id)) if id == "table_9"
        ));
    }
}
