use std::any::Any;

use thiserror::Error;

/// Returned by a yield once the consumer has stopped reading.
///
/// Generator bodies propagate it with `?`; the worker treats it as a normal
/// end of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generator aborted by its consumer")]
pub struct Aborted;

/// A panic caught in a result generator's body, delivered as its last element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generator panicked: {message}")]
pub struct GeneratorPanic {
    pub message: String,
}

impl GeneratorPanic {
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("non-string panic payload")
        };
        GeneratorPanic { message }
    }
}

/// Early exit from a result generator's body.
#[derive(Debug, Error)]
pub enum GenerateError<E> {
    /// The consumer stopped reading.
    #[error("generator aborted by its consumer")]
    Aborted,

    /// The body failed; `E` becomes the generator's last element.
    #[error("generator failed: {0}")]
    Failed(E),
}

impl<E> From<E> for GenerateError<E> {
    fn from(error: E) -> Self {
        GenerateError::Failed(error)
    }
}
