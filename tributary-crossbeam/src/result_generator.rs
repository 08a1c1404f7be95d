//! Generators whose failures arrive as elements instead of panics.

use std::io;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::error::{Aborted, GenerateError, GeneratorPanic};
use crate::generator::{Consumer, Generator};
use crate::options::GeneratorOptions;

/// A generator yielding `Ok` values and `Err` failures.
pub type ResultGenerator<T, E> = Generator<Result<T, E>>;

/// Handle a result generator body yields through.
pub struct ResultConsumer<T, E> {
    inner: Consumer<Result<T, E>>,
}

impl<T, E> ResultConsumer<T, E> {
    /// Hands a successful value to the consumer.
    pub fn yield_ok(&self, value: T) -> Result<(), GenerateError<E>> {
        self.inner.yield_value(Ok(value)).map_err(|Aborted| GenerateError::Aborted)
    }

    /// Hands a failure to the consumer without ending the body.
    pub fn yield_err(&self, error: E) -> Result<(), GenerateError<E>> {
        self.inner.yield_value(Err(error)).map_err(|Aborted| GenerateError::Aborted)
    }
}

/// Spawns a generator whose body reports failures as values.
///
/// The consumer sees every `Ok` and `Err` the body yields. If the body returns
/// [`GenerateError::Failed`], or fails through `?`, the error becomes the last
/// element. A panic in the body becomes a last `Err(E::from(GeneratorPanic))`,
/// so nothing is ever re-raised on the consumer's thread.
///
/// ```
/// use tributary_core::Cursor;
/// use tributary_crossbeam::{GeneratorPanic, generate_results};
///
/// #[derive(Debug, PartialEq)]
/// enum LineError {
///     Parse(String),
///     Panicked,
/// }
///
/// impl From<GeneratorPanic> for LineError {
///     fn from(_: GeneratorPanic) -> Self {
///         LineError::Panicked
///     }
/// }
///
/// let mut numbers = generate_results(|co| {
///     for line in ["1", "2", "x"] {
///         let n: i32 = line.parse().map_err(|_| LineError::Parse(line.to_owned()))?;
///         co.yield_ok(n)?;
///     }
///     Ok(())
/// });
///
/// assert_eq!(
///     numbers.collect(),
///     vec![Ok(1), Ok(2), Err(LineError::Parse("x".to_owned()))]
/// );
/// ```
///
/// # Panics
///
/// Panics if the worker thread cannot be spawned. Use
/// [`GeneratorOptions::generate_results`] to handle that case.
pub fn generate_results<T, E, F>(body: F) -> ResultGenerator<T, E>
where
    T: Send + 'static,
    E: From<GeneratorPanic> + Send + 'static,
    F: Fn(&ResultConsumer<T, E>) -> Result<(), GenerateError<E>> + Send + Sync + 'static,
{
    GeneratorOptions::default()
        .generate_results(body)
        .expect("failed to spawn generator worker")
}

impl GeneratorOptions {
    /// Spawns a result generator with these options. See [`generate_results`].
    pub fn generate_results<T, E, F>(&self, body: F) -> io::Result<ResultGenerator<T, E>>
    where
        T: Send + 'static,
        E: From<GeneratorPanic> + Send + 'static,
        F: Fn(&ResultConsumer<T, E>) -> Result<(), GenerateError<E>> + Send + Sync + 'static,
    {
        self.generate(move |consumer: &Consumer<Result<T, E>>| {
            let results = ResultConsumer {
                inner: consumer.share(),
            };

            let last = match panic::catch_unwind(AssertUnwindSafe(|| body(&results))) {
                Ok(Ok(())) => return Ok(()),
                Ok(Err(GenerateError::Aborted)) => return Err(Aborted),
                Ok(Err(GenerateError::Failed(error))) => error,
                Err(payload) => {
                    let panic = GeneratorPanic::from_payload(payload.as_ref());
                    debug!(message = %panic.message, "result generator body panicked");
                    E::from(panic)
                }
            };
            consumer.yield_value(Err(last))
        })
    }
}
