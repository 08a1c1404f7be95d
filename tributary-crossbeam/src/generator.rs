//! Generators: bodies that push values from a worker thread into a cursor.
//!
//! The worker and the consumer meet on a zero-capacity channel. Every
//! [`Consumer::yield_value`] blocks until the consumer pulls that value, so a
//! generator never runs more than one value ahead of its reader.

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crossbeam::channel::{self, Receiver, SendError, Sender};
use tracing::{debug, trace, warn};
use tributary_core::{Cursor, Error, IteratorSize, Result};

use crate::error::Aborted;
use crate::options::{GeneratorOptions, worker_name};

pub(crate) type Body<T> =
    Arc<dyn Fn(&Consumer<T>) -> std::result::Result<(), Aborted> + Send + Sync>;

pub(crate) enum Message<T> {
    Value(T),
    Panicked(Box<dyn Any + Send>),
}

/// Spawns a generator running `body` on a new worker thread.
///
/// `body` may be run more than once: [`Cursor::reset`] starts it over on a
/// fresh worker.
///
/// ```
/// use tributary_core::Cursor;
/// use tributary_crossbeam::generate;
///
/// let mut fib = generate(|co| {
///     let (mut a, mut b) = (0u64, 1u64);
///     loop {
///         co.yield_value(a)?;
///         (a, b) = (b, a + b);
///     }
/// })
/// .take(8);
///
/// assert_eq!(fib.collect(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
///
/// # Panics
///
/// Panics if the worker thread cannot be spawned. Use
/// [`GeneratorOptions::generate`] to handle that case.
pub fn generate<T, F>(body: F) -> Generator<T>
where
    T: Send + 'static,
    F: Fn(&Consumer<T>) -> std::result::Result<(), Aborted> + Send + Sync + 'static,
{
    GeneratorOptions::default()
        .generate(body)
        .expect("failed to spawn generator worker")
}

impl GeneratorOptions {
    /// Spawns a generator with these options. See [`generate`].
    pub fn generate<T, F>(&self, body: F) -> io::Result<Generator<T>>
    where
        T: Send + 'static,
        F: Fn(&Consumer<T>) -> std::result::Result<(), Aborted> + Send + Sync + 'static,
    {
        let body: Body<T> = Arc::new(body);
        let receiver = start(&body, self)?;

        Ok(Generator {
            body,
            options: self.clone(),
            receiver: Some(receiver),
            current: None,
        })
    }
}

// ============================================================================
// Consumer - the worker side
// ============================================================================

/// Handle a generator body yields through.
pub struct Consumer<T> {
    sender: Sender<Message<T>>,
}

impl<T> Consumer<T> {
    /// Hands `value` to the consumer, blocking until it is pulled.
    ///
    /// Returns [`Aborted`] once the consumer stopped reading; the body should
    /// return it with `?`.
    pub fn yield_value(&self, value: T) -> std::result::Result<(), Aborted> {
        self.sender.send(Message::Value(value)).map_err(|_| Aborted)
    }

    pub(crate) fn share(&self) -> Self {
        Consumer {
            sender: self.sender.clone(),
        }
    }
}

fn start<T: Send + 'static>(
    body: &Body<T>,
    options: &GeneratorOptions,
) -> io::Result<Receiver<Message<T>>> {
    let (sender, receiver) = channel::bounded(0);
    let body = Arc::clone(body);

    options.spawn(move || run_worker(&body, Consumer { sender }))?;
    Ok(receiver)
}

fn run_worker<T>(body: &Body<T>, consumer: Consumer<T>) {
    let worker = worker_name();
    debug!(worker = %worker, "generator started");

    match panic::catch_unwind(AssertUnwindSafe(|| body(&consumer))) {
        Ok(Ok(())) => debug!(worker = %worker, "generator finished"),
        Ok(Err(Aborted)) => debug!(worker = %worker, "generator stopped by consumer"),
        Err(payload) => {
            // Blocks until the consumer pulls the panic, like any other value.
            if let Err(SendError(Message::Panicked(payload))) =
                consumer.sender.send(Message::Panicked(payload))
            {
                warn!(worker = %worker, "generator panicked with no consumer left");
                panic::resume_unwind(payload);
            }
        }
    }
}

// ============================================================================
// Generator - the consumer side
// ============================================================================

/// Cursor over the values of a generator body. Created by [`generate`].
///
/// Its size is [`IteratorSize::Unknown`] while the worker runs. Aborting or
/// dropping the generator releases a worker blocked on its next yield.
pub struct Generator<T> {
    body: Body<T>,
    options: GeneratorOptions,
    // `None` once finished or aborted; dropping it disconnects the worker.
    receiver: Option<Receiver<Message<T>>>,
    current: Option<T>,
}

impl<T> Generator<T> {
    /// Returns true while a worker may still produce values.
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

impl<T: Send + 'static> Cursor for Generator<T> {
    type Item = T;

    /// Pulls the next value from the worker.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the generator body on the calling thread.
    fn advance(&mut self) -> bool {
        self.current = None;
        let Some(receiver) = &self.receiver else {
            return false;
        };

        match receiver.recv() {
            Ok(Message::Value(value)) => {
                self.current = Some(value);
                true
            }
            Ok(Message::Panicked(payload)) => {
                self.receiver = None;
                panic::resume_unwind(payload)
            }
            Err(_) => {
                // Worker returned and dropped its sender.
                self.receiver = None;
                false
            }
        }
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.current = None;
        if self.receiver.take().is_some() {
            trace!("generator aborted");
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.abort();
        self.receiver = Some(start(&self.body, &self.options).map_err(Error::WorkerSpawn)?);
        trace!("generator restarted");
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.receiver.is_some() {
            IteratorSize::Unknown
        } else {
            IteratorSize::Known(0)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
