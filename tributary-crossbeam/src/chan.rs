//! Bridges between cursors and crossbeam channels.

use std::io;

use crossbeam::channel::{self, Receiver};
use tracing::{debug, trace};
use tributary_core::{Cursor, Error, IteratorSize, Result};

use crate::options::{GeneratorOptions, worker_name};

/// Drains `cursor` into a zero-capacity channel on a worker thread.
///
/// The worker sends one element at a time, blocking until it is received.
/// Dropping the receiver aborts `cursor` and ends the worker.
///
/// ```
/// use tributary_core::{Cursor, range};
/// use tributary_crossbeam::chan;
///
/// let squares = chan(range(1, 5).map(|x| x * x));
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
///
/// # Panics
///
/// Panics if the worker thread cannot be spawned. Use
/// [`GeneratorOptions::chan`] to handle that case.
pub fn chan<C>(cursor: C) -> Receiver<C::Item>
where
    C: Cursor + Send + 'static,
    C::Item: Send + 'static,
{
    GeneratorOptions::default()
        .chan(cursor)
        .expect("failed to spawn channel worker")
}

impl GeneratorOptions {
    /// Drains `cursor` into a channel with these options. See [`chan`].
    pub fn chan<C>(&self, mut cursor: C) -> io::Result<Receiver<C::Item>>
    where
        C: Cursor + Send + 'static,
        C::Item: Send + 'static,
    {
        let (sender, receiver) = channel::bounded(0);

        self.spawn(move || {
            let worker = worker_name();
            debug!(worker = %worker, "channel worker started");

            while cursor.advance() {
                let Some(value) = cursor.take_value() else {
                    continue;
                };
                if sender.send(value).is_err() {
                    trace!(worker = %worker, "channel receiver dropped");
                    cursor.abort();
                    break;
                }
            }

            debug!(worker = %worker, "channel worker finished");
        })?;

        Ok(receiver)
    }
}

/// Wraps a channel receiver as a cursor.
///
/// The cursor ends when every sender is gone. Aborting it drops the receiver,
/// so senders see the channel disconnected.
pub fn from_chan<T>(receiver: Receiver<T>) -> ChanCursor<T> {
    ChanCursor {
        receiver: Some(receiver),
        current: None,
    }
}

/// One-shot cursor over a channel. Created by [`from_chan`].
pub struct ChanCursor<T> {
    receiver: Option<Receiver<T>>,
    current: Option<T>,
}

impl<T> Cursor for ChanCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.current = match &self.receiver {
            Some(receiver) => receiver.recv().ok(),
            None => None,
        };
        if self.current.is_none() {
            self.receiver = None;
        }
        self.current.is_some()
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.receiver = None;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        Err(Error::ResetUnsupported)
    }

    fn size(&self) -> IteratorSize {
        match &self.receiver {
            Some(_) => IteratorSize::Unknown,
            None => IteratorSize::Known(0),
        }
    }
}
