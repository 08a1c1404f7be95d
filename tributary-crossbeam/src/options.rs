use std::io;
use std::thread;

/// Options for the worker threads behind generators and channels.
///
/// The free functions [`generate`](crate::generate),
/// [`generate_results`](crate::generate_results) and [`chan`](crate::chan)
/// use the defaults and panic if the worker cannot be spawned. The methods of
/// this type report spawn failures instead.
///
/// ```
/// use tributary_core::Cursor;
/// use tributary_crossbeam::GeneratorOptions;
///
/// let mut squares = GeneratorOptions::new()
///     .name("squares")
///     .stack_size(256 * 1024)
///     .generate(|co| {
///         for i in 0..4 {
///             co.yield_value(i * i)?;
///         }
///         Ok(())
///     })?;
///
/// assert_eq!(squares.collect(), vec![0, 1, 4, 9]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the worker thread; the name shows up in panic messages and logs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stack size of the worker thread, in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    pub(crate) fn spawn<F>(&self, work: F) -> io::Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }

        // Workers are detached; they end when their body returns.
        builder.spawn(work).map(drop)
    }
}

pub(crate) fn worker_name() -> String {
    thread::current()
        .name()
        .unwrap_or("<unnamed>")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;

    #[test]
    fn test_spawn_applies_name() {
        let (sender, receiver) = channel::bounded(1);

        GeneratorOptions::new()
            .name("tributary-test")
            .spawn(move || sender.send(worker_name()).unwrap())
            .unwrap();

        assert_eq!(receiver.recv().unwrap(), "tributary-test");
    }

    #[test]
    fn test_default_is_unnamed() {
        let (sender, receiver) = channel::bounded(1);

        GeneratorOptions::default()
            .spawn(move || sender.send(worker_name()).unwrap())
            .unwrap();

        assert_eq!(receiver.recv().unwrap(), "<unnamed>");
    }
}
