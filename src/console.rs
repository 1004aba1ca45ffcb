//! The console: blocking-style line input and output for one logical
//! task.

use std::{
    cell::RefCell,
    future::Future,
    io::{stdout, Write},
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use log::{debug, trace};

use crate::{
    buffer::LineBuffer,
    listener::Listener,
    source::{ChunkSink, ChunkSource},
};

/// State shared between the console, its read futures and the chunk
/// sink.
///
/// Single-threaded by construction: push callbacks and task code only
/// ever interleave on the current-thread scheduler, they never run
/// concurrently.
pub(crate) struct Shared {
    pub(crate) buffer: LineBuffer,
    pub(crate) listener: Listener,

    /// One-time subscription guard: set on the first initialization,
    /// never reset.
    initialized: bool,

    /// The not-yet-subscribed chunk source, taken on the first
    /// initialization.
    source: Option<Box<dyn ChunkSource>>,
}

/// Handle to blocking-style line input and output.
///
/// Cheap to clone: all clones share the same line buffer and listener
/// slot. The design is single-consumer, only one logical task may
/// read from a given console at a time (see [`Listener`]).
#[derive(Clone)]
pub struct Console {
    shared: Rc<RefCell<Shared>>,
    output: Rc<RefCell<Box<dyn Write>>>,
}

impl Console {
    /// Creates a new console over the given chunk source, printing to
    /// the process standard output.
    pub fn new(source: impl ChunkSource + 'static) -> Self {
        Self::with_output(source, stdout())
    }

    /// Creates a new console over the given chunk source, printing to
    /// the given output sink.
    pub fn with_output(source: impl ChunkSource + 'static, output: impl Write + 'static) -> Self {
        let shared = Shared {
            buffer: LineBuffer::new(),
            listener: Listener::default(),
            initialized: false,
            source: Some(Box::new(source)),
        };

        Self {
            shared: Rc::new(RefCell::new(shared)),
            output: Rc::new(RefCell::new(Box::new(output))),
        }
    }

    /// Subscribes to the chunk source, once.
    ///
    /// Idempotent: the subscription happens on the first call only,
    /// later calls are no-ops. Reading a line calls this on its own,
    /// so calling it up front is optional.
    pub fn ensure_initialized(&self) {
        let source = {
            let mut shared = self.shared.borrow_mut();

            if shared.initialized {
                return;
            }

            shared.initialized = true;
            shared.source.take()
        };

        // subscribe outside the borrow: the source may push chunks
        // synchronously
        if let Some(mut source) = source {
            debug!("subscribe to chunk source");
            source.subscribe(ChunkSink::new(Rc::clone(&self.shared)));
        }
    }

    /// Reads one line of input, parking the calling task until input
    /// is available.
    ///
    /// From the caller's perspective this is an ordinary call that
    /// returns a line of text; all asynchrony is hidden. The returned
    /// line follows the extraction policy of
    /// [`LineBuffer::extract_line`]: a chunk without a trailing
    /// newline is returned as a whole line.
    ///
    /// There is no timeout and no cancellation path: when no input
    /// ever arrives, the task stays parked indefinitely.
    pub fn read_line(&self) -> ReadLine {
        ReadLine {
            console: self.clone(),
        }
    }

    /// Writes the given text plus a line terminator to the output
    /// sink.
    ///
    /// Synchronous, never suspends. Write errors are logged and
    /// swallowed.
    pub fn print_line(&self, line: &str) {
        let mut output = self.output.borrow_mut();

        if let Err(err) = writeln!(output, "{line}").and_then(|_| output.flush()) {
            debug!("ignore output error: {err}");
        }
    }
}

/// Future resolving to one line of input.
///
/// This is the suspension point: polling on an empty buffer registers
/// the task as the pending listener and parks it, the next pushed
/// chunk wakes it back up.
#[must_use = "futures do nothing unless polled or awaited"]
pub struct ReadLine {
    console: Console,
}

impl Future for ReadLine {
    type Output = String;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<String> {
        self.console.ensure_initialized();

        let mut shared = self.console.shared.borrow_mut();

        // register first, check after: a chunk pushed between the
        // check and the park would otherwise be missed
        shared.listener.register(cx.waker());

        if shared.buffer.is_empty() {
            trace!("no pending input, park until the next chunk");
            return Poll::Pending;
        }

        shared.listener.clear();
        Poll::Ready(shared.buffer.extract_line())
    }
}
