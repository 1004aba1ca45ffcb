//! Chunk sources: where asynchronous input comes from.

use std::{
    cell::RefCell,
    io::{stdin, BufRead},
    rc::Rc,
    thread,
};

use log::{debug, error, trace};

use crate::console::Shared;

/// An asynchronous source of decoded text chunks.
///
/// A source is subscribed exactly once and is expected to push every
/// chunk it receives into the given [`ChunkSink`], in arrival order,
/// indefinitely. Chunk sizes and boundaries are determined by the
/// source, not by line content.
pub trait ChunkSource {
    fn subscribe(&mut self, sink: ChunkSink);
}

/// Write end handed to a [`ChunkSource`] on subscription.
///
/// This is the only writer of chunks into the line buffer.
#[derive(Clone)]
pub struct ChunkSink {
    shared: Rc<RefCell<Shared>>,
}

impl ChunkSink {
    pub(crate) fn new(shared: Rc<RefCell<Shared>>) -> Self {
        Self { shared }
    }

    /// Delivers one chunk of text.
    ///
    /// The chunk is appended to the line buffer strictly before the
    /// pending listener is woken, so a resumed reader always observes
    /// at least the chunk that woke it. The wake step itself checks
    /// whether anyone is listening.
    pub fn push(&self, chunk: &str) {
        debug!("received chunk of {} bytes", chunk.len());

        let mut shared = self.shared.borrow_mut();
        shared.buffer.append(chunk);
        shared.listener.wake();
    }
}

/// Chunk source reading the process standard input.
///
/// Input is read line by line on a dedicated thread and forwarded
/// into the cooperative scheduler through an unbounded channel, so
/// the event loop never blocks on the OS read. Must be subscribed
/// from within the task runner (see [`crate::runtime::run`]).
///
/// When standard input closes or fails, the forwarding loop stops:
/// no closed signal reaches readers, a task still waiting for input
/// stays parked.
#[derive(Clone, Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl ChunkSource for StdinSource {
    fn subscribe(&mut self, sink: ChunkSink) {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();

        let reader = thread::Builder::new()
            .name(String::from("stdin-chunks"))
            .spawn(move || loop {
                let mut chunk = String::new();

                match stdin().lock().read_line(&mut chunk) {
                    Ok(0) => {
                        debug!("standard input closed");
                        break;
                    }
                    Ok(_) => {
                        trace!("forward chunk of {} bytes", chunk.len());

                        if tx.send(chunk).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        error!("cannot read from standard input: {err}");
                        break;
                    }
                }
            });

        if let Err(err) = reader {
            error!("cannot spawn standard input reader thread: {err}");
            return;
        }

        tokio::task::spawn_local(async move {
            while let Some(chunk) = rx.recv().await {
                sink.push(&chunk);
            }

            debug!("no more chunks will arrive");
        });
    }
}
