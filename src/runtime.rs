//! The task runner driving the one logical task.

use std::{future::Future, io};

use log::debug;
use thiserror::Error;
use tokio::{runtime::Builder, task::LocalSet};

use crate::{console::Console, source::ChunkSource};

/// Errors that can occur while starting the task runner.
#[derive(Debug, Error)]
pub enum RunError {
    /// The underlying current-thread runtime could not be built.
    #[error("cannot start the line I/O runtime")]
    StartRuntime(#[source] io::Error),
}

/// Runs the given program as one logical task over the given chunk
/// source.
///
/// The program receives a [`Console`] and expresses plain linear
/// logic: it reads a sequence of lines interleaved with printing
/// lines, and returns like an ordinary function. Every
/// `read_line().await` may park and later resume the task, invisibly.
///
/// Everything is driven by a current-thread scheduler: the event loop
/// and the logical task interleave on a single OS thread, they never
/// run in parallel. One logical task per console: see
/// [`crate::listener::Listener`] for what happens to concurrent
/// readers.
pub fn run<S, P, F>(source: S, program: P) -> Result<F::Output, RunError>
where
    S: ChunkSource + 'static,
    P: FnOnce(Console) -> F,
    F: Future,
{
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::StartRuntime)?;

    let console = Console::new(source);

    debug!("start logical task on the current-thread scheduler");
    let local = LocalSet::new();
    Ok(runtime.block_on(local.run_until(program(console))))
}

#[cfg(test)]
mod tests {
    use tokio::task::{spawn_local, yield_now};

    use crate::source::{ChunkSink, ChunkSource};

    use super::run;

    /// Source pushing a scripted sequence of chunks, one per
    /// scheduler turn.
    struct ScriptedSource {
        chunks: Vec<&'static str>,
    }

    impl ChunkSource for ScriptedSource {
        fn subscribe(&mut self, sink: ChunkSink) {
            let chunks = std::mem::take(&mut self.chunks);

            spawn_local(async move {
                for chunk in chunks {
                    sink.push(chunk);
                    yield_now().await;
                }
            });
        }
    }

    #[test]
    fn runs_program_to_completion() {
        let _ = env_logger::try_init();

        let source = ScriptedSource {
            chunks: vec!["ping\n", "pong\n"],
        };

        let lines = run(source, |console| async move {
            let first = console.read_line().await;
            let second = console.read_line().await;
            [first, second]
        })
        .unwrap();

        assert_eq!(lines, ["ping", "pong"]);
    }
}
