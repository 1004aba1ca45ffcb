#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking-style line I/O on top of asynchronous chunk sources.
//!
//! Input sources usually deliver text asynchronously, in
//! arbitrary-sized chunks, at arbitrary times. This crate makes such
//! a source look like classic, synchronous "read a line, print a
//! line" I/O to one logical task, so linear program logic can be
//! written against it:
//!
//! - received chunks accumulate in a [line buffer],
//! - a task reading from an empty buffer parks as the [pending
//!   listener],
//! - the next pushed chunk wakes it back up, and it extracts one
//!   line.
//!
//! The [task runner] drives everything on a current-thread scheduler,
//! so parking a task never blocks the event loop. See
//! [`runtime::run`] for the entry point and [`source::ChunkSource`]
//! for plugging in a source.
//!
//! [line buffer]: crate::buffer::LineBuffer
//! [pending listener]: crate::listener::Listener
//! [task runner]: crate::runtime::run

pub mod buffer;
pub mod console;
pub mod listener;
pub mod runtime;
pub mod source;
