//! The resumption trigger holding the at-most-one parked reader.

use std::task::Waker;

use log::trace;

/// Slot for the one logical task currently parked inside a read,
/// waiting for input.
///
/// Registering a second listener silently overwrites the first: there
/// is no queue and no fairness. An overwritten listener is never
/// woken again, so concurrent readers on the same console starve all
/// but the last one. The design is single-consumer.
#[derive(Debug, Default)]
pub struct Listener {
    waker: Option<Waker>,
}

impl Listener {
    /// Stores the given waker as the pending listener, overwriting
    /// any previous one.
    pub fn register(&mut self, waker: &Waker) {
        if self.waker.is_some() {
            trace!("overwrite pending listener");
        }

        self.waker = Some(waker.clone());
    }

    /// Wakes the pending listener, if any.
    ///
    /// The slot is left populated: clearing is done by the resumed
    /// task itself, before it touches the buffer.
    pub fn wake(&self) {
        match &self.waker {
            Some(waker) => {
                trace!("wake pending listener");
                waker.wake_by_ref();
            }
            None => trace!("no pending listener to wake"),
        }
    }

    /// Empties the slot, so stale listeners never linger across
    /// reads.
    pub fn clear(&mut self) {
        self.waker = None;
    }
}
