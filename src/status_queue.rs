//! Thread-safe queue of status lines handed from game systems to the
//! renderer: many producers, one consumer, bounded.

use crossbeam_channel::{Receiver, Sender, bounded};

/// A bounded, blocking queue of status lines.
///
/// `enqueue` blocks once the queue holds `capacity` lines; `dequeue` blocks
/// until a line arrives. Neither has cancellation semantics, so callers
/// that cannot afford to block must use [`StatusQueue::try_dequeue`].
pub struct StatusQueue {
    sender: Sender<String>,
    receiver: Receiver<String>,
}

impl StatusQueue {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// A cloneable handle for producer threads.
    pub fn sender(&self) -> StatusSender {
        StatusSender {
            sender: self.sender.clone(),
        }
    }

    /// Append a line, blocking while the queue is full.
    pub fn enqueue(&self, line: impl Into<String>) {
        // The queue owns a receiver, so the channel cannot disconnect.
        let _ = self.sender.send(line.into());
    }

    /// Take the oldest line, blocking until one is available.
    pub fn dequeue(&self) -> String {
        self.receiver
            .recv()
            .expect("status queue owns a live sender")
    }

    /// Take the oldest line if one is waiting.
    pub fn try_dequeue(&self) -> Option<String> {
        self.receiver.try_recv().ok()
    }
}

impl Default for StatusQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Producer handle for a [`StatusQueue`].
#[derive(Clone)]
pub struct StatusSender {
    sender: Sender<String>,
}

impl StatusSender {
    /// Append a line, blocking while the queue is full.
    pub fn enqueue(&self, line: impl Into<String>) {
        let _ = self.sender.send(line.into());
    }
}
