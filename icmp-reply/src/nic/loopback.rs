//! Implementation of a software device that keeps what it sends.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use super::{Device, SendError};

/// A software device recording every transmitted frame.
///
/// Keeps up to a fixed number of frames, after which it reports an exhausted queue until the
/// frames are taken out again. It can also be marked as down to emulate a failing link.
#[derive(Debug, Default)]
pub struct Loopback {
    sent: Vec<Sent>,
    capacity: usize,
    down: bool,
}

/// One frame that went through a `Loopback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    /// A copy of the transmitted frame.
    pub frame: Vec<u8>,
    /// The interface it was sent on, as displayed.
    pub iface: String,
}

impl Loopback {
    /// Create a device that queues up to `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Loopback {
            sent: Vec::with_capacity(capacity),
            capacity,
            down: false,
        }
    }

    /// Mark the link as operational (the default) or as down.
    pub fn set_up(&mut self, up: bool) {
        self.down = !up;
    }

    /// All frames in the queue, oldest first.
    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    /// Remove and return all queued frames.
    pub fn take(&mut self) -> Vec<Sent> {
        core::mem::take(&mut self.sent)
    }
}

impl<I: fmt::Display + ?Sized> Device<I> for Loopback {
    fn send(&mut self, frame: &[u8], iface: &I) -> Result<(), SendError> {
        if self.down {
            return Err(SendError::LinkDown);
        }

        if self.sent.len() >= self.capacity {
            return Err(SendError::Exhausted);
        }

        self.sent.push(Sent {
            frame: frame.to_vec(),
            iface: iface.to_string(),
        });
        Ok(())
    }
}
