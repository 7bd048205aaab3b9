//! The process logic of protocol layers.
//!
//! Each protocol layer is split into two parts; the packet logic contained in `wire` and the
//! processing part in this module. An endpoint represents the local state and configuration of a
//! protocol. The state is open to modifications as part of a user program while processing does
//! not take place, similar to reconfiguration on the OS level with utilities such as `sysctl`.
//!
//! Only the icmp layer exists here. It answers on behalf of the forwarding logic: errors about
//! datagrams that could not be delivered, and echo requests directed at the node itself.
use core::fmt;

use crate::nic::SendError;
use crate::wire::{self, Icmpv4Message};

pub mod icmp;

/// The result type of layer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The reasons for not sending a reply.
///
/// Every variant other than `SendFailure` is detected before any buffer for the reply is
/// allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The inbound frame is too short or inconsistent for the requested reply.
    Malformed(wire::Error),

    /// The interface table does not know the outgoing interface.
    UnknownInterface,

    /// No reply of the requested message type can be built.
    UnsupportedMessage(Icmpv4Message),

    /// The endpoint was configured to not send this kind of reply.
    Denied,

    /// The inbound frame must not be answered with this kind of reply.
    ///
    /// RFC 1812 forbids errors about datagrams that were not sent to or from a single host, about
    /// non-initial fragments and about ICMP errors. No reply at all goes to a source that does not
    /// name a single host.
    Suppressed,

    /// The device did not transmit the finished reply.
    SendFailure(SendError),
}

/// Can convert from a wire error.
///
/// This indicates that the inbound frame could not be parsed far enough.
impl From<wire::Error> for Error {
    fn from(err: wire::Error) -> Self {
        Error::Malformed(err)
    }
}

impl From<SendError> for Error {
    fn from(err: SendError) -> Self {
        Error::SendFailure(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Malformed(err) => write!(f, "malformed inbound frame: {}", err),
            Error::UnknownInterface => write!(f, "unknown outgoing interface"),
            Error::UnsupportedMessage(msg) => write!(f, "unsupported icmp message type: {}", msg),
            Error::Denied => write!(f, "reply denied by configuration"),
            Error::Suppressed => write!(f, "reply suppressed for this frame"),
            Error::SendFailure(err) => write!(f, "failed to send reply: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Malformed(err) => Some(err),
            Error::SendFailure(err) => Some(err),
            _ => None,
        }
    }
}
