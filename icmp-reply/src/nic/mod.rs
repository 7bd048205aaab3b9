//! The collaborators at the edge of the library.
//!
//! Deciding *when* to send an ICMP error, keeping the table of interfaces and actually putting
//! frames on a link are jobs of the surrounding forwarding node. This module defines the two
//! capabilities that the icmp layer requires from it, and a software implementation of each for
//! testing and experimentation.
//!
//! Both are consulted synchronously from within a single reply. When replies are built from
//! several threads at once, the implementations must themselves be safe for that usage.
use core::fmt;

use crate::wire::{EthernetAddress, Ipv4Address};

pub mod loopback;
mod table;

pub use self::loopback::Loopback;
pub use self::table::Table;

/// The addresses of one interface, as kept in the interface table.
///
/// The icmp layer only ever reads these.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Interface {
    /// The link layer address used as the source of outgoing frames.
    pub hardware_addr: EthernetAddress,
    /// The network address used as the source of outgoing packets.
    pub ip_addr: Ipv4Address,
    /// The maximum transmission unit of the attached link, in octets.
    ///
    /// Reported to senders whose datagrams needed fragmentation but forbade it.
    pub mtu: u16,
}

/// A read-only table of interfaces.
pub trait Interfaces {
    /// The identifier by which interfaces are named, e.g. `str` for names like `eth0`.
    type Id: ?Sized + fmt::Debug;

    /// Find the addresses of an interface.
    ///
    /// Returns `None` if no interface of that identifier exists.
    fn lookup(&self, id: &Self::Id) -> Option<Interface>;
}

/// A raw frame transmission capability.
///
/// The device chooses the link of the interface identified by `I`.
pub trait Device<I: ?Sized> {
    /// Transmit one complete Ethernet frame.
    ///
    /// The frame is only borrowed for the duration of the call, a device that queues it must copy
    /// it. An error means that nothing was transmitted.
    fn send(&mut self, frame: &[u8], iface: &I) -> Result<(), SendError>;
}

/// The reason a device did not transmit a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SendError {
    /// There were not enough resources to queue the frame.
    Exhausted,

    /// The link of the interface is not operational.
    LinkDown,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SendError::Exhausted => write!(f, "transmit queue exhausted"),
            SendError::LinkDown  => write!(f, "link is down"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SendError { }

impl<T: Interfaces + ?Sized> Interfaces for &'_ T {
    type Id = T::Id;

    fn lookup(&self, id: &Self::Id) -> Option<Interface> {
        (**self).lookup(id)
    }
}

impl<I: ?Sized, D: Device<I> + ?Sized> Device<I> for &'_ mut D {
    fn send(&mut self, frame: &[u8], iface: &I) -> Result<(), SendError> {
        (**self).send(frame, iface)
    }
}
