//! ICMPv4 replies for a software IPv4 forwarding node.
//!
//! When the forwarding logic of a router decides that a packet has to be rejected, because its
//! time-to-live ran out or no route towards its destination exists, the original sender should be
//! told about it. Similarly, echo requests directed at the router itself should be answered. This
//! library implements exactly that path and nothing else: it takes the rejected inbound Ethernet
//! frame and turns it into a correctly framed ICMP message addressed back to the sender.
//!
//! ## Table of contents
//!
//! 1. [The wire module](wire/index.html)
//!    1. [Checksums](wire/checksum/index.html)
//! 2. [The icmp layer](layer/icmp/index.html)
//! 3. [Network interfaces](nic/index.html)
//!
//! ## Design
//!
//! The routing decision, the interface table and the transmission of raw frames are not part of
//! this library. They are represented by the [`nic::Interfaces`] and [`nic::Device`] traits that
//! the surrounding program implements. Building a reply is a single synchronous transformation
//! that retains no state between calls, other than a counter for the IP identification field.
//!
//! Each reply is built in one exclusively owned buffer which does not outlive the call that
//! created it. Nothing else is allocated.
//!
//! [`nic::Interfaces`]: nic/trait.Interfaces.html
//! [`nic::Device`]: nic/trait.Device.html
#![warn(missing_docs)]
#![warn(unreachable_pub)]

// tests should be able to use `std`
#![cfg_attr(all(
    not(feature = "std"),
    not(test)),
no_std)]

#[macro_use] mod macros;
pub mod layer;
pub mod nic;
pub mod wire;

/// The `alloc` crate, used for the outgoing frame buffers.
pub extern crate alloc;
