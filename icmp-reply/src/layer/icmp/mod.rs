//! Sending ICMP replies on behalf of a forwarding node.
//!
//! Only supports Icmpv4 on Ethernet links.
//!
//! A router that has to discard a datagram should tell its sender why, and RFC 1812 requires that
//! echo requests to the router itself are answered:
//!
//! > 4.3.3.6 Echo Request/Reply
//!
//!   A router MUST implement an ICMP Echo server function that receives
//!   Echo Requests sent to the router, and sends corresponding Echo
//!   Replies.
//!
//! The [`Endpoint`] builds these replies from the inbound frame that caused them. The forwarding
//! logic stays in charge of deciding when to do so.
//!
//! ## Error messages
//!
//! Destination unreachable and time exceeded messages quote the first 28 octets of the offending
//! datagram, its header followed by eight octets of its payload. The reply is always 70 octets
//! long including the link layer header. For `FragRequired` the MTU of the outgoing interface is
//! reported as the next-hop MTU as described in RFC 1191.
//!
//! ## Echo replies
//!
//! The identifier, sequence number and data of the request are mirrored verbatim, including any
//! padding the link layer appended to the request frame. For a request without IP options the
//! reply frame has exactly the length of the request frame.
//!
//! ## Suppression
//!
//! As required by RFC 1812, section 4.3.2.7, no error is sent about a datagram that was a link
//! layer broadcast or multicast, that was addressed to the limited broadcast or a multicast group,
//! that is a non-initial fragment, or that itself carries an ICMP error. Neither errors nor echo
//! replies go to a source that does not name a single host.
//!
//! ## Addressing
//!
//! Replies are sent straight back: the link layer destination is the source of the inbound frame
//! and the network destination is the source of the inbound datagram. The source addresses are
//! those of the outgoing interface as found in the [`Interfaces`] table.
//!
//! [`Endpoint`]: struct.Endpoint.html
//! [`Interfaces`]: ../../nic/trait.Interfaces.html
mod endpoint;
#[cfg(test)]
mod tests;

pub use endpoint::{
    Endpoint,
    Ident,
    Sender,
};

/// The default time-to-live of replies.
pub const DEFAULT_HOP_LIMIT: u8 = 127;
