use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU16, Ordering};

use crate::layer::{Error, Result};
use crate::nic::{Device, Interface, Interfaces};
use crate::wire::{self, ethernet_frame, icmpv4_packet, ipv4_packet};
use crate::wire::{EthernetProtocol, EthernetRepr, IpProtocol, Ipv4Repr};
use crate::wire::{Icmpv4DstUnreachable, Icmpv4Message, Icmpv4TimeExceeded};
use crate::wire::{ICMPV4_ERROR_DATA_LEN, ICMPV4_HEADER_LEN, IPV4_HEADER_LEN};

use super::DEFAULT_HOP_LIMIT;

/// How the identification field of replies is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ident {
    /// Number replies with a counter private to the endpoint.
    ///
    /// The counter wraps around after 65536 replies, which is fine since replies are never
    /// fragmented.
    Sequential,

    /// Use the total length of the reply datagram.
    ///
    /// Some older peers were built against nodes doing this. Without such a peer there is no
    /// reason to choose it, replies of the same kind then all carry the same identification.
    TotalLength,
}

/// An icmp reply generator.
///
/// Holds the configuration of outgoing replies. Apart from the counter for the identification
/// field it is not modified by sending, so a single endpoint can be shared between threads that
/// all reply to packets concurrently.
#[derive(Debug)]
pub struct Endpoint {
    /// The time-to-live of replies.
    hop_limit: u8,

    /// Whether to set the "don't fragment" flag on replies.
    dont_frag: bool,

    /// The strategy for the identification field.
    ident: Ident,

    /// Refuse to send echo replies.
    deny_echo: bool,

    /// Next identification for `Ident::Sequential`.
    next_ident: AtomicU16,
}

/// An endpoint borrowed for sending, together with the collaborators of the node.
pub struct Sender<'a, T: ?Sized, D: ?Sized> {
    endpoint: &'a Endpoint,
    interfaces: &'a T,
    device: &'a mut D,
}

/// A validated view of the frame being answered.
struct Request<'a> {
    msg_type: Icmpv4Message,
    frame: &'a ethernet_frame,
    packet: &'a ipv4_packet,
    body: Body<'a>,
}

enum Body<'a> {
    /// The data of the echo request, following its checksum.
    Echo(&'a [u8]),

    /// The leading part of the offending datagram.
    Quote(&'a [u8]),
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint {
            hop_limit: DEFAULT_HOP_LIMIT,
            dont_frag: true,
            ident: Ident::Sequential,
            deny_echo: false,
            next_ident: AtomicU16::new(0),
        }
    }
}

impl Endpoint {
    /// Create a new endpoint with a default configuration.
    ///
    /// Replies have a time-to-live of 127, forbid fragmentation and are numbered sequentially.
    /// Echo requests are answered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live of replies.
    pub fn set_hop_limit(&mut self, hop_limit: u8) {
        self.hop_limit = hop_limit;
    }

    /// Set whether replies forbid fragmentation (on by default).
    pub fn set_dont_frag(&mut self, dont_frag: bool) {
        self.dont_frag = dont_frag;
    }

    /// Choose how the identification field of replies is filled.
    pub fn set_ident(&mut self, ident: Ident) {
        self.ident = ident;
    }

    /// Set whether to refuse echo replies.
    ///
    /// A silent endpoint still reports errors but echo replies fail with `Error::Denied`. This
    /// can be useful for a middlebox that should not appear as a hop to pings.
    pub fn silent(&mut self, silent: bool) {
        self.deny_echo = silent;
    }

    /// Use the endpoint to send replies through a device.
    pub fn sender<'a, T, D>(&'a self, interfaces: &'a T, device: &'a mut D) -> Sender<'a, T, D>
    where
        T: Interfaces + ?Sized,
        D: Device<T::Id> + ?Sized,
    {
        Sender { endpoint: self, interfaces, device, }
    }

    /// Build the complete reply frame to an inbound frame without sending it.
    ///
    /// The `interface` provides the source addresses of the reply. Fails in the same way as
    /// [`Sender::answer`] would before sending.
    ///
    /// [`Sender::answer`]: struct.Sender.html#method.answer
    pub fn build(&self, frame: &[u8], interface: &Interface, msg_type: Icmpv4Message, code: u8)
        -> Result<Vec<u8>>
    {
        let request = self.check(frame, msg_type)?;
        Ok(self.emit(&request, interface, code))
    }

    /// Check that a reply of the message type can be built for the frame.
    fn check<'a>(&self, frame: &'a [u8], msg_type: Icmpv4Message) -> Result<Request<'a>> {
        match msg_type {
            Icmpv4Message::EchoReply if self.deny_echo => return Err(Error::Denied),
            Icmpv4Message::EchoReply => (),
            msg if msg.is_forwarding_error() => (),
            other => return Err(Error::UnsupportedMessage(other)),
        }

        let frame = ethernet_frame::new_checked(frame)?;
        let packet = ipv4_packet::new_unchecked(frame.payload_slice());
        packet.check_header()?;

        let body = if msg_type == Icmpv4Message::EchoReply {
            if packet.protocol() != IpProtocol::Icmp {
                return Err(Error::Malformed(wire::Error::Unrecognized));
            }

            let message = &packet.as_bytes()[usize::from(packet.header_len())..];
            if message.len() < ICMPV4_HEADER_LEN {
                return Err(Error::Malformed(wire::Error::Truncated));
            }

            let data = &message[ICMPV4_HEADER_LEN..];
            // The reply must still be representable in the total length field.
            if IPV4_HEADER_LEN + ICMPV4_HEADER_LEN + data.len() > usize::from(u16::MAX) {
                return Err(Error::Malformed(wire::Error::Malformed));
            }
            Body::Echo(data)
        } else {
            let quote_len = IPV4_HEADER_LEN + ICMPV4_ERROR_DATA_LEN;
            let datagram = packet.as_bytes();
            if datagram.len() < quote_len {
                return Err(Error::Malformed(wire::Error::Truncated));
            }
            Body::Quote(&datagram[..quote_len])
        };

        if !Self::may_answer(msg_type, frame, packet) {
            return Err(Error::Suppressed);
        }

        Ok(Request { msg_type, frame, packet, body, })
    }

    /// Apply the rules of RFC 1812, section 4.3.2.7, to a validated frame.
    fn may_answer(msg_type: Icmpv4Message, frame: &ethernet_frame, packet: &ipv4_packet) -> bool {
        // The reply goes straight back to both sources.
        if !frame.src_addr().is_unicast() || !packet.src_addr().is_unicast() {
            return false;
        }

        if !msg_type.is_forwarding_error() {
            return true;
        }

        let dst_addr = packet.dst_addr();
        if !frame.dst_addr().is_unicast() || dst_addr.is_broadcast() || dst_addr.is_multicast() {
            return false;
        }

        if packet.frag_offset() != 0 {
            return false;
        }

        let about_error = packet.protocol() == IpProtocol::Icmp && packet.as_bytes()
            .get(usize::from(packet.header_len()))
            .map_or(false, |&msg| Icmpv4Message::from(msg).is_error());
        !about_error
    }

    /// Allocate and fill in the reply.
    fn emit(&self, request: &Request, interface: &Interface, code: u8) -> Vec<u8> {
        let icmp_len = ICMPV4_HEADER_LEN + match request.body {
            Body::Echo(data) => data.len(),
            // The four octets following the checksum, then the quote.
            Body::Quote(quote) => 4 + quote.len(),
        };
        let ip_len = IPV4_HEADER_LEN + icmp_len;
        let mut buffer = vec![0; ethernet_frame::buffer_len(ip_len)];

        let frame = ethernet_frame::new_unchecked_mut(&mut buffer);
        EthernetRepr {
            src_addr: interface.hardware_addr,
            dst_addr: request.frame.src_addr(),
            ethertype: EthernetProtocol::Ipv4,
        }.emit(frame);

        let (ip_header, message) = frame
            .payload_mut_slice()
            .split_at_mut(IPV4_HEADER_LEN);

        let icmp = icmpv4_packet::new_unchecked_mut(message);
        icmp.set_msg_type(request.msg_type);
        icmp.set_msg_code(code);
        match request.body {
            Body::Echo(data) => {
                icmp.data_mut_slice().copy_from_slice(data);
            },
            Body::Quote(quote) => {
                icmp.clear_unused();
                let frag_required = request.msg_type == Icmpv4Message::DstUnreachable
                    && Icmpv4DstUnreachable::from(code) == Icmpv4DstUnreachable::FragRequired;
                if frag_required {
                    icmp.set_next_hop_mtu(interface.mtu);
                }
                icmp.payload_mut_slice().copy_from_slice(quote);
            },
        }
        icmp.fill_checksum();

        Ipv4Repr {
            src_addr: interface.ip_addr,
            dst_addr: request.packet.src_addr(),
            protocol: IpProtocol::Icmp,
            payload_len: icmp_len,
            hop_limit: self.hop_limit,
            ident: self.next_ident(ip_len as u16),
            dont_frag: self.dont_frag,
        }.emit(ipv4_packet::new_unchecked_mut(ip_header));

        buffer
    }

    fn next_ident(&self, total_len: u16) -> u16 {
        match self.ident {
            Ident::Sequential => self.next_ident.fetch_add(1, Ordering::Relaxed),
            Ident::TotalLength => total_len,
        }
    }
}

impl<T, D> Sender<'_, T, D>
where
    T: Interfaces + ?Sized,
    D: Device<T::Id> + ?Sized,
{
    /// Answer an inbound frame with an ICMP message of the given type and code.
    ///
    /// The reply leaves through the interface `iface`. Supported message types are echo reply,
    /// destination unreachable and time exceeded. Frames that must not be answered, such as
    /// broadcasts or ICMP errors, are refused with `Error::Suppressed` before the interface is
    /// looked up. Nothing is sent unless the reply could be built completely, and the reply buffer
    /// never outlives this call.
    pub fn answer(&mut self, frame: &[u8], iface: &T::Id, msg_type: Icmpv4Message, code: u8)
        -> Result<()>
    {
        let request = match self.endpoint.check(frame, msg_type) {
            Ok(request) => request,
            Err(err) => {
                net_debug!("icmp: not answering with {}: {}", msg_type, err);
                return Err(err);
            },
        };

        let interface = match self.interfaces.lookup(iface) {
            Some(interface) => interface,
            None => {
                net_debug!("icmp: no interface {:?} for {}", iface, msg_type);
                return Err(Error::UnknownInterface);
            },
        };

        let reply = self.endpoint.emit(&request, &interface, code);
        net_trace!("icmp: {} code {} to {} via {:?}, {} octets",
            msg_type, code, request.packet.src_addr(), iface, reply.len());

        self.device.send(&reply, iface).map_err(|err| {
            net_debug!("icmp: sending {} via {:?} failed: {}", msg_type, iface, err);
            Error::SendFailure(err)
        })
    }

    /// Answer an echo request that was directed at this node.
    pub fn echo_reply(&mut self, frame: &[u8], iface: &T::Id) -> Result<()> {
        self.answer(frame, iface, Icmpv4Message::EchoReply, 0)
    }

    /// Report a datagram that could not be delivered towards its destination.
    pub fn unreachable(&mut self, frame: &[u8], iface: &T::Id, reason: Icmpv4DstUnreachable)
        -> Result<()>
    {
        self.answer(frame, iface, Icmpv4Message::DstUnreachable, reason.into())
    }

    /// Report a datagram that was discarded because its time-to-live ran out.
    pub fn time_exceeded(&mut self, frame: &[u8], iface: &T::Id, reason: Icmpv4TimeExceeded)
        -> Result<()>
    {
        self.answer(frame, iface, Icmpv4Message::TimeExceeded, reason.into())
    }
}
