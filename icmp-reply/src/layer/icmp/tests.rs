use super::*;
use crate::layer::Error;
use crate::nic::{Interface, Loopback, SendError, Table};
use crate::wire::{self, ethernet_frame, icmpv4_packet, ipv4_packet};
use crate::wire::{EthernetAddress, EthernetProtocol, EthernetRepr};
use crate::wire::{IpProtocol, Ipv4Address, Ipv4Repr};
use crate::wire::{Icmpv4DstUnreachable, Icmpv4Message, Icmpv4TimeExceeded};

const HOST_MAC: EthernetAddress = EthernetAddress([0x52, 0x54, 0x00, 0x12, 0x34, 0x56]);
const HOST_IP: Ipv4Address = Ipv4Address::new(10, 0, 1, 2);
const REMOTE_IP: Ipv4Address = Ipv4Address::new(192, 168, 7, 7);

const ROUTER_MAC: EthernetAddress = EthernetAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);

const ETH0: Interface = Interface {
    hardware_addr: EthernetAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ip_addr: Ipv4Address::new(172, 16, 0, 1),
    mtu: 1500,
};

const ETH1: Interface = Interface {
    hardware_addr: ROUTER_MAC,
    ip_addr: Ipv4Address::new(10, 0, 1, 1),
    mtu: 1400,
};

static INTERFACES: [(&str, Interface); 2] = [("eth0", ETH0), ("eth1", ETH1)];

static UDP_PAYLOAD: [u8; 24] = [
    0xc0, 0x01, 0x82, 0x9b, 0x00, 0x18, 0x00, 0x00,
    b'h', b'e', b'l', b'l', b'o', b' ', b'w', b'o',
    b'r', b'l', b'd', b' ', b'!', b'!', b'!', b'\n',
];

/// A udp datagram from the host on eth1 towards a remote network.
fn probe(hop_limit: u8, payload: &[u8]) -> Vec<u8> {
    let ip = Ipv4Repr {
        src_addr: HOST_IP,
        dst_addr: REMOTE_IP,
        protocol: IpProtocol::Udp,
        payload_len: payload.len(),
        hop_limit,
        ident: 0x4242,
        dont_frag: false,
    };

    let mut buffer = vec![0; ethernet_frame::buffer_len(ip.buffer_len() + payload.len())];
    let frame = ethernet_frame::new_unchecked_mut(&mut buffer);
    EthernetRepr {
        src_addr: HOST_MAC,
        dst_addr: ROUTER_MAC,
        ethertype: EthernetProtocol::Ipv4,
    }.emit(frame);
    let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
    ip.emit(packet);
    packet.payload_mut_slice().copy_from_slice(payload);
    buffer
}

/// An echo request from the host to the router, followed by link layer padding.
fn echo_request(data: &[u8], padding: usize) -> Vec<u8> {
    let icmp_len = 8 + data.len();
    let ip = Ipv4Repr {
        src_addr: HOST_IP,
        dst_addr: ETH1.ip_addr,
        protocol: IpProtocol::Icmp,
        payload_len: icmp_len,
        hop_limit: 64,
        ident: 0x0101,
        dont_frag: true,
    };

    let len = ethernet_frame::buffer_len(ip.buffer_len() + icmp_len) + padding;
    let mut buffer = vec![0; len];
    let frame = ethernet_frame::new_unchecked_mut(&mut buffer);
    EthernetRepr {
        src_addr: HOST_MAC,
        dst_addr: ROUTER_MAC,
        ethertype: EthernetProtocol::Ipv4,
    }.emit(frame);
    let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
    ip.emit(packet);
    let icmp = icmpv4_packet::new_unchecked_mut(packet.payload_mut_slice());
    icmp.set_msg_type(Icmpv4Message::EchoRequest);
    icmp.set_msg_code(0);
    icmp.set_echo_ident(0x1234);
    icmp.set_echo_seq_no(7);
    icmp.payload_mut_slice().copy_from_slice(data);
    icmp.fill_checksum();

    for byte in &mut buffer[len - padding..] {
        *byte = 0xee;
    }
    buffer
}

/// Check the common framing of a reply and return its network layer representation.
fn check_reply(reply: &[u8], iface: &Interface) -> Ipv4Repr {
    let frame = ethernet_frame::new_checked(reply).unwrap();
    assert_eq!(frame.dst_addr(), HOST_MAC);
    assert_eq!(frame.src_addr(), iface.hardware_addr);
    assert_eq!(frame.ethertype(), EthernetProtocol::Ipv4);

    let packet = ipv4_packet::new_checked(frame.payload_slice()).unwrap();
    assert_eq!(packet.header_len(), 20);
    assert_eq!(usize::from(packet.total_len()), reply.len() - 14);
    assert!(packet.verify_checksum());
    let repr = Ipv4Repr::parse(packet).unwrap();
    assert_eq!(repr.src_addr, iface.ip_addr);
    assert_eq!(repr.dst_addr, HOST_IP);
    assert_eq!(repr.protocol, IpProtocol::Icmp);

    let icmp = icmpv4_packet::new_checked(packet.payload_slice()).unwrap();
    assert!(icmp.verify_checksum());
    repr
}

fn icmp_of(reply: &[u8]) -> &wire::icmpv4_packet {
    let frame = ethernet_frame::new_unchecked(reply);
    let packet = ipv4_packet::new_unchecked(frame.payload_slice());
    icmpv4_packet::new_unchecked(packet.payload_slice())
}

#[test]
fn time_exceeded() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();

    let inbound = probe(1, &UDP_PAYLOAD);
    assert_eq!(endpoint.sender(&table, &mut nic)
        .time_exceeded(&inbound, "eth1", Icmpv4TimeExceeded::TtlExpired), Ok(()));

    assert_eq!(nic.sent().len(), 1);
    let sent = &nic.sent()[0];
    assert_eq!(sent.iface, "eth1");
    assert_eq!(sent.frame.len(), 70);

    let repr = check_reply(&sent.frame, &ETH1);
    assert_eq!(repr.hop_limit, DEFAULT_HOP_LIMIT);
    assert!(repr.dont_frag);
    assert_eq!(repr.payload_len, 36);

    let icmp = icmp_of(&sent.frame);
    assert_eq!(icmp.msg_type(), Icmpv4Message::TimeExceeded);
    assert_eq!(icmp.msg_code(), 0);
    assert_eq!(&icmp.data_slice()[..4], &[0; 4]);
    // The offending header and the udp header.
    assert_eq!(icmp.payload_slice(), &inbound[14..42]);
}

#[test]
fn error_length_is_fixed() {
    let endpoint = Endpoint::new();
    for &len in &[8, 9, 24] {
        let inbound = probe(1, &UDP_PAYLOAD[..len]);
        let reply = endpoint.build(&inbound, &ETH0, Icmpv4Message::DstUnreachable,
            Icmpv4DstUnreachable::HostUnreachable.into()).unwrap();
        assert_eq!(reply.len(), 70);
        check_reply(&reply, &ETH0);
        assert_eq!(icmp_of(&reply).payload_slice(), &inbound[14..42]);
    }
}

#[test]
fn frag_required_reports_mtu() {
    let endpoint = Endpoint::new();
    let inbound = probe(12, &UDP_PAYLOAD);

    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::DstUnreachable,
        Icmpv4DstUnreachable::FragRequired.into()).unwrap();
    check_reply(&reply, &ETH1);
    assert_eq!(icmp_of(&reply).msg_code(), 4);
    assert_eq!(icmp_of(&reply).next_hop_mtu(), 1400);

    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::DstUnreachable,
        Icmpv4DstUnreachable::NetUnreachable.into()).unwrap();
    assert_eq!(icmp_of(&reply).next_hop_mtu(), 0);

    // Same code but a different type.
    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 4).unwrap();
    assert_eq!(icmp_of(&reply).next_hop_mtu(), 0);
}

#[test]
fn echo_mirrors_request() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();

    let data = b"abcdefghijklmnopqrstuvwabcdefghi";
    let inbound = echo_request(data, 0);
    assert_eq!(endpoint.sender(&table, &mut nic).echo_reply(&inbound, "eth1"), Ok(()));

    let sent = &nic.sent()[0];
    assert_eq!(sent.frame.len(), inbound.len());
    check_reply(&sent.frame, &ETH1);

    let icmp = icmp_of(&sent.frame);
    assert_eq!(icmp.msg_type(), Icmpv4Message::EchoReply);
    assert_eq!(icmp.msg_code(), 0);
    assert_eq!(icmp.echo_ident(), 0x1234);
    assert_eq!(icmp.echo_seq_no(), 7);
    assert_eq!(icmp.payload_slice(), &data[..]);
    assert_eq!(&sent.frame[38..], &inbound[38..]);
}

#[test]
fn echo_mirrors_padding() {
    let endpoint = Endpoint::new();
    // Minimum sized Ethernet frame, without the frame check sequence.
    let inbound = echo_request(&[0x61, 0x62], 16);
    assert_eq!(inbound.len(), 60);

    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::EchoReply, 0).unwrap();
    assert_eq!(reply.len(), 60);
    check_reply(&reply, &ETH1);
    assert_eq!(&reply[38..], &inbound[38..]);
    assert_eq!(&reply[44..], &[0xee; 16][..]);
}

#[test]
fn echo_respects_options() {
    let data = [0x55; 8];
    let mut inbound = vec![0; 14 + 24 + 8 + data.len()];
    inbound[..14].copy_from_slice(&echo_request(&data, 0)[..14]);
    {
        let packet = ipv4_packet::new_unchecked_mut(&mut inbound[14..]);
        packet.set_version(4);
        packet.set_header_len(24);
        packet.set_total_len(40);
        packet.clear_flags();
        packet.set_hop_limit(64);
        packet.set_protocol(IpProtocol::Icmp);
        packet.set_src_addr(HOST_IP);
        packet.set_dst_addr(ETH1.ip_addr);
        packet.fill_checksum();
        let icmp = icmpv4_packet::new_unchecked_mut(packet.payload_mut_slice());
        icmp.set_msg_type(Icmpv4Message::EchoRequest);
        icmp.set_echo_ident(0xbeef);
        icmp.set_echo_seq_no(1);
        icmp.payload_mut_slice().copy_from_slice(&data);
        icmp.fill_checksum();
    }

    let reply = Endpoint::new().build(&inbound, &ETH1, Icmpv4Message::EchoReply, 0).unwrap();
    assert_eq!(reply.len(), inbound.len() - 4);
    check_reply(&reply, &ETH1);
    let icmp = icmp_of(&reply);
    assert_eq!(icmp.echo_ident(), 0xbeef);
    assert_eq!(icmp.payload_slice(), &data[..]);
}

#[test]
fn echo_minimum_length() {
    let endpoint = Endpoint::new();
    let mut inbound = echo_request(&[], 0);
    assert_eq!(inbound.len(), 42);

    inbound.truncate(38);
    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::EchoReply, 0).unwrap();
    assert_eq!(reply.len(), 38);

    inbound.truncate(37);
    assert_eq!(endpoint.build(&inbound, &ETH1, Icmpv4Message::EchoReply, 0),
        Err(Error::Malformed(wire::Error::Truncated)));
}

#[test]
fn echo_requires_icmp() {
    let inbound = probe(64, &UDP_PAYLOAD);
    assert_eq!(Endpoint::new().build(&inbound, &ETH1, Icmpv4Message::EchoReply, 0),
        Err(Error::Malformed(wire::Error::Unrecognized)));
}

#[test]
fn error_minimum_length() {
    let endpoint = Endpoint::new();
    let inbound = probe(1, &UDP_PAYLOAD[..8]);
    assert_eq!(inbound.len(), 42);
    assert!(endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).is_ok());
    assert_eq!(endpoint.build(&inbound[..41], &ETH1, Icmpv4Message::TimeExceeded, 0),
        Err(Error::Malformed(wire::Error::Truncated)));
}

#[test]
fn malformed_is_not_sent() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();
    let mut sender = endpoint.sender(&table, &mut nic);

    let inbound = probe(1, &UDP_PAYLOAD);
    assert_eq!(sender.time_exceeded(&inbound[..20], "eth1", Icmpv4TimeExceeded::TtlExpired),
        Err(Error::Malformed(wire::Error::Truncated)));

    let mut not_ipv4 = inbound.clone();
    not_ipv4[14] = 0x65;
    assert_eq!(sender.time_exceeded(&not_ipv4, "eth1", Icmpv4TimeExceeded::TtlExpired),
        Err(Error::Malformed(wire::Error::Unrecognized)));

    let mut short_header = inbound.clone();
    short_header[14] = 0x44;
    assert_eq!(sender.time_exceeded(&short_header, "eth1", Icmpv4TimeExceeded::TtlExpired),
        Err(Error::Malformed(wire::Error::Malformed)));

    assert!(nic.sent().is_empty());
}

#[test]
fn unknown_interface() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();

    let inbound = probe(1, &UDP_PAYLOAD);
    assert_eq!(endpoint.sender(&table, &mut nic)
        .time_exceeded(&inbound, "eth7", Icmpv4TimeExceeded::TtlExpired),
        Err(Error::UnknownInterface));
    assert!(nic.sent().is_empty());
}

#[test]
fn unsupported_message() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();
    let mut sender = endpoint.sender(&table, &mut nic);

    let inbound = probe(1, &UDP_PAYLOAD);
    for &msg in &[
        Icmpv4Message::EchoRequest,
        Icmpv4Message::Redirect,
        Icmpv4Message::ParamProblem,
        Icmpv4Message::Unknown(42),
    ] {
        assert_eq!(sender.answer(&inbound, "eth1", msg, 0),
            Err(Error::UnsupportedMessage(msg)));
    }

    // The type is checked before the frame and the interface.
    assert_eq!(sender.answer(&inbound[..20], "eth7", Icmpv4Message::Redirect, 0),
        Err(Error::UnsupportedMessage(Icmpv4Message::Redirect)));
    assert!(nic.sent().is_empty());
}

#[test]
fn malformed_before_lookup() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();

    let inbound = probe(1, &UDP_PAYLOAD);
    assert_eq!(endpoint.sender(&table, &mut nic)
        .time_exceeded(&inbound[..30], "eth7", Icmpv4TimeExceeded::TtlExpired),
        Err(Error::Malformed(wire::Error::Truncated)));
}

#[test]
fn silent_endpoint() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let mut endpoint = Endpoint::new();
    endpoint.silent(true);

    let request = echo_request(b"ping", 0);
    assert_eq!(endpoint.sender(&table, &mut nic).echo_reply(&request, "eth1"),
        Err(Error::Denied));
    assert!(nic.sent().is_empty());

    let inbound = probe(1, &UDP_PAYLOAD);
    assert_eq!(endpoint.sender(&table, &mut nic)
        .time_exceeded(&inbound, "eth1", Icmpv4TimeExceeded::TtlExpired), Ok(()));
    assert_eq!(nic.sent().len(), 1);

    endpoint.silent(false);
    assert_eq!(endpoint.sender(&table, &mut nic).echo_reply(&request, "eth1"), Ok(()));
    assert_eq!(nic.sent().len(), 2);
}

#[test]
fn send_failure() {
    let mut nic = Loopback::new(1);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();
    let inbound = probe(1, &UDP_PAYLOAD);

    nic.set_up(false);
    assert_eq!(endpoint.sender(&table, &mut nic)
        .unreachable(&inbound, "eth0", Icmpv4DstUnreachable::NetUnreachable),
        Err(Error::SendFailure(SendError::LinkDown)));

    nic.set_up(true);
    let mut sender = endpoint.sender(&table, &mut nic);
    assert_eq!(sender.unreachable(&inbound, "eth0", Icmpv4DstUnreachable::NetUnreachable),
        Ok(()));
    assert_eq!(sender.unreachable(&inbound, "eth0", Icmpv4DstUnreachable::NetUnreachable),
        Err(Error::SendFailure(SendError::Exhausted)));
    assert_eq!(nic.sent().len(), 1);
    assert_eq!(nic.sent()[0].iface, "eth0");
}

#[test]
fn sequential_ident() {
    let endpoint = Endpoint::new();
    let inbound = probe(1, &UDP_PAYLOAD);
    let idents: Vec<u16> = (0..3)
        .map(|_| endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).unwrap())
        .map(|reply| ipv4_packet::new_unchecked(&reply[14..]).ident())
        .collect();
    assert_eq!(idents, [0, 1, 2]);

    // Rejected replies do not consume an identification.
    assert!(endpoint.build(&inbound[..20], &ETH1, Icmpv4Message::TimeExceeded, 0).is_err());
    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).unwrap();
    assert_eq!(ipv4_packet::new_unchecked(&reply[14..]).ident(), 3);
}

#[test]
fn total_length_ident() {
    let mut endpoint = Endpoint::new();
    endpoint.set_ident(Ident::TotalLength);

    let inbound = probe(1, &UDP_PAYLOAD);
    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).unwrap();
    assert_eq!(ipv4_packet::new_unchecked(&reply[14..]).ident(), 56);

    let request = echo_request(&[0; 56], 0);
    let reply = endpoint.build(&request, &ETH1, Icmpv4Message::EchoReply, 0).unwrap();
    assert_eq!(ipv4_packet::new_unchecked(&reply[14..]).ident(), 84);
}

#[test]
fn configured_header() {
    let mut endpoint = Endpoint::new();
    endpoint.set_hop_limit(64);
    endpoint.set_dont_frag(false);

    let inbound = probe(1, &UDP_PAYLOAD);
    let reply = endpoint.build(&inbound, &ETH0, Icmpv4Message::TimeExceeded, 0).unwrap();
    let repr = check_reply(&reply, &ETH0);
    assert_eq!(repr.hop_limit, 64);
    assert!(!repr.dont_frag);
}

#[test]
fn endpoint_is_shareable() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<Endpoint>();
}

fn set_ip_dst(frame: &mut [u8], addr: Ipv4Address) {
    ipv4_packet::new_unchecked_mut(&mut frame[14..]).set_dst_addr(addr);
}

fn set_ip_src(frame: &mut [u8], addr: Ipv4Address) {
    ipv4_packet::new_unchecked_mut(&mut frame[14..]).set_src_addr(addr);
}

#[test]
fn no_errors_about_group_traffic() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();
    let mut sender = endpoint.sender(&table, &mut nic);

    let inbound = probe(1, &UDP_PAYLOAD);

    let mut link_broadcast = inbound.clone();
    ethernet_frame::new_unchecked_mut(&mut link_broadcast)
        .set_dst_addr(EthernetAddress::BROADCAST);
    let mut link_multicast = inbound.clone();
    ethernet_frame::new_unchecked_mut(&mut link_multicast)
        .set_dst_addr(EthernetAddress([0x01, 0x00, 0x5e, 0x00, 0x00, 0xfb]));
    let mut ip_broadcast = inbound.clone();
    set_ip_dst(&mut ip_broadcast, Ipv4Address::BROADCAST);
    let mut ip_multicast = inbound.clone();
    set_ip_dst(&mut ip_multicast, Ipv4Address::new(224, 0, 0, 251));

    for frame in &[link_broadcast, link_multicast, ip_broadcast, ip_multicast] {
        assert_eq!(sender.time_exceeded(frame, "eth1", Icmpv4TimeExceeded::TtlExpired),
            Err(Error::Suppressed));
        // Checked before the interface.
        assert_eq!(sender.unreachable(frame, "eth7", Icmpv4DstUnreachable::NetUnreachable),
            Err(Error::Suppressed));
    }

    // A directed broadcast is indistinguishable from a host here.
    let mut directed = inbound.clone();
    set_ip_dst(&mut directed, Ipv4Address::new(192, 168, 7, 255));
    assert_eq!(sender.time_exceeded(&directed, "eth1", Icmpv4TimeExceeded::TtlExpired), Ok(()));
    assert_eq!(nic.sent().len(), 1);
}

#[test]
fn no_reply_to_non_host_source() {
    let mut nic = Loopback::new(4);
    let table = Table::new(&INTERFACES);
    let endpoint = Endpoint::new();
    let mut sender = endpoint.sender(&table, &mut nic);

    for &src in &[
        Ipv4Address::new(0, 0, 0, 0),
        Ipv4Address::BROADCAST,
        Ipv4Address::new(224, 0, 0, 1),
        Ipv4Address::new(240, 0, 0, 7),
    ] {
        let mut inbound = probe(1, &UDP_PAYLOAD);
        set_ip_src(&mut inbound, src);
        assert_eq!(sender.time_exceeded(&inbound, "eth1", Icmpv4TimeExceeded::TtlExpired),
            Err(Error::Suppressed));

        let mut request = echo_request(b"ping", 0);
        set_ip_src(&mut request, src);
        assert_eq!(sender.echo_reply(&request, "eth1"), Err(Error::Suppressed));
    }

    let mut request = echo_request(b"ping", 0);
    ethernet_frame::new_unchecked_mut(&mut request)
        .set_src_addr(EthernetAddress([0x33, 0x33, 0x00, 0x00, 0x00, 0x01]));
    assert_eq!(sender.echo_reply(&request, "eth1"), Err(Error::Suppressed));

    assert!(nic.sent().is_empty());
}

#[test]
fn echo_to_broadcast_is_answered() {
    let endpoint = Endpoint::new();
    let mut request = echo_request(b"ping", 0);
    set_ip_dst(&mut request, Ipv4Address::BROADCAST);

    let reply = endpoint.build(&request, &ETH1, Icmpv4Message::EchoReply, 0).unwrap();
    let repr = check_reply(&reply, &ETH1);
    assert_eq!(repr.src_addr, ETH1.ip_addr);
}

#[test]
fn no_errors_about_later_fragments() {
    let endpoint = Endpoint::new();
    let mut inbound = probe(1, &UDP_PAYLOAD);
    ipv4_packet::new_unchecked_mut(&mut inbound[14..]).set_frag_offset(1480);
    assert_eq!(endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0),
        Err(Error::Suppressed));

    ipv4_packet::new_unchecked_mut(&mut inbound[14..]).set_frag_offset(0);
    assert!(endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).is_ok());
}

#[test]
fn no_errors_about_icmp_errors() {
    let endpoint = Endpoint::new();
    let mut inbound = probe(1, &UDP_PAYLOAD);
    ipv4_packet::new_unchecked_mut(&mut inbound[14..]).set_protocol(IpProtocol::Icmp);

    for &msg in &[
        Icmpv4Message::DstUnreachable,
        Icmpv4Message::Redirect,
        Icmpv4Message::TimeExceeded,
        Icmpv4Message::ParamProblem,
    ] {
        inbound[34] = msg.into();
        assert_eq!(endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0),
            Err(Error::Suppressed));
    }

    // A ping whose time-to-live ran out is reported.
    inbound[34] = Icmpv4Message::EchoRequest.into();
    let reply = endpoint.build(&inbound, &ETH1, Icmpv4Message::TimeExceeded, 0).unwrap();
    assert_eq!(icmp_of(&reply).payload_slice(), &inbound[14..42]);
}
