//! Shows the ICMP reply a router sends for a crafted inbound frame.
//!
//! # Usage
//!
//! The example crafts a frame as it could arrive on the interface `eth0` of a router, from the host
//! given as the first argument. For errors it is a udp datagram addressed past the router, for
//! echo replies it is a ping of the router itself. It then builds the reply on behalf of the
//! router, which has the address given as the second argument, and dumps both frames.
//!
//! 1. The time-to-live of the datagram is chosen to expire at the router.
//!
//!   > $ cargo run --example reply -- 10.0.0.2 10.0.0.1 time-exceeded
//! 2. The datagram is too large for the next hop.
//!
//!   > $ cargo run --example reply -- --mtu 1280 10.0.0.2 10.0.0.1 unreachable 4
//! 3. A ping with some data.
//!
//!   > $ cargo run --example reply -- 10.0.0.2 10.0.0.1 echo hello
use std::io::{stdout, Write};
use std::net;
use std::process;
use structopt::StructOpt;

use icmp_reply::layer::icmp;
use icmp_reply::nic::{Interface, Loopback, Table};
use icmp_reply::wire::{ethernet_frame, icmpv4_packet, ipv4_packet};
use icmp_reply::wire::{EthernetAddress, EthernetProtocol, EthernetRepr};
use icmp_reply::wire::{IpProtocol, Ipv4Address, Ipv4Repr, Icmpv4Message, Icmpv4TimeExceeded};

fn main() {
    let Config {
        host,
        router,
        hostmac,
        routermac,
        mtu,
        legacy_ident,
        reply,
    } = Config::from_args();

    let interfaces = [("eth0", Interface {
        hardware_addr: routermac,
        ip_addr: router.into(),
        mtu,
    })];
    let table = Table::new(&interfaces);
    let mut nic = Loopback::new(1);

    let mut endpoint = icmp::Endpoint::new();
    if legacy_ident {
        endpoint.set_ident(icmp::Ident::TotalLength);
    }

    let link = EthernetRepr {
        src_addr: hostmac,
        dst_addr: routermac,
        ethertype: EthernetProtocol::Ipv4,
    };

    let (inbound, result) = match reply {
        Reply::TimeExceeded => {
            let inbound = datagram(link, host.into(), 1);
            let result = endpoint.sender(&table, &mut nic)
                .time_exceeded(&inbound, "eth0", Icmpv4TimeExceeded::TtlExpired);
            (inbound, result)
        },
        Reply::Unreachable { code } => {
            let inbound = datagram(link, host.into(), 64);
            let result = endpoint.sender(&table, &mut nic)
                .unreachable(&inbound, "eth0", code.into());
            (inbound, result)
        },
        Reply::Echo { data } => {
            let inbound = ping(link, host.into(), router.into(), data.as_bytes());
            let result = endpoint.sender(&table, &mut nic)
                .echo_reply(&inbound, "eth0");
            (inbound, result)
        },
    };

    let out = stdout();
    let mut out = out.lock();
    dump(&mut out, "inbound", &inbound).unwrap();

    if let Err(err) = result {
        eprintln!("No reply: {}", err);
        process::exit(1);
    }

    for sent in nic.take() {
        dump(&mut out, &sent.iface, &sent.frame).unwrap();
    }
}

#[derive(Clone, StructOpt)]
enum Reply {
    /// Report an expired time-to-live.
    #[structopt(name = "time-exceeded")]
    TimeExceeded,

    /// Report an undeliverable datagram.
    #[structopt(name = "unreachable")]
    Unreachable {
        /// The destination unreachable code, e.g. 4 for fragmentation required.
        code: u8,
    },

    /// Answer a ping carrying some data.
    #[structopt(name = "echo")]
    Echo {
        #[structopt(default_value = "")]
        data: String,
    },
}

#[derive(Clone, StructOpt)]
struct Config {
    /// The sender of the inbound frame.
    host: net::Ipv4Addr,

    /// The address of the router on `eth0`.
    router: net::Ipv4Addr,

    #[structopt(long = "hostmac", default_value = "52:54:00:12:34:56")]
    hostmac: EthernetAddress,

    #[structopt(long = "routermac", default_value = "02:00:00:00:00:01")]
    routermac: EthernetAddress,

    /// The link MTU of `eth0`.
    #[structopt(long = "mtu", default_value = "1500")]
    mtu: u16,

    /// Fill the identification field with the total length.
    #[structopt(long = "legacy-ident")]
    legacy_ident: bool,

    #[structopt(subcommand)]
    reply: Reply,
}

impl Config {
    fn from_args() -> Self {
        StructOpt::from_args()
    }
}

/// A udp datagram of the host towards some remote network.
fn datagram(link: EthernetRepr, src_addr: Ipv4Address, hop_limit: u8) -> Vec<u8> {
    const UDP: [u8; 16] = [
        0x9c, 0x41, 0x82, 0x9b, 0x00, 0x10, 0x00, 0x00,
        b'p', b'r', b'o', b'b', b'e', b'.', b'.', b'.',
    ];

    let ip = Ipv4Repr {
        src_addr,
        dst_addr: Ipv4Address::new(198, 51, 100, 1),
        protocol: IpProtocol::Udp,
        payload_len: UDP.len(),
        hop_limit,
        ident: 0x1c46,
        dont_frag: true,
    };

    let mut buffer = vec![0; ethernet_frame::buffer_len(ip.buffer_len() + UDP.len())];
    let frame = ethernet_frame::new_unchecked_mut(&mut buffer);
    link.emit(frame);
    let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
    ip.emit(packet);
    packet.payload_mut_slice().copy_from_slice(&UDP);
    buffer
}

/// An echo request of the host to the router.
fn ping(link: EthernetRepr, src_addr: Ipv4Address, dst_addr: Ipv4Address, data: &[u8]) -> Vec<u8> {
    let ip = Ipv4Repr {
        src_addr,
        dst_addr,
        protocol: IpProtocol::Icmp,
        payload_len: 8 + data.len(),
        hop_limit: 64,
        ident: 0x1c46,
        dont_frag: true,
    };

    let mut buffer = vec![0; ethernet_frame::buffer_len(ip.buffer_len() + ip.payload_len)];
    let frame = ethernet_frame::new_unchecked_mut(&mut buffer);
    link.emit(frame);
    let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
    ip.emit(packet);
    let icmp = icmpv4_packet::new_unchecked_mut(packet.payload_mut_slice());
    icmp.set_msg_type(Icmpv4Message::EchoRequest);
    icmp.set_msg_code(0);
    icmp.set_echo_ident(0x4d2);
    icmp.set_echo_seq_no(1);
    icmp.payload_mut_slice().copy_from_slice(data);
    icmp.fill_checksum();
    buffer
}

fn dump(out: &mut impl Write, title: &str, frame: &[u8]) -> std::io::Result<()> {
    let eth = ethernet_frame::new_unchecked(frame);
    writeln!(out, "{} ({} octets): {}", title, frame.len(), eth)?;

    let packet = ipv4_packet::new_unchecked(eth.payload_slice());
    match Ipv4Repr::parse(packet) {
        Ok(repr) => writeln!(out, "  {}", repr)?,
        Err(err) => writeln!(out, "  IPv4 ({})", err)?,
    }
    if packet.check_header().is_ok() && packet.protocol() == IpProtocol::Icmp {
        let icmp = icmpv4_packet::new_unchecked(&packet.as_bytes()[usize::from(packet.header_len())..]);
        writeln!(out, "  {}", icmp)?;
    }

    for (row, chunk) in frame.chunks(16).enumerate() {
        write!(out, "  {:04x}:", row * 16)?;
        for byte in chunk {
            write!(out, " {:02x}", byte)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
