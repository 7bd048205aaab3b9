/*! Low-level packet access and construction.

The `wire` module deals with the packet *representation* of the three headers that make up an ICMP
reply on an Ethernet link. It provides two levels of functionality.

 * First, it provides functions to extract fields from sequences of octets, and to insert fields
   into sequences of octets. This happens in the lowercase byte wrappers [`ethernet_frame`],
   [`ipv4_packet`] and [`icmpv4_packet`].
 * Second, it provides a compact, high-level representation of header data that can be created from
   parsing and emitted into a sequence of octets. This happens through the `Repr` structs, e.g.
   [`EthernetRepr`] or [`Ipv4Repr`].

[`ethernet_frame`]: struct.ethernet_frame.html
[`ipv4_packet`]: struct.ipv4_packet.html
[`icmpv4_packet`]: struct.icmpv4_packet.html
[`EthernetRepr`]: struct.EthernetRepr.html
[`Ipv4Repr`]: struct.Ipv4Repr.html

The byte wrappers guarantee that, if their `check_len()` method returned `Ok(())`, then no field
accessor or setter method will panic. The `new_checked` constructors are a shorthand for combining
`new_unchecked` and `check_len`. When parsing untrusted input, it is *necessary* to use the checked
constructors. When emitting output into a freshly allocated buffer of the length computed by the
`Repr`, the unchecked constructors are correct.

# Examples

To emit an IP packet header into an octet buffer, and then parse it back:

```rust
use icmp_reply::wire::*;
let repr = Ipv4Repr {
    src_addr:    Ipv4Address::new(10, 0, 0, 1),
    dst_addr:    Ipv4Address::new(10, 0, 0, 2),
    protocol:    IpProtocol::Icmp,
    payload_len: 10,
    hop_limit:   64,
    ident:       0x1234,
    dont_frag:   true,
};
let mut buffer = vec![0; repr.buffer_len() + repr.payload_len];
{ // emission
    let packet = ipv4_packet::new_unchecked_mut(&mut buffer);
    repr.emit(packet);
}
{ // parsing
    let packet = ipv4_packet::new_checked(&buffer)
        .expect("truncated packet");
    let parsed = Ipv4Repr::parse(packet)
        .expect("malformed packet");
    assert_eq!(repr, parsed);
}
```
*/
// Copyright (C) 2016 whitequark@whitequark.org
// Copyright (C) 2019 Andreas Molzer <andreas.molzer@tum.de>
//
// in large parts from `smoltcp` originally distributed under 0-clause BSD

mod field {
    pub(crate) type Field = ::core::ops::Range<usize>;
    pub(crate) type Rest  = ::core::ops::RangeFrom<usize>;
}

pub mod checksum;
mod error;
mod ethernet;
mod icmpv4;
mod ipv4;

pub use self::checksum::{
    checksum16,
    checksum32};

pub use self::error::{
    Error,
    Result};

pub use self::ethernet::{
    ethernet as ethernet_frame,
    EtherType as EthernetProtocol,
    Address as EthernetAddress,
    ParseAddressError as ParseEthernetAddressError,
    Repr as EthernetRepr};

pub use self::ipv4::{
    ipv4 as ipv4_packet,
    Address as Ipv4Address,
    Protocol as IpProtocol,
    Repr as Ipv4Repr,
    HEADER_LEN as IPV4_HEADER_LEN};

pub use self::icmpv4::{
    icmpv4 as icmpv4_packet,
    Message as Icmpv4Message,
    DstUnreachable as Icmpv4DstUnreachable,
    TimeExceeded as Icmpv4TimeExceeded,
    HEADER_LEN as ICMPV4_HEADER_LEN,
    ERROR_DATA_LEN as ICMPV4_ERROR_DATA_LEN};
