//! The Internet checksum.
//!
//! The ones'-complement sum of [RFC 1071] protects the IPv4 header and ICMP messages. All functions
//! here operate on complete byte slices, interpreting them as big-endian words. A trailing partial
//! word is padded with zero octets; nothing beyond the slice is ever read.
//!
//! Results are plain integers. They end up in network byte order once written by the field
//! setters of the respective packet wrapper, e.g. [`ipv4_packet::set_checksum`].
//!
//! [RFC 1071]: https://tools.ietf.org/html/rfc1071
//! [`ipv4_packet::set_checksum`]: ../struct.ipv4_packet.html#method.set_checksum
use byteorder::{ByteOrder, NetworkEndian};

fn propagate_carries(word: u32) -> u16 {
    let sum = (word >> 16) + (word & 0xffff);
    ((sum >> 16) as u16) + (sum as u16)
}

fn propagate_carries_64(word: u64) -> u32 {
    let sum = (word >> 32) + (word & 0xffff_ffff);
    ((sum >> 32) as u32).wrapping_add(sum as u32)
}

/// Compute an RFC 1071 compliant checksum (without the final complement).
pub fn data(mut data: &[u8]) -> u16 {
    let mut accum = 0;

    // For each 32-byte chunk...
    const CHUNK_SIZE: usize = 32;
    while data.len() >= CHUNK_SIZE {
        let mut d = &data[..CHUNK_SIZE];
        // ... take by 2 bytes and sum them.
        while d.len() >= 2 {
            accum += NetworkEndian::read_u16(d) as u32;
            d = &d[2..];
        }

        // Fold now, sixteen words can not overflow the accumulator but the next chunk might.
        accum = propagate_carries(accum) as u32;
        data = &data[CHUNK_SIZE..];
    }

    // Sum the rest that does not fit the last 32-byte chunk,
    // taking by 2 bytes.
    while data.len() >= 2 {
        accum += NetworkEndian::read_u16(data) as u32;
        data = &data[2..];
    }

    // Add the last remaining odd byte, if any.
    if let Some(&value) = data.first() {
        accum += (value as u32) << 8;
    }

    propagate_carries(accum)
}

/// Combine several RFC 1071 compliant checksums.
pub fn combine(checksums: &[u16]) -> u16 {
    let mut accum: u32 = 0;
    for &word in checksums {
        accum = propagate_carries(accum + word as u32) as u32;
    }
    propagate_carries(accum)
}

/// Compute the Internet checksum of `bytes`, ready to be stored in a checksum field.
///
/// This is the complement of [`data`]. A complement of zero is replaced by `0xffff`, the other
/// representation of zero in ones'-complement arithmetic, so that an emitted checksum is never
/// confused with an absent one.
///
/// [`data`]: fn.data.html
pub fn checksum16(bytes: &[u8]) -> u16 {
    match !data(bytes) {
        0 => 0xffff,
        sum => sum,
    }
}

/// Check that a region including its stored checksum sums to `0xffff`.
pub fn verify16(bytes: &[u8]) -> bool {
    data(bytes) == !0
}

/// Compute the 32-bit variant of the sum (without the final complement).
///
/// Sums big-endian 32-bit words in a 64-bit accumulator. One to three trailing octets form the
/// high octets of a final word whose remaining octets are zero.
pub fn data32(mut data: &[u8]) -> u32 {
    let mut accum: u64 = 0;

    while data.len() >= 4 {
        accum += NetworkEndian::read_u32(data) as u64;
        data = &data[4..];
    }

    if !data.is_empty() {
        let mut last = [0; 4];
        last[..data.len()].copy_from_slice(data);
        accum += NetworkEndian::read_u32(&last) as u64;
    }

    propagate_carries_64(accum)
}

/// Compute the 32-bit Internet checksum of `bytes`.
///
/// Analogous to [`checksum16`] with the sentinel `0xffff_ffff` for a zero complement.
///
/// [`checksum16`]: fn.checksum16.html
pub fn checksum32(bytes: &[u8]) -> u32 {
    match !data32(bytes) {
        0 => 0xffff_ffff,
        sum => sum,
    }
}

/// Check that a region including its stored 32-bit checksum sums to `0xffff_ffff`.
pub fn verify32(bytes: &[u8]) -> bool {
    data32(bytes) == !0
}
