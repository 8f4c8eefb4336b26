//! Conversions between the three views of the 1600-bit Keccak state.
//!
//! The sponge works on 25 64-bit lanes; the wire format is a 200-byte
//! buffer; the zero-knowledge circuit addresses individual bits. All three
//! views convert losslessly: bytes pack little-endian within each lane,
//! bits pack LSB-first within each byte, so state bit `b` lives in lane
//! `b / 64` at position `b % 64`.

use crate::keccak::constants::{LANE_COUNT, STATE_BITS, STATE_BYTES};

/// Interpret a 200-byte buffer as 25 little-endian lanes.
#[must_use]
pub fn bytes_to_lanes(bytes: &[u8; STATE_BYTES]) -> [u64; LANE_COUNT] {
    let mut lanes = [0u64; LANE_COUNT];
    for (i, lane) in lanes.iter_mut().enumerate() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[8 * i..8 * i + 8]);
        *lane = u64::from_le_bytes(chunk);
    }
    lanes
}

/// Serialize 25 lanes back into the 200-byte buffer.
#[must_use]
pub fn lanes_to_bytes(lanes: &[u64; LANE_COUNT]) -> [u8; STATE_BYTES] {
    let mut bytes = [0u8; STATE_BYTES];
    for (i, lane) in lanes.iter().enumerate() {
        bytes[8 * i..8 * i + 8].copy_from_slice(&lane.to_le_bytes());
    }
    bytes
}

/// Explode 25 lanes into the 1600-entry bit array the circuit addresses.
///
/// Bit `64 * (x + 5 * y) + z` of the output is bit `z` of lane `(x, y)`.
#[must_use]
pub fn lanes_to_bits(lanes: &[u64; LANE_COUNT]) -> [u8; STATE_BITS] {
    let mut bits = [0u8; STATE_BITS];
    for (b, bit) in bits.iter_mut().enumerate() {
        *bit = ((lanes[b / 64] >> (b % 64)) & 1) as u8;
    }
    bits
}

/// Pack a 1600-entry bit array back into 25 lanes.
///
/// Values other than 0 contribute their low bit; callers validate bit
/// arrays at the public boundary.
#[must_use]
pub fn bits_to_lanes(bits: &[u8; STATE_BITS]) -> [u64; LANE_COUNT] {
    let mut lanes = [0u64; LANE_COUNT];
    for (b, &bit) in bits.iter().enumerate() {
        lanes[b / 64] |= u64::from(bit & 1) << (b % 64);
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_and_lane_views_round_trip() {
        let mut bytes = [0u8; STATE_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        let lanes = bytes_to_lanes(&bytes);
        assert_eq!(lanes_to_bytes(&lanes), bytes);
    }

    #[test]
    fn bit_and_lane_views_round_trip() {
        let mut lanes = [0u64; LANE_COUNT];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = 0x0123_4567_89ab_cdef_u64.rotate_left(i as u32);
        }
        let bits = lanes_to_bits(&lanes);
        assert_eq!(bits_to_lanes(&bits), lanes);
    }

    #[test]
    fn bit_zero_is_the_low_bit_of_byte_zero() {
        let mut bytes = [0u8; STATE_BYTES];
        bytes[0] = 0x01;
        let bits = lanes_to_bits(&bytes_to_lanes(&bytes));
        assert_eq!(bits[0], 1);
        assert_eq!(bits[1..8].iter().sum::<u8>(), 0);

        // Byte 8 is the low byte of lane 1, i.e. state bit 64.
        let mut bytes = [0u8; STATE_BYTES];
        bytes[8] = 0x01;
        let bits = lanes_to_bits(&bytes_to_lanes(&bytes));
        assert_eq!(bits[64], 1);
    }
}
