//! Fixed Keccak-f[1600] tables and sponge geometry.
//!
//! All tables are immutable `const` data; nothing is computed or mutated
//! at run time.

/// Number of permutation rounds.
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the 1600-bit state.
pub const LANE_COUNT: usize = 25;

/// Full state size in bytes (25 lanes of 8 bytes).
pub const STATE_BYTES: usize = 200;

/// Full state size in bits.
pub const STATE_BITS: usize = 1600;

/// Sponge rate for Keccak-256, in bytes (capacity 512 bits).
pub const RATE_BYTES: usize = 136;

/// Sponge rate for Keccak-256, in bits.
pub const RATE_BITS: usize = 1088;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Round constants XORed into lane (0, 0) by the ι step.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ rotation offsets for lane (x, y), indexed `x + 5 * y`.
#[rustfmt::skip]
pub const RHO_OFFSETS: [u32; LANE_COUNT] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];
