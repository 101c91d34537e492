/// Number of 32-bit words in the chaining value.
pub const STATE_LEN: usize = 5;
/// Size of one message block in bytes.
pub const BLOCK_LEN: usize = 64;
/// Number of 32-bit words decoded from one block.
pub const WORK_BUF_LEN: usize = 16;
/// Size of the serialized digest in bytes.
pub const DIGEST_LEN: usize = 20;

pub const ROUNDS: usize = 80;

/// Initial chaining value for the first block of every message.
pub const H0: [u32; STATE_LEN] = [
    0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0,
];

// Additive constants, one per 16-step group
pub const K_LEFT: [u32; 5] = [
    0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e,
];
pub const K_RIGHT: [u32; 5] = [
    0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000,
];

// Message word selection
pub const R_LEFT: [usize; ROUNDS] = [
     0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
     7,  4, 13,  1, 10,  6, 15,  3, 12,  0,  9,  5,  2, 14, 11,  8,
     3, 10, 14,  4,  9, 15,  8,  1,  2,  7,  0,  6, 13, 11,  5, 12,
     1,  9, 11, 10,  0,  8, 12,  4, 13,  3,  7, 15, 14,  5,  6,  2,
     4,  0,  5,  9,  7, 12,  2, 10, 14,  1,  3,  8, 11,  6, 15, 13,
];
pub const R_RIGHT: [usize; ROUNDS] = [
     5, 14,  7,  0,  9,  2, 11,  4, 13,  6, 15,  8,  1, 10,  3, 12,
     6, 11,  3,  7,  0, 13,  5, 10, 14, 15,  8, 12,  4,  9,  1,  2,
    15,  5,  1,  3,  7, 14,  6,  9, 11,  8, 12,  2, 10,  0,  4, 13,
     8,  6,  4,  1,  3, 11, 15,  0,  5, 12,  2, 13,  9,  7, 10, 14,
    12, 15, 10,  4,  1,  5,  8,  7,  6,  2, 13, 14,  0,  3,  9, 11,
];

// Left rotation amounts
pub const S_LEFT: [u32; ROUNDS] = [
    11, 14, 15, 12,  5,  8,  7,  9, 11, 13, 14, 15,  6,  7,  9,  8,
     7,  6,  8, 13, 11,  9,  7, 15,  7, 12, 15,  9, 11,  7, 13, 12,
    11, 13,  6,  7, 14,  9, 13, 15, 14,  8, 13,  6,  5, 12,  7,  5,
    11, 12, 14, 15, 14, 15,  9,  8,  9, 14,  5,  6,  8,  6,  5, 12,
     9, 15,  5, 11,  6,  8, 13, 12,  5, 12, 13, 14, 11,  8,  5,  6,
];
pub const S_RIGHT: [u32; ROUNDS] = [
     8,  9,  9, 11, 13, 15, 15,  5,  7,  7,  8, 11, 14, 14, 12,  6,
     9, 13, 15,  7, 12,  8,  9, 11,  7,  7, 12,  7,  6, 15, 13, 11,
     9,  7, 15, 11,  8,  6,  6, 14, 12, 13,  5, 14, 13, 13,  7,  5,
    15,  5,  8, 11, 14, 14,  6, 14,  6,  9, 12,  9, 12,  5, 15,  8,
     8,  5, 12,  9, 12,  5, 14,  6,  8, 13,  6,  5, 15, 13, 11, 11,
];

/// Offsets of the words summed into `h[i]` when folding both pipelines back
/// into the chaining value: `h[i + state] + left[i + left] + right[i + right]`,
/// all indices mod `STATE_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    pub state: usize,
    pub left: usize,
    pub right: usize,
}

pub const COMBINE: Wiring = Wiring { state: 1, left: 2, right: 3 };
