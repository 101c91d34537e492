//! The RIPEMD-160 block compression function.
//!
//! `compress` takes the 160-bit chaining value and one 64-byte block and
//! produces the next chaining value by running two parallel 80-step lines
//! over the block and folding both back into the state. It is the whole of
//! RIPEMD-160's cryptographic work; callers supply the padding and ordering.
//!
//! For convenience and verification the crate also provides the standard
//! padding (`pad`) and a one-shot `ripemd160` over a complete message. There
//! is no incremental interface.
//!
//! ```
//! use ripemd160_compress::{compress, pad, H0};
//!
//! let mut h = H0;
//! pad(b"abc", |block| compress(&mut h, block));
//! assert_eq!(h[0], 0xf708b28e);
//! ```

#![cfg_attr(not(feature = "use-std"), no_std)]

use byte_tools::{write_u32v_le, write_u64_le};
use generic_array::GenericArray;
use generic_array::typenum::U20;

mod compress;
mod consts;
mod error;

pub use crate::compress::{compress, compress_slice, Block};
pub use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, STATE_LEN};
pub use crate::error::Error;

/// A serialized 20-byte digest.
pub type Output = GenericArray<u8, U20>;

/// Split `msg` into padded blocks and hand each one to `f` in order.
///
/// The last block carries the `0x80` marker and the message length in bits
/// as a little-endian `u64`. When fewer than 9 bytes remain after the message
/// tail an extra block is emitted to hold the length.
pub fn pad<F: FnMut(&Block)>(msg: &[u8], mut f: F) {
    let mut chunks = msg.chunks_exact(BLOCK_LEN);
    for chunk in &mut chunks {
        f(GenericArray::from_slice(chunk));
    }

    let tail = chunks.remainder();
    let mut block = Block::default();
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;
    if tail.len() >= BLOCK_LEN - 8 {
        f(&block);
        block = Block::default();
    }
    // The length field is defined mod 2^64
    let bits = (msg.len() as u64).wrapping_mul(8);
    write_u64_le(&mut block[BLOCK_LEN - 8..], bits);
    f(&block);
}

/// Serialize a final chaining value into the digest byte order.
pub fn finalize(state: &[u32; STATE_LEN]) -> Output {
    let mut out = Output::default();
    write_u32v_le(out.as_mut_slice(), state);
    out
}

/// Hash a complete message.
pub fn ripemd160(msg: &[u8]) -> Output {
    let mut h = H0;
    pad(msg, |block| compress(&mut h, block));
    finalize(&h)
}
