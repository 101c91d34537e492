use byte_tools::read_u32v_le;
use generic_array::GenericArray;
use generic_array::typenum::U64;

use crate::consts::{BLOCK_LEN, COMBINE, K_LEFT, K_RIGHT, R_LEFT, R_RIGHT,
                    ROUNDS, STATE_LEN, S_LEFT, S_RIGHT, WORK_BUF_LEN, Wiring};
use crate::error::Error;

/// One 64-byte unit of padded message input.
pub type Block = GenericArray<u8, U64>;

/// Tables driving one of the two parallel lines.
struct Line {
    /// Message word consumed at each step
    r: &'static [usize; ROUNDS],
    /// Rotation applied at each step
    s: &'static [u32; ROUNDS],
    /// Additive constant per group
    k: &'static [u32; 5],
    /// Round function per group
    f: [usize; 5],
}

const LEFT: Line = Line { r: &R_LEFT, s: &S_LEFT, k: &K_LEFT, f: [0, 1, 2, 3, 4] };

// The right line walks the same functions backwards.
const RIGHT: Line = Line { r: &R_RIGHT, s: &S_RIGHT, k: &K_RIGHT, f: [4, 3, 2, 1, 0] };

#[inline(always)]
fn round_fn(f: usize, x: u32, y: u32, z: u32) -> u32 {
    match f {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

impl Line {
    fn run(&self, h: &[u32; STATE_LEN], x: &[u32; WORK_BUF_LEN]) -> [u32; STATE_LEN] {
        let [mut a, mut b, mut c, mut d, mut e] = *h;
        for j in 0..ROUNDS {
            let group = j / 16;
            let t = a
                .wrapping_add(round_fn(self.f[group], b, c, d))
                .wrapping_add(x[self.r[j]])
                .wrapping_add(self.k[group])
                .rotate_left(self.s[j])
                .wrapping_add(e);
            a = e;
            e = d;
            d = c.rotate_left(10);
            c = b;
            b = t;
        }
        // 80 steps is a whole number of role rotations, so a..e are back in
        // their starting positions here.
        [a, b, c, d, e]
    }
}

/// Runs both lines over copies of `h`, returning `(left, right)`.
pub(crate) fn pipelines(h: &[u32; STATE_LEN], x: &[u32; WORK_BUF_LEN])
                        -> ([u32; STATE_LEN], [u32; STATE_LEN]) {
    (LEFT.run(h, x), RIGHT.run(h, x))
}

/// Folds the two line outputs and the incoming state into the next state.
pub(crate) fn combine(h: &[u32; STATE_LEN], left: &[u32; STATE_LEN],
                      right: &[u32; STATE_LEN], w: Wiring) -> [u32; STATE_LEN] {
    let mut out = [0u32; STATE_LEN];
    for (i, o) in out.iter_mut().enumerate() {
        *o = h[(i + w.state) % STATE_LEN]
            .wrapping_add(left[(i + w.left) % STATE_LEN])
            .wrapping_add(right[(i + w.right) % STATE_LEN]);
    }
    out
}

pub(crate) fn schedule(block: &Block) -> [u32; WORK_BUF_LEN] {
    let mut x = [0u32; WORK_BUF_LEN];
    read_u32v_le(&mut x, block.as_slice());
    x
}

/// Compress a single block into `state`.
///
/// Successive blocks of one message must be compressed in order, each call
/// seeing the state left by the previous one.
pub fn compress(state: &mut [u32; STATE_LEN], block: &Block) {
    let x = schedule(block);
    let (left, right) = pipelines(state, &x);
    *state = combine(state, &left, &right, COMBINE);
}

/// Same as `compress`, for callers holding untyped buffers.
///
/// Fails without touching `state` unless `block` is exactly 64 bytes and
/// `state` exactly 5 words.
pub fn compress_slice(state: &mut [u32], block: &[u8]) -> Result<(), Error> {
    if block.len() != BLOCK_LEN {
        return Err(Error::InvalidBlockLength { len: block.len() });
    }
    if state.len() != STATE_LEN {
        return Err(Error::InvalidStateLength { len: state.len() });
    }
    let mut h = [0u32; STATE_LEN];
    h.copy_from_slice(state);
    compress(&mut h, GenericArray::from_slice(block));
    state.copy_from_slice(&h);
    Ok(())
}
