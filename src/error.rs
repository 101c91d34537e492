use core::fmt;

/// Contract violations detected at the untyped call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Block was not exactly `BLOCK_LEN` bytes.
    InvalidBlockLength { len: usize },
    /// State was not exactly `STATE_LEN` words.
    InvalidStateLength { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidBlockLength { len } => {
                write!(f, "invalid block length: expected 64 bytes, got {}", len)
            }
            Error::InvalidStateLength { len } => {
                write!(f, "invalid state length: expected 5 words, got {}", len)
            }
        }
    }
}

#[cfg(feature = "use-std")]
impl std::error::Error for Error {}
