use core::fmt;

/// The error type for parsing of packet headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A packet could not be parsed because it was shorter than assumed.
    ///
    /// The buffer may be shorter than the minimum header length, or shorter than a length that
    /// one of its own fields claims.
    Truncated,

    /// A packet was recognized but was self-contradictory.
    ///
    /// Examples: an IPv4 header whose header length is less than twenty octets.
    Malformed,

    /// A packet could not be recognized.
    ///
    /// E.g. a packet claiming to be IP but with a version other than 4.
    Unrecognized,
}

/// The result type for packet parsing.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Truncated    => write!(f, "truncated packet"),
            Error::Malformed    => write!(f, "malformed packet"),
            Error::Unrecognized => write!(f, "unrecognized packet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error { }
