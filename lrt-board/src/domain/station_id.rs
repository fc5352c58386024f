//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A Light Rail station identifier as used by the Next Train API.
///
/// Station ids are short decimal numbers without leading zeros
/// (e.g. `1`, `75`, `600`). This type guarantees that any `StationId`
/// value is well-formed by construction. Whether an id names a real
/// station is the remote service's call, not ours: unknown ids are
/// still sent and the response status is the signal.
///
/// # Examples
///
/// ```
/// use lrt_board::domain::StationId;
///
/// let yuen_long = StationId::parse("600").unwrap();
/// assert_eq!(yuen_long.as_str(), "600");
///
/// // Empty and non-numeric ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("6a0").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId {
    bytes: [u8; 4],
    len: u8,
}

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be 1 to 4 ASCII digits with no leading zero.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let raw = s.as_bytes();

        if raw.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if raw.len() > 4 {
            return Err(InvalidStationId {
                reason: "must be at most 4 digits",
            });
        }

        for &b in raw {
            if !b.is_ascii_digit() {
                return Err(InvalidStationId {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        if raw.len() > 1 && raw[0] == b'0' {
            return Err(InvalidStationId {
                reason: "must not have a leading zero",
            });
        }

        let mut bytes = [0u8; 4];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(StationId {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
