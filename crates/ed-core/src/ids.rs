//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;
use std::str::FromStr;

use crate::{EdError, Tier};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The ID following `self` in creation order.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Creation-order identity of a patient.  Smaller IDs arrived earlier, so
    /// comparing IDs is the FIFO tie-break used by the assignment policies.
    pub struct PatientId(u32);
}

// ── RoomId ────────────────────────────────────────────────────────────────────

/// Identity of a treatment room: its tier plus a 1-based sequence number
/// within that tier (`A1`, `A2`, `B1`, …).
///
/// The derived `Ord` sorts by tier first and number second, which is exactly
/// the Room Pool scan order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId {
    pub tier:   Tier,
    pub number: u16,
}

impl RoomId {
    #[inline]
    pub fn new(tier: Tier, number: u16) -> Self {
        Self { tier, number }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tier, self.number)
    }
}

impl FromStr for RoomId {
    type Err = EdError;

    /// Parse a room label such as `"B2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(letter) = s.get(..1) else {
            return Err(EdError::Config(format!("empty room label {s:?}")));
        };
        let tier = letter.parse::<Tier>()?;
        let number = s[1..]
            .parse::<u16>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| EdError::Config(format!("invalid room label {s:?}")))?;
        Ok(RoomId { tier, number })
    }
}
