//! Prefix slot identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest prefix number that can be written as a decimal token.
pub const MAX_NUMERIC_PREFIX: u8 = 31;

/// A validated prefix slot in `0..PrefixId::COUNT`.
///
/// Slots `0` through `31` are written as decimal tokens. The three symbolic
/// slots are written `$` (system), `*` (boot volume) and `@` (preferences).
///
/// # Examples
///
/// ```
/// use vpath::PrefixId;
///
/// assert_eq!(PrefixId::from_token("12").unwrap().index(), 12);
/// assert_eq!(PrefixId::from_token("*").unwrap(), PrefixId::BOOT);
/// assert_eq!(PrefixId::BOOT.token(), "*");
/// assert!(PrefixId::from_token("32").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixId(u8);

impl PrefixId {
    /// Current working directory proxy; applied when a path names no prefix.
    pub const CURRENT: Self = Self(8);
    /// Directory holding the running executable.
    pub const APPLICATION: Self = Self(9);
    /// System folder, token `$`.
    pub const SYSTEM: Self = Self(32);
    /// Root of the boot volume, token `*`.
    pub const BOOT: Self = Self(33);
    /// User preferences folder, token `@`.
    pub const PREFS: Self = Self(34);
    /// Number of slots in a prefix table.
    pub const COUNT: usize = 35;

    /// Creates an identifier from a raw slot index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPrefix`] if `index >= PrefixId::COUNT`.
    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(Error::BadPrefix {
                token: index.to_string(),
            })
        }
    }

    /// Parses a prefix token: `"0"`..`"31"`, `"$"`, `"*"` or `"@"`.
    ///
    /// Numeric tokens are one or two ASCII digits, so `"08"` is slot 8 while
    /// `"008"` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPrefix`] for anything else.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "$" => return Ok(Self::SYSTEM),
            "*" => return Ok(Self::BOOT),
            "@" => return Ok(Self::PREFS),
            _ => {}
        }
        let bad = || Error::BadPrefix {
            token: token.to_string(),
        };
        if !is_numeric_token(token) || token.len() > 2 {
            return Err(bad());
        }
        let value: u8 = token.parse().map_err(|_| bad())?;
        if value > MAX_NUMERIC_PREFIX {
            return Err(bad());
        }
        Ok(Self(value))
    }

    /// The slot index, usable to address a table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is one of the three symbolic slots.
    #[must_use]
    pub const fn is_symbolic(self) -> bool {
        self.0 > MAX_NUMERIC_PREFIX
    }

    /// The canonical token for this slot, without the trailing colon.
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::SYSTEM => "$".to_string(),
            Self::BOOT => "*".to_string(),
            Self::PREFS => "@".to_string(),
            Self(n) => n.to_string(),
        }
    }

    /// Iterates over every slot in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for PrefixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for PrefixId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}

/// True for a non-empty run of ASCII digits.
pub(crate) fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
