// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TextError;

/// Letters in the Latin alphabet the cipher shifts within.
pub const ALPHABET_LEN: u8 = 26;

/// A cipher offset reduced into `0..26`.
///
/// Any integer is accepted and reduced with Euclidean remainder, so `-1`
/// becomes `25` and `27` becomes `1`.
///
/// # Example
/// ```
/// use textkit::text::Shift;
///
/// assert_eq!(Shift::new(-1).value(), 25);
/// assert_eq!(Shift::new(29).value(), 3);
/// assert_eq!(Shift::new(3).inverse().value(), 23);
/// assert!(" 7 ".parse::<Shift>().is_ok());
/// assert!("seven".parse::<Shift>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    pub fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The offset that undoes this one.
    pub fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Shift {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl FromStr for Shift {
    type Err = TextError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<i64>()
            .map(Shift::new)
            .map_err(|source| TextError::InvalidShift {
                raw: raw.to_string(),
                source,
            })
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which way a Caesar transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherDirection {
    Encrypt,
    Decrypt,
}

impl CipherDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            CipherDirection::Encrypt => "encrypt",
            CipherDirection::Decrypt => "decrypt",
        }
    }

    /// The offset actually applied for this direction.
    pub fn effective_shift(self, shift: Shift) -> Shift {
        match self {
            CipherDirection::Encrypt => shift,
            CipherDirection::Decrypt => shift.inverse(),
        }
    }
}

impl fmt::Display for CipherDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shift every ASCII letter of `text` forward by `shift`, keeping its case.
///
/// Everything that is not an ASCII letter is copied through in place.
pub fn caesar_transform(text: &str, shift: Shift) -> String {
    if shift.is_identity() {
        return text.to_string();
    }

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let offset = (c as u8 - base + shift.value()) % ALPHABET_LEN;
                (base + offset) as char
            } else {
                c
            }
        })
        .collect()
}

/// Encrypt `text` with a Caesar shift of `shift` positions.
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    caesar_transform(text, CipherDirection::Encrypt.effective_shift(Shift::new(shift)))
}

/// Decrypt text produced by [`caesar_encrypt`] with the same `shift`.
pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    caesar_transform(text, CipherDirection::Decrypt.effective_shift(Shift::new(shift)))
}
