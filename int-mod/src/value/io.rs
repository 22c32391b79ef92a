//! Text and serde representations of [`IntMod<N>`].
//!
//! The text form is the standard-form value in base 10: no sign, no leading
//! zeros, no modulus suffix. Input accepts any signed `i64` and reduces it.

use crate::errors::IntModError;

use super::IntMod;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

impl<const N: i64> fmt::Display for IntMod<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)
    }
}

impl<const N: i64> fmt::Debug for IntMod<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.element, N)
    }
}

impl<const N: i64> FromStr for IntMod<N> {
    type Err = IntModError;

    /// Parses a signed base-10 integer and reduces it modulo `N`.
    ///
    /// ```
    /// # use int_mod::IntMod;
    /// let a: IntMod<13> = "-1".parse().unwrap();
    /// assert_eq!(a.value(), 12);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.trim().parse()?;
        Ok(Self::new(raw))
    }
}

impl<const N: i64> IntMod<N> {
    /// Writes the decimal text of the stored value.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), IntModError> {
        write!(writer, "{}", self.element)?;
        Ok(())
    }

    /// Reads one whitespace-delimited token and assigns its standard form.
    ///
    /// Leading ASCII whitespace is skipped; the bytes after the token stay in the reader.
    ///
    /// # Errors
    ///
    /// `IntModError::Io` if the reader fails, `IntModError::ParseError` if the
    /// token is missing or not an `i64`. `self` is unchanged on error.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), IntModError> {
        let token = read_token(reader)?;
        *self = token.parse()?;
        Ok(())
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> Result<String, IntModError> {
    let mut token = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                complete = true;
                break;
            }
            token.push(byte);
            used += 1;
        }

        reader.consume(used);
        if complete {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&token).into_owned())
}

impl<const N: i64> Serialize for IntMod<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.element)
    }
}

impl<'de, const N: i64> Deserialize<'de> for IntMod<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}
