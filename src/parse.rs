//! Reads the literal notation written by `Number`'s `Display` impl.
//!
//! ```text
//! number   := leaf | sequence
//! leaf     := float-or-integer suffix
//! suffix   := 'i' | 'f' | 'd'
//! sequence := '[' ( number ( ',' number )* ','? )? ']'
//! ```

use crate::{
    error::{Error, Result},
    number::{Number, NumberKind, Sequence},
};
use std::str::FromStr;
use tracing::debug;

pub struct Parser<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        return Self { input, offset: 0 };
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn offset(&self) -> usize {
        return self.offset;
    }

    pub fn parse_number(&mut self) -> Result<Number> {
        self.skip_whitespace();
        return match self.peek() {
            Some('[') => self.parse_sequence().map(Number::Sequence),
            Some(_) => self.parse_leaf(),
            None => Err(Error::parse(self.offset, "Expected a number, found end of input")),
        };
    }

    /// Fails if anything other than whitespace is left.
    pub fn finish(mut self) -> Result<()> {
        self.skip_whitespace();
        return match self.peek() {
            None => Ok(()),
            Some(c) => Err(Error::parse(self.offset, format!("Unexpected trailing '{c}'"))),
        };
    }

    fn parse_sequence(&mut self) -> Result<Sequence> {
        let start = self.offset;
        self.bump();

        let mut sequence = Sequence::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(sequence);
            }

            sequence.push(self.parse_number()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(),
                Some(']') => {
                    self.bump();
                    return Ok(sequence);
                }
                Some(c) => {
                    return Err(Error::parse(
                        self.offset,
                        format!("Expected ',' or ']', found '{c}'"),
                    ))
                }
                None => return Err(Error::parse(start, "Unterminated sequence")),
            }
        }
    }

    fn parse_leaf(&mut self) -> Result<Number> {
        let start = self.offset;
        let token = self.take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

        let Some(suffix) = token.chars().last() else {
            let found = self.peek().unwrap_or_default();
            return Err(Error::parse(start, format!("Expected a number, found '{found}'")));
        };
        let Some(kind) = NumberKind::from_suffix(suffix) else {
            return Err(Error::parse(
                start,
                format!("Missing kind suffix on '{token}', expected one of 'i', 'f' or 'd'"),
            ));
        };

        let body = &token[..token.len() - suffix.len_utf8()];
        let invalid = |e: &dyn std::fmt::Display| {
            Error::parse(start, format!("Invalid {kind} literal '{body}': {e}"))
        };

        return Ok(match kind {
            NumberKind::Integer => Number::Integer(body.parse().map_err(|e| invalid(&e))?),
            NumberKind::Single => Number::Single(body.parse().map_err(|e| invalid(&e))?),
            NumberKind::Double => Number::Double(body.parse().map_err(|e| invalid(&e))?),
            NumberKind::Sequence => unreachable!(),
        });
    }

    fn take_while(&mut self, f: impl Fn(char) -> bool) -> &'a str {
        let rest = &self.input[self.offset..];
        let len = rest.find(|c| !f(c)).unwrap_or(rest.len());
        self.offset += len;
        return &rest[..len];
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        return self.input[self.offset..].chars().next();
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
        }
    }
}

/// Parses a complete literal, such as `[1i, 2d, 3f]`.
pub fn parse(input: &str) -> Result<Number> {
    let mut parser = Parser::new(input);
    let number = parser.parse_number()?;
    parser.finish()?;
    debug!(kind = %number.kind(), leaves = number.leaf_count(), "parsed number literal");
    return Ok(number);
}

impl FromStr for Number {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
