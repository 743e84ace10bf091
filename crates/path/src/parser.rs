//! Path parser.
//!
//! Grammar:
//!
//! ```text
//! path    := "" | "*" | group ("." group)*
//! group   := ident index* | index+
//! index   := "[" digits "]"
//! ```

use crate::types::Segment;
use crate::validate::{validate_path_depth, validate_path_length, PathError};

/// Path parser over a borrowed string.
pub struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a path into its segments. The root path yields an empty vec.
    pub fn parse(input: &'a str) -> Result<Vec<Segment>, PathError> {
        validate_path_length(input)?;
        if input.is_empty() || input == "*" {
            return Ok(Vec::new());
        }
        let mut parser = Self { input, pos: 0 };
        let segments = parser.parse_groups()?;
        validate_path_depth(segments.len())?;
        Ok(segments)
    }

    fn parse_groups(&mut self) -> Result<Vec<Segment>, PathError> {
        let mut segments = Vec::new();
        loop {
            self.parse_group(&mut segments)?;
            match self.peek() {
                None => break,
                Some('.') => {
                    self.advance();
                    if self.is_at_end() {
                        return Err(PathError::UnexpectedEnd);
                    }
                }
                Some(ch) => return Err(PathError::UnexpectedChar { ch, pos: self.pos }),
            }
        }
        Ok(segments)
    }

    fn parse_group(&mut self, out: &mut Vec<Segment>) -> Result<(), PathError> {
        if self.peek() != Some('[') {
            out.push(Segment::Key(self.parse_identifier()?));
        }
        while self.peek() == Some('[') {
            out.push(Segment::Index(self.parse_index()?));
        }
        Ok(())
    }

    fn parse_identifier(&mut self) -> Result<String, PathError> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            match ch {
                '.' | '[' => break,
                ']' => return Err(PathError::UnexpectedChar { ch, pos: self.pos }),
                _ => self.advance(),
            }
        }
        if self.pos == start {
            return Err(PathError::EmptySegment(start));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_index(&mut self) -> Result<usize, PathError> {
        let open = self.pos;
        self.expect('[')?;
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.input[start..self.pos];
        match self.peek() {
            Some(']') if digits.is_empty() => return Err(PathError::Wildcard),
            Some(']') => self.advance(),
            Some(ch) => return Err(PathError::UnexpectedChar { ch, pos: self.pos }),
            None => return Err(PathError::UnexpectedEnd),
        }
        digits.parse().map_err(|_| PathError::InvalidIndex(open))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(PathError::UnexpectedChar { ch, pos: self.pos }),
            None => Err(PathError::UnexpectedEnd),
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
