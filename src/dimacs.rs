//! DIMACS CNF front-end (§4.8, ambient).
//!
//! A hand-rolled byte-cursor parser, in the style of the teacher crate's own
//! `parser.rs`: comment lines starting with `c`, one `p cnf <vars> <clauses>`
//! header, then `<clauses>` clauses of whitespace-separated signed integers
//! each terminated by `0`.

use thiserror::Error;

use crate::constraints::Constraints;
use crate::error::DpllError;

/// Syntactic failures reading a DIMACS CNF file.
///
/// This never appears in the library's core API ([`DpllError`]) — it is
/// purely a concern of this text front-end, matching §1's "input parsing is
/// not part of the core contract".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while looking for the 'p cnf' header")]
    MissingHeader,
    #[error("expected problem format 'cnf'")]
    ExpectedCnf,
    #[error("expected number of variables in header")]
    ExpectedNumVars,
    #[error("expected number of clauses in header")]
    ExpectedNumClauses,
    #[error("expected a literal in clause {clause_index}")]
    ExpectedLiteral { clause_index: usize },
    #[error("invalid literal: {0}")]
    InvalidLiteral(#[from] DpllError),
}

/// Parses DIMACS CNF text into a [`Constraints`] builder, minting exactly the
/// declared number of variables up front.
pub fn parse_dimacs_cnf(data: &[u8]) -> Result<Constraints, ParseError> {
    let mut cursor = Cursor::new(data);
    skip_comments_and_whitespace(&mut cursor);

    if !cursor.skip_expected(b"p") {
        return Err(ParseError::MissingHeader);
    }
    cursor.skip_ascii_whitespace();
    if !cursor.skip_expected(b"cnf") {
        return Err(ParseError::ExpectedCnf);
    }
    cursor.skip_ascii_whitespace();
    let num_vars = cursor.parse_u32().ok_or(ParseError::ExpectedNumVars)?;
    cursor.skip_ascii_whitespace();
    let num_clauses = cursor.parse_usize().ok_or(ParseError::ExpectedNumClauses)?;

    let mut builder = Constraints::new();
    for _ in 0..num_vars {
        builder
            .new_literal()
            .map_err(ParseError::InvalidLiteral)?;
    }

    let mut clause_buffer: Vec<i32> = Vec::with_capacity(8);
    for clause_index in 0..num_clauses {
        clause_buffer.clear();
        loop {
            cursor.skip_ascii_whitespace();
            let value = cursor
                .parse_i32()
                .ok_or(ParseError::ExpectedLiteral { clause_index })?;
            if value == 0 {
                break;
            }
            clause_buffer.push(value);
        }
        builder
            .add(&clause_buffer)
            .map_err(ParseError::InvalidLiteral)?;
    }

    Ok(builder)
}

fn skip_comments_and_whitespace(cursor: &mut Cursor) {
    loop {
        cursor.skip_ascii_whitespace();
        if cursor.peek() == Some(b'c') {
            cursor.skip_until(b'\n');
        } else {
            break;
        }
    }
}

/// A cursor over a byte slice with the small set of lookahead/parsing
/// primitives this parser needs.
struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, position: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    fn skip_until(&mut self, byte: u8) {
        while let Some(b) = self.peek() {
            self.position += 1;
            if b == byte {
                break;
            }
        }
    }

    fn skip_ascii_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    fn skip_expected(&mut self, expected: &[u8]) -> bool {
        if self.data[self.position..].starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    fn parse_u32(&mut self) -> Option<u32> {
        self.parse_usize().map(|n| n as u32)
    }

    fn parse_usize(&mut self) -> Option<usize> {
        let start = self.position;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position == start {
            return None;
        }
        std::str::from_utf8(&self.data[start..self.position])
            .ok()?
            .parse()
            .ok()
    }

    fn parse_i32(&mut self) -> Option<i32> {
        let start = self.position;
        if self.peek() == Some(b'-') {
            self.position += 1;
        }
        let digits_start = self.position;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position == digits_start {
            self.position = start;
            return None;
        }
        std::str::from_utf8(&self.data[start..self.position])
            .ok()?
            .parse()
            .ok()
    }
}
