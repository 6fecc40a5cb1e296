// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get characters and their positions from an in-memory string.

//! The whole input has to be available up front; there is no
//! incremental mode. Everything handed out is a slice of the input,
//! since consumption is always contiguous.

use crate::pos::Pos;

/// The whitespace class of the files this reads. Unlike
/// `char::is_whitespace`, it includes the byte-order mark U+FEFF and
/// excludes U+0085 (next line).
pub fn is_space(c: char) -> bool {
    matches!(c,
             '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' '
             | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
             | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}'
             | '\u{3000}' | '\u{FEFF}')
}

#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    input: &'s str,
    /// Byte offset into `input`, always on a char boundary
    offset: usize,
    pos: Pos,
}

impl<'s> Cursor<'s> {
    pub fn new(input: &'s str) -> Self {
        Cursor {
            input,
            offset: 0,
            pos: Pos::default(),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The character at the current offset, `None` at the end.
    pub fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Advance by one character and return it as a slice of the
    /// input. A "\r\n" pair is taken as one unit. Returns `None`
    /// (without moving) at the end.
    pub fn consume(&mut self) -> Option<&'s str> {
        let c = self.peek()?;
        let start = self.offset;
        self.offset += c.len_utf8();
        match c {
            '\r' => {
                if self.peek() == Some('\n') {
                    self.offset += 1;
                }
                self.newline();
            }
            '\n' => self.newline(),
            _ => self.pos.col += 1,
        }
        Some(&self.input[start..self.offset])
    }

    fn newline(&mut self) {
        self.pos = Pos { line: self.pos.line + 1, col: 0 };
    }

    /// Consume characters until `stop` holds for the next one (or the
    /// input ends), and return what was consumed.
    pub fn until(&mut self, stop: impl Fn(char) -> bool) -> &'s str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if stop(c) {
                break;
            }
            self.consume();
        }
        &self.input[start..self.offset]
    }

    pub fn skip_whitespace(&mut self) {
        self.until(|c| ! is_space(c));
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }
}
