// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent from a string to a [Value](../value/enum.Value.html)
//! tree. The productions are `expr`, `list`, `quoted`, `atom` and
//! `string`; they all work on one [Cursor](../cursor/struct.Cursor.html).

use crate::cursor::{Cursor, is_space};
use crate::pos::Pos;
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::value::{Quotekind, Value, char2quotekind, list2, symbol};
use kstring::KString;
use thiserror::Error;

// How a peeked character shows up in messages
fn showchar(c: &Option<char>) -> String {
    match c {
        Some(c) => c.to_string(),
        None => "null".into(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax Error: Unterminated string literal")]
    UnterminatedString,
    #[error("Syntax Error: Unexpected {} after {}", showchar(.0), .1.marker())]
    UnexpectedToken(Option<char>, Quotekind),
    #[error("Syntax Error: Expected ( - saw {} instead.", showchar(.0))]
    ExpectedOpenParen(Option<char>),
    #[error("Syntax Error: Expected ) - saw: {}", showchar(.0))]
    ExpectedCloseParen(Option<char>),
    #[error("Syntax error: Superfluous characters after expression: {0}")]
    SuperfluousInput(char),
    #[error("Syntax Error: Nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{err} {pos}")]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos
}

pub type SyntaxError = ParseErrorWithPos;

impl ParseError {
    fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl ParseErrorWithPos {
    /// The message without the position.
    pub fn message(&self) -> String {
        self.err.to_string()
    }
    /// 1-based
    pub fn line(&self) -> u32 {
        self.pos.line1()
    }
    /// 1-based
    pub fn col(&self) -> u32 {
        self.pos.col1()
    }
}

fn is_string_stop(c: char) -> bool {
    c == '"' || c == '\\'
}

fn is_atom_stop(c: char) -> bool {
    is_space(c)
        || c == '\\'
        || c == '"'
        || c == '('
        || c == ')'
        || char2quotekind(c).is_some()
}

// Escapes in string literals that stand for something else than the
// escaped character itself.
fn string_escape(c: char) -> Option<char> {
    match c {
        'r' => Some('\r'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'f' => Some('\x0C'),
        'b' => Some('\x08'),
        _ => None
    }
}

pub struct Parser<'s, 't> {
    cs: Cursor<'s>,
    settings: &'t Settings,
}

impl<'s, 't> Parser<'s, 't> {
    pub fn new(input: &'s str, settings: &'t Settings) -> Self {
        Parser {
            cs: Cursor::new(input),
            settings,
        }
    }

    pub fn cursor(&self) -> &Cursor<'s> {
        &self.cs
    }

    fn error<T>(&self, err: ParseError) -> Result<T, ParseErrorWithPos> {
        Err(err.at(self.cs.pos()))
    }

    /// A string literal, the cursor must be on the opening '"'.
    pub fn string(&mut self) -> Result<KString, ParseErrorWithPos> {
        self.cs.consume();
        let mut out = String::new();
        loop {
            out.push_str(self.cs.until(is_string_stop));
            match self.cs.peek() {
                None => return self.error(ParseError::UnterminatedString),
                Some('"') => {
                    self.cs.consume();
                    if out.is_empty() {
                        return Ok(KString::from_static(self.settings.empty_string))
                    }
                    return Ok(KString::from_string(out))
                }
                Some(_) => {
                    // backslash
                    self.cs.consume();
                    if let Some(c) = self.cs.peek().and_then(string_escape) {
                        self.cs.consume();
                        out.push(c);
                    } else if let Some(s) = self.cs.consume() {
                        out.push_str(s);
                    }
                }
            }
        }
    }

    /// A string literal or a bare atom. `None` if there's no atom at
    /// the cursor; a string literal always counts, even if empty.
    pub fn atom(&mut self) -> Result<Option<KString>, ParseErrorWithPos> {
        if self.cs.peek() == Some('"') {
            return self.string().map(Some)
        }
        let mut out = String::new();
        loop {
            out.push_str(self.cs.until(is_atom_stop));
            if self.cs.peek() == Some('\\') {
                self.cs.consume();
                // XX a trailing backslash at the end of input is dropped
                if let Some(s) = self.cs.consume() {
                    out.push_str(s);
                }
            } else {
                break;
            }
        }
        if out.is_empty() {
            Ok(None)
        } else {
            Ok(Some(KString::from_string(out)))
        }
    }

    fn quoted(
        &mut self,
        kind: Quotekind,
        depth_fuel: u32,
    ) -> Result<Value, ParseErrorWithPos> {
        if depth_fuel == 0 {
            return self.error(ParseError::NestingTooDeep)
        }
        self.cs.consume();
        let kind =
            if kind == Quotekind::Unquote && self.cs.peek() == Some('@') {
                self.cs.consume();
                Quotekind::UnquoteSplicing
            } else {
                kind
            };
        self.cs.skip_whitespace();
        if let Some(v) = self.expr_with_fuel(depth_fuel - 1)? {
            Ok(list2(symbol(kind.name()), v))
        } else {
            // nothing came after the marker
            self.error(ParseError::UnexpectedToken(self.cs.peek(), kind))
        }
    }

    fn expr_with_fuel(
        &mut self,
        depth_fuel: u32,
    ) -> Result<Option<Value>, ParseErrorWithPos> {
        self.cs.skip_whitespace();
        if let Some(kind) = self.cs.peek().and_then(char2quotekind) {
            return self.quoted(kind, depth_fuel).map(Some)
        }
        let v =
            if self.cs.peek() == Some('(') {
                Some(self.list_with_fuel(depth_fuel)?)
            } else {
                self.atom()?.map(Value::Atom)
            };
        self.cs.skip_whitespace();
        Ok(v)
    }

    fn list_with_fuel(
        &mut self,
        depth_fuel: u32,
    ) -> Result<Value, ParseErrorWithPos> {
        if self.cs.peek() != Some('(') {
            return self.error(ParseError::ExpectedOpenParen(self.cs.peek()))
        }
        if depth_fuel == 0 {
            return self.error(ParseError::NestingTooDeep)
        }
        self.cs.consume();
        let mut v = Vec::new();
        while let Some(item) = self.expr_with_fuel(depth_fuel - 1)? {
            v.push(item);
        }
        if self.cs.peek() != Some(')') {
            return self.error(ParseError::ExpectedCloseParen(self.cs.peek()))
        }
        self.cs.consume();
        Ok(Value::List(v))
    }

    /// One expression, with surrounding whitespace skipped. `None`
    /// if there's nothing to read at the cursor (end of input or a
    /// closing paren).
    pub fn expr(&mut self) -> Result<Option<Value>, ParseErrorWithPos> {
        self.expr_with_fuel(self.settings.max_depth)
    }

    /// A list, the cursor must be on the opening paren.
    pub fn list(&mut self) -> Result<Value, ParseErrorWithPos> {
        self.list_with_fuel(self.settings.max_depth)
    }

    /// Fail if anything is left.
    pub fn finish(&self) -> Result<(), ParseErrorWithPos> {
        if let Some(c) = self.cs.peek() {
            self.error(ParseError::SuperfluousInput(c))
        } else {
            Ok(())
        }
    }
}

/// Parse exactly one expression from `text`. Empty (or whitespace
/// only) input gives the empty atom.
pub fn parse_with_settings(
    text: &str,
    settings: &Settings,
) -> Result<Value, ParseErrorWithPos> {
    tracing::trace!("parsing {} bytes", text.len());
    let mut parser = Parser::new(text, settings);
    let r = parser.expr().and_then(|v| {
        parser.finish()?;
        Ok(v.unwrap_or_else(|| Value::Atom(KString::from_static(""))))
    });
    if let Err(e) = &r {
        tracing::debug!("parse failed: {}", e);
    }
    r
}

pub fn parse(text: &str) -> Result<Value, ParseErrorWithPos> {
    parse_with_settings(text, &DEFAULT_SETTINGS)
}
