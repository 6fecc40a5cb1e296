// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This is an S-Expression reader for the notation used by data and
//! description formats like KiCad's footprint and board files:
//!
//! * `kisexpr::parse` turns one complete expression, given as a
//!   string, into a tree of atoms and lists ([value::Value]).
//!
//! * Atoms are plain text. There is no number or symbol
//!   interpretation, that is left to whoever consumes the tree.
//!
//! * Double-quoted string literals with backslash escapes, backslash
//!   escapes inside bare atoms, and the Lisp quoting sugar (`'x`,
//!   `` `x ``, `,x`, `,@x`) are supported.
//!
//! * Errors carry precise (1-based) line and column information.
//!
//! An empty string literal reads as a single space, so that it stays
//! distinguishable from "nothing here"; see [settings] to change that.

pub mod cursor;
pub mod parse;
pub mod pos;
pub mod settings;
pub mod value;

pub use parse::{parse, parse_with_settings, ParseError, SyntaxError};
pub use value::Value;
