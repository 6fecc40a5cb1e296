// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing an S-expression value.

//! There is no distinction between symbols, numbers and strings:
//! every leaf is an [Atom](Value::Atom) holding its text. Lists are
//! Rust vectors. Quoting sugar is not a separate type either, `'a`
//! reads as the two-element list `(quote a)`.

use kstring::KString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quotekind {
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,
}

/// Marker characters that start a quoted form. `,@` is recognized
/// by the parser as an upgrade of `,`.
pub const QUOTES: [(char, Quotekind); 3] = [
    ('\'', Quotekind::Quote),
    ('`', Quotekind::Quasiquote),
    (',', Quotekind::Unquote),
];

pub fn char2quotekind(c: char) -> Option<Quotekind> {
    QUOTES.iter().find(|(m, _)| *m == c).map(|(_, k)| *k)
}

impl Quotekind {
    /// The symbol heading the list the quoted form reads as.
    pub fn name(self) -> &'static str {
        match self {
            Quotekind::Quote => "quote",
            Quotekind::Quasiquote => "quasiquote",
            Quotekind::Unquote => "unquote",
            Quotekind::UnquoteSplicing => "unquote-splicing",
        }
    }
    /// The source text of the marker.
    pub fn marker(self) -> &'static str {
        match self {
            Quotekind::Quote => "'",
            Quotekind::Quasiquote => "`",
            Quotekind::Unquote => ",",
            Quotekind::UnquoteSplicing => ",@",
        }
    }
}

impl TryFrom<&str> for Quotekind {
    type Error = ();
    fn try_from(s: &str) -> Result<Quotekind, Self::Error> {
        [Quotekind::Quote, Quotekind::Quasiquote,
         Quotekind::Unquote, Quotekind::UnquoteSplicing]
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Atom(KString),
    List(Vec<Value>),
}

impl Value {
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Value::Atom(s) => Some(s.as_str()),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::Atom(_) => None,
            Value::List(v) => Some(v),
        }
    }

    /// Recognize a list that looks like the result of quoting sugar,
    /// whether it was written as `'x` or `(quote x)`.
    pub fn as_quoted(&self) -> Option<(Quotekind, &Value)> {
        match self.as_list()? {
            [head, quoted] => {
                let kind = Quotekind::try_from(head.as_atom()?).ok()?;
                Some((kind, quoted))
            }
            _ => None
        }
    }

    /// Parenthesis nesting depth: 0 for atoms, 1 for a flat list.
    pub fn depth(&self) -> usize {
        match self {
            Value::Atom(_) => 0,
            Value::List(v) => 1 + v.iter().map(Value::depth).max().unwrap_or(0),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Atom(KString::from_ref(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Atom(KString::from_string(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::List(v)
    }
}

/// Easily create a symbol
pub fn symbol(s: &'static str) -> Value {
    Value::Atom(KString::from_static(s))
}

/// Easily create a list with two entries
pub fn list2(a: Value, b: Value) -> Value {
    Value::List(vec![a, b])
}
