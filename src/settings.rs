// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading (parsing) data.

#[derive(Debug, Clone)]
pub struct Settings {
    /// What an empty string literal `""` reads as. Existing consumers
    /// rely on it being a single space.
    pub empty_string: &'static str,
    /// How many lists and quoted forms may be nested.
    pub max_depth: u32,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    empty_string: " ",
    max_depth: 500,
    // ^ the limit with default settings on Linux is around 1200
};

pub const LITERAL_EMPTY_STRINGS : Settings = Settings {
    empty_string: "",
    max_depth: 500,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}
