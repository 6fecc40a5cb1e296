// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use kisexpr::parse_with_settings;
use kisexpr::settings::{Settings, DEFAULT_SETTINGS, LITERAL_EMPTY_STRINGS};
use kisexpr::value::Value;
use clap::Parser as ClapParser;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the parsed tree
    #[clap(long, value_parser)]
    print: bool,
    /// Read "" as an empty atom instead of a single space
    #[clap(long, value_parser)]
    literal_empty_strings: bool,
    /// Maximum nesting depth
    #[clap(long, value_parser)]
    max_depth: Option<u32>,
    /// Path to the input file
    #[clap(value_parser, required(true))]
    input_path: PathBuf,
}

fn count(v: &Value, atoms: &mut usize, lists: &mut usize) {
    match v {
        Value::Atom(_) => *atoms += 1,
        Value::List(items) => {
            *lists += 1;
            for item in items {
                count(item, atoms, lists);
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut settings: Settings =
        if args.literal_empty_strings {
            LITERAL_EMPTY_STRINGS
        } else {
            DEFAULT_SETTINGS
        };
    if let Some(max_depth) = args.max_depth {
        settings.max_depth = max_depth;
    }

    let text = std::fs::read_to_string(&args.input_path)
        .with_context(|| format!("reading {:?}", args.input_path))?;
    let v = parse_with_settings(&text, &settings)
        .with_context(|| format!("parsing {:?}", args.input_path))?;

    if args.print {
        println!("{:#?}", v);
    }
    let (mut atoms, mut lists) = (0, 0);
    count(&v, &mut atoms, &mut lists);
    let head = v.as_list()
        .and_then(|items| items.first())
        .and_then(Value::as_atom)
        .unwrap_or("");
    println!(";; head = {head:?}, depth = {}, lists = {lists}, atoms = {atoms}",
             v.depth());
    Ok(())
}
