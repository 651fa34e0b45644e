// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use argparse::logging::{self, OptionsBuilder};
use argparse::main_impl::{handle_result, main_impl};
use argparse::{Kind, Parser, Result};
use log::debug;

fn build_parser() -> Result<Parser> {
    let mut parser = Parser::new("test", "test description", "0.0.1");
    parser.add_argument('v', "version", "print version", Kind::Flag)?;
    parser.add_argument('h', "help", "print help", Kind::Flag)?;
    parser.add_argument('f', "file", "file name", Kind::Value)?;
    Ok(parser)
}

fn run(parser: &Parser) -> Result<()> {
    if parser.get_flag("version")? {
        return parser.print_version();
    }
    if parser.get_flag("help")? {
        return parser.print_help();
    }
    if let Some(file) = parser.get_value("file")? {
        println!("file: {}", file);
    } else {
        debug!("No file given");
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let mut builder = OptionsBuilder::new();
    // Unless RUST_LOG says otherwise, keep parser debug output off stderr.
    if std::env::var_os("RUST_LOG").is_none() {
        builder = builder.set_filters("warn".parse()?);
    }
    logging::try_init(builder.build()?)
}

fn main() {
    match init_logging().and_then(|_| build_parser()) {
        Ok(parser) => main_impl(parser, run),
        Err(e) => std::process::exit(handle_result(Err(e))),
    }
}
