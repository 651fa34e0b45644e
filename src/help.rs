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

use crate::argument::Kind;
use crate::error::*;
use crate::parser::Parser;
use std::io::Write;

pub(crate) fn write_version<W: Write>(f: &mut W, parser: &Parser) -> Result<()> {
    f.write_fmt(format_args!("{} {}\n", parser.name(), parser.version()))?;
    Ok(())
}

pub(crate) fn write_help<W: Write>(f: &mut W, parser: &Parser) -> Result<()> {
    f.write_fmt(format_args!(
        "{} - {}\n",
        parser.name(),
        parser.description()
    ))?;
    f.write_fmt(format_args!("Usage: {} [flags ...]\n", parser.name()))?;

    if parser.arguments().next().is_some() {
        f.write_fmt(format_args!("\nFlags:\n"))?;
        for argument in parser.arguments() {
            f.write_fmt(format_args!(
                "\t-{}, --{}",
                argument.get_short_name(),
                argument.get_long_name()
            ))?;
            if argument.get_kind() == Kind::Value {
                f.write_fmt(format_args!(" <value>"))?;
            }
            f.write_fmt(format_args!(" - {}\n", argument.get_description()))?;
        }
    }

    Ok(())
}
