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

use crate::argument::{Argument, Kind, Value};
use crate::error::*;
use crate::help;
use log::{debug, trace};
use std::env;
use std::io::{self, Write};

/// Parser holds a single program's command-line argument declarations,
/// together with the values parsed for them.
///
/// The expected lifecycle is: construct it with `new`, declare every argument
/// with `add_argument`, call `parse` once with the program's arguments, and
/// then query the results with `get_flag` / `get_value`.
#[derive(Clone, Debug)]
pub struct Parser {
    name: String,
    description: String,
    version: String,
    /// Declared arguments, in declaration order.
    arguments: Vec<Argument>,
    parsed: bool,
}

impl Parser {
    /// Construct a new Parser with no declared arguments.
    pub fn new(name: &str, description: &str, version: &str) -> Parser {
        Parser {
            name: name.to_owned(),
            description: description.to_owned(),
            version: version.to_owned(),
            arguments: vec![],
            parsed: false,
        }
    }

    /// Returns the program name this Parser was constructed with.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the program description this Parser was constructed with.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the program version this Parser was constructed with.
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Declare a new argument. Both the short name and the long name must be
    /// unique among all of the arguments declared so far, or a
    /// `DuplicateArgument` error is returned.
    pub fn add_argument(
        &mut self,
        short_name: char,
        long_name: &str,
        description: &str,
        kind: Kind,
    ) -> Result<()> {
        if short_name == '-' || short_name.is_whitespace() {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid short argument name",
                short_name
            )));
        }
        if long_name.is_empty()
            || long_name.starts_with('-')
            || long_name.contains(|c: char| c == '=' || c.is_whitespace())
        {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid long argument name",
                long_name
            )));
        }

        if self
            .arguments
            .iter()
            .any(|a| a.get_short_name() == short_name)
        {
            return Err(Error::DuplicateArgument(format!("-{}", short_name)));
        }
        if self.get_argument(long_name).is_some() {
            return Err(Error::DuplicateArgument(format!("--{}", long_name)));
        }

        debug!(
            "Declared {} argument -{}, --{}",
            kind, short_name, long_name
        );
        self.arguments
            .push(Argument::new(short_name, long_name, description, kind));
        Ok(())
    }

    /// Returns an Iterator over the declared arguments, in the order they were
    /// declared.
    pub fn arguments(&self) -> impl DoubleEndedIterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Look up a declared argument by its long name.
    pub fn get_argument(&self, long_name: &str) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|a| a.get_long_name() == long_name)
    }

    /// Returns true once `parse` has succeeded at least once.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Parse the given command-line arguments. The first element is the
    /// program path, and is skipped.
    ///
    /// Parsing is all-or-nothing: if any token is invalid, an error is
    /// returned and every argument keeps the value it had before this call.
    /// On success, every argument's value is replaced, so arguments which
    /// don't appear in `args` are reset to false / None.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        let mut values: Vec<Value> = self
            .arguments
            .iter()
            .map(|a| Value::empty(a.get_kind()))
            .collect();

        let mut tokens = args.iter().map(|a| a.as_ref());
        if let Some(program) = tokens.next() {
            trace!("Skipping program path '{}'", program);
        }

        while let Some(token) = tokens.next() {
            let idx = match self.arguments.iter().position(|a| a.matches(token)) {
                None => return Err(Error::UnknownArgument(token.to_owned())),
                Some(idx) => idx,
            };
            let argument = &self.arguments[idx];

            values[idx] = match argument.get_kind() {
                Kind::Flag => Value::Flag(true),
                Kind::Value => match tokens.next() {
                    None => {
                        return Err(Error::MissingValue(argument.get_long_name().to_owned()))
                    }
                    Some(v) => Value::Value(Some(v.to_owned())),
                },
            };
            trace!("Parsed --{}: {:?}", argument.get_long_name(), values[idx]);
        }

        for (argument, value) in self.arguments.iter_mut().zip(values.into_iter()) {
            argument.set_value(value);
        }
        self.parsed = true;
        Ok(())
    }

    /// Parse this process' own command-line arguments, as returned by
    /// `std::env::args`.
    pub fn parse_env(&mut self) -> Result<()> {
        let args: Vec<String> = env::args().collect();
        self.parse(&args)
    }

    /// Returns whether or not the named flag was present on the command line.
    /// It is an error if no flag with this long name was declared.
    pub fn get_flag(&self, long_name: &str) -> Result<bool> {
        match self.get_argument(long_name).map(|a| a.get_value()) {
            None => Err(Error::UndeclaredArgument(long_name.to_owned())),
            Some(Value::Flag(present)) => Ok(*present),
            Some(_) => Err(Error::WrongKind {
                name: long_name.to_owned(),
                expected: Kind::Flag,
            }),
        }
    }

    /// Returns the value given for the named option, or None if it was not
    /// supplied on the command line. It is an error if no value-taking
    /// argument with this long name was declared.
    pub fn get_value(&self, long_name: &str) -> Result<Option<&str>> {
        match self.get_argument(long_name).map(|a| a.get_value()) {
            None => Err(Error::UndeclaredArgument(long_name.to_owned())),
            Some(Value::Value(v)) => Ok(v.as_deref()),
            Some(_) => Err(Error::WrongKind {
                name: long_name.to_owned(),
                expected: Kind::Value,
            }),
        }
    }

    /// Write this program's help text to the given writer.
    pub fn write_help<W: Write>(&self, f: &mut W) -> Result<()> {
        help::write_help(f, self)
    }

    /// Write this program's name and version to the given writer.
    pub fn write_version<W: Write>(&self, f: &mut W) -> Result<()> {
        help::write_version(f, self)
    }

    /// Print this program's help text to standard output.
    pub fn print_help(&self) -> Result<()> {
        self.write_help(&mut io::stdout().lock())
    }

    /// Print this program's name and version to standard output.
    pub fn print_version(&self) -> Result<()> {
        self.write_version(&mut io::stdout().lock())
    }
}
