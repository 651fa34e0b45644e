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

use std::fmt;

/// Kind denotes whether an argument is a boolean flag, or an option which
/// takes a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// A boolean argument, whose presence alone is the signal.
    Flag,
    /// An argument which consumes the following token as its string value.
    Value,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Flag => write!(f, "flag"),
            Kind::Value => write!(f, "value"),
        }
    }
}

/// Value is the parsed state of a single argument. Which variant an argument
/// holds is fixed by its `Kind` at declaration time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Whether or not a flag was present on the command line.
    Flag(bool),
    /// The string given for a value-taking option, if it was supplied.
    Value(Option<String>),
}

impl Value {
    /// Returns the "unparsed" value for an argument of the given kind.
    pub(crate) fn empty(kind: Kind) -> Value {
        match kind {
            Kind::Flag => Value::Flag(false),
            Kind::Value => Value::Value(None),
        }
    }

    /// Returns the Kind of argument this value belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Flag(_) => Kind::Flag,
            Value::Value(_) => Kind::Value,
        }
    }
}

/// An Argument is a single declared command-line option, identified either by
/// its short name (e.g. "-f") or by its long name (e.g. "--file").
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Argument {
    short_name: char,
    long_name: String,
    description: String,
    value: Value,
}

impl Argument {
    /// Constructs a new, unparsed Argument.
    pub fn new(short_name: char, long_name: &str, description: &str, kind: Kind) -> Argument {
        Argument {
            short_name: short_name,
            long_name: long_name.to_owned(),
            description: description.to_owned(),
            value: Value::empty(kind),
        }
    }

    /// Returns the single-character name this argument is given as "-x".
    pub fn get_short_name(&self) -> char {
        self.short_name
    }

    /// Returns the name this argument is given as "--xxx". This is also the
    /// name used to query its value after parsing.
    pub fn get_long_name(&self) -> &str {
        self.long_name.as_str()
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns whether this argument is a flag or takes a value.
    pub fn get_kind(&self) -> Kind {
        self.value.kind()
    }

    /// Returns this argument's current value. Before parsing, this is false
    /// for flags and None for value-taking options.
    pub fn get_value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        debug_assert_eq!(self.get_kind(), value.kind());
        self.value = value;
    }

    /// Returns true if the given command-line token names this argument,
    /// either as "-<short_name>" or "--<long_name>". No other spellings (e.g.
    /// "--name=value" or clustered short names) are recognized.
    pub fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.long_name;
        }
        match token.strip_prefix('-') {
            None => false,
            Some(short) => {
                let mut chars = short.chars();
                chars.next() == Some(self.short_name) && chars.next().is_none()
            }
        }
    }
}
