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

use thiserror::Error;

/// Error represents the various errors which can come up while declaring,
/// parsing, or querying command-line arguments.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was declared with a short or long name which is already in
    /// use by some other argument.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
    /// An error encountered while trying to interact with environment
    /// variables.
    #[error("{0}")]
    EnvVar(#[from] std::env::VarError),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An I/O error, generally encountered when writing help or version output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A value-taking argument appeared as the last token, with nothing after
    /// it to use as its value.
    #[error("missing value for option '--{0}'")]
    MissingValue(String),
    /// An error encountered while parsing a regular expression, e.g. in a
    /// log filter.
    #[error("{0}")]
    Regex(#[from] regex::Error),
    /// An error encountered when attempting to set the global Logger
    /// implementation.
    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
    /// A query referred to an argument which was never declared.
    #[error("undeclared argument '{0}'")]
    UndeclaredArgument(String),
    /// A token on the command line matched no declared argument.
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    /// A query referred to an argument which was declared, but with a
    /// different kind than the query expects.
    #[error("argument '{name}' is not a {expected} argument")]
    WrongKind {
        /// The long name of the argument being queried.
        name: String,
        /// The kind of argument the query expected.
        expected: crate::argument::Kind,
    },
}

/// A Result type which uses argparse's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
