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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argparse is a minimal library for parsing command-line flags. A program
//! declares its arguments on a `Parser`, each either a boolean flag or an
//! option taking a single string value, then parses its argument vector and
//! queries the results by long name.

/// argument defines a single declared command-line argument, and its value.
pub mod argument;
/// error defines error types specific to argparse.
pub mod error;
/// logging provides a Logger implementation suitable for command-line
/// applications.
pub mod logging;
/// main_impl provides helpers for using a Parser from a program's main().
pub mod main_impl;
/// parser defines the Parser, which owns the set of declared arguments and
/// performs the actual parsing.
pub mod parser;

mod help;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::argument::{Argument, Kind, Value};
pub use self::error::{Error, Result};
pub use self::parser::Parser;
