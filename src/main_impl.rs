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

use crate::error::*;
use crate::parser::Parser;
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;

/// Converts the given result into a process exit code. If it is an error, the
/// error is printed to standard error first; debug builds print the full
/// Debug representation.
pub fn handle_result(r: Result<()>) -> i32 {
    match r {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!(
                "Error parsing command-line flags: {}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                },
            );
            EXIT_FAILURE
        }
    }
}

/// Parses the given parser's arguments out of `args`, and then calls the
/// given callback with the parsed result. The callback is not called if
/// parsing fails.
pub fn parse_and_execute<S, F>(mut parser: Parser, args: &[S], callback: F) -> Result<()>
where
    S: AsRef<str>,
    F: FnOnce(&Parser) -> Result<()>,
{
    parser.parse(args)?;
    callback(&parser)
}

/// Parses this process' command-line arguments and calls the given callback,
/// then exits the process with an appropriate exit code.
///
/// Like `std::process::exit`, this function never returns, so no destructors
/// on the current stack will be run. Anything which needs to be cleaned up
/// should live inside the callback.
pub fn main_impl<F: FnOnce(&Parser) -> Result<()>>(mut parser: Parser, callback: F) -> ! {
    let r = parser.parse_env().and_then(|_| callback(&parser));
    process::exit(handle_result(r));
}
