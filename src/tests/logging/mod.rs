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
use crate::logging::write::*;
use crate::logging::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Arguments;

#[test]
fn test_parse_log_level_filter() {
    assert_eq!(LevelFilter::Off, parse_log_level_filter(" OfF ").unwrap());
    assert_eq!(
        LevelFilter::Error,
        parse_log_level_filter("eRroR").unwrap()
    );
    assert_eq!(LevelFilter::Warn, parse_log_level_filter("warn").unwrap());
    assert_eq!(LevelFilter::Info, parse_log_level_filter("INFO\n").unwrap());
    assert_eq!(
        LevelFilter::Debug,
        parse_log_level_filter(" dEbUg").unwrap()
    );
    assert_eq!(LevelFilter::Trace, parse_log_level_filter("trace").unwrap());

    assert!(parse_log_level_filter("verbose").is_err());
    assert!(parse_log_level_filter("").is_err());
}

fn assert_log_filters_level(filters: &str, module_path: &str, expected_level: LevelFilter) {
    let filters: LogFilters = filters.parse().unwrap();
    assert_eq!(expected_level, filters.max_level_for(module_path));
}

#[test]
fn test_log_filters() {
    assert_log_filters_level("info", "argparse", LevelFilter::Info);
    assert_log_filters_level("", "argparse", LevelFilter::Trace);
    assert_log_filters_level(
        "argparse=warn;demo::run=debug",
        "argparse::parser",
        LevelFilter::Warn,
    );
    assert_log_filters_level("argparse=warn;demo::run=debug", "demo", LevelFilter::Trace);
    assert_log_filters_level(
        "argparse=warn;demo::run=debug",
        "demo::run",
        LevelFilter::Debug,
    );
    assert_log_filters_level("argparse=info;argparse=debug", "argparse", LevelFilter::Info);
    assert_log_filters_level("trace;argparse=error", "argparse", LevelFilter::Error);

    assert!("argparse=loud".parse::<LogFilters>().is_err());
}

#[test]
fn test_log_filters_regex_modules() {
    assert_log_filters_level(
        "argparse::(parser|help)=error",
        "argparse::parser",
        LevelFilter::Error,
    );
    assert_log_filters_level(
        "argparse::(parser|help)=error",
        "argparse::help",
        LevelFilter::Error,
    );
    assert_log_filters_level(
        "argparse::(parser|help)=error",
        "argparse::main_impl",
        LevelFilter::Trace,
    );
    // Module expressions are anchored at the start of the module path.
    assert_log_filters_level("parser=error", "argparse::parser", LevelFilter::Trace);
    assert_log_filters_level(".*parser=error", "argparse::parser", LevelFilter::Error);
}

#[test]
fn test_log_filters_invalid_regex() {
    assert!(matches!(
        "argparse::(parser=info".parse::<LogFilters>(),
        Err(Error::Regex(_))
    ));
}

#[test]
fn test_options_from_environment() {
    // This is the only test which reads RUST_LOG; every other test sets its
    // filters explicitly.
    std::env::set_var("RUST_LOG", "argparse=debug;demo=warn");
    let options = OptionsBuilder::new().build().unwrap();
    assert_eq!(LevelFilter::Debug, options.max_level);
    assert_eq!(LevelFilter::Debug, options.filters.max_level_for("argparse::parser"));
    assert_eq!(LevelFilter::Warn, options.filters.max_level_for("demo"));
    assert_eq!(LevelFilter::Trace, options.filters.max_level_for("other"));

    std::env::set_var("RUST_LOG", "argparse=loud");
    assert!(matches!(
        OptionsBuilder::new().build(),
        Err(Error::InvalidArgument(_))
    ));

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("RUST_LOG", OsStr::from_bytes(b"argparse=\xff"));
        assert!(matches!(
            OptionsBuilder::new().build(),
            Err(Error::EnvVar(std::env::VarError::NotUnicode(_)))
        ));
    }

    std::env::remove_var("RUST_LOG");
    let options = OptionsBuilder::new().build().unwrap();
    assert_eq!(LevelFilter::Trace, options.max_level);
    assert!(options.filters.0.is_empty());

    // Explicit filters take precedence over the environment.
    std::env::set_var("RUST_LOG", "trace");
    let options = OptionsBuilder::new()
        .set_filters("warn".parse().unwrap())
        .build()
        .unwrap();
    assert_eq!(LevelFilter::Warn, options.max_level);
    std::env::remove_var("RUST_LOG");
}

#[test]
fn test_log_filters_max_level() {
    let filters: LogFilters = "argparse=warn;demo=debug".parse().unwrap();
    assert_eq!(LevelFilter::Debug, filters.max_level());
    assert_eq!(LevelFilter::Trace, LogFilters::default().max_level());
}

fn test_metadata(level: Level) -> Metadata<'static> {
    Metadata::builder().level(level).build()
}

fn test_record<'a>(args: Arguments<'a>, level: Level, module_path: &'a str) -> Record<'a> {
    Record::builder()
        .args(args)
        .metadata(test_metadata(level))
        .level(level)
        .target("target")
        .module_path(Some(module_path))
        .file(Some("parser.rs"))
        .line(Some(42))
        .build()
}

// Replaces timestamps, which are unpredictable in unit tests.
fn normalize_log_output(output: &str) -> String {
    static DATE_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} UTC").unwrap());

    DATE_REGEX
        .replace_all(output, "2018-01-01 12:34:56 UTC")
        .into_owned()
}

#[test]
fn test_logger_enabled() {
    let logger = Logger::new(
        OptionsBuilder::new()
            .set_filters("warn".parse().unwrap())
            .build()
            .unwrap(),
    );
    assert!(logger.enabled(&test_metadata(Level::Error)));
    assert!(logger.enabled(&test_metadata(Level::Warn)));
    assert!(!logger.enabled(&test_metadata(Level::Info)));
}

#[test]
fn test_logging_output() {
    let adapter = SyncWriteAdapter::new(Vec::<u8>::new());
    let logger = Logger::new(
        OptionsBuilder::new()
            .set_filters("argparse=info;demo=debug".parse().unwrap())
            .set_output_to(adapter.clone())
            .set_panic_on_output_failure(true)
            .set_always_flush(true)
            .build()
            .unwrap(),
    );

    logger.log(&test_record(format_args!("foo"), Level::Warn, "argparse"));
    logger.log(&test_record(format_args!("bar"), Level::Debug, "argparse"));
    logger.log(&test_record(
        format_args!("baz"),
        Level::Info,
        "argparse::parser",
    ));
    logger.log(&test_record(format_args!("quux"), Level::Debug, "demo"));
    logger.log(&test_record(format_args!("oof"), Level::Trace, "demo"));

    let log_output = normalize_log_output(&String::from_utf8(adapter.lock().clone()).unwrap());
    assert_eq!(
        [
            "[2018-01-01 12:34:56 UTC parser.rs:42] WARN - foo",
            "[2018-01-01 12:34:56 UTC parser.rs:42] INFO - baz",
            "[2018-01-01 12:34:56 UTC parser.rs:42] DEBUG - quux\n",
        ]
        .join("\n"),
        log_output
    );
}
