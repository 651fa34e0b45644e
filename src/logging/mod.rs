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

/// write provides adapters to use anything which implements Write as a logging
/// destination.
pub mod write;

use crate::error::*;
use crate::logging::write::*;
use log::{LevelFilter, Log, Metadata, Record};
use regex::Regex;
use std::env;
use std::io::Write;
use std::str::FromStr;

const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// Parse a log::LevelFilter from a string, ignoring case and surrounding
/// whitespace.
pub fn parse_log_level_filter(s: &str) -> Result<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(Error::InvalidArgument(format!(
            "invalid LevelFilter '{}'",
            s
        ))),
    }
}

/// A LogFilter is a single filter, perhaps one of many, that can be applied to
/// log messages before actually outputting them.
#[derive(Clone, Debug)]
pub struct LogFilter {
    /// This LogFilter is applied to any module whose path matches this
    /// regular expression. The expression is anchored at the start of the
    /// module path. If this is None instead, the filter applies to *all*
    /// modules.
    pub module: Option<Regex>,
    /// The LevelFilter which should be applied to matching modules.
    pub level: LevelFilter,
}

impl LogFilter {
    /// The LevelFilter this LogFilter applies to the given module, or None if
    /// this LogFilter does not match it.
    pub fn max_level_for(&self, module_path: &str) -> Option<LevelFilter> {
        match self.module {
            None => Some(self.level),
            Some(ref module) if module.is_match(module_path) => Some(self.level),
            Some(_) => None,
        }
    }
}

impl FromStr for LogFilter {
    type Err = Error;

    /// Parses either "level" or "module=level", where "module" is a regular
    /// expression matched against the start of module paths.
    fn from_str(s: &str) -> Result<LogFilter> {
        match s.rfind('=') {
            None => Ok(LogFilter {
                module: None,
                level: parse_log_level_filter(s)?,
            }),
            Some(eq_pos) => Ok(LogFilter {
                module: Some(Regex::new(&format!("^{}", s[..eq_pos].trim()))?),
                level: parse_log_level_filter(&s[eq_pos + 1..])?,
            }),
        }
    }
}

/// LogFilters is the full set of filters a Logger applies to log messages.
#[derive(Clone, Debug, Default)]
pub struct LogFilters(pub Vec<LogFilter>);

impl LogFilters {
    /// Returns the LevelFilter which should be applied to the given module.
    /// If no LogFilter applies to it, Trace is returned, since every message
    /// is enabled by default. If several filters match, the *lowest* (i.e.,
    /// most restrictive) LevelFilter wins.
    pub fn max_level_for(&self, module_path: &str) -> LevelFilter {
        self.0
            .iter()
            .filter_map(|f| f.max_level_for(module_path))
            .min()
            .unwrap_or(LevelFilter::Trace)
    }

    /// The highest level any message could be logged at given these filters.
    pub fn max_level(&self) -> LevelFilter {
        self.0
            .iter()
            .map(|f| f.level)
            .max()
            .unwrap_or(LevelFilter::Trace)
    }
}

impl FromStr for LogFilters {
    type Err = Error;

    /// Parse a set of log filters from a string.
    ///
    /// The module part of each filter is a regular expression over module
    /// paths, so it only contains characters valid in module names
    /// ([A-Za-z0-9_] separated by ':') plus regex operators like *+?|(){}[].
    /// None of those is ';', so ';' separates the filters:
    ///
    /// regex=level;regex=level;...
    ///
    /// Empty entries (e.g. a trailing ';') are ignored.
    fn from_str(s: &str) -> Result<LogFilters> {
        let filters: Result<Vec<LogFilter>> = s
            .split(';')
            .filter(|f| !f.trim().is_empty())
            .map(|f| f.parse())
            .collect();
        Ok(LogFilters(filters?))
    }
}

/// Options controls a Logger's behavior. Generally these should be
/// constructed using OptionsBuilder.
pub struct Options {
    /// Filters controlling which log statements are enabled. If unspecified,
    /// defaults to the value of the RUST_LOG environment variable. If that is
    /// also unset, every logging statement is enabled.
    pub filters: LogFilters,
    /// The global maximum enabled logging level. This is the highest level
    /// configured in any of `filters`, or `LevelFilter::Trace` if there are
    /// none.
    pub max_level: LevelFilter,
    /// Where to write log output to.
    pub output_factory: LogOutputFactory,
    /// Whether or not a failure to write (or flush) log output should panic.
    /// By default failures are silently ignored, so a program keeps working
    /// even if it can't produce log output.
    pub panic_on_output_failure: bool,
    /// If true, flush() is called after every log statement. Each message
    /// then appears immediately, at a significant cost to logging
    /// performance. Disabled by default.
    pub always_flush: bool,
}

/// OptionsBuilder provides a builder-style interface to construct an Options.
#[derive(Default)]
pub struct OptionsBuilder {
    filters: Option<LogFilters>,
    output_factory: Option<LogOutputFactory>,
    panic_on_output_failure: Option<bool>,
    always_flush: Option<bool>,
}

impl OptionsBuilder {
    /// Construct a new OptionsBuilder with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filters to apply. If this is never called, the filters are
    /// read from the RUST_LOG environment variable instead.
    pub fn set_filters(mut self, filters: LogFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the output factory the Logger should use. Defaults to stderr.
    pub fn set_output_factory(mut self, output_factory: LogOutputFactory) -> Self {
        self.output_factory = Some(output_factory);
        self
    }

    /// Write log output to the given Write implementation.
    pub fn set_output_to<T: Write + Send + 'static>(self, output_writer: T) -> Self {
        self.set_output_factory(new_log_output_factory(output_writer))
    }

    /// Set whether or not the Logger should panic if writing log output fails.
    pub fn set_panic_on_output_failure(mut self, panic_on_output_failure: bool) -> Self {
        self.panic_on_output_failure = Some(panic_on_output_failure);
        self
    }

    /// Set whether or not the Logger should flush after every logging call.
    pub fn set_always_flush(mut self, always_flush: bool) -> Self {
        self.always_flush = Some(always_flush);
        self
    }

    /// Build an Options structure from this builder's current state. This
    /// fails if no filters were set and RUST_LOG contains invalid filters.
    pub fn build(self) -> Result<Options> {
        let filters: LogFilters = match self.filters {
            Some(filters) => filters,
            None => match env::var(RUST_LOG_ENV_VAR) {
                Ok(s) => s.parse()?,
                Err(env::VarError::NotPresent) => LogFilters::default(),
                Err(e) => return Err(e.into()),
            },
        };

        Ok(Options {
            max_level: filters.max_level(),
            filters: filters,
            output_factory: self.output_factory.unwrap_or_else(|| {
                Box::new(|| -> Box<dyn Write> { Box::new(std::io::stderr()) })
            }),
            panic_on_output_failure: self.panic_on_output_failure.unwrap_or(false),
            always_flush: self.always_flush.unwrap_or(false),
        })
    }
}

/// Formats the given log Record into a single line (without a trailing
/// newline).
pub fn format_log_record(record: &Record) -> String {
    format!(
        "[{} {}:{}] {} - {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        record.file().unwrap_or("UNKNOWN_FILE"),
        record
            .line()
            .map_or("UNKNOWN_LINE".to_owned(), |l| l.to_string()),
        record.level(),
        record.args()
    )
}

/// Logger is a Log implementation suitable for command-line programs.
pub struct Logger {
    options: Options,
}

impl Logger {
    /// Construct a new Logger with the given Options controlling its behavior.
    pub fn new(options: Options) -> Self {
        Logger { options: options }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.options.max_level
    }

    fn log(&self, record: &Record) {
        if record.level()
            > self
                .options
                .filters
                .max_level_for(record.module_path().unwrap_or(""))
        {
            return;
        }

        let res = writeln!(
            (self.options.output_factory)(),
            "{}",
            format_log_record(record)
        );
        if let Err(e) = res {
            if self.options.panic_on_output_failure {
                panic!("Failed to write log output: {}", e);
            }
        }
        if self.options.always_flush {
            self.flush();
        }
    }

    fn flush(&self) {
        if let Err(e) = (self.options.output_factory)().flush() {
            if self.options.panic_on_output_failure {
                panic!("Failed to flush log output: {}", e);
            }
        }
    }
}

/// Install a new global Logger with the given Options. This fails if a global
/// logger has already been installed.
pub fn try_init(options: Options) -> Result<()> {
    let logger = Logger::new(options);
    log::set_max_level(logger.options.max_level);
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}
