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

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A LogOutputFactory is a function which can be called repeatedly, returning
/// a Write implementor each time which can be used for log output.
///
/// This is necessary because upstream's Log::log function takes &self, whereas
/// all of the interesting member functions on Write take &mut self.
pub type LogOutputFactory = Box<dyn Fn() -> Box<dyn Write> + Send + Sync>;

/// SyncWriteAdapter shares a single Write implementor between all of its
/// clones. It is always Send + Sync + Clone, so arbitrary writers (e.g. an
/// in-memory buffer) can back a LogOutputFactory.
///
/// Every write goes through a Mutex, so there is some performance penalty to
/// using this.
pub struct SyncWriteAdapter<T: Write> {
    writer: Arc<Mutex<T>>,
}

impl<T: Write + Send + 'static> SyncWriteAdapter<T> {
    /// Create a new SyncWriteAdapter wrapping the given writer.
    pub fn new(writer: T) -> Self {
        SyncWriteAdapter {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Lock the wrapped writer. A poisoned lock is recovered rather than
    /// propagated.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Write + Send + 'static> Write for SyncWriteAdapter<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

// Deriving Clone would require T: Clone.
impl<T: Write> Clone for SyncWriteAdapter<T> {
    fn clone(&self) -> Self {
        SyncWriteAdapter {
            writer: self.writer.clone(),
        }
    }
}

/// Construct a LogOutputFactory which writes everything to the given writer.
pub fn new_log_output_factory<T: Write + Send + 'static>(writer: T) -> LogOutputFactory {
    let writer = SyncWriteAdapter::new(writer);
    Box::new(move || -> Box<dyn Write> { Box::new(writer.clone()) })
}
