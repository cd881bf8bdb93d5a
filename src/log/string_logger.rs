// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

/// Lines shared by clones of a `StringLogger`.
#[derive(Default)]
pub struct LoggerInner {
    pub(crate) lines: Vec<String>,
    pub(crate) warn: bool,
}

/// Thread-safe string logger.
#[derive(Clone, Default)]
pub struct StringLogger {
    pub(crate) debug: bool,
    pub(crate) inner: Arc<Mutex<LoggerInner>>,
}

impl StringLogger {
    /// Create a logger which also echoes each line to stdout when `debug` is set.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Default::default()
        }
    }

    /// Call a function and trace the result.
    pub fn call<T>(&self, line: String, result: Result<T, Error>) -> Result<T, Error> {
        match &result {
            Ok(_) => self.trace(format!("{line} succeeded")),
            Err(e) => self.warn(format!("{line} failed: {e}")),
        }
        result
    }

    /// Whether the log contains any warnings.
    pub fn contains_warnings(&self) -> bool {
        self.inner
            .lock()
            .ok()
            .map(|inner| inner.warn)
            .unwrap_or(false)
    }

    /// Number of lines logged so far.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a trace line to this logger.
    pub fn trace(&self, line: String) {
        if !line.is_empty() {
            if self.debug {
                println!("{line}");
            }
            if let Ok(mut inner) = self.inner.lock() {
                inner.lines.push(line);
            }
        }
    }

    /// Add a warning or error line to this logger.
    pub fn warn(&self, line: String) {
        if !line.is_empty() {
            if self.debug {
                println!("{line}");
            }
            if let Ok(mut inner) = self.inner.lock() {
                inner.lines.push(line);
                inner.warn = true;
            }
        }
    }
}

impl Display for StringLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Ok(inner) = self.inner.lock() {
            f.write_str(&inner.lines.join("\n"))
        } else {
            Ok(())
        }
    }
}
