// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for aggregation operations.

use std::fmt;

/// ErrorKind is all kinds of [`Error`] returned by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument is outside the domain of the operation.
    InvalidArgument,
    /// A statistic that needs at least one value was requested on an empty sequence.
    EmptySequence,
    /// A caller-supplied extraction function failed.
    Extraction,
}

impl ErrorKind {
    /// Converts the kind into a static string.
    pub fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::EmptySequence => "EmptySequence",
            ErrorKind::Extraction => "Extraction",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}

/// Error is the error struct returned by fallible operations of this crate.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
            source: None,
        }
    }

    /// Adds a key-value pair describing where the error happened.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Sets the underlying error.
    ///
    /// # Panics
    ///
    /// Panics if the source has already been set.
    pub fn set_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        assert!(self.source.is_none(), "the source error has been set");
        self.source = Some(source.into());
        self
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context entries attached to this error.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }
}

// Convenience constructors
impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub(crate) fn empty_sequence(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::EmptySequence,
            format!("{operation} is undefined on an empty sequence"),
        )
        .with_context("operation", operation)
    }

    /// Wraps the failure of a caller-supplied extraction function.
    ///
    /// The original error is kept as [`std::error::Error::source`]. This is meant to be used
    /// with `map_err` on the result of a `try_*` operation:
    ///
    /// ```
    /// # use aggregates::bag::HashBag;
    /// # use aggregates::error::Error;
    /// # use aggregates::error::ErrorKind;
    /// let words = ["1", "2", "x"];
    /// let err = HashBag::try_count_by(&words, |w| w.parse::<u8>())
    ///     .map_err(Error::extraction)
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Extraction);
    /// ```
    pub fn extraction(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        let message = source.to_string();
        Self::new(ErrorKind::Extraction, message).set_source(source)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate form prints the raw struct.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("source", &self.source);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "Source:")?;
            writeln!(f, "   {source:#}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context_and_message() {
        let err = Error::empty_sequence("median");
        assert_eq!(err.kind(), ErrorKind::EmptySequence);
        assert_eq!(
            err.to_string(),
            "EmptySequence, context: { operation: median } => median is undefined on an empty sequence"
        );
    }

    #[test]
    fn test_extraction_keeps_source() {
        let parse = "x".parse::<i32>().unwrap_err();
        let err = Error::extraction(parse.clone());
        assert_eq!(err.kind(), ErrorKind::Extraction);
        assert_eq!(err.message(), parse.to_string());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), parse.to_string());
    }

    #[test]
    #[should_panic(expected = "the source error has been set")]
    fn test_source_set_twice() {
        let parse = "x".parse::<i32>().unwrap_err();
        let _ = Error::extraction(parse.clone()).set_source(parse);
    }
}
