//! Failures of a fixture build.
use std::backtrace::Backtrace;
use thiserror::Error;

/// Install hint shown when the writer is compiled out.
pub const INSTALL_HINT: &str = "cargo install pptx-fixtures --features pptx";

/// The two ways building a fixture can fail.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The presentation writer is not part of this build
    #[error("The pptx writer is not available (run: {hint})")]
    MissingDependency { hint: &'static str },

    /// Anything raised while building the deck or writing the file
    #[error("{source}")]
    Build {
        #[source]
        source: crate::common::Error,
        /// Where the failure was converted, captured regardless of `RUST_BACKTRACE`
        backtrace: Box<Backtrace>,
    },
}

impl FixtureError {
    /// The error returned when the writer is compiled out.
    pub fn missing_dependency() -> Self {
        FixtureError::MissingDependency { hint: INSTALL_HINT }
    }
}

impl From<crate::common::Error> for FixtureError {
    fn from(source: crate::common::Error) -> Self {
        FixtureError::Build {
            source,
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }
}
