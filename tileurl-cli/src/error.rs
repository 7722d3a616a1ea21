//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use tileurl::url::UrlError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// A range expanded to zero endpoint templates
    EmptyExpansion { template: String },
    /// URL resolution failed
    Resolution(UrlError),
    /// The resolver produced no URL for the requested coordinate
    NoUrl,
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::EmptyExpansion { .. } => {
                eprintln!();
                eprintln!("A descending range such as {{c-a}} or {{5-2}} expands to nothing.");
                eprintln!("Write the range ascending: {{a-c}}, {{2-5}}.");
            }
            CliError::Resolution(UrlError::UnboundedGrid { zoom }) => {
                eprintln!();
                eprintln!(
                    "The {{-y}} placeholder needs a bounded tile grid at zoom {}.",
                    zoom
                );
                eprintln!("Raise --max-zoom so the grid covers the requested zoom level.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyExpansion { template } => {
                write!(f, "'{}' expands to no endpoints", template)
            }
            CliError::Resolution(err) => write!(f, "{}", err),
            CliError::NoUrl => write!(f, "no URL produced for the requested coordinate"),
        }
    }
}

impl From<UrlError> for CliError {
    fn from(err: UrlError) -> Self {
        CliError::Resolution(err)
    }
}
