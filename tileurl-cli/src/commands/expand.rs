//! Template expansion CLI command.
//!
//! Prints each endpoint template obtained from a bracketed range, one per
//! line, ready for shell pipelines.

use clap::Args;
use tileurl::url::expand_url;

use crate::error::CliError;

/// Arguments for the `expand` command.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// URL template with a bracketed range, e.g. "https://{a-c}.tile.example/{z}/{x}/{y}.png"
    pub template: String,
}

/// Run the `expand` command.
pub fn run(args: ExpandArgs) -> Result<(), CliError> {
    let urls = expand_url(&args.template);
    if urls.is_empty() {
        return Err(CliError::EmptyExpansion {
            template: args.template,
        });
    }

    for url in urls {
        println!("{}", url);
    }

    Ok(())
}
