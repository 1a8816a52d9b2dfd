use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

/// Move the property detail page's sidebar to the InquiryForm component.
///
/// Adds the InquiryForm import, drops the showContactForm state and replaces
/// the inline contact card with `<InquiryForm />`. The file is overwritten in
/// place.
#[derive(Debug, Parser, Clone)]
#[clap(version, author)]
pub struct PatchOpts {
    /// Page to patch.
    #[clap(env = "FIXPAGE_FILE")]
    pub file: PathBuf,
    /// Print the patched content instead of writing it back.
    #[clap(long)]
    pub dry_run: bool,
    /// Log every rule outcome. `RUST_LOG` takes precedence.
    #[clap(short, long)]
    pub verbose: bool,
}

mod logging;
mod transform;

fn main() -> ExitCode {
    let opts = PatchOpts::parse();
    logging::init(opts.verbose);

    match transform::run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "patch failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
