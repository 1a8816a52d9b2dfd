use std::io::Write;

use fixpage::{WriteMode, property_page};
use tracing::info;

use crate::PatchOpts;

pub const SUCCESS_MESSAGE: &str = "File updated successfully!";

pub fn run(opts: &PatchOpts) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if opts.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::InPlace
    };
    let report = property_page::patch().apply_to_file(&opts.file, mode)?;
    info!(
        path = %report.path.display(),
        changed = report.patched.changed(),
        written = report.written,
        "done"
    );

    let mut stdout = std::io::stdout().lock();
    match mode {
        WriteMode::InPlace => writeln!(stdout, "{SUCCESS_MESSAGE}")?,
        WriteMode::DryRun => write!(stdout, "{}", report.patched.content)?,
    }
    Ok(())
}
