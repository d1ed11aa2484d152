//! Validate a wishlist script without running it.

use std::path::Path;

use tracing::{error, info};

use crate::script::Script;

/// Parse and validate a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if validation
/// finds problems.
pub async fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::load(path).await?;
    info!(path = %path.display(), steps = script.steps.len(), "Parsed script");

    let problems = script.validate();
    if !problems.is_empty() {
        error!("Script validation failed:");
        for problem in &problems {
            error!("  - {problem}");
        }
        return Err(format!("{} validation errors found", problems.len()).into());
    }

    info!("Script is valid");
    Ok(())
}
