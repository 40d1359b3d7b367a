use crate::error::Result;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

pub mod analyze;
pub mod batch;

/// Report sink shared by both commands: the given file, or stdout.
pub(crate) fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create output file '{}'", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
