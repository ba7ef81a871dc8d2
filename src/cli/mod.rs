//! Command-line interface for depsync.
//!
//! One command, two positional paths, three flags:
//!
//! ```bash
//! depsync [--quiet|-q] [--dry|-d] [--note] TOP_LEVEL_FILE SPEC_FILE
//! ```
//!
//! The reconciliation itself lives in [`crate::reconciler`]; this module
//! only loads the two manifests, runs the merge, and makes the
//! report/persist decision:
//!
//! - any change (or `--note`): print the `{N} packages changed.` summary,
//!   then either write the spec file back or, with `--dry`, print
//!   `No changes written.`; the per-package messages follow unless `--quiet`
//! - nothing to do and no `--note`: print `No changes needed.` and exit
//!   without touching the file
//!
//! The summary count only covers insertions and version changes - recording
//! `test-dependencies` does not count as a package change, even when it is
//! the only reason the file is written.

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::manifest::{SpecManifest, TopLevelManifest};
use crate::reconciler::{reconcile, sorted_deps, test_dependencies};

/// Main CLI structure for depsync.
///
/// Copies dependency version pins from the top-level manifest into the spec
/// manifest. The top-level manifest always wins; packages declared only by
/// the spec are left alone (or recorded as test dependencies with `--note`).
#[derive(Parser, Debug)]
#[command(
    name = "depsync",
    about = "Sync dependency versions between a top-level manifest and a spec manifest",
    version
)]
pub struct Cli {
    /// Don't print per-package change messages (the summary line still prints)
    #[arg(short, long)]
    quiet: bool,

    /// Only report possible changes, never write the spec file
    #[arg(short, long)]
    dry: bool,

    /// Record packages found only in the spec file in a test-dependencies field
    #[arg(long)]
    note: bool,

    /// Path to the top-level manifest (the authoritative versions)
    top_level_file: PathBuf,

    /// Path to the spec manifest to synchronize
    spec_file: PathBuf,
}

impl Cli {
    /// Run the reconciliation end to end.
    ///
    /// Both files are read fully before any processing, and the spec file is
    /// written exactly once, after all computation succeeds.
    pub fn execute(self) -> Result<()> {
        let top = TopLevelManifest::load(&self.top_level_file)?;
        let mut spec = SpecManifest::load(&self.spec_file)?;

        let mut deps = spec.dependencies()?.clone();
        let spec_path = self.spec_file.display().to_string();
        let messages = reconcile(&top.dependencies, &mut deps, &spec_path);

        if self.note {
            spec.set_test_dependencies(test_dependencies(&top.dependencies, &deps));
        }

        if messages.is_empty() && !self.note {
            debug!("nothing to reconcile");
            println!("No changes needed.");
            return Ok(());
        }

        println!("{} packages changed.", messages.len());

        if self.dry {
            println!("No changes written.");
        } else {
            spec.set_dependencies(sorted_deps(&deps));
            spec.save()?;
        }

        if !self.quiet {
            println!("{}", messages.join("\n"));
        }

        Ok(())
    }
}
