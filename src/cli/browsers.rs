//! Browser listing command.

use anyhow::Result;
use clap::Parser;

use crate::browser::BrowserKind;

/// Browsers command options.
#[derive(Parser)]
pub struct BrowsersCommand {}

impl BrowsersCommand {
    /// Executes the browsers command.
    pub fn execute(self) -> Result<()> {
        for kind in BrowserKind::ALL {
            println!("{kind}");
        }
        Ok(())
    }
}
