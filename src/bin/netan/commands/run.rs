//! `netan run` command

use anyhow::Result;

use netan::ops::run_analyzer;
use netan::util::process::SystemExecutor;
use netan::util::{GlobalContext, Shell};

pub fn execute(shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::new()?;
    run_analyzer(&ctx, shell, &SystemExecutor)?;
    Ok(())
}
