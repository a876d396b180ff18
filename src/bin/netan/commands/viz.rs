//! `netan viz` command

use anyhow::Result;

use netan::ops::run_visualizers;
use netan::util::process::SystemExecutor;
use netan::util::{GlobalContext, Shell};

pub fn execute(shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::new()?;
    run_visualizers(&ctx, shell, &SystemExecutor)?;
    Ok(())
}
