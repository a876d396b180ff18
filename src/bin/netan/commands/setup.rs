//! `netan setup` command

use std::sync::Arc;

use anyhow::Result;

use netan::ops::setup;
use netan::util::process::SystemExecutor;
use netan::util::shell::{Shell, Status};
use netan::util::GlobalContext;

pub fn execute(shell: &Arc<Shell>) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let result = setup(&ctx, shell, &SystemExecutor)?;

    shell.status(
        Status::Finished,
        format!("setup completed, {} programs compiled", result.artifacts.len()),
    );
    shell.status(Status::Hint, "Run `netan run` to start the analyzer");

    Ok(())
}
