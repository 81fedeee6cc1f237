//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the remove command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let removed = ctx.students.remove(id).await.map_err(CliError::from)?;

    println!("Removed student {} ({})", removed.id, removed.name);
    Ok(())
}
