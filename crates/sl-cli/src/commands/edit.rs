use anyhow::Context;
use sl_core::validation::RecordDraft;

use crate::cli::{GlobalFlags, RecordArgs};
use crate::context::AppContext;
use crate::output::records::{WriteView, render_validation, render_write};
use crate::state::SubmitError;

pub async fn run(
    id: &str,
    record: &RecordArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let controller = &mut ctx.controller;
    controller
        .reload()
        .await
        .context("failed to load study records")?;

    let draft = RecordDraft::new(record.title.as_str(), record.time.as_str());
    match controller.update(id, &draft).await {
        Ok(rows) => {
            if rows.is_empty() {
                tracing::warn!(id, "update matched no study record");
            }
            println!("{}", render_write(&WriteView { records: &rows }, flags.format)?);
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            println!("{}", render_validation(&errors, flags.format)?);
            anyhow::bail!("record not saved: {errors}")
        }
        Err(SubmitError::Backend(error)) => {
            Err(error).with_context(|| format!("failed to update study record {id}"))
        }
    }
}
