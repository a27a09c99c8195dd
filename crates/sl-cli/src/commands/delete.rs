use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::records::DeleteView;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = &mut ctx.controller;
    controller
        .reload()
        .await
        .context("failed to load study records")?;

    let deleted = controller.delete(id).await;
    output(
        &DeleteView {
            id,
            deleted,
            remaining: controller.list().records().len(),
        },
        flags.format,
    )
}
