use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::records::{DetailView, render_detail};

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = &mut ctx.controller;
    controller
        .reload()
        .await
        .context("failed to load study records")?;
    controller.show(id);

    let view = DetailView {
        id,
        record: controller.selection().selected(),
    };
    println!("{}", render_detail(&view, flags.format)?);
    Ok(())
}
