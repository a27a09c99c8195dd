use anyhow::Context;

use crate::cli::{GlobalFlags, ListArgs};
use crate::context::AppContext;
use crate::output::records::{PageView, render_page};

pub async fn run(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = &mut ctx.controller;
    controller
        .reload()
        .await
        .context("failed to load study records")?;

    if let Some(page) = args.page.as_deref() {
        if !controller.jump(page) {
            tracing::debug!(page, "ignoring page outside the list");
        }
    }

    println!("{}", render_page(&PageView::of(controller), flags.format)?);
    Ok(())
}
