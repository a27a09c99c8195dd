//! `studylog browse`: the list page as a line-driven session.
//!
//! Each input line is one command. Create and edit open a small form that
//! keeps asking until the draft validates or the user gives up.

use std::io::Write;

use sl_core::backend::RecordBackend;
use sl_core::validation::RecordDraft;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::records::{
    DetailView, PageView, WriteView, render_detail, render_page, render_validation, render_write,
};
use crate::state::{Controller, SubmitError};

const HELP: &str = "\
commands:
  n | next          next page
  p | prev          previous page
  <page>            jump to page
  show <id>         record detail
  add               create a record
  edit <id>         edit a record (empty input keeps the current value)
  del <id>          delete a record
  r | reload        fetch records again
  h | help          this help
  q | quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Jump(String),
    Show(String),
    Add,
    Edit(String),
    Delete(String),
    Reload,
    Help,
    Quit,
    Empty,
}

impl BrowseCommand {
    /// Anything unrecognized is treated as a typed page number.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match (word, rest) {
            ("", _) => Self::Empty,
            ("n" | "next", "") => Self::Next,
            ("p" | "prev", "") => Self::Prev,
            ("r" | "reload", "") => Self::Reload,
            ("h" | "help" | "?", "") => Self::Help,
            ("q" | "quit" | "exit", "") => Self::Quit,
            ("add", "") => Self::Add,
            ("show", id) if !id.is_empty() => Self::Show(id.to_string()),
            ("edit", id) if !id.is_empty() => Self::Edit(id.to_string()),
            ("del" | "delete", id) if !id.is_empty() => Self::Delete(id.to_string()),
            _ => Self::Jump(line.to_string()),
        }
    }
}

/// Handle `studylog browse` on stdin/stdout.
pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    session(&mut ctx.controller, input, &mut out, flags.format).await
}

/// Run a browse session until `quit` or end of input.
pub async fn session<B, R, W>(
    controller: &mut Controller<B>,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    B: RecordBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    reload_and_print(controller, out, format).await?;
    writeln!(out, "type h for help")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        controller.close_detail();

        match BrowseCommand::parse(&line) {
            BrowseCommand::Empty => {}
            BrowseCommand::Quit => break,
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Next => {
                if controller.next_page() {
                    print_page(controller, out, format)?;
                }
            }
            BrowseCommand::Prev => {
                if controller.prev_page() {
                    print_page(controller, out, format)?;
                }
            }
            BrowseCommand::Jump(input) => {
                if controller.jump(&input) {
                    print_page(controller, out, format)?;
                }
            }
            BrowseCommand::Reload => reload_and_print(controller, out, format).await?,
            BrowseCommand::Show(id) => controller.show(&id),
            BrowseCommand::Delete(id) => {
                if controller.delete(&id).await {
                    writeln!(out, "deleted {id}")?;
                } else {
                    writeln!(out, "could not delete {id}")?;
                }
                print_page(controller, out, format)?;
            }
            BrowseCommand::Add => {
                if !form(controller, &mut lines, out, format, None).await? {
                    break;
                }
            }
            BrowseCommand::Edit(id) => {
                controller.show(&id);
                // A miss leaves the empty detail open for the render below.
                if let Some(current) = controller.selection().selected() {
                    let prefill = RecordDraft::new(
                        current.title.clone(),
                        current.duration_minutes.to_string(),
                    );
                    controller.close_detail();
                    if !form(controller, &mut lines, out, format, Some((id, prefill))).await? {
                        break;
                    }
                }
            }
        }

        if let Some(id) = controller.selection().requested() {
            let view = DetailView {
                id,
                record: controller.selection().selected(),
            };
            writeln!(out, "{}", render_detail(&view, format)?)?;
        }
    }

    Ok(())
}

async fn reload_and_print<B: RecordBackend, W: Write>(
    controller: &mut Controller<B>,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match controller.reload().await {
        Ok(_) => print_page(controller, out, format),
        Err(error) => {
            writeln!(out, "error: {error}")?;
            Ok(())
        }
    }
}

fn print_page<B: RecordBackend, W: Write>(
    controller: &Controller<B>,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render_page(&PageView::of(controller), format)?)?;
    Ok(())
}

async fn prompt<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    Ok(lines.next_line().await?)
}

/// The create/edit form. `target` is the record being edited and its
/// current values; empty answers keep those values.
///
/// Returns `false` when input ended while the form was open.
async fn form<B, R, W>(
    controller: &mut Controller<B>,
    lines: &mut Lines<R>,
    out: &mut W,
    format: OutputFormat,
    target: Option<(String, RecordDraft)>,
) -> anyhow::Result<bool>
where
    B: RecordBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (id, prefill) = target.map_or((None, RecordDraft::default()), |(id, draft)| {
        (Some(id), draft)
    });

    loop {
        let title_label = if prefill.title.is_empty() {
            String::from("title: ")
        } else {
            format!("title [{}]: ", prefill.title)
        };
        let Some(title) = prompt(lines, out, &title_label).await? else {
            return Ok(false);
        };
        let time_label = if prefill.duration.is_empty() {
            String::from("time (minutes): ")
        } else {
            format!("time (minutes) [{}]: ", prefill.duration)
        };
        let Some(duration) = prompt(lines, out, &time_label).await? else {
            return Ok(false);
        };

        let draft = RecordDraft::new(
            keep_if_empty(title, &prefill.title),
            keep_if_empty(duration, &prefill.duration),
        );

        let result = match &id {
            Some(id) => controller.update(id, &draft).await,
            None => controller.create(&draft).await,
        };

        match result {
            Ok(rows) => {
                writeln!(out, "saved")?;
                writeln!(out, "{}", render_write(&WriteView { records: &rows }, format)?)?;
                print_page(controller, out, format)?;
                return Ok(true);
            }
            Err(SubmitError::Invalid(errors)) => {
                writeln!(out, "{}", render_validation(&errors, format)?)?;
                let Some(answer) = prompt(lines, out, "retry? [Y/n] ").await? else {
                    return Ok(false);
                };
                if answer.trim().eq_ignore_ascii_case("n") {
                    return Ok(true);
                }
            }
            Err(SubmitError::Backend(error)) => {
                writeln!(out, "error: {error}")?;
                return Ok(true);
            }
        }
    }
}

fn keep_if_empty(answer: String, current: &str) -> String {
    if answer.trim().is_empty() {
        current.to_string()
    } else {
        answer
    }
}
