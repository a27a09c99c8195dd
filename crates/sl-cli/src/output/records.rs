//! Layouts for study records: the page table with its pager line, the
//! detail view, write results, and form errors.

use serde::Serialize;
use sl_core::backend::RecordBackend;
use sl_core::entities::StudyRecord;
use sl_core::pagination::PageMarker;
use sl_core::validation::{Field, ValidationErrors};

use crate::cli::OutputFormat;
use crate::output::table::{TableOptions, render_entity_table};
use crate::output::{render, table_options};
use crate::state::Controller;

const RECORD_HEADERS: [&str; 5] = ["id", "title", "time", "created_at", "updated_at"];

/// One page of the record list.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub loading: bool,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub markers: Vec<PageMarker>,
    pub records: &'a [StudyRecord],
}

impl<'a> PageView<'a> {
    pub fn of<B: RecordBackend>(controller: &'a Controller<B>) -> Self {
        let paginator = controller.paginator();
        Self {
            loading: controller.list().is_loading(),
            page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            total_items: paginator.total_items(),
            page_size: paginator.page_size(),
            markers: controller.markers(),
            records: controller.visible(),
        }
    }
}

/// The detail view. `record` is `None` when the id was not in the list.
#[derive(Debug, Serialize)]
pub struct DetailView<'a> {
    pub id: &'a str,
    pub record: Option<&'a StudyRecord>,
}

/// Rows returned by an insert or update.
#[derive(Debug, Serialize)]
pub struct WriteView<'a> {
    pub records: &'a [StudyRecord],
}

#[derive(Debug, Serialize)]
pub struct DeleteView<'a> {
    pub id: &'a str,
    pub deleted: bool,
    pub remaining: usize,
}

pub fn render_page(view: &PageView<'_>, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }
    let table = records_table(view.records, table_options());
    let summary = format!(
        "page {}/{} ({} records)",
        view.page, view.total_pages, view.total_items
    );
    if view.total_pages == 0 {
        return Ok(format!("{table}\n{summary}"));
    }
    Ok(format!(
        "{table}\n\n{}\n{summary}",
        pager_line(&view.markers, view.page)
    ))
}

pub fn render_detail(view: &DetailView<'_>, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }
    let Some(record) = view.record else {
        return Ok(format!("(no record selected: {})", view.id));
    };
    let rows = RECORD_HEADERS
        .iter()
        .zip(record_cells(record))
        .map(|(key, value)| vec![(*key).to_string(), value])
        .collect::<Vec<_>>();
    Ok(render_entity_table(&["field", "value"], &rows, table_options()))
}

pub fn render_write(view: &WriteView<'_>, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }
    Ok(records_table(view.records, table_options()))
}

pub fn render_validation(errors: &ValidationErrors, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(errors, format);
    }
    Ok(errors
        .errors()
        .iter()
        .map(|error| format!("{}: {}", field_label(error.field), error.message))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Form label of a field, as shown next to its error.
#[must_use]
pub const fn field_label(field: Field) -> &'static str {
    match field {
        Field::Title => "title",
        Field::Duration => "time",
    }
}

#[must_use]
pub fn records_table(records: &[StudyRecord], options: TableOptions) -> String {
    if records.is_empty() {
        return String::from("(no records)");
    }
    let rows = records.iter().map(record_cells).collect::<Vec<_>>();
    render_entity_table(&RECORD_HEADERS, &rows, options)
}

fn record_cells(record: &StudyRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.title.clone(),
        record.duration_minutes.to_string(),
        record.created_at.trim_end().to_string(),
        record.updated_at.trim_end().to_string(),
    ]
}

/// `1 … 4 [5] 6 … 9`: the current page is bracketed.
#[must_use]
pub fn pager_line(markers: &[PageMarker], current: usize) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if *page == current => format!("[{page}]"),
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => String::from("…"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
