use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Reload and show one page of records.
    List(ListArgs),
    /// Show one record by id.
    Show {
        /// Record id.
        id: String,
    },
    /// Create a record.
    Add(RecordArgs),
    /// Replace title and duration of a record.
    Edit {
        /// Record id.
        id: String,
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Delete a record.
    Delete {
        /// Record id.
        id: String,
    },
    /// Page through records interactively.
    Browse,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page to show (1-based). Out-of-range pages fall back to page 1.
    #[arg(long)]
    pub page: Option<String>,
}

/// Form fields for add/edit. Both are validated by studylog, not clap, so
/// the inline validation messages are the ones users see.
#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    /// What was studied.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Duration in minutes.
    #[arg(long, default_value = "")]
    pub time: String,
}
