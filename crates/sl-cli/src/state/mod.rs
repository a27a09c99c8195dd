mod controller;
mod list_state;
mod selection;

pub use controller::{Controller, SubmitError};
pub use list_state::{FetchOutcome, ListState};
pub use selection::Selection;
