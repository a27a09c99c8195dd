pub mod add;
pub mod browse;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod show;
