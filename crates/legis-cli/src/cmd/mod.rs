pub mod list;
pub mod predict;
pub mod related;
pub mod show;
pub mod status;
pub mod statuses;
pub mod timeline;
pub mod types;
