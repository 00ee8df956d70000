pub mod footer;
pub mod header;
pub mod modal;
pub mod rating;
