pub mod header;
pub mod modal;
pub mod panels;
pub mod reveal;
