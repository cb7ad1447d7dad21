//! Building blocks shared by the views.

pub mod field;
pub mod footer;
pub mod header;
pub mod input;
pub mod nav;
pub mod popover;
pub mod scrollbar;
pub mod selector;
pub mod shell;
pub mod table;
