pub mod check_item;
pub mod header;
pub mod summary;
