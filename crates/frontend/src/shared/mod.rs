pub mod components;
pub mod confirm;
pub mod dom_ids;
pub mod modal_frame;
pub mod page_data;
pub mod page_frame;
pub mod page_standard;
pub mod phone_rows;
pub mod query_string;
