pub mod form_target;
pub mod page_json;
pub mod phones;
