pub mod add_history;
pub mod clear_history;
pub mod delete_history_entry;
pub mod get_history;
