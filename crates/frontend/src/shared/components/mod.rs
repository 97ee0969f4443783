pub mod confirm_dialog;
pub mod data_table;
pub mod filters;
pub mod pagination_controls;
pub mod resource_list;
