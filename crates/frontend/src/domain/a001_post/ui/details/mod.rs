//! Post Details UI Module
//!
//! - view_model.rs: состояние формы, загрузка и сохранение
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PostDetails;
pub use view_model::{PostDetailsViewModel, PostFormTarget};
