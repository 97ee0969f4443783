#[allow(clippy::module_inception)]
pub mod routes;

pub use routes::{AppRoutes, HOME_ROUTE};
