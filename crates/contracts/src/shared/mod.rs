pub mod api_error;
pub mod list;

pub use api_error::{ApiErrorBody, ErrorCode, ErrorMessage};
pub use list::{IdsRequest, Paginated, PaginationMeta};
