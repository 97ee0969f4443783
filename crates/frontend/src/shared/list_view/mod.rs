//! Списочные экраны админки: состояние в URL, пагинация, строки, выбор, загрузка

pub mod columns;
pub mod fetch;
pub mod pagination;
pub mod query;
pub mod rows;
pub mod screen;
pub mod selection;
pub mod view_state;

pub use columns::{
    ColumnDef, DropdownAlignment, FilterDescriptor, FilterKind, FilterOption, FilterValue,
    SearchDescriptor, SortDescriptor,
};
pub use fetch::{use_list_resource, ListResource};
pub use pagination::{controls_visible, page_size_url, page_url, PageWindow};
pub use query::{use_list_query, ListQuery};
pub use rows::{BodyState, CellValue, FlatRow, Row};
pub use screen::{use_list_screen, ListScreen};
pub use selection::{Selection, SelectionState};
pub use view_state::{ParamKey, SortOrder, ViewState, DEFAULT_LIMIT, LIMIT_OPTIONS};
