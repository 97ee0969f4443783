//! Описание колонок таблицы и их виджетов (поиск, сортировка, фильтр)

use chrono::NaiveDate;
use leptos::prelude::*;

use super::view_state::SortOrder;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Сторона, к которой прижат выпадающий виджет колонки.
/// Первая колонка раскрывается вправо от левого края, остальные влево от правого.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownAlignment {
    Left,
    Right,
}

impl DropdownAlignment {
    pub fn for_column(index: usize) -> Self {
        if index == 0 {
            DropdownAlignment::Left
        } else {
            DropdownAlignment::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DropdownAlignment::Left => "column-popover--left",
            DropdownAlignment::Right => "column-popover--right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Вид фильтра колонки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Text { placeholder: String },
    Toggle { label: String },
    DateRange,
    CheckboxGroup { options: Vec<FilterOption> },
    RadioGroup { options: Vec<FilterOption> },
}

/// Значение фильтра, типизированное по виду виджета
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    Many(Vec<String>),
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Значение параметра в URL; `None` означает "удалить параметр"
    pub fn to_param(&self) -> Option<String> {
        match self {
            FilterValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            FilterValue::Flag(true) => Some("true".to_string()),
            FilterValue::Flag(false) => None,
            FilterValue::Many(values) => {
                let values: Vec<&str> = values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect();
                (!values.is_empty()).then(|| values.join(","))
            }
            FilterValue::DateRange { from: None, to: None } => None,
            FilterValue::DateRange { from, to } => Some(format!(
                "{},{}",
                from.map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                to.map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            )),
        }
    }

    /// Начальное значение виджета из параметра URL.
    /// Единственная проверка это приведение типа: кривая дата становится пустой.
    pub fn from_param(kind: &FilterKind, raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();
        match kind {
            FilterKind::Text { .. } | FilterKind::RadioGroup { .. } => {
                FilterValue::Text(raw.to_string())
            }
            FilterKind::Toggle { .. } => FilterValue::Flag(raw == "true"),
            FilterKind::CheckboxGroup { .. } => FilterValue::Many(
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            FilterKind::DateRange => {
                let (from, to) = raw.split_once(',').unwrap_or((raw, ""));
                FilterValue::DateRange {
                    from: parse_date(from),
                    to: parse_date(to),
                }
            }
        }
    }

    pub fn text(&self) -> String {
        match self {
            FilterValue::Text(text) => text.clone(),
            other => other.to_param().unwrap_or_default(),
        }
    }

    pub fn flag(&self) -> bool {
        matches!(self, FilterValue::Flag(true))
    }

    pub fn many(&self) -> Vec<String> {
        match self {
            FilterValue::Many(values) => values.clone(),
            _ => Vec::new(),
        }
    }

    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            FilterValue::DateRange { from, to } => (*from, *to),
            _ => (None, None),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct SearchDescriptor {
    pub initial_value: String,
    pub on_submit: Callback<String>,
    pub on_reset: Callback<()>,
}

#[derive(Clone)]
pub struct SortDescriptor {
    pub initial_value: Option<SortOrder>,
    pub on_sort_change: Callback<Option<SortOrder>>,
}

#[derive(Clone)]
pub struct FilterDescriptor {
    pub kind: FilterKind,
    pub initial_value: FilterValue,
    pub on_filter: Callback<FilterValue>,
    pub on_reset: Callback<()>,
}

/// Колонка таблицы: ключ значения в `Row`, заголовок и необязательные виджеты
#[derive(Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: String,
    pub search: Option<SearchDescriptor>,
    pub sort: Option<SortDescriptor>,
    pub filter: Option<FilterDescriptor>,
}

impl ColumnDef {
    pub fn new(key: &'static str, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            search: None,
            sort: None,
            filter: None,
        }
    }

    pub fn with_search(mut self, search: SearchDescriptor) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_sort(mut self, sort: SortDescriptor) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filter(mut self, filter: FilterDescriptor) -> Self {
        self.filter = Some(filter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox_kind() -> FilterKind {
        FilterKind::CheckboxGroup {
            options: vec![
                FilterOption::new("draft", "Draft"),
                FilterOption::new("published", "Published"),
            ],
        }
    }

    #[test]
    fn test_alignment_by_position() {
        assert_eq!(DropdownAlignment::for_column(0), DropdownAlignment::Left);
        assert_eq!(DropdownAlignment::for_column(1), DropdownAlignment::Right);
        assert_eq!(DropdownAlignment::for_column(7), DropdownAlignment::Right);
    }

    #[test]
    fn test_empty_and_false_values_delete_param() {
        assert_eq!(FilterValue::Text(String::new()).to_param(), None);
        assert_eq!(FilterValue::Text("  ".into()).to_param(), None);
        assert_eq!(FilterValue::Flag(false).to_param(), None);
        assert_eq!(FilterValue::Many(vec![]).to_param(), None);
        assert_eq!(FilterValue::Many(vec!["".into()]).to_param(), None);
        assert_eq!(
            FilterValue::DateRange { from: None, to: None }.to_param(),
            None
        );
    }

    #[test]
    fn test_values_to_param() {
        assert_eq!(FilterValue::Text("5".into()).to_param(), Some("5".into()));
        assert_eq!(FilterValue::Flag(true).to_param(), Some("true".into()));
        assert_eq!(
            FilterValue::Many(vec!["draft".into(), "archived".into()]).to_param(),
            Some("draft,archived".into())
        );
        let from = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(
            FilterValue::DateRange { from, to: None }.to_param(),
            Some("2024-01-31,".into())
        );
    }

    #[test]
    fn test_from_param_by_kind() {
        assert_eq!(
            FilterValue::from_param(&checkbox_kind(), Some("draft,published")),
            FilterValue::Many(vec!["draft".into(), "published".into()])
        );
        assert_eq!(
            FilterValue::from_param(&checkbox_kind(), None),
            FilterValue::Many(vec![])
        );
        let toggle = FilterKind::Toggle { label: "Approved".into() };
        assert_eq!(FilterValue::from_param(&toggle, Some("true")), FilterValue::Flag(true));
        assert_eq!(FilterValue::from_param(&toggle, Some("yes")), FilterValue::Flag(false));

        let text = FilterKind::Text { placeholder: String::new() };
        assert_eq!(
            FilterValue::from_param(&text, Some(">=5")),
            FilterValue::Text(">=5".into())
        );
    }

    #[test]
    fn test_date_range_coercion() {
        let value = FilterValue::from_param(&FilterKind::DateRange, Some("2024-02-01,2024-02-10"));
        assert_eq!(
            value,
            FilterValue::DateRange {
                from: NaiveDate::from_ymd_opt(2024, 2, 1),
                to: NaiveDate::from_ymd_opt(2024, 2, 10),
            }
        );

        let broken = FilterValue::from_param(&FilterKind::DateRange, Some("not-a-date,2024-02-10"));
        assert_eq!(
            broken,
            FilterValue::DateRange {
                from: None,
                to: NaiveDate::from_ymd_opt(2024, 2, 10),
            }
        );
        assert!(broken.to_param().is_some());
    }
}
