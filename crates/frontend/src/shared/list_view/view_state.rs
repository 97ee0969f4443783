//! Состояние списка, закодированное в query string.
//!
//! URL остаётся единственным хранилищем фильтров: страница читает `ViewState`
//! из `location.search` при каждом рендере и пишет его обратно навигацией.
//!
//! Формат ключей:
//! - `searchBy.<field>=<text>`
//! - `filterBy.<field>=<value>` и `filterBy.<field>Gte=<value>`
//! - `orderBy.<field>=ASC|DESC`
//! - `page=<n>`, `limit=<n>`

use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: u32 = 10;
pub const LIMIT_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_ORDER_FIELD: &str = "createdAt";

/// Направление сортировки колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    /// Клик по заголовку: нет сортировки -> ASC -> DESC -> нет сортировки
    pub fn cycle(current: Option<SortOrder>) -> Option<SortOrder> {
        match current {
            None => Some(SortOrder::Asc),
            Some(SortOrder::Asc) => Some(SortOrder::Desc),
            Some(SortOrder::Desc) => None,
        }
    }
}

/// Один параметр query string, которым управляет виджет колонки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKey {
    Search(String),
    Filter(String),
    FilterGte(String),
    Order(String),
    Page,
    Limit,
}

impl ParamKey {
    pub fn to_key(&self) -> String {
        match self {
            ParamKey::Search(field) => format!("searchBy.{}", field),
            ParamKey::Filter(field) => format!("filterBy.{}", field),
            ParamKey::FilterGte(field) => format!("filterBy.{}Gte", field),
            ParamKey::Order(field) => format!("orderBy.{}", field),
            ParamKey::Page => "page".to_string(),
            ParamKey::Limit => "limit".to_string(),
        }
    }
}

/// Типизированное представление query string списка.
///
/// Пустые значения никогда не хранятся: `set` с пустой строкой удаляет ключ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    params: BTreeMap<String, String>,
}

impl ViewState {
    /// Разбирает `?a=b&c=d` (ведущий `?` необязателен)
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }

        let params = serde_qs::from_str::<BTreeMap<String, String>>(query)
            .unwrap_or_else(|e| {
                log::debug!("serde_qs could not parse '{}': {}, falling back", query, e);
                parse_pairs(query)
            })
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();

        Self { params }
    }

    /// Query string без ведущего `?`; ключи в стабильном (отсортированном) порядке
    pub fn to_query_string(&self) -> String {
        encode_pairs(self.params.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &ParamKey) -> Option<&str> {
        self.params.get(&key.to_key()).map(String::as_str)
    }

    /// Устанавливает параметр; `None` или пустая строка удаляют ключ
    pub fn set(&mut self, key: &ParamKey, value: Option<String>) {
        let key = key.to_key();
        match value {
            Some(v) if !v.trim().is_empty() => {
                self.params.insert(key, v);
            }
            _ => {
                self.params.remove(&key);
            }
        }
    }

    /// Копия с одним изменённым параметром
    pub fn with(&self, key: &ParamKey, value: Option<String>) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

    pub fn search(&self, field: &str) -> Option<&str> {
        self.get(&ParamKey::Search(field.to_string()))
    }

    pub fn filter(&self, field: &str) -> Option<&str> {
        self.get(&ParamKey::Filter(field.to_string()))
    }

    pub fn filter_gte(&self, field: &str) -> Option<&str> {
        self.get(&ParamKey::FilterGte(field.to_string()))
    }

    pub fn order(&self, field: &str) -> Option<SortOrder> {
        self.get(&ParamKey::Order(field.to_string()))
            .and_then(SortOrder::parse)
    }

    /// Номер страницы как есть: может быть отрицательным или мусорным,
    /// ограничение делает пагинация
    pub fn page(&self) -> Option<i64> {
        self.get(&ParamKey::Page)
            .and_then(|p| p.trim().parse::<i64>().ok())
    }

    /// Размер страницы; значения вне `LIMIT_OPTIONS` заменяются на `DEFAULT_LIMIT`
    pub fn limit(&self) -> u32 {
        normalize_limit(self.get(&ParamKey::Limit))
    }

    /// Параметры без `page`/`limit`, их добавляет пагинация
    pub fn without_paging(&self) -> Self {
        let mut next = self.clone();
        next.set(&ParamKey::Page, None);
        next.set(&ParamKey::Limit, None);
        next
    }

    /// Query string для запроса к backend.
    ///
    /// Если сортировки по `createdAt` нет, добавляется `orderBy.createdAt=DESC`.
    /// В видимый URL этот параметр не пишется.
    pub fn fetch_query(&self) -> String {
        let order_key = ParamKey::Order(DEFAULT_ORDER_FIELD.to_string()).to_key();
        if self.params.contains_key(&order_key) {
            return self.to_query_string();
        }
        let mut params = self.params.clone();
        params.insert(order_key, SortOrder::Desc.as_str().to_string());
        encode_pairs(params.iter())
    }
}

pub fn normalize_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|l| l.trim().parse::<u32>().ok())
        .filter(|l| LIMIT_OPTIONS.contains(l))
        .unwrap_or(DEFAULT_LIMIT)
}

fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    pairs
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Простой разбор `k=v&k2=v2` на случай, если serde_qs отверг строку
/// (например, из-за скобок в ключе)
fn parse_pairs(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            match (decode_component(k), decode_component(v)) {
                (Some(k), Some(v)) => Some((k, v)),
                _ => {
                    log::debug!("dropping query pair '{}': not valid UTF-8 after decoding", pair);
                    None
                }
            }
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_question_mark() {
        let a = ViewState::from_query("?searchBy.title=rust&page=2");
        let b = ViewState::from_query("searchBy.title=rust&page=2");
        assert_eq!(a, b);
        assert_eq!(a.search("title"), Some("rust"));
        assert_eq!(a.page(), Some(2));
    }

    #[test]
    fn test_parse_decodes_values() {
        let state = ViewState::from_query("searchBy.title=hello%20world&filterBy.status=draft%2Cpublished");
        assert_eq!(state.search("title"), Some("hello world"));
        assert_eq!(state.filter("status"), Some("draft,published"));
    }

    #[test]
    fn test_parse_drops_empty_values() {
        let state = ViewState::from_query("searchBy.title=&page=3");
        assert_eq!(state.search("title"), None);
        assert_eq!(state.to_query_string(), "page=3");
    }

    #[test]
    fn test_likes_column_initial_state() {
        let state = ViewState::from_query("filterBy.likesNumGte=5&orderBy.likesNum=DESC");
        assert_eq!(state.filter_gte("likesNum"), Some("5"));
        assert_eq!(state.order("likesNum"), Some(SortOrder::Desc));
        assert_eq!(state.order("title"), None);
    }

    #[test]
    fn test_set_empty_deletes_key() {
        let state = ViewState::from_query("searchBy.title=rust&page=2");

        let cleared = state.with(&ParamKey::Search("title".into()), Some(String::new()));
        assert_eq!(cleared.search("title"), None);
        assert_eq!(cleared.to_query_string(), "page=2");

        let cleared = state.with(&ParamKey::Search("title".into()), Some("   ".into()));
        assert_eq!(cleared.search("title"), None);

        let cleared = state.with(&ParamKey::Search("title".into()), None);
        assert!(!cleared.to_query_string().contains("searchBy"));
    }

    #[test]
    fn test_set_mutates_exactly_one_param() {
        let state = ViewState::from_query("page=4&limit=20&searchBy.title=a");
        let next = state.with(&ParamKey::Order("likesNum".into()), Some("ASC".into()));
        assert_eq!(next.page(), Some(4));
        assert_eq!(next.limit(), 20);
        assert_eq!(next.search("title"), Some("a"));
        assert_eq!(next.order("likesNum"), Some(SortOrder::Asc));
    }

    #[test]
    fn test_fetch_query_injects_default_order() {
        let state = ViewState::from_query("page=2");
        assert_eq!(state.fetch_query(), "orderBy.createdAt=DESC&page=2");
        // видимый URL не меняется
        assert_eq!(state.to_query_string(), "page=2");
    }

    #[test]
    fn test_fetch_query_keeps_explicit_created_at_order() {
        let state = ViewState::from_query("orderBy.createdAt=ASC");
        assert_eq!(state.fetch_query(), "orderBy.createdAt=ASC");

        let empty = ViewState::default();
        assert_eq!(empty.fetch_query(), "orderBy.createdAt=DESC");
    }

    #[test]
    fn test_serialization_encodes_values() {
        let state = ViewState::default().with(&ParamKey::Search("title".into()), Some("a&b c".into()));
        assert_eq!(state.to_query_string(), "searchBy.title=a%26b%20c");
        assert_eq!(ViewState::from_query(&state.to_query_string()), state);
    }

    #[test]
    fn test_limit_normalization() {
        assert_eq!(ViewState::default().limit(), DEFAULT_LIMIT);
        assert_eq!(ViewState::from_query("limit=30").limit(), 30);
        assert_eq!(ViewState::from_query("limit=7").limit(), DEFAULT_LIMIT);
        assert_eq!(ViewState::from_query("limit=abc").limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_is_raw() {
        assert_eq!(ViewState::from_query("page=-3").page(), Some(-3));
        assert_eq!(ViewState::from_query("page=x").page(), None);
        assert_eq!(ViewState::default().page(), None);
    }

    #[test]
    fn test_without_paging() {
        let state = ViewState::from_query("page=2&limit=20&filterBy.approved=true");
        assert_eq!(state.without_paging().to_query_string(), "filterBy.approved=true");
    }

    #[test]
    fn test_fallback_parser() {
        let pairs = parse_pairs("a=1&b=x+y&c&d=%2F");
        assert_eq!(pairs.get("a").map(String::as_str), Some("1"));
        assert_eq!(pairs.get("b").map(String::as_str), Some("x y"));
        assert_eq!(pairs.get("c").map(String::as_str), Some(""));
        assert_eq!(pairs.get("d").map(String::as_str), Some("/"));
    }

    #[test]
    fn test_fallback_parser_skips_invalid_utf8_pair() {
        let pairs = parse_pairs("searchBy.title=%FF&filterBy.status=draft");
        assert!(!pairs.contains_key("searchBy.title"));
        assert_eq!(pairs.get("filterBy.status").map(String::as_str), Some("draft"));
    }

    #[test]
    fn test_sort_cycle() {
        assert_eq!(SortOrder::cycle(None), Some(SortOrder::Asc));
        assert_eq!(SortOrder::cycle(Some(SortOrder::Asc)), Some(SortOrder::Desc));
        assert_eq!(SortOrder::cycle(Some(SortOrder::Desc)), None);
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("up"), None);
    }
}
