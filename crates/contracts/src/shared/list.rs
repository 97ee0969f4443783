use serde::{Deserialize, Serialize};

/// Метаданные пагинации, которые backend возвращает вместе со страницей списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub item_count: u32,
    pub total_items: u32,
    pub items_per_page: u32,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            item_count: 0,
            total_items: 0,
            items_per_page: 10,
        }
    }
}

/// Ответ списочного endpoint: `{ items, meta }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Тело запроса для групповых операций (soft delete, recover, permanent delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdsRequest {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_deserialize_backend_envelope() {
        let json = r#"{
            "items": [{"id": "a"}, {"id": "b"}],
            "meta": {"currentPage": 2, "totalPages": 5, "itemCount": 2, "totalItems": 42, "itemsPerPage": 10}
        }"#;
        let page: Paginated<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, "b");
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.meta.total_pages, 5);
        assert_eq!(page.meta.total_items, 42);
    }

    #[test]
    fn test_empty_page() {
        let page: Paginated<Item> = Paginated::empty();
        assert!(page.is_empty());
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_ids_request_wire_format() {
        let body = IdsRequest {
            ids: vec!["1".into(), "2".into()],
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"ids":["1","2"]}"#);
    }
}
