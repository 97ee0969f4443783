//! Расчёт окна пагинации и URL для переходов между страницами

use super::view_state::DEFAULT_LIMIT;

/// Текущая страница с учётом ограничений.
///
/// Если `current` не задан, меньше 1 или больше `total_pages`, применяется страница 1.
pub fn applied_page(current: Option<i64>, total_pages: u32) -> u32 {
    let total = total_pages.max(1) as i64;
    match current {
        Some(page) if page >= 1 && page <= total => page as u32,
        _ => 1,
    }
}

/// Окно пагинации: применённая страница и количество страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub total_pages: u32,
}

impl PageWindow {
    pub fn new(current: Option<i64>, total_pages: Option<u32>) -> Self {
        let total_pages = total_pages.unwrap_or(1).max(1);
        Self {
            page: applied_page(current, total_pages),
            total_pages,
        }
    }

    pub fn prev(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    /// Номер из поля "перейти к странице", прижатый к `1..=total_pages`.
    /// Нечисловой ввод игнорируется.
    pub fn jump_target(&self, raw: &str) -> Option<u32> {
        let requested = raw.trim().parse::<i64>().ok()?;
        Some(requested.clamp(1, self.total_pages as i64) as u32)
    }
}

/// `{base_url}?page={n}&limit={limit}{&query_string}`; `limit` опускается,
/// если равен значению по умолчанию
pub fn page_url(base_url: &str, page: u32, limit: u32, query_string: &str) -> String {
    let mut url = format!("{}?page={}", base_url, page);
    if limit != DEFAULT_LIMIT {
        url.push_str(&format!("&limit={}", limit));
    }
    let extra = query_string.trim_start_matches(['?', '&']);
    if !extra.is_empty() {
        url.push('&');
        url.push_str(extra);
    }
    url
}

/// Контрол пагинации рендерится только когда не отключён
pub fn controls_visible(disabled: bool) -> bool {
    !disabled
}

/// URL после выбора размера страницы: первая страница с новым `limit`.
/// Нечисловое значение из `<select>` игнорируется.
pub fn page_size_url(base_url: &str, raw_size: &str, query_string: &str) -> Option<String> {
    let size = raw_size.trim().parse::<u32>().ok()?;
    Some(page_url(base_url, 1, size, query_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_page_out_of_range_is_first() {
        assert_eq!(applied_page(None, 5), 1);
        assert_eq!(applied_page(Some(0), 5), 1);
        assert_eq!(applied_page(Some(-2), 5), 1);
        assert_eq!(applied_page(Some(6), 5), 1);
        assert_eq!(applied_page(Some(5), 5), 5);
        assert_eq!(applied_page(Some(3), 5), 3);
    }

    #[test]
    fn test_zero_total_pages_treated_as_one() {
        let window = PageWindow::new(Some(1), Some(0));
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.page, 1);
        assert_eq!(window.prev(), None);
        assert_eq!(window.next(), None);
    }

    #[test]
    fn test_prev_next_for_three_pages() {
        let middle = PageWindow::new(Some(2), Some(3));
        assert_eq!(middle.prev(), Some(1));
        assert_eq!(middle.next(), Some(3));
        assert_eq!(page_url("/posts", middle.next().unwrap(), 10, ""), "/posts?page=3");
        assert_eq!(page_url("/posts", middle.prev().unwrap(), 10, ""), "/posts?page=1");

        let first = PageWindow::new(Some(1), Some(3));
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let last = PageWindow::new(Some(3), Some(3));
        assert_eq!(last.prev(), Some(2));
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_default_total_pages() {
        let window = PageWindow::new(None, None);
        assert_eq!(window, PageWindow { page: 1, total_pages: 1 });
    }

    #[test]
    fn test_jump_target_clamped() {
        let window = PageWindow::new(Some(1), Some(4));
        assert_eq!(window.jump_target("3"), Some(3));
        assert_eq!(window.jump_target("99"), Some(4));
        assert_eq!(window.jump_target("-1"), Some(1));
        assert_eq!(window.jump_target(" 2 "), Some(2));
        assert_eq!(window.jump_target("two"), None);
    }

    #[test]
    fn test_page_url_limit_and_query() {
        assert_eq!(page_url("/posts", 2, 20, ""), "/posts?page=2&limit=20");
        assert_eq!(
            page_url("/posts", 1, 10, "searchBy.title=rust"),
            "/posts?page=1&searchBy.title=rust"
        );
        assert_eq!(
            page_url("/posts/trash", 3, 50, "&filterBy.status=draft"),
            "/posts/trash?page=3&limit=50&filterBy.status=draft"
        );
    }

    #[test]
    fn test_disabled_hides_controls() {
        assert!(!controls_visible(true));
        assert!(controls_visible(false));
    }

    #[test]
    fn test_page_size_change_goes_to_first_page_with_new_limit() {
        assert_eq!(
            page_size_url("/posts", "30", "filterBy.status=draft").as_deref(),
            Some("/posts?page=1&limit=30&filterBy.status=draft")
        );
        assert_eq!(page_size_url("/tags", "10", "").as_deref(), Some("/tags?page=1"));
        assert_eq!(page_size_url("/tags", "many", ""), None);
    }
}
