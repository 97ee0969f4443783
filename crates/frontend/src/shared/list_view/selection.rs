//! Выбор строк таблицы.
//!
//! Источник истины это набор id; атрибут `checked` у чекбоксов
//! вычисляется из него.

/// Состояние чекбокса в заголовке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Выбранные id в порядке выбора
    selected: Vec<String>,
    /// Количество строк страницы, для которого собран выбор
    row_count: Option<usize>,
}

impl Selection {
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Чекбокс в заголовке: выбирает все видимые строки или снимает выбор
    pub fn toggle_all(&mut self, checked: bool, visible_ids: &[String]) {
        self.selected.clear();
        if checked {
            self.selected.extend(visible_ids.iter().cloned());
        }
    }

    /// Чекбокс строки
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        } else {
            self.selected.retain(|s| s != id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn state(&self, visible_ids: &[String]) -> SelectionState {
        let checked = visible_ids.iter().filter(|id| self.is_selected(id)).count();
        if checked == 0 {
            SelectionState::None
        } else if checked == visible_ids.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    /// Кнопки групповых действий видны при частичном и полном выборе
    pub fn shows_bulk_actions(&self, visible_ids: &[String]) -> bool {
        self.state(visible_ids) != SelectionState::None
    }

    /// Выбранные id, которые есть на экране, в порядке выбора.
    /// Из них собирается тело групповых действий.
    pub fn visible_selected(&self, visible_ids: &[String]) -> Vec<String> {
        self.selected
            .iter()
            .filter(|id| visible_ids.contains(id))
            .cloned()
            .collect()
    }

    /// Вызывается при каждой загрузке данных. Смена количества строк
    /// сбрасывает выбор целиком, иначе из него убираются id, которых больше
    /// нет на экране. Возвращает число снятых id.
    pub fn sync_rows(&mut self, visible_ids: &[String]) -> usize {
        let count = visible_ids.len();
        let count_changed = matches!(self.row_count, Some(prev) if prev != count);
        self.row_count = Some(count);
        let before = self.selected.len();
        if count_changed {
            self.selected.clear();
        } else {
            self.selected.retain(|id| visible_ids.contains(id));
        }
        before - self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_header_checkbox_with_four_rows() {
        let rows = ids(4);
        let mut sel = Selection::default();
        assert_eq!(sel.state(&rows), SelectionState::None);
        assert!(!sel.shows_bulk_actions(&rows));

        sel.toggle_all(true, &rows);
        assert!(rows.iter().all(|id| sel.is_selected(id)));
        assert_eq!(sel.state(&rows), SelectionState::All);
        assert!(sel.shows_bulk_actions(&rows));

        sel.toggle("3", false);
        assert_ne!(sel.state(&rows), SelectionState::All);
        assert_eq!(sel.state(&rows), SelectionState::Some);
        assert!(sel.shows_bulk_actions(&rows));
    }

    #[test]
    fn test_checking_every_row_reaches_all() {
        let rows = ids(3);
        let mut sel = Selection::default();
        sel.toggle("1", true);
        sel.toggle("2", true);
        assert_eq!(sel.state(&rows), SelectionState::Some);
        sel.toggle("3", true);
        assert_eq!(sel.state(&rows), SelectionState::All);
        sel.toggle("3", true);
        assert_eq!(sel.ids(), &["1".to_string(), "2".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_header_uncheck_clears() {
        let rows = ids(2);
        let mut sel = Selection::default();
        sel.toggle_all(true, &rows);
        sel.toggle_all(false, &rows);
        assert!(sel.ids().is_empty());
        assert_eq!(sel.state(&rows), SelectionState::None);
    }

    #[test]
    fn test_empty_page_is_none() {
        let mut sel = Selection::default();
        sel.toggle_all(true, &[]);
        assert_eq!(sel.state(&[]), SelectionState::None);
    }

    fn named(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_refetch_with_same_rows_keeps_selection() {
        let rows = ids(4);
        let mut sel = Selection::default();
        assert_eq!(sel.sync_rows(&rows), 0);
        sel.toggle("2", true);
        assert_eq!(sel.sync_rows(&rows), 0);
        assert!(sel.is_selected("2"));
    }

    #[test]
    fn test_row_count_change_clears_selection() {
        let mut sel = Selection::default();
        sel.sync_rows(&ids(4));
        sel.toggle_all(true, &ids(4));
        assert_eq!(sel.sync_rows(&ids(2)), 4);
        assert!(sel.ids().is_empty());
    }

    #[test]
    fn test_same_count_with_new_rows_drops_gone_ids() {
        let mut sel = Selection::default();
        sel.sync_rows(&named(&["a", "b", "c", "d"]));
        sel.toggle("a", true);
        sel.toggle("b", true);

        let page = named(&["e", "f", "g", "h"]);
        assert_eq!(sel.sync_rows(&page), 2);
        sel.toggle("e", true);
        assert_eq!(sel.ids(), &["e".to_string()]);
        assert_eq!(sel.visible_selected(&page), vec!["e".to_string()]);
    }

    #[test]
    fn test_partial_refill_keeps_rows_still_on_screen() {
        let mut sel = Selection::default();
        sel.sync_rows(&named(&["a", "b", "c"]));
        sel.toggle("a", true);
        sel.toggle("c", true);

        assert_eq!(sel.sync_rows(&named(&["c", "d", "e"])), 1);
        assert_eq!(sel.ids(), &["c".to_string()]);
    }

    #[test]
    fn test_bulk_payload_only_has_visible_ids() {
        let mut sel = Selection::default();
        sel.toggle("a", true);
        sel.toggle("b", true);
        sel.toggle("c", true);
        let page = named(&["c", "b", "x"]);
        assert_eq!(sel.visible_selected(&page), named(&["b", "c"]));
    }
}
