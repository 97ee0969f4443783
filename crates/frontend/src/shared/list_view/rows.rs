//! Строки таблицы и разворачивание дерева строк в плоский список для рендера

use std::collections::{HashMap, HashSet};
use std::fmt;

use leptos::prelude::*;

/// Отступ одного уровня вложенности, px
pub const INDENT_STEP_PX: usize = 16;
/// Маркер дочерней строки
pub const CHILD_GLYPH: &str = "↳";

/// Значение ячейки
#[derive(Clone)]
pub enum CellValue {
    Text(String),
    Number(i64),
    /// Готовая разметка (ссылки, бейджи, кнопки действий)
    View(ViewFn),
}

impl CellValue {
    pub fn view<F, IV>(f: F) -> Self
    where
        F: Fn() -> IV + Send + Sync + 'static,
        IV: IntoView + 'static,
    {
        CellValue::View(ViewFn::from(f))
    }

    pub fn render(&self) -> AnyView {
        match self {
            CellValue::Text(text) => text.clone().into_any(),
            CellValue::Number(n) => n.to_string().into_any(),
            CellValue::View(f) => f.run(),
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::View(_) => None,
        }
    }
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            CellValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            CellValue::View(_) => f.write_str("View(..)"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as i64)
    }
}

/// Строка таблицы: значения по ключам колонок плюс необязательные дочерние строки
#[derive(Clone, Debug)]
pub struct Row {
    pub id: String,
    pub cells: HashMap<String, CellValue>,
    pub children: Vec<Row>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Row>) -> Self {
        self.children = children;
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }
}

/// Строка после разворачивания дерева
#[derive(Clone, Debug)]
pub struct FlatRow {
    pub id: String,
    /// Длина цепочки предков (0 для корневых строк)
    pub depth: usize,
    pub cells: HashMap<String, CellValue>,
}

impl FlatRow {
    pub fn indent_px(&self) -> usize {
        self.depth * INDENT_STEP_PX
    }
}

/// Разворачивает дерево строк в порядке обхода: родитель, затем его потомки.
///
/// При `show_children == false` берутся только корневые строки.
/// Повторный id (в том числе из-за цикла в данных) пропускается вместе с поддеревом.
pub fn flatten_rows(rows: &[Row], show_children: bool) -> Vec<FlatRow> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    walk(rows, 0, show_children, &mut seen, &mut out);
    out
}

fn walk(
    rows: &[Row],
    depth: usize,
    show_children: bool,
    seen: &mut HashSet<String>,
    out: &mut Vec<FlatRow>,
) {
    for row in rows {
        if !seen.insert(row.id.clone()) {
            log::warn!("Duplicate row id '{}' skipped at depth {}", row.id, depth);
            continue;
        }
        out.push(FlatRow {
            id: row.id.clone(),
            depth,
            cells: row.cells.clone(),
        });
        if show_children && !row.children.is_empty() {
            walk(&row.children, depth + 1, show_children, seen, out);
        }
    }
}

/// Индекс колонки данных, в которой рисуется маркер дочерней строки.
///
/// Маркер ставится во вторую видимую колонку: если первая видимая колонка
/// это чекбокс, то вторая это первая колонка данных.
pub fn child_glyph_column(selectable: bool) -> usize {
    if selectable {
        0
    } else {
        1
    }
}

pub fn shows_child_glyph(depth: usize, column_index: usize, selectable: bool) -> bool {
    depth > 0 && column_index == child_glyph_column(selectable)
}

pub fn row_ids(rows: &[FlatRow]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

/// Что показывает тело таблицы. Загрузка всегда важнее пустого результата.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

impl BodyState {
    pub fn resolve(loading: bool, row_count: usize) -> Self {
        if loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Row> {
        vec![
            Row::new("1").cell("name", "Tech").with_children(vec![
                Row::new("1.1").cell("name", "Rust").with_children(vec![
                    Row::new("1.1.1").cell("name", "Async"),
                ]),
                Row::new("1.2").cell("name", "Go"),
            ]),
            Row::new("2").cell("name", "Life"),
        ]
    }

    #[test]
    fn test_depth_equals_ancestor_chain() {
        let flat = flatten_rows(&tree(), true);
        let got: Vec<(&str, usize)> = flat.iter().map(|r| (r.id.as_str(), r.depth)).collect();
        assert_eq!(
            got,
            vec![("1", 0), ("1.1", 1), ("1.1.1", 2), ("1.2", 1), ("2", 0)]
        );
        assert_eq!(flat[2].indent_px(), 32);
    }

    #[test]
    fn test_children_hidden_without_flag() {
        let flat = flatten_rows(&tree(), false);
        assert_eq!(row_ids(&flat), vec!["1".to_string(), "2".to_string()]);
        assert!(flat.iter().all(|r| r.depth == 0));
    }

    #[test]
    fn test_duplicate_ids_skipped() {
        let rows = vec![
            Row::new("a").with_children(vec![Row::new("b").with_children(vec![Row::new("a")])]),
            Row::new("b"),
            Row::new("c"),
        ];
        let flat = flatten_rows(&rows, true);
        assert_eq!(
            row_ids(&flat),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_glyph_only_on_second_visible_column_of_children() {
        // с чекбоксом: вторая видимая колонка = колонка данных 0
        assert!(shows_child_glyph(1, 0, true));
        assert!(!shows_child_glyph(1, 1, true));
        assert!(!shows_child_glyph(0, 0, true));

        // без чекбокса: вторая видимая колонка = колонка данных 1
        assert!(shows_child_glyph(2, 1, false));
        assert!(!shows_child_glyph(2, 0, false));
        assert!(!shows_child_glyph(0, 1, false));
    }

    #[test]
    fn test_cell_values() {
        let row = Row::new("x").cell("title", "Hello").cell("likes", 7u32);
        assert_eq!(row.get("title").and_then(CellValue::as_text), Some("Hello".into()));
        assert_eq!(row.get("likes").and_then(CellValue::as_text), Some("7".into()));
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn test_body_state_loading_wins_over_empty() {
        assert_eq!(BodyState::resolve(true, 0), BodyState::Loading);
        assert_eq!(BodyState::resolve(true, 3), BodyState::Loading);
        assert_eq!(BodyState::resolve(false, 0), BodyState::Empty);
        assert_eq!(BodyState::resolve(false, 3), BodyState::Rows);
    }
}
