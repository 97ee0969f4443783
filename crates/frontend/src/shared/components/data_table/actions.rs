use leptos::prelude::*;

/// Кнопка над таблицей (Add, Trash, Empty Trash ...)
#[derive(Clone)]
pub struct TableAction {
    pub label: &'static str,
    pub icon: &'static str,
    /// Claims, без которых кнопка не рендерится
    pub claims: Vec<&'static str>,
    pub danger: bool,
    pub visible: Signal<bool>,
    pub on_click: Callback<()>,
}

impl TableAction {
    pub fn new(label: &'static str, icon: &'static str, on_click: Callback<()>) -> Self {
        Self {
            label,
            icon,
            claims: Vec::new(),
            danger: false,
            visible: Signal::stored(true),
            on_click,
        }
    }

    pub fn claims(mut self, claims: Vec<&'static str>) -> Self {
        self.claims = claims;
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn visible_when(mut self, visible: Signal<bool>) -> Self {
        self.visible = visible;
        self
    }
}

/// Групповое действие над выбранными строками; видно при непустом выборе
#[derive(Clone)]
pub struct BulkAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub claims: Vec<&'static str>,
    pub danger: bool,
    pub on_click: Callback<Vec<String>>,
}

impl BulkAction {
    pub fn new(label: &'static str, icon: &'static str, on_click: Callback<Vec<String>>) -> Self {
        Self {
            label,
            icon,
            claims: Vec::new(),
            danger: false,
            on_click,
        }
    }

    pub fn claims(mut self, claims: Vec<&'static str>) -> Self {
        self.claims = claims;
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

pub(super) fn button_class(danger: bool) -> &'static str {
    if danger {
        "button button--danger"
    } else {
        "button button--secondary"
    }
}
