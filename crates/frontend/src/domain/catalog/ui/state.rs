use contracts::domain::common::{CatalogForm, CatalogKind, CatalogRow};
use leptos::prelude::*;

use crate::shared::list_utils::{contains_normalized, Searchable};
use crate::shared::ui_mode::UiMode;

impl Searchable for CatalogRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_normalized(&self.nombre, filter)
            || contains_normalized(&self.detalle, filter)
            || self
                .cedula
                .as_deref()
                .map(|c| contains_normalized(c, filter))
                .unwrap_or(false)
    }
}

/// Lookups the form needs besides the rows of the current resource
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lookups {
    pub parents: Vec<CatalogRow>,
    pub dietas: Vec<CatalogRow>,
    pub alergias: Vec<CatalogRow>,
}

/// Signals shared by the list and the form of the data management screen
#[derive(Clone, Copy)]
pub struct CatalogState {
    pub kind: RwSignal<CatalogKind>,
    pub rows: RwSignal<Vec<CatalogRow>>,
    pub lookups: RwSignal<Lookups>,
    pub filter: RwSignal<String>,
    pub mode: RwSignal<UiMode>,
    pub form: RwSignal<CatalogForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            kind: RwSignal::new(CatalogKind::Servicios),
            rows: RwSignal::new(Vec::new()),
            lookups: RwSignal::new(Lookups::default()),
            filter: RwSignal::new(String::new()),
            mode: RwSignal::new(UiMode::Closed),
            form: RwSignal::new(CatalogForm::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn open_create(&self) {
        self.form.set(CatalogForm::default());
        self.mode.set(UiMode::Creating);
    }

    pub fn open_edit(&self, row: &CatalogRow) {
        self.form.set(row.to_form());
        self.mode.set(UiMode::Editing(row.id));
    }

    pub fn close(&self) {
        self.mode.set(UiMode::Closed);
        self.error.set(None);
    }
}

/// Resources whose rows feed the form selects of `kind`
pub fn lookup_kinds(kind: CatalogKind) -> Vec<CatalogKind> {
    let mut kinds: Vec<CatalogKind> = kind.parent().into_iter().collect();
    if kind == CatalogKind::Pacientes {
        kinds.push(CatalogKind::Dietas);
        kinds.push(CatalogKind::Alergias);
    }
    kinds
}

/// Toggle `id` inside a multi-select id list
pub fn toggle_id(ids: &mut Vec<i64>, id: i64, checked: bool) {
    ids.retain(|x| *x != id);
    if checked {
        ids.push(id);
        ids.sort_unstable();
    }
}
