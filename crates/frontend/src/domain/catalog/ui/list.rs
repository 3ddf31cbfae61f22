use contracts::domain::common::{CatalogKind, CatalogRow};
use leptos::prelude::*;
use thaw::*;

use super::form::CatalogFormPanel;
use super::state::{lookup_kinds, CatalogState, Lookups};
use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};

async fn load_lookups(client: ApiClient, kind: CatalogKind) -> Result<Lookups, ApiError> {
    let mut lookups = Lookups::default();
    for lookup in lookup_kinds(kind) {
        let rows = client.list_resource(lookup).await?;
        match lookup {
            CatalogKind::Dietas => lookups.dietas = rows,
            CatalogKind::Alergias => lookups.alergias = rows,
            _ => lookups.parents = rows,
        }
    }
    Ok(lookups)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Data management screen: one table per catalog resource with inline editor
#[component]
pub fn GestionDatos() -> impl IntoView {
    let client = ApiClient::from_context();
    let state = CatalogState::new();

    let fetch = move || {
        let kind = state.kind.get_untracked();
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let rows = client.list_resource(kind).await;
            let lookups = load_lookups(client, kind).await;
            // a late response for a previous resource is dropped
            if state.kind.get_untracked() != kind {
                return;
            }
            state.loading.set(false);
            match (rows, lookups) {
                (Ok(rows), Ok(lookups)) => {
                    state.rows.set(rows);
                    state.lookups.set(lookups);
                    state.error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => state.error.set(Some(format!(
                    "Error al cargar {}: {}",
                    kind.list_name().to_lowercase(),
                    e
                ))),
            }
        });
    };
    fetch();

    let select_kind = move |key: String| {
        let Some(kind) = CatalogKind::from_key(&key) else {
            return;
        };
        state.kind.set(kind);
        state.rows.set(Vec::new());
        state.filter.set(String::new());
        state.close();
        fetch();
    };

    let toggle_active = move |row: CatalogRow| {
        let kind = state.kind.get_untracked();
        let mut form = row.to_form();
        form.activo = !form.activo;
        let payload = match form.to_payload(kind) {
            Ok(p) => p,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            match client.update_resource(kind, row.id, &payload).await {
                Ok(_) => fetch(),
                Err(e) => state.error.set(Some(e.to_string())),
            }
        });
    };

    let delete = move |row: CatalogRow| {
        let kind = state.kind.get_untracked();
        if !confirm(&format!("¿Eliminar {} \"{}\"?", kind.element_name().to_lowercase(), row.nombre)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match client.delete_resource(kind, row.id).await {
                Ok(()) => {
                    log::info!("{} {} deleted", kind.key(), row.id);
                    fetch();
                }
                Err(e) => state.error.set(Some(format!("Error al eliminar: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_| fetch());
    let visible = move || state.rows.with(|rows| filter_list(rows.clone(), &state.filter.get()));

    view! {
        <div class="page catalog">
            <div class="page__header">
                <h1 class="page__title">"Gestión de datos"</h1>
                <select
                    class="catalog__kind"
                    prop:value=move || state.kind.get().key()
                    on:change=move |ev| select_kind(event_target_value(&ev))
                >
                    {CatalogKind::ALL.iter().map(|k| view! {
                        <option value=k.key()>{k.list_name()}</option>
                    }).collect_view()}
                </select>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| state.open_create()>
                    "Nuevo registro"
                </Button>
            </div>

            {move || state.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || state.mode.get().is_open().then(|| view! {
                <CatalogFormPanel state=state client=client on_saved=on_saved />
            })}

            <SearchInput
                value=Signal::derive(move || state.filter.get())
                on_change=Callback::new(move |v: String| state.filter.set(v))
                placeholder="Buscar (mínimo 3 caracteres)"
            />

            <Show
                when=move || !state.loading.get()
                fallback=|| view! { <Spinner label="Cargando..." /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Nombre"</TableHeaderCell>
                            <TableHeaderCell>"Detalle"</TableHeaderCell>
                            <Show when=move || state.kind.get().has_cedula()>
                                <TableHeaderCell>"Cédula"</TableHeaderCell>
                            </Show>
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let filter = state.filter.get();
                            let show_cedula = state.kind.get().has_cedula();
                            visible().into_iter().map(|row| {
                                let edit_row = row.clone();
                                let toggle_row = row.clone();
                                let delete_row = row.clone();
                                let activo = row.activo;
                                let filter = filter.clone();
                                let filter_nombre = filter.clone();
                                let filter_detalle = filter.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{highlight_matches(&row.nombre, &filter_nombre)}</TableCell>
                                        <TableCell>{highlight_matches(&row.detalle, &filter_detalle)}</TableCell>
                                        {show_cedula.then(|| view! {
                                            <TableCell>
                                                {highlight_matches(row.cedula.as_deref().unwrap_or_default(), &filter)}
                                            </TableCell>
                                        })}
                                        <TableCell>
                                            {if activo {
                                                view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }
                                            } else {
                                                view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <Flex>
                                                <Button on_click=move |_| state.open_edit(&edit_row)>"Editar"</Button>
                                                <Button on_click=move |_| toggle_active(toggle_row.clone())>
                                                    {if activo { "Desactivar" } else { "Activar" }}
                                                </Button>
                                                <Button on_click=move |_| delete(delete_row.clone())>"Eliminar"</Button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=move || state.rows.with(|r| r.is_empty())>
                    <div class="empty-state">"No hay registros"</div>
                </Show>
            </Show>
        </div>
    }
}
