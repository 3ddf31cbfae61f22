use contracts::domain::common::catalog::parse_id;
use contracts::domain::common::{CatalogForm, CatalogKind, CatalogRow};
use leptos::prelude::*;
use thaw::*;

use super::state::{toggle_id, CatalogState};
use crate::shared::api_client::ApiClient;

/// Checkbox list bound to one id vector of the form
fn id_checklist(
    state: CatalogState,
    options: Vec<CatalogRow>,
    ids: fn(&CatalogForm) -> &Vec<i64>,
    ids_mut: fn(&mut CatalogForm) -> &mut Vec<i64>,
) -> impl IntoView {
    options
        .into_iter()
        .filter(|row| row.activo)
        .map(|row| {
            let id = row.id;
            view! {
                <label class="checklist__item">
                    <input
                        type="checkbox"
                        prop:checked=move || state.form.with(|f| ids(f).contains(&id))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.form.update(|f| toggle_id(ids_mut(f), id, checked));
                        }
                    />
                    {row.nombre}
                </label>
            }
        })
        .collect_view()
}

#[component]
pub fn CatalogFormPanel(
    state: CatalogState,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let kind = state.kind.get_untracked();
    let saving = RwSignal::new(false);

    let nombre = RwSignal::new(state.form.with_untracked(|f| f.nombre.clone()));
    let descripcion = RwSignal::new(state.form.with_untracked(|f| f.descripcion.clone()));
    let cedula = RwSignal::new(state.form.with_untracked(|f| f.cedula.clone()));
    Effect::new(move || {
        let (n, d, c) = (nombre.get(), descripcion.get(), cedula.get());
        state.form.update(|f| {
            f.nombre = n;
            f.descripcion = d;
            f.cedula = c;
        });
    });

    let save = move |_| {
        let form = state.form.get_untracked();
        let payload = match form.to_payload(kind) {
            Ok(p) => p,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match form.id {
                Some(id) => client.update_resource(kind, id, &payload).await,
                None => client.create_resource(kind, &payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    log::info!("{} saved", kind.element_name());
                    state.close();
                    on_saved.run(());
                }
                Err(e) => state.error.set(Some(e.to_string())),
            }
        });
    };

    let parent_label = kind.parent().map(|p| p.element_name()).unwrap_or_default();

    view! {
        <div class="details-container catalog-form">
            <div class="details-header">
                <h3>{move || state.mode.get().title(kind.element_name())}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label>"Nombre"</label>
                    <Input value=nombre />
                </div>

                <Show when=move || kind.has_cedula()>
                    <div class="form-group">
                        <label>"Cédula"</label>
                        <Input value=cedula />
                    </div>
                </Show>

                <Show when=move || kind.has_descripcion()>
                    <div class="form-group">
                        <label>"Descripción"</label>
                        <Textarea value=descripcion attr:rows=2 />
                    </div>
                </Show>

                <Show when=move || kind.parent().is_some()>
                    <div class="form-group">
                        <label>{parent_label}</label>
                        <select
                            prop:value=move || state.form.with(|f| f.parent_id.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let id = parse_id(&event_target_value(&ev));
                                state.form.update(|f| f.parent_id = id);
                            }
                        >
                            <option value="">"-- Seleccione --"</option>
                            {move || state.lookups.get().parents.into_iter()
                                .filter(|row| row.activo || state.form.with(|f| f.parent_id == Some(row.id)))
                                .map(|row| view! {
                                    <option value=row.id.to_string()>{row.nombre}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </Show>

                <Show when=move || kind == CatalogKind::Pacientes>
                    <div class="form-group">
                        <label>"Dietas"</label>
                        <div class="checklist">
                            {move || id_checklist(state, state.lookups.get().dietas, |f| &f.dietas_ids, |f| &mut f.dietas_ids)}
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"Alergias"</label>
                        <div class="checklist">
                            {move || id_checklist(state, state.lookups.get().alergias, |f| &f.alergias_ids, |f| &mut f.alergias_ids)}
                        </div>
                    </div>
                </Show>

                <label class="checklist__item">
                    <input
                        type="checkbox"
                        prop:checked=move || state.form.with(|f| f.activo)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.form.update(|f| f.activo = checked);
                        }
                    />
                    "Activo"
                </label>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=save
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
                <Button on_click=move |_| state.close()>"Cancelar"</Button>
            </div>
        </div>
    }
}

