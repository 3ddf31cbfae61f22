//! Pending orders board
//!
//! Kitchen staff deliver an order section by section. Each delivery is a
//! `PATCH /pedidos/{id}/status/`; the order leaves the board once every
//! section of its menu is delivered.

use chrono::{Local, Utc};
use contracts::domain::a001_servicio::aggregate::ServicioId;
use contracts::domain::a007_menu::SectionTitle;
use contracts::domain::a008_pedido::{Pedido, PedidoId, PedidoStatus, PendingFilter};
use contracts::domain::common::catalog::parse_id;
use contracts::domain::common::{CatalogKind, CatalogRow};
use leptos::prelude::*;
use thaw::*;

use super::card::{observaciones, paciente_header, section_items};
use crate::domain::a008_pedido::api;
use crate::shared::api_client::ApiClient;
use crate::shared::date_utils::{elapsed_label, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Ask the user to confirm closing an order that carries warnings
fn confirm_warnings(warnings: &[String]) -> bool {
    if warnings.is_empty() {
        return true;
    }
    let message = format!("{}\n\n¿Desea completar el pedido de todas formas?", warnings.join("\n"));
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

#[component]
pub fn PedidosPendientes() -> impl IntoView {
    let client = ApiClient::from_context();
    let pedidos = RwSignal::new(Vec::<Pedido>::new());
    let servicios = RwSignal::new(Vec::<CatalogRow>::new());
    let filter = RwSignal::new(PendingFilter::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    // (pedido, section) being saved
    let saving = RwSignal::new(None::<(PedidoId, SectionTitle)>);

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_pedidos(client).await {
                Ok(list) => {
                    pedidos.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Error al cargar pedidos: {}", e))),
            }
            loading.set(false);
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match client.list_resource(CatalogKind::Servicios).await {
            Ok(rows) => servicios.set(rows.into_iter().filter(|s| s.activo).collect()),
            Err(e) => log::warn!("servicios not loaded: {}", e),
        }
    });
    fetch();

    let complete = move |pedido: Pedido, titulo: SectionTitle| {
        let update = pedido.complete_section(titulo);
        if update.status == PedidoStatus::Completado {
            let today = Local::now().date_naive();
            if !confirm_warnings(&pedido.completion_warnings(today)) {
                return;
            }
        }
        let id = pedido.id;
        saving.set(Some((id, titulo)));
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(client, id, &update).await {
                Ok(updated) => {
                    log::info!("pedido {} section {} completed, status {:?}", id, titulo, updated.status);
                    pedidos.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|p| p.id == id) {
                            *slot = updated;
                        }
                    });
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Error al actualizar el pedido: {}", e))),
            }
            saving.set(None);
        });
    };

    let visible = move || {
        let filter = filter.get();
        pedidos.with(|list| filter.apply(list).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="page pedidos-pendientes">
            <div class="page__header">
                <h1 class="page__title">"Pedidos Pendientes"</h1>
                <Flex>
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search.clone()))
                        on_change=Callback::new(move |text: String| filter.update(|f| f.search = text))
                        placeholder="Buscar paciente, cédula, servicio, habitación o cama"
                    />
                    <select on:change=move |ev| {
                        let id = parse_id(&event_target_value(&ev)).map(ServicioId);
                        filter.update(|f| f.servicio = id);
                    }>
                        <option value="">"Todos los servicios"</option>
                        {move || servicios.get().into_iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.nombre}</option>
                        }).collect_view()}
                    </select>
                    <Button on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                </Flex>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || loading.get()>
                <Spinner label="Cargando pedidos..." />
            </Show>

            {move || {
                let list = visible();
                if list.is_empty() && !loading.get() {
                    return view! { <div class="empty-state">"No hay pedidos pendientes"</div> }.into_any();
                }
                let now = Utc::now();
                list.into_iter().map(|pedido| {
                    let (done, total) = pedido.progress();
                    let sections = pedido.menu.ordered_sections().into_iter().map(|section| {
                        let titulo = section.titulo;
                        let completed = pedido.is_section_completed(titulo);
                        let id = pedido.id;
                        let pedido_for_click = pedido.clone();
                        let is_saving = move || saving.get() == Some((id, titulo));
                        view! {
                            <div class="pedido-section" class:pedido-section--done=completed>
                                <div class="pedido-section__header">
                                    <span class="pedido-section__title">{titulo.as_str()}</span>
                                    {if completed {
                                        view! { <Badge color=BadgeColor::Success>"Completado"</Badge> }.into_any()
                                    } else {
                                        view! {
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || saving.get().is_some())
                                                on_click=move |_| complete(pedido_for_click.clone(), titulo)
                                            >
                                                {move || if is_saving() { "Guardando..." } else { "Marcar entregado" }}
                                            </Button>
                                        }.into_any()
                                    }}
                                </div>
                                {section_items(&pedido, titulo)}
                            </div>
                        }
                    }).collect_view();

                    view! {
                        <div class="pedido-card">
                            <div class="pedido-card__header">
                                {paciente_header(&pedido)}
                                <div class="pedido-card__status">
                                    <Badge>{pedido.status.label()}</Badge>
                                    <span class="pedido-card__progress">{format!("{}/{} secciones", done, total)}</span>
                                    <span class="pedido-card__date" title=format_datetime(&pedido.fecha_pedido)>
                                        {elapsed_label(&pedido.fecha_pedido, &now)}
                                    </span>
                                </div>
                            </div>
                            <div class="pedido-card__menu">{pedido.menu.nombre.clone()}</div>
                            {observaciones(&pedido)}
                            <div class="pedido-card__sections">{sections}</div>
                        </div>
                    }.into_any()
                }).collect_view().into_any()
            }}
        </div>
    }
}
