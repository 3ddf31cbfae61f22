use contracts::domain::a008_pedido::Pedido;
use leptos::prelude::*;
use thaw::*;

use super::card::{observaciones, paciente_header, section_items};
use crate::domain::a008_pedido::api;
use crate::shared::api_client::ApiClient;
use crate::shared::date_utils::format_datetime;

/// Completed orders, searched by patient on the server
#[component]
pub fn HistorialPedidos() -> impl IntoView {
    let client = ApiClient::from_context();
    let term = RwSignal::new(String::new());
    let pedidos = RwSignal::new(Vec::<Pedido>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let expanded = RwSignal::new(None::<i64>);

    let search = move || {
        let paciente = term.get_untracked();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_completados(client, &paciente).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.fecha_pedido.cmp(&a.fecha_pedido));
                    pedidos.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Error al cargar el historial: {}", e))),
            }
            loading.set(false);
        });
    };
    search();

    view! {
        <div class="page historial-pedidos">
            <div class="page__header">
                <h1 class="page__title">"Historial de Pedidos"</h1>
                <div
                    class="page__search"
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            search();
                        }
                    }
                >
                    <Flex>
                        <Input value=term placeholder="Nombre o cédula del paciente" />
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| search()>"Buscar"</Button>
                    </Flex>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || loading.get()>
                <Spinner label="Buscando..." />
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Paciente"</TableHeaderCell>
                        <TableHeaderCell>"Cédula"</TableHeaderCell>
                        <TableHeaderCell>"Ubicación"</TableHeaderCell>
                        <TableHeaderCell>"Menú"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || pedidos.get().into_iter().map(|pedido| {
                        let id = pedido.id.value();
                        let detail = pedido.clone();
                        let fecha = format_datetime(&pedido.fecha_pedido);
                        let nombre = pedido.paciente.name.clone();
                        let cedula = pedido.paciente.cedula.clone();
                        let ubicacion = pedido.paciente.ubicacion();
                        let menu_nombre = pedido.menu.nombre.clone();
                        view! {
                            <TableRow>
                                <TableCell>{fecha}</TableCell>
                                <TableCell>{nombre}</TableCell>
                                <TableCell>{cedula}</TableCell>
                                <TableCell>{ubicacion}</TableCell>
                                <TableCell>{menu_nombre}</TableCell>
                                <TableCell>
                                    <Button on_click=move |_| expanded.update(|e| {
                                        *e = if *e == Some(id) { None } else { Some(id) };
                                    })>
                                        {move || if expanded.get() == Some(id) { "Ocultar" } else { "Ver detalle" }}
                                    </Button>
                                </TableCell>
                            </TableRow>
                            <Show when=move || expanded.get() == Some(id)>
                                {
                                    let detail = detail.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                <div class="pedido-card pedido-card--detail">
                                                    {paciente_header(&detail)}
                                                    {observaciones(&detail)}
                                                    {detail.menu.ordered_sections().into_iter().map(|section| view! {
                                                        <div class="pedido-section">
                                                            <span class="pedido-section__title">{section.titulo.as_str()}</span>
                                                            {section_items(&detail, section.titulo)}
                                                        </div>
                                                    }).collect_view()}
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            </Show>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            <Show when=move || !loading.get() && pedidos.with(Vec::is_empty)>
                <div class="empty-state">"No se encontraron pedidos completados"</div>
            </Show>
        </div>
    }
}
