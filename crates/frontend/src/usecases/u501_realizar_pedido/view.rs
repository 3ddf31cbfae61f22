use contracts::domain::a004_paciente::aggregate::PacienteId;
use contracts::domain::a007_menu::labels::option_type_label;
use contracts::domain::a007_menu::{MenuId, MenuSection};
use contracts::domain::a008_pedido::BebidaPreparacion;
use contracts::domain::common::catalog::parse_id;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_realizar_pedido::{RealizarPedido, RuleTable};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::view_model::RealizarPedidoViewModel;
use crate::shared::api_client::ApiClient;

#[component]
pub fn RealizarPedidoPage() -> impl IntoView {
    let rules = use_context::<Arc<RuleTable>>().expect("RuleTable not found in context");
    let vm = RealizarPedidoViewModel::new(ApiClient::from_context(), rules);
    vm.load();

    let observaciones = RwSignal::new(String::new());
    {
        let vm = vm.clone();
        Effect::new(move || {
            let text = observaciones.get();
            vm.draft.update(|d| d.observaciones = text);
        });
    }
    {
        // reset() clears the draft; mirror it back into the input
        let vm = vm.clone();
        Effect::new(move || {
            let text = vm.draft.with(|d| d.observaciones.clone());
            if observaciones.get_untracked() != text {
                observaciones.set(text);
            }
        });
    }

    let preparacion_vm = vm.clone();
    let confirm_vm = vm.clone();

    view! {
        <div class="page realizar-pedido">
            <div class="page__header">
                <h1 class="page__title">{RealizarPedido::display_name()}</h1>
            </div>

            {
                let vm = vm.clone();
                move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }
            {
                let vm = vm.clone();
                move || vm.success.get().map(|m| view! { <div class="alert alert--success">{m}</div> })
            }

            <Show when={
                let vm = vm.clone();
                move || vm.loading.get()
            }>
                <Spinner label="Cargando pacientes y menús..." />
            </Show>

            <div class="form-row">
                <PacientePicker vm=vm.clone() />
                <MenuPicker vm=vm.clone() />
            </div>

            {
                let vm = vm.clone();
                move || vm.selected_paciente().map(|p| view! {
                    <div class="paciente-card">
                        <div><strong>{p.name.clone()}</strong>" · "{p.cedula.clone()}</div>
                        <div>{p.ubicacion()}</div>
                        <div>"Dieta recomendada: "{p.dieta_recomendada()}</div>
                        <div>"Alergias: "{p.alergias_label()}</div>
                    </div>
                })
            }

            {
                let vm = vm.clone();
                move || vm.notice.get().map(|n| view! { <div class="alert alert--warning">{n}</div> })
            }

            {
                let vm = vm.clone();
                move || {
                    let vm = vm.clone();
                    vm.selected_menu().map(|menu| {
                        menu.ordered_sections()
                            .into_iter()
                            .filter(|s| s.option_count() > 0)
                            .map(|section| view! { <SectionPanel vm=vm.clone() section=section.clone() /> })
                            .collect_view()
                    })
                }
            }

            <div class="form-group">
                <label>"Observaciones"</label>
                <Textarea value=observaciones placeholder="Indicaciones adicionales para cocina" attr:rows=3 />
            </div>

            <Flex>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.request_confirmation()
                    }
                >
                    "Realizar Pedido"
                </Button>
                <Button on_click={
                    let vm = vm.clone();
                    move |_| vm.reset()
                }>
                    "Limpiar"
                </Button>
            </Flex>

            <PreparacionDialog vm=preparacion_vm />
            <ConfirmDialog vm=confirm_vm />
        </div>
    }
}

#[component]
fn PacientePicker(vm: RealizarPedidoViewModel) -> impl IntoView {
    let search = vm.paciente_search;
    let selected_value = {
        let vm = vm.clone();
        move || {
            vm.draft
                .with(|d| d.paciente.map(|id| id.value().to_string()))
                .unwrap_or_default()
        }
    };
    let on_change = {
        let vm = vm.clone();
        move |ev| {
            let id = parse_id(&event_target_value(&ev)).map(PacienteId);
            vm.select_paciente(id);
        }
    };

    view! {
        <div class="form-group">
            <label>"Paciente"</label>
            <Input value=search placeholder="Buscar por nombre o cédula" />
            <select prop:value=selected_value on:change=on_change>
                <option value="">"-- Seleccione un paciente --"</option>
                {move || {
                    vm.filtered_pacientes()
                        .into_iter()
                        .map(|p| view! { <option value=p.id.value().to_string()>{p.label()}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn MenuPicker(vm: RealizarPedidoViewModel) -> impl IntoView {
    let selected_value = {
        let vm = vm.clone();
        move || {
            vm.draft
                .with(|d| d.menu.map(|id| id.value().to_string()))
                .unwrap_or_default()
        }
    };
    let on_change = {
        let vm = vm.clone();
        move |ev| {
            let id = parse_id(&event_target_value(&ev)).map(MenuId);
            vm.select_menu(id);
        }
    };

    view! {
        <div class="form-group">
            <label>"Menú"</label>
            <select prop:value=selected_value on:change=on_change>
                <option value="">"-- Seleccione un menú --"</option>
                {move || {
                    vm.menus
                        .get()
                        .into_iter()
                        .map(|m| view! { <option value=m.id.value().to_string()>{m.nombre}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn SectionPanel(vm: RealizarPedidoViewModel, section: MenuSection) -> impl IntoView {
    let titulo = section.titulo;
    let groups = section
        .option_groups()
        .map(|(tipo, options)| (tipo.to_string(), options.to_vec()))
        .collect::<Vec<_>>();

    view! {
        <div class="menu-section">
            <h3 class="menu-section__title">{titulo.as_str()}</h3>
            {groups
                .into_iter()
                .map(|(tipo, options)| {
                    let rule = vm.selection.with_untracked(|s| s.rules().get(titulo, &tipo));
                    let hint = rule.map(|r| format!("({})", r)).unwrap_or_default();
                    view! {
                        <div class="option-group">
                            <div class="option-group__label">
                                {option_type_label(&tipo)}" "<span class="option-group__hint">{hint}</span>
                            </div>
                            {options
                                .into_iter()
                                .map(|option| {
                                    let vm_checked = vm.clone();
                                    let vm_change = vm.clone();
                                    let tipo_checked = tipo.clone();
                                    let tipo_change = tipo.clone();
                                    let id = option.id;
                                    let texto = option.texto.clone();
                                    view! {
                                        <label class="option-item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || vm_checked.is_selected(titulo, &tipo_checked, id)
                                                on:change=move |ev| {
                                                    let applied = vm_change.toggle_option(titulo, &tipo_change, &option, event_target_checked(&ev));
                                                    if !applied {
                                                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(false);
                                                    }
                                                }
                                            />
                                            {texto}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Preparation choice; it can only be left by picking one
#[component]
fn PreparacionDialog(vm: RealizarPedidoViewModel) -> impl IntoView {
    view! {
        {move || {
            let vm = vm.clone();
            vm.prompt.get().map(|prompt| view! {
                <div class="modal-backdrop">
                    <div class="modal preparacion-modal">
                        <h3>{format!("¿Cómo desea preparar {}?", prompt.texto)}</h3>
                        <div class="preparacion-options">
                            {BebidaPreparacion::ALL
                                .iter()
                                .map(|p| {
                                    let p = *p;
                                    let vm = vm.clone();
                                    view! {
                                        <Button on_click=move |_| vm.choose_preparacion(p)>
                                            {p.label()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn ConfirmDialog(vm: RealizarPedidoViewModel) -> impl IntoView {
    let summary = {
        let vm = vm.clone();
        move || {
            let menu = vm.selected_menu()?;
            let selections = vm.selection.with(|s| s.snapshot());
            Some(vm.draft.with(|d| d.summary(&menu, &selections)))
        }
    };
    let paciente = {
        let vm = vm.clone();
        move || vm.selected_paciente()
    };
    let submitting = vm.submitting;
    let disabled = Signal::derive(move || submitting.get());
    let confirm_open = vm.confirm_open;
    let content_vm = vm.clone();

    view! {
        <Dialog open=confirm_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Confirmar Pedido"</DialogTitle>
                    <DialogContent>
                        {move || paciente().map(|p| view! {
                            <div class="confirm-paciente">
                                <div><strong>"Paciente: "</strong>{p.name.clone()}</div>
                                <div><strong>"Dieta recomendada: "</strong>{p.dieta_recomendada()}</div>
                                <div><strong>"Alergias: "</strong>{p.alergias_label()}</div>
                            </div>
                        })}
                        {
                            let vm = content_vm.clone();
                            move || summary().unwrap_or_default().into_iter().map(|section| {
                                let vm = vm.clone();
                                view! {
                                    <div class="confirm-section">
                                        <h4>{section.titulo.as_str()}</h4>
                                        {section.groups.into_iter().map(|group| {
                                            let vm = vm.clone();
                                            view! {
                                                <div class="confirm-group">
                                                    <span class="confirm-group__label">{group.label}": "</span>
                                                    {group.items.into_iter().map(|item| {
                                                        let vm = vm.clone();
                                                        let id = item.id;
                                                        view! {
                                                            <span class="confirm-item">
                                                                {item.texto}
                                                                {item.preparacion.map(|label| view! {
                                                                    <Badge>{label}</Badge>
                                                                    <a class="link" on:click=move |_| vm.change_preparacion(id)>"Cambiar"</a>
                                                                })}
                                                            </span>
                                                        }
                                                    }).collect_view()}
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                }
                            }).collect_view()
                        }
                        {
                            let vm = content_vm.clone();
                            move || {
                                let text = vm.draft.with(|d| d.observaciones.trim().to_string());
                                (!text.is_empty()).then(|| view! {
                                    <div class="confirm-observaciones"><strong>"Observaciones: "</strong>{text}</div>
                                })
                            }
                        }
                    </DialogContent>
                    <DialogActions>
                        <Button
                            on_click={
                                let vm = vm.clone();
                                move |_| vm.cancel_confirmation()
                            }
                            disabled=disabled
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click={
                                let vm = vm.clone();
                                move |_| vm.submit()
                            }
                            disabled=disabled
                        >
                            {move || if submitting.get() { "Enviando..." } else { "Confirmar" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
