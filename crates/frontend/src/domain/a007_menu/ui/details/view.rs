use contracts::domain::a007_menu::composition::section_template;
use contracts::domain::a007_menu::labels::option_type_label;
use contracts::domain::a007_menu::{Menu, SectionTitle};
use leptos::prelude::*;
use thaw::*;

use super::view_model::MenuDetailsViewModel;
use crate::shared::api_client::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn MenuDetails(
    menu: Option<Menu>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MenuDetailsViewModel::new(ApiClient::from_context(), menu);
    let nombre = RwSignal::new(vm.draft.with_untracked(|d| d.nombre.clone()));
    Effect::new(move || {
        let text = nombre.get();
        vm.draft.update(|d| d.nombre = text);
    });

    view! {
        <div class="details-container menu-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Editar menú" } else { "Nuevo menú" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form-group">
                <label>"Nombre del menú"</label>
                <Input value=nombre placeholder="Ej. Menú semana 12" />
            </div>

            {SectionTitle::ALL.into_iter().map(|section| view! {
                <div class="menu-section">
                    <h4 class="menu-section__title">{section.as_str()}</h4>
                    {section_template(section).iter().map(|tipo| {
                        let tipo = tipo.to_string();
                        let tipo_list = tipo.clone();
                        let tipo_input = tipo.clone();
                        let tipo_set = tipo.clone();
                        let tipo_add = tipo.clone();
                        view! {
                            <div class="option-group">
                                <div class="option-group__label">{option_type_label(&tipo)}</div>
                                <ul class="option-group__list">
                                    {move || {
                                        let tipo = tipo_list.clone();
                                        vm.draft
                                            .with(|d| d.sections.get(&section).and_then(|g| g.get(&tipo)).cloned())
                                            .unwrap_or_default()
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, texto)| {
                                                let tipo = tipo.clone();
                                                view! {
                                                    <li>
                                                        {texto}
                                                        <button
                                                            class="option-group__remove"
                                                            title="Quitar"
                                                            on:click=move |_| vm.remove_option(section, &tipo, index)
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </ul>
                                <div class="option-group__add">
                                    <input
                                        type="text"
                                        placeholder="Nueva opción"
                                        prop:value=move || vm.input_text(section, &tipo_input)
                                        on:input=move |ev| vm.set_input(section, &tipo_set, event_target_value(&ev))
                                    />
                                    <Button on_click=move |_| vm.add_option(section, &tipo_add)>"Agregar"</Button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
                <Button on_click=move |_| on_cancel.run(())>"Cancelar"</Button>
            </div>
        </div>
    }
}
