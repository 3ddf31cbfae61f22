use contracts::domain::a007_menu::labels::option_type_label;
use contracts::domain::a007_menu::Menu;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_menu::api;
use crate::domain::a007_menu::ui::details::MenuDetails;
use crate::shared::api_client::ApiClient;
use crate::shared::ui_mode::UiMode;

fn find_menu(menus: &[Menu], mode: UiMode) -> Option<Menu> {
    let id = mode.editing_id()?;
    menus.iter().find(|m| m.id.value() == id).cloned()
}

#[component]
pub fn MenuList() -> impl IntoView {
    let client = ApiClient::from_context();
    let menus = RwSignal::new(Vec::<Menu>::new());
    let error = RwSignal::new(None::<String>);
    let mode = RwSignal::new(UiMode::Closed);
    let expanded = RwSignal::new(None::<i64>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_menus(client).await {
                Ok(list) => {
                    menus.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Error al cargar menús: {}", e))),
            }
        });
    };
    fetch();

    let delete = move |menu: Menu| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("¿Eliminar el menú \"{}\"?", menu.nombre))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_menu(client, menu.id).await {
                Ok(()) => {
                    log::info!("menu {} deleted", menu.id);
                    fetch();
                }
                Err(e) => error.set(Some(format!("Error al eliminar el menú: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        mode.set(UiMode::Closed);
        fetch();
    });
    let on_cancel = Callback::new(move |_| mode.set(UiMode::Closed));

    view! {
        <div class="page menus">
            <div class="page__header">
                <h1 class="page__title">"Menús"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| mode.set(UiMode::Creating)>
                    "Nuevo menú"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                let current = mode.get();
                current.is_open().then(|| {
                    let menu = menus.with_untracked(|list| find_menu(list, current));
                    view! { <MenuDetails menu=menu on_saved=on_saved on_cancel=on_cancel /> }
                })
            }}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Secciones"</TableHeaderCell>
                        <TableHeaderCell>"Opciones"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || menus.get().into_iter().map(|menu| {
                        let id = menu.id.value();
                        let sections = menu
                            .ordered_sections()
                            .iter()
                            .map(|s| s.titulo.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        let options: usize = menu.sections.iter().map(|s| s.option_count()).sum();
                        let detail = menu.clone();
                        let to_delete = menu.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <a class="link" on:click=move |_| expanded.update(|e| {
                                        *e = if *e == Some(id) { None } else { Some(id) };
                                    })>
                                        {menu.nombre.clone()}
                                    </a>
                                </TableCell>
                                <TableCell>{sections}</TableCell>
                                <TableCell>{options}</TableCell>
                                <TableCell>
                                    <Flex>
                                        <Button on_click=move |_| mode.set(UiMode::Editing(id))>"Editar"</Button>
                                        <Button on_click=move |_| delete(to_delete.clone())>"Eliminar"</Button>
                                    </Flex>
                                </TableCell>
                            </TableRow>
                            <Show when=move || expanded.get() == Some(id)>
                                {
                                    let detail = detail.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="4">
                                                {detail.ordered_sections().into_iter().map(|section| view! {
                                                    <div class="menu-section">
                                                        <strong>{section.titulo.as_str()}</strong>
                                                        {section.option_groups().map(|(tipo, options)| {
                                                            let texts = options.iter().map(|o| o.texto.clone()).collect::<Vec<_>>().join(", ");
                                                            view! {
                                                                <div class="option-group">
                                                                    <span class="option-group__label">{option_type_label(tipo)}": "</span>
                                                                    {texts}
                                                                </div>
                                                            }
                                                        }).collect_view()}
                                                    </div>
                                                }).collect_view()}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            </Show>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_menu::MenuId;

    #[test]
    fn test_find_menu_only_when_editing() {
        let menus = vec![Menu {
            id: MenuId(4),
            nombre: "General".into(),
            sections: Vec::new(),
        }];
        assert!(find_menu(&menus, UiMode::Creating).is_none());
        assert_eq!(find_menu(&menus, UiMode::Editing(4)).map(|m| m.nombre), Some("General".into()));
        assert!(find_menu(&menus, UiMode::Editing(9)).is_none());
    }
}
