use contracts::domain::a007_menu::labels::option_type_label;
use contracts::domain::a007_menu::SectionTitle;
use contracts::domain::a008_pedido::Pedido;
use leptos::prelude::*;
use thaw::*;

/// Picked options of one section, with beverage preparations
pub fn section_items(pedido: &Pedido, titulo: SectionTitle) -> AnyView {
    let groups = pedido
        .selected_in(titulo)
        .into_iter()
        .map(|(tipo, options)| {
            let items = options
                .into_iter()
                .map(|o| {
                    let preparacion = pedido.preparacion(o.id).map(|p| p.label());
                    view! {
                        <li>
                            {o.texto.clone()}
                            {preparacion.map(|label| view! { " " <Badge>{label}</Badge> })}
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="pedido-group">
                    <span class="pedido-group__label">{option_type_label(tipo)}</span>
                    <ul>{items}</ul>
                </div>
            }
        })
        .collect_view();
    view! { <div class="pedido-section__items">{groups}</div> }.into_any()
}

/// Patient block shared by the pending and history cards
pub fn paciente_header(pedido: &Pedido) -> AnyView {
    let p = &pedido.paciente;
    view! {
        <div class="pedido-card__paciente">
            <div class="pedido-card__name">
                {p.name.clone()}
                {(!p.activo).then(|| view! { " " <Badge color=BadgeColor::Danger>"Dado de alta"</Badge> })}
            </div>
            <div class="pedido-card__meta">{format!("C.C. {} · {}", p.cedula, p.ubicacion())}</div>
            <div class="pedido-card__meta">{format!("Dieta: {} · Alergias: {}", p.dieta_recomendada(), p.alergias_label())}</div>
        </div>
    }
    .into_any()
}

pub fn observaciones(pedido: &Pedido) -> Option<AnyView> {
    let text = pedido
        .observaciones
        .clone()
        .or_else(|| pedido.adicionales.observaciones.clone())
        .filter(|t| !t.trim().is_empty())?;
    Some(view! { <div class="pedido-card__obs"><strong>"Observaciones: "</strong>{text}</div> }.into_any())
}
