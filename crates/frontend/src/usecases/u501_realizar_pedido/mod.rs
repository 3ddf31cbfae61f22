//! u501: place a meal order for a patient
//!
//! - api.rs: HTTP gateway for `POST /pedidos/`
//! - submitter.rs: OrderSubmitter with the in-flight guard
//! - view_model.rs: screen state and commands
//! - view.rs: Leptos components

pub mod api;
pub mod submitter;
mod view;
mod view_model;

pub use submitter::{OrderSubmitter, PedidoGateway, SubmitError};
pub use view::RealizarPedidoPage;
pub use view_model::RealizarPedidoViewModel;
