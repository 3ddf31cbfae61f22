pub mod a004_paciente;
pub mod a007_menu;
pub mod a008_pedido;
pub mod catalog;
