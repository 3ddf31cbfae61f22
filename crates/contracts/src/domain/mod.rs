pub mod a001_servicio;
pub mod a002_habitacion;
pub mod a003_cama;
pub mod a004_paciente;
pub mod a005_dieta;
pub mod a006_alergia;
pub mod a007_menu;
pub mod a008_pedido;
pub mod common;
