mod form;
mod list;
mod state;

pub use list::GestionDatos;
