mod card;
pub mod history;
pub mod pending;

pub use history::HistorialPedidos;
pub use pending::PedidosPendientes;
