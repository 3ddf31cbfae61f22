pub mod aggregate;
pub mod pending;
pub mod preparacion;

pub use aggregate::{Adicionales, Pedido, PedidoId, PedidoOpcion, PedidoStatus, PedidoStatusUpdate, SectionState};
pub use pending::PendingFilter;
pub use preparacion::BebidaPreparacion;
