pub mod common;
pub mod u501_realizar_pedido;
