//! MCP tool implementations for Pedidos.
//!
//! Each tool answers with a single JSON record. Failures are reported as
//! records too, flagged with `isError`, so a broken database never surfaces
//! as a protocol error.

pub mod crear;
pub mod estado_por_id;
pub mod listar_por_estado;
mod records;

pub use crear::CrearParams;
pub use estado_por_id::EstadoPorIdParams;
pub use listar_por_estado::ListarPorEstadoParams;
