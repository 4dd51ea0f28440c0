// Adapters layer: concrete implementations for external systems (http source, report rendering).

pub mod http;
pub mod render;
