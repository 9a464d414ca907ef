//! Command implementations

mod beautify;
mod export;
mod plan;

pub use beautify::beautify;
pub use export::export;
pub use plan::plan_cmd;
