//! Command Handlers 实现

mod item_handlers;
mod student_handlers;

pub use item_handlers::*;
pub use student_handlers::*;
