//! Query Handlers 实现

mod item_query_handlers;

pub use item_query_handlers::*;
