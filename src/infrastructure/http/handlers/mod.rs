//! HTTP Handlers

mod items;
mod root;
mod students;
mod websocket;

pub use items::*;
pub use root::*;
pub use students::*;
pub use websocket::*;
