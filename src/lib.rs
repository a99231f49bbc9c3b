pub mod app;
pub mod console;
pub mod pong;
pub mod util;
