pub mod app;
pub mod config;
pub mod logging;
pub mod unpack;

pub use app::App;
