pub mod app;
pub mod config;
pub mod features;
pub mod models;
pub mod pages;

pub use app::App;
