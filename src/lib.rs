pub mod config;
pub mod data_stream;
pub mod detector;
pub mod ewma;
pub mod render;
pub mod rolling_window;
