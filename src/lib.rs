//! Desktop form for uploading a video or image to a remote endpoint.

pub mod app;
pub mod app_dirs;
pub mod config;
pub mod logging;
pub mod session;
pub mod upload;
pub mod utils;
