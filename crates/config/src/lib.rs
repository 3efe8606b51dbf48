mod global_config;
pub mod util;

pub use global_config::*;

pub const BASE_URL_ENV: &str = "USUARIOS_API_BASE_URL";
pub const TOKEN_ENV: &str = "USUARIOS_ACCESS_TOKEN";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
