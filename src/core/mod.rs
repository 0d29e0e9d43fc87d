pub mod config;
pub mod presenter;

// 重新导出 config 模块中的公共 API
pub use config::{Config, DEFAULT_DB_FILE};

// 重新导出 presenter 模块中的公共 API
pub use presenter::{render, render_json, EMPTY_MESSAGE};
