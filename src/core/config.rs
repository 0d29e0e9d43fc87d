//! 运行配置
//!
//! 每次调用解析一次，显式传给各个命令处理函数

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// 默认数据库文件名，位于当前工作目录
pub const DEFAULT_DB_FILE: &str = "workers.db";

/// 单次调用的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 数据库文件路径
    pub db_path: PathBuf,
}

impl Config {
    /// 使用给定的数据库路径创建配置
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// 解析配置
    ///
    /// # Arguments
    ///
    /// * `db` - 命令行传入的 `--db`，为空时使用 `<cwd>/workers.db`
    ///
    /// # Returns
    ///
    /// 解析后的 `Config`
    pub fn resolve(db: Option<&Path>) -> Result<Self> {
        match db {
            Some(path) => Ok(Self::new(path)),
            None => {
                let cwd = std::env::current_dir()
                    .context("Failed to determine the current working directory")?;
                Ok(Self::in_dir(&cwd))
            }
        }
    }

    /// 以指定目录下的默认文件名创建配置
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_DB_FILE))
    }
}
