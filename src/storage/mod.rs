//! 存储层模块
//!
//! 提供工人登记表的持久化存储功能
//!
//! ## 模块结构
//!
//! - [`worker`](worker::Worker) - 记录数据模型
//! - [`schema`](schema::ensure_schema) - 表结构初始化
//! - [`registry`](registry::WorkerStorage) - 存储抽象 trait
//! - [`sqlite`](sqlite::SqliteStorage) - SQLite 实现

pub mod worker;
pub mod schema;
pub mod registry;
pub mod sqlite;

pub use worker::{AddOutcome, NewWorker, StoreStats, Worker};
pub use schema::ensure_schema;
pub use registry::WorkerStorage;
pub use sqlite::SqliteStorage;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// 存储管理器
///
/// 每个操作打开一次，用完即释放，进程内不长期持有连接
#[derive(Debug)]
pub struct Storage {
    /// 数据库文件路径
    path: PathBuf,
    /// SQLite 存储
    workers: SqliteStorage,
}

impl Storage {
    /// 打开数据库
    ///
    /// # Arguments
    ///
    /// * `path` - 数据库文件路径，不存在时创建
    ///
    /// # Returns
    ///
    /// `Storage` 实例
    pub fn open(path: &Path) -> Result<Self> {
        let workers = SqliteStorage::open(path)
            .with_context(|| format!("Failed to open worker registry at {:?}", path))?;

        Ok(Self {
            path: path.to_path_buf(),
            workers,
        })
    }

    /// 获取工人存储抽象
    pub fn workers(&self) -> &dyn WorkerStorage {
        &self.workers
    }

    /// 获取可变的工人存储抽象
    pub fn workers_mut(&mut self) -> &mut dyn WorkerStorage {
        &mut self.workers
    }

    /// 获取数据库文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}
