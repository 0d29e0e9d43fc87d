//! 数据库表结构
//!
//! `people` 保存人员，`numbers` 保存号码并通过 `human_id` 指向人员，
//! 一个人可以有多个号码

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    human_id INTEGER PRIMARY KEY AUTOINCREMENT,
    human_name TEXT NOT NULL,
    human_bd TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS numbers (
    number_id INTEGER PRIMARY KEY AUTOINCREMENT,
    human_id INTEGER NOT NULL REFERENCES people(human_id),
    phone_number INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_numbers_human_id ON numbers(human_id);
"#;

/// 打开数据库连接
///
/// 父目录不存在时先创建，并开启外键约束
pub fn open_connection(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
    }

    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {:?}", path))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .with_context(|| format!("Failed to configure database at {:?}", path))?;
    Ok(conn)
}

/// 确保两张表存在
///
/// 可重复调用，已存在的表保持不变
///
/// # Arguments
///
/// * `path` - 数据库文件路径
pub fn ensure_schema(path: &Path) -> Result<()> {
    let conn = open_connection(path)?;
    install_schema(&conn).with_context(|| format!("Failed to create schema in {:?}", path))?;
    debug!("Schema ready at {:?}", path);
    Ok(())
}

pub(crate) fn install_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
