//! SQLite 存储实现
//!
//! 基于 rusqlite 实现 `WorkerStorage` trait

use super::registry::WorkerStorage;
use super::schema::{install_schema, open_connection};
use super::{AddOutcome, NewWorker, StoreStats, Worker};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const SELECT_WORKERS: &str = "SELECT people.human_name, people.human_bd, numbers.phone_number \
     FROM numbers \
     INNER JOIN people ON people.human_id = numbers.human_id";

/// SQLite 存储实现
///
/// 持有一个连接，随实例一起释放
pub struct SqliteStorage {
    conn: Connection,
    path: PathBuf,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteStorage {
    /// 打开数据库，并确保表结构存在
    pub fn open(path: &Path) -> Result<Self> {
        let conn = open_connection(path)?;
        install_schema(&conn).with_context(|| format!("Failed to create schema in {:?}", path))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// 数据库文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn query_workers(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Worker>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, worker_from_row)?;

        let mut workers = Vec::new();
        for row in rows {
            workers.push(row?);
        }
        Ok(workers)
    }
}

fn worker_from_row(row: &Row<'_>) -> rusqlite::Result<Worker> {
    Ok(Worker {
        name: row.get(0)?,
        birthday: row.get(1)?,
        number: row.get(2)?,
    })
}

impl WorkerStorage for SqliteStorage {
    fn add_worker(&mut self, worker: &NewWorker) -> Result<AddOutcome> {
        worker.validate()?;

        let tx = self.conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT human_id FROM people WHERE human_name = ?1 ORDER BY human_id LIMIT 1",
                params![worker.name],
                |row| row.get(0),
            )
            .optional()?;

        let outcome = match existing {
            Some(person_id) => AddOutcome::Linked { person_id },
            None => {
                tx.execute(
                    "INSERT INTO people (human_name, human_bd) VALUES (?1, ?2)",
                    params![worker.name, worker.birthday],
                )?;
                AddOutcome::Created {
                    person_id: tx.last_insert_rowid(),
                }
            }
        };

        tx.execute(
            "INSERT INTO numbers (human_id, phone_number) VALUES (?1, ?2)",
            params![outcome.person_id(), worker.number],
        )?;

        tx.commit()
            .with_context(|| format!("Failed to commit worker {:?} to {:?}", worker.name, self.path))?;

        debug!("Added number {} for {:?}: {}", worker.number, worker.name, outcome);
        Ok(outcome)
    }

    fn list_all(&self) -> Result<Vec<Worker>> {
        let sql = format!("{} ORDER BY numbers.number_id", SELECT_WORKERS);
        self.query_workers(&sql, params![])
            .with_context(|| format!("Failed to list workers in {:?}", self.path))
    }

    fn find_by_name_prefix(&self, query: &str) -> Result<Vec<Worker>> {
        // substr 做字面比较：区分大小写，% 和 _ 没有特殊含义
        let sql = format!(
            "{} WHERE substr(people.human_name, 1, length(?1)) = ?1 ORDER BY numbers.number_id",
            SELECT_WORKERS
        );
        self.query_workers(&sql, params![query])
            .with_context(|| format!("Failed to search workers in {:?}", self.path))
    }

    fn stats(&self) -> Result<StoreStats> {
        let person_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?;
        let number_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM numbers", [], |row| row.get(0))?;

        Ok(StoreStats {
            person_count: person_count as usize,
            number_count: number_count as usize,
        })
    }
}
