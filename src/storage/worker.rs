//! 工人记录数据模型
//!
//! 存储层以 `people` 和 `numbers` 两张表保存数据，
//! 对外只暴露连接后的扁平记录

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// 连接查询得到的扁平记录
///
/// 一个人有多个号码时，会产生多条姓名和生日相同的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// 姓名
    pub name: String,
    /// 生日，原样保存，不校验格式
    pub birthday: String,
    /// 电话号码
    pub number: i64,
}

impl Worker {
    /// 创建记录
    pub fn new(name: impl Into<String>, birthday: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
            number,
        }
    }
}

/// `add_worker` 的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorker {
    pub name: String,
    pub number: i64,
    pub birthday: String,
}

impl NewWorker {
    pub fn new(name: impl Into<String>, number: i64, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number,
            birthday: birthday.into(),
        }
    }

    /// 校验输入
    ///
    /// 姓名和生日都不能为空（只含空白也视为空）
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Worker name must not be empty");
        }
        if self.birthday.trim().is_empty() {
            bail!("Worker birthday must not be empty");
        }
        Ok(())
    }
}

/// 添加号码的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 新建了人员记录
    Created { person_id: i64 },
    /// 同名人员已存在，号码挂到该人员下
    Linked { person_id: i64 },
}

impl AddOutcome {
    pub fn person_id(&self) -> i64 {
        match self {
            AddOutcome::Created { person_id } | AddOutcome::Linked { person_id } => *person_id,
        }
    }
}

impl std::fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOutcome::Created { person_id } => write!(f, "created person #{}", person_id),
            AddOutcome::Linked { person_id } => write!(f, "linked to person #{}", person_id),
        }
    }
}

/// 存储统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// 人员数量
    pub person_count: usize,
    /// 号码数量
    pub number_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worker_validate() {
        assert!(NewWorker::new("Ann Lee", 555, "1990-01-01").validate().is_ok());
        assert!(NewWorker::new("", 555, "1990-01-01").validate().is_err());
        assert!(NewWorker::new("   ", 555, "1990-01-01").validate().is_err());
        assert!(NewWorker::new("Ann Lee", 555, "").validate().is_err());
    }

    #[test]
    fn test_add_outcome_person_id() {
        assert_eq!(AddOutcome::Created { person_id: 3 }.person_id(), 3);
        assert_eq!(AddOutcome::Linked { person_id: 7 }.person_id(), 7);
        assert_eq!(AddOutcome::Linked { person_id: 7 }.to_string(), "linked to person #7");
    }

    #[test]
    fn test_worker_serialization() {
        let worker = Worker::new("Ann Lee", "1990-01-01", 555);
        let serialized = serde_json::to_string(&worker).unwrap();
        assert_eq!(
            serialized,
            r#"{"name":"Ann Lee","birthday":"1990-01-01","number":555}"#
        );
    }
}
