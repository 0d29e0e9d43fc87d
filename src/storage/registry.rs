//! 工人存储抽象层
//!
//! 定义 `WorkerStorage` trait，命令层只依赖这个接口

use super::{AddOutcome, NewWorker, StoreStats, Worker};
use anyhow::Result;

/// 工人存储抽象 trait
pub trait WorkerStorage {
    /// 添加工人号码
    ///
    /// 按姓名精确查找人员：不存在则新建（使用给定生日），
    /// 存在则复用其 id，生日保持首次写入的值。随后插入号码。
    /// 整个过程在一个事务内完成。
    ///
    /// # Arguments
    ///
    /// * `worker` - 要添加的工人
    ///
    /// # Returns
    ///
    /// 新建还是复用了人员记录
    fn add_worker(&mut self, worker: &NewWorker) -> Result<AddOutcome>;

    /// 列出所有记录
    ///
    /// # Returns
    ///
    /// 每个号码一条记录
    fn list_all(&self) -> Result<Vec<Worker>>;

    /// 按姓名前缀查找
    ///
    /// 区分大小写的字面前缀匹配，没有匹配时返回空列表
    ///
    /// # Arguments
    ///
    /// * `query` - 姓名前缀
    fn find_by_name_prefix(&self, query: &str) -> Result<Vec<Worker>>;

    /// 获取统计信息
    fn stats(&self) -> Result<StoreStats>;
}
