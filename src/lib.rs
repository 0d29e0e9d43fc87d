pub mod cli;
pub mod core;
pub mod storage;

use tracing::Level;

/// 初始化日志
///
/// 日志写入 stderr，stdout 只保留命令输出
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}
