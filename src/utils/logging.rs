/// 日志工具模块
///
/// 负责初始化 tracing（控制台 + 日志文件），并提供统一格式的日志输出辅助函数
use crate::config::Config;
use anyhow::{anyhow, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志
///
/// 同时输出到控制台和 `log_file_path`。默认级别为 `info`，可通过 `RUST_LOG` 覆盖。
pub fn init(log_file_path: &str) -> Result<()> {
    let file = init_log_file(log_file_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .try_init()
        .map_err(|e| anyhow!("初始化日志失败: {e}"))?;

    Ok(())
}

/// 打开日志文件并写入本次运行的分隔头
///
/// 日志文件按追加方式写入，多次运行的记录会保留。
pub fn init_log_file(log_file_path: &str) -> Result<File> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let log_header = format!(
        "{}\n主题批量创建日志 - {}\n{}\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    file.write_all(log_header.as_bytes())?;

    Ok(file)
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量创建主题");
    info!("🌐 论坛地址: {}", config.discourse_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout.as_secs());
    info!(
        "🔁 重试上限: {} / 请求间隔: {} 秒（未启用）",
        config.retry_limit,
        config.rate_limit_delay.as_secs()
    );
    info!("{}", "=".repeat(60));
}

/// 记录主题加载信息
///
/// # 参数
/// - `total`: 主题总数
/// - `accounts`: 已配置的轮换账号数量（未设置的槽位回退到默认账号）
/// - `max_concurrent`: 并发上限
pub fn log_topics_loaded(total: usize, accounts: usize, max_concurrent: Option<usize>) {
    info!("✓ 找到 {} 个待创建的主题", total);
    if accounts == 0 {
        info!("👤 未配置轮换账号，全部使用默认账号");
    } else {
        info!("👥 在 {} 个账号之间轮换", accounts);
    }
    match max_concurrent {
        Some(n) => info!("📋 并发上限: {}", n),
        None => info!("📋 所有请求同时发出（不限制并发）"),
    }
}
