/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 info，`verbose` 时为 debug。重复初始化会被忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 每日题目机器人启动");
    info!("📍 目标版块: r/{}", config.subreddit_name);
    info!("⏱️ 投票时长: {} 天", config.poll_duration_days);
    info!("💾 状态文件: {}", config.state_file);
    if config.dry_run {
        info!("🧪 dry-run 模式");
    }
    info!("{}", "=".repeat(60));
}

/// 记录运行完成信息
pub fn log_run_complete(question_id: u32, submission_id: Option<&str>) {
    info!("\n{}", "=".repeat(60));
    match submission_id {
        Some(id) => info!("✅ 完成: 题目 #{} 已发布 ({})", question_id, id),
        None => info!("✅ 完成: 题目 #{} 仅预览，未发布", question_id),
    }
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("题目内容很长", 2), "题目...");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
