//! 日志初始化
//!
//! 通过 `ADJGRAPH_LOG` 环境变量配置过滤规则，例如：
//!
//! - `ADJGRAPH_LOG=debug`
//! - `ADJGRAPH_LOG=warn,adjgraph::graph=debug`

use tracing_subscriber::{fmt, EnvFilter};

/// 日志过滤环境变量名
pub const LOG_ENV: &str = "ADJGRAPH_LOG";

/// 以默认级别 info 初始化全局 subscriber
pub fn init() {
    init_with_default("info");
}

/// 以指定默认级别初始化全局 subscriber
///
/// 全局 subscriber 只能设置一次，重复调用会被忽略。
pub fn init_with_default(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .compact();

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_repeatable() {
        init();
        init();
        init_with_default("warn");
    }
}
