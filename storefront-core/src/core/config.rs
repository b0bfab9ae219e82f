use chrono_tz::Tz;

use crate::utils::time::parse_timezone;

/// 服务配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 (production 输出 JSON 日志) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后按天滚动写文件 |
/// | BUSINESS_TIMEZONE | UTC | 营业时区 (餐厅未配置时区时使用) |
/// | CATALOG_PATH | catalog.json | 餐厅目录文件 (格式见 catalog.example.json) |
///
/// # 示例
///
/// ```ignore
/// BUSINESS_TIMEZONE=Europe/Madrid CATALOG_PATH=catalog.example.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 营业时区
    pub timezone: Tz,
    /// 无法识别的 BUSINESS_TIMEZONE 原值 (此时 timezone 为 UTC)
    ///
    /// 日志初始化之后由 [`crate::setup_environment`] 报告
    pub invalid_timezone: Option<String>,
    /// 餐厅目录 JSON 文件路径
    pub catalog_path: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let (timezone, invalid_timezone) = match var("BUSINESS_TIMEZONE") {
            Some(name) => match parse_timezone(&name) {
                Some(tz) => (tz, None),
                None => (Tz::UTC, Some(name)),
            },
            None => (Tz::UTC, None),
        };

        Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|d| !d.is_empty()),
            timezone,
            invalid_timezone,
            catalog_path: var("CATALOG_PATH").unwrap_or_else(|| "catalog.json".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(catalog_path: impl Into<String>, timezone: Tz) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path.into();
        config.timezone = timezone;
        config.invalid_timezone = None;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
