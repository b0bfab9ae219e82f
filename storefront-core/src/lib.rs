//! Storefront Core - 餐厅营业状态与订单计价
//!
//! # 架构概述
//!
//! - **营业时间** (`availability`): 判断餐厅当前是否自动打烊 (支持跨午夜时段)
//! - **计价** (`pricing`): 订单行与整单金额计算 (rust_decimal)
//! - **服务层** (`services`): 餐厅资料存储接口、营业状态、订单报价
//!
//! # 模块结构
//!
//! ```text
//! storefront-core/src/
//! ├── core/          # 配置
//! ├── availability/  # 营业时间判断、校验
//! ├── pricing/       # 计价
//! ├── services/      # 仓储接口与业务服务
//! └── utils/         # 日志、时区
//! ```

pub mod availability;
pub mod core;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use availability::{is_auto_closed, is_auto_closed_now, restaurant_status, validate_schedule};
pub use crate::core::Config;
pub use pricing::{OrderQuote, PricingError, calculate_line_total, calculate_order};
pub use services::{
    InMemoryScheduleRepository, OrderPricingService, RestaurantService, ScheduleRepository,
};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、读取配置、初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    // 配置读取时日志尚未初始化，这里补报
    if let Some(name) = &config.invalid_timezone {
        tracing::warn!("Invalid BUSINESS_TIMEZONE '{}', using UTC", name);
    }
    config
}
