//! 工具模块 - 通用工具函数
//!
//! - 日志初始化
//! - 时区转换

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCode};
