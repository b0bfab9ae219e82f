//! 核心模块 - 服务配置
//!
//! - [`Config`] - 服务配置

pub mod config;

pub use config::Config;
