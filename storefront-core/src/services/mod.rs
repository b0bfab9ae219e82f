//! 服务层 - 餐厅营业状态与订单报价
//!
//! - [`ScheduleRepository`] - 餐厅资料存储接口
//! - [`RestaurantService`] - 营业状态、营业时间维护
//! - [`OrderPricingService`] - 订单报价

pub mod order_pricing;
pub mod restaurant_service;
pub mod schedule_repository;

pub use order_pricing::OrderPricingService;
pub use restaurant_service::RestaurantService;
pub use schedule_repository::{InMemoryScheduleRepository, RepoError, RepoResult, ScheduleRepository};
