//! Order pricing service
//!
//! Quotes a cart for a restaurant: the restaurant must be taking orders,
//! then every line is priced and summed.

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::OrderLineItem;

use super::restaurant_service::RestaurantService;
use super::schedule_repository::ScheduleRepository;
use crate::pricing::{OrderQuote, calculate_order};

pub struct OrderPricingService<R> {
    restaurants: RestaurantService<R>,
}

impl<R: ScheduleRepository> OrderPricingService<R> {
    pub fn new(restaurants: RestaurantService<R>) -> Self {
        Self { restaurants }
    }

    /// Price a cart at `now`
    ///
    /// # Errors
    /// - `RestaurantNotFound` / `RestaurantClosed`
    /// - `EmptyOrder`, `OrderTooLarge`
    /// - `InvalidQuantity`, `InvalidAmount` (with the failing `line`)
    pub async fn quote(
        &self,
        restaurant_id: &str,
        items: &[OrderLineItem],
        now: DateTime<Utc>,
    ) -> AppResult<OrderQuote> {
        self.restaurants
            .ensure_accepting_orders(restaurant_id, now)
            .await?;

        let quote = calculate_order(restaurant_id, items)?;

        tracing::info!(
            restaurant_id,
            lines = quote.lines.len(),
            total = quote.total,
            "Order quoted"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryScheduleRepository;
    use chrono::{TimeZone, Weekday};
    use chrono_tz::Tz;
    use shared::error::ErrorCode;
    use shared::models::{PriceModifier, RestaurantProfile, WeeklySchedule};

    fn service() -> OrderPricingService<InMemoryScheduleRepository> {
        let repo = InMemoryScheduleRepository::from_profiles([RestaurantProfile {
            id: "noodles".into(),
            name: "Noodle Bar".into(),
            is_open: true,
            opening_hours: WeeklySchedule::default().with_day(Weekday::Mon, "17:00", "23:00"),
            timezone: None,
        }]);
        OrderPricingService::new(RestaurantService::new(repo, Tz::UTC))
    }

    fn monday(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    fn cart() -> Vec<OrderLineItem> {
        vec![
            OrderLineItem::new(9.5, 2).with_addon(PriceModifier::priced(1.25)),
            OrderLineItem::new(3.0, 1).with_variant(PriceModifier::default()),
        ]
    }

    #[tokio::test]
    async fn test_quote_when_open() {
        let quote = service().quote("noodles", &cart(), monday(19)).await.unwrap();
        assert_eq!(quote.restaurant_id, "noodles");
        assert_eq!(quote.lines[0].line_total, 21.5);
        assert_eq!(quote.lines[1].line_total, 3.0);
        assert_eq!(quote.item_count, 3);
        assert_eq!(quote.total, 24.5);
    }

    #[tokio::test]
    async fn test_quote_rejected_when_closed() {
        let err = service().quote("noodles", &cart(), monday(12)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantClosed);
    }

    #[tokio::test]
    async fn test_quote_rejects_invalid_lines() {
        let service = service();

        let err = service.quote("noodles", &[], monday(19)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyOrder);

        let bad = vec![OrderLineItem::new(9.5, 1), OrderLineItem::new(-3.0, 1)];
        let err = service.quote("noodles", &bad, monday(19)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
        assert_eq!(
            err.details.unwrap().get("line"),
            Some(&serde_json::Value::from(1u64))
        );
    }
}
