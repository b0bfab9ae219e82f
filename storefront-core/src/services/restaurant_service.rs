//! Restaurant availability service
//!
//! What the profile endpoints call: status at request time, opening hours
//! updates from the admin dashboard and the manual open/closed toggle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};
use shared::models::{RestaurantProfile, RestaurantStatus, WeeklySchedule};

use super::schedule_repository::ScheduleRepository;
use crate::availability::{is_auto_closed, restaurant_status, validate_schedule};
use crate::utils::time::{resolve_timezone, to_local};

pub struct RestaurantService<R> {
    repo: Arc<R>,
    default_tz: Tz,
}

impl<R> Clone for RestaurantService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            default_tz: self.default_tz,
        }
    }
}

impl<R: ScheduleRepository> RestaurantService<R> {
    pub fn new(repo: R, default_tz: Tz) -> Self {
        Self::with_shared(Arc::new(repo), default_tz)
    }

    pub fn with_shared(repo: Arc<R>, default_tz: Tz) -> Self {
        Self { repo, default_tz }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn profiles(&self) -> AppResult<Vec<RestaurantProfile>> {
        Ok(self.repo.list_profiles().await?)
    }

    pub async fn profile(&self, restaurant_id: &str) -> AppResult<RestaurantProfile> {
        self.repo
            .find_profile(restaurant_id)
            .await?
            .ok_or_else(|| AppError::restaurant_not_found(restaurant_id))
    }

    /// Opening hours alone, ignoring the manual toggle
    pub async fn is_auto_closed(&self, restaurant_id: &str, now: DateTime<Utc>) -> AppResult<bool> {
        let profile = self.profile(restaurant_id).await?;
        let tz = resolve_timezone(profile.timezone.as_deref(), self.default_tz);
        Ok(is_auto_closed(&profile.opening_hours, &to_local(&now, tz)))
    }

    pub async fn status(
        &self,
        restaurant_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<RestaurantStatus> {
        let profile = self.profile(restaurant_id).await?;
        let status = restaurant_status(&profile, &now, self.default_tz);

        tracing::debug!(restaurant_id, ?status, "Resolved restaurant status");
        Ok(status)
    }

    /// Fail with `RestaurantClosed` unless the restaurant takes orders at `now`
    pub async fn ensure_accepting_orders(
        &self,
        restaurant_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let status = self.status(restaurant_id, now).await?;
        if status.accepts_orders() {
            Ok(())
        } else {
            Err(AppError::restaurant_closed(restaurant_id).with_detail(
                "status",
                serde_json::to_value(status).unwrap_or_default(),
            ))
        }
    }

    /// Replace the opening hours after strict validation
    pub async fn update_opening_hours(
        &self,
        restaurant_id: &str,
        schedule: WeeklySchedule,
    ) -> AppResult<()> {
        validate_schedule(&schedule)?;
        self.repo.save_schedule(restaurant_id, schedule).await?;

        tracing::info!(restaurant_id, "Opening hours updated");
        Ok(())
    }

    pub async fn set_manual_open(&self, restaurant_id: &str, is_open: bool) -> AppResult<()> {
        self.repo.set_manual_open(restaurant_id, is_open).await?;

        tracing::info!(restaurant_id, is_open, "Manual open toggle changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryScheduleRepository;
    use chrono::{TimeZone, Weekday};
    use shared::error::ErrorCode;

    fn service() -> RestaurantService<InMemoryScheduleRepository> {
        let repo = InMemoryScheduleRepository::from_profiles([RestaurantProfile {
            id: "bistro".into(),
            name: "Bistro".into(),
            is_open: true,
            opening_hours: WeeklySchedule::default()
                .with_day(Weekday::Mon, "11:00", "15:00")
                .with_day(Weekday::Fri, "18:00", "01:00"),
            timezone: Some("Europe/Madrid".into()),
        }]);
        RestaurantService::new(repo, Tz::UTC)
    }

    /// 2024-01-01 is a Monday; Madrid is UTC+1 in January
    fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn test_status_uses_restaurant_zone() {
        let service = service();
        // 10:30 UTC = 11:30 Madrid
        assert_eq!(
            service.status("bistro", utc(1, 10, 30)).await.unwrap(),
            RestaurantStatus::Open
        );
        // 14:30 UTC = 15:30 Madrid
        assert_eq!(
            service.status("bistro", utc(1, 14, 30)).await.unwrap(),
            RestaurantStatus::ClosedBySchedule
        );
        // Friday 23:30 UTC = 00:30 Saturday Madrid; Saturday has no hours
        assert!(service.is_auto_closed("bistro", utc(5, 23, 30)).await.unwrap());
        // Friday 22:30 UTC = 23:30 Friday Madrid
        assert!(!service.is_auto_closed("bistro", utc(5, 22, 30)).await.unwrap());
    }

    #[tokio::test]
    async fn test_manual_toggle() {
        let service = service();
        service.set_manual_open("bistro", false).await.unwrap();
        assert_eq!(
            service.status("bistro", utc(1, 10, 30)).await.unwrap(),
            RestaurantStatus::ClosedManually
        );
        // Auto-close only looks at the hours
        assert!(!service.is_auto_closed("bistro", utc(1, 10, 30)).await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_accepting_orders() {
        let service = service();
        assert!(service.ensure_accepting_orders("bistro", utc(1, 10, 30)).await.is_ok());

        let err = service
            .ensure_accepting_orders("bistro", utc(1, 20, 0))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantClosed);
        assert_eq!(
            err.details.unwrap().get("status"),
            Some(&serde_json::Value::from("closed_by_schedule"))
        );
    }

    #[tokio::test]
    async fn test_update_opening_hours_validates() {
        let service = service();
        let bad = WeeklySchedule::default().with_day(Weekday::Tue, "08:00", "late");
        let err = service.update_opening_hours("bistro", bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSchedule);

        let good = WeeklySchedule::default().with_day(Weekday::Tue, "08:00", "12:00");
        service.update_opening_hours("bistro", good.clone()).await.unwrap();
        assert_eq!(service.repository().get_schedule("bistro").await.unwrap(), good);
    }

    #[tokio::test]
    async fn test_unknown_restaurant() {
        let service = service();
        let err = service.status("ghost", utc(1, 12, 0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantNotFound);

        let err = service
            .update_opening_hours("ghost", WeeklySchedule::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantNotFound);
    }
}
