//! Schedule Repository
//!
//! Where restaurant profiles and their opening hours come from. The backend
//! plugs in its database; this crate ships an in-memory implementation that
//! can be seeded from a JSON catalog file.

use std::path::Path;

use dashmap::DashMap;
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{RestaurantProfile, WeeklySchedule};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Storage(format!("invalid catalog: {}", err))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::restaurant_not_found(id),
            RepoError::Storage(msg) => AppError::storage(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Restaurant profile storage, keyed by restaurant id
#[allow(async_fn_in_trait)]
pub trait ScheduleRepository {
    async fn list_profiles(&self) -> RepoResult<Vec<RestaurantProfile>>;
    async fn find_profile(&self, restaurant_id: &str) -> RepoResult<Option<RestaurantProfile>>;
    async fn get_schedule(&self, restaurant_id: &str) -> RepoResult<WeeklySchedule>;
    async fn save_schedule(&self, restaurant_id: &str, schedule: WeeklySchedule) -> RepoResult<()>;
    async fn set_manual_open(&self, restaurant_id: &str, is_open: bool) -> RepoResult<()>;
}

/// Catalog file layout: `{ "restaurants": [ ... ] }`
#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    restaurants: Vec<RestaurantProfile>,
}

/// In-memory repository backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryScheduleRepository {
    profiles: DashMap<String, RestaurantProfile>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles(profiles: impl IntoIterator<Item = RestaurantProfile>) -> Self {
        let repo = Self::new();
        for profile in profiles {
            repo.insert(profile);
        }
        repo
    }

    /// Load profiles from a JSON catalog file
    pub fn load_catalog(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RepoError::Storage(format!("{}: {}", path.display(), e)))?;
        let catalog: Catalog = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} restaurants from {}",
            catalog.restaurants.len(),
            path.display()
        );
        Ok(Self::from_profiles(catalog.restaurants))
    }

    /// Insert or replace a profile
    pub fn insert(&self, profile: RestaurantProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn update<F>(&self, restaurant_id: &str, apply: F) -> RepoResult<()>
    where
        F: FnOnce(&mut RestaurantProfile),
    {
        let mut entry = self
            .profiles
            .get_mut(restaurant_id)
            .ok_or_else(|| RepoError::NotFound(restaurant_id.to_string()))?;
        apply(entry.value_mut());
        Ok(())
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    async fn list_profiles(&self) -> RepoResult<Vec<RestaurantProfile>> {
        let mut profiles: Vec<RestaurantProfile> =
            self.profiles.iter().map(|e| e.value().clone()).collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(profiles)
    }

    async fn find_profile(&self, restaurant_id: &str) -> RepoResult<Option<RestaurantProfile>> {
        Ok(self.profiles.get(restaurant_id).map(|e| e.value().clone()))
    }

    async fn get_schedule(&self, restaurant_id: &str) -> RepoResult<WeeklySchedule> {
        self.profiles
            .get(restaurant_id)
            .map(|e| e.opening_hours.clone())
            .ok_or_else(|| RepoError::NotFound(restaurant_id.to_string()))
    }

    async fn save_schedule(&self, restaurant_id: &str, schedule: WeeklySchedule) -> RepoResult<()> {
        self.update(restaurant_id, |profile| profile.opening_hours = schedule)
    }

    async fn set_manual_open(&self, restaurant_id: &str, is_open: bool) -> RepoResult<()> {
        self.update(restaurant_id, |profile| profile.is_open = is_open)
    }
}
