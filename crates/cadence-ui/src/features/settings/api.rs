//! Data access for the settings resources.
//!
//! # Design
//! - Reads go through the query cache; writes invalidate the matching list on success only.
//! - A failed write leaves the cache untouched.
//! - A list that was in flight across a successful write is returned but not trusted as fresh.
//! - Never hold a cache borrow across an `await`.

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::UiConfig;
use crate::core::error::ApiError;
use crate::core::query::{QueryCache, Resource};
use crate::core::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::features::settings::state::ActivityTypeSubmission;
use cadence_api_models::{
    ACTIVITY_TYPES_PATH, ActivityType, ActivityTypeInput, RecordId, TIME_SLOTS_PATH, TimeSlot,
    TimeSlotInput, item_path,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// `/api/activity-types` collection.
#[derive(Clone, Copy, Debug)]
pub struct ActivityTypes;

impl Resource for ActivityTypes {
    type Record = ActivityType;
    const PATH: &'static str = ACTIVITY_TYPES_PATH;
}

/// `/api/time-slots` collection.
#[derive(Clone, Copy, Debug)]
pub struct TimeSlots;

impl Resource for TimeSlots {
    type Record = TimeSlot;
    const PATH: &'static str = TIME_SLOTS_PATH;
}

/// Cached client for activity types and time slots.
pub struct SettingsApi<T> {
    transport: T,
    clock: Rc<dyn Clock>,
    cache: RefCell<QueryCache>,
}

impl<T: Transport> SettingsApi<T> {
    /// Client using the platform clock.
    #[must_use]
    pub fn new(transport: T, config: &UiConfig) -> Self {
        Self::with_clock(transport, config, Rc::new(SystemClock))
    }

    /// Client using a caller-supplied clock.
    #[must_use]
    pub fn with_clock(transport: T, config: &UiConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            transport,
            clock,
            cache: RefCell::new(QueryCache::new(config.list_stale_ms)),
        }
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Last fetched records for `R`, fresh or not.
    #[must_use]
    pub fn cached<R: Resource>(&self) -> Option<Rc<Vec<R::Record>>> {
        self.cache.borrow().peek::<R>()
    }

    /// How many successful writes have invalidated `R`.
    #[must_use]
    pub fn invalidation_count<R: Resource>(&self) -> u64 {
        self.cache.borrow().invalidation_count(R::key())
    }

    /// Fetch a collection, serving the cache while it is fresh.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the body cannot be decoded.
    pub async fn list<R: Resource>(&self) -> Result<Rc<Vec<R::Record>>, ApiError> {
        let hit = self.cache.borrow().fresh::<R>(self.clock.now_ms());
        if let Some(records) = hit {
            debug!(resource = %R::key(), "serving cached list");
            return Ok(records);
        }

        let generation = self.cache.borrow().generation(R::key());
        debug!(resource = %R::key(), generation, "fetching list");
        let response = self
            .transport
            .send(ApiRequest::new(Method::Get, R::PATH))
            .await
            .and_then(ensure_success)?;
        let records: Vec<R::Record> = serde_json::from_str(&response.body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(self
            .cache
            .borrow_mut()
            .store::<R>(records, self.clock.now_ms(), generation))
    }

    /// `GET /api/activity-types`.
    ///
    /// # Errors
    /// See [`SettingsApi::list`].
    pub async fn list_activity_types(&self) -> Result<Rc<Vec<ActivityType>>, ApiError> {
        self.list::<ActivityTypes>().await
    }

    /// `POST /api/activity-types`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn create_activity_type(&self, input: &ActivityTypeInput) -> Result<(), ApiError> {
        let request = ApiRequest::with_json(Method::Post, ACTIVITY_TYPES_PATH, input)?;
        self.write::<ActivityTypes>(request).await
    }

    /// `PUT /api/activity-types/{id}`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn update_activity_type(
        &self,
        id: RecordId,
        input: &ActivityTypeInput,
    ) -> Result<(), ApiError> {
        let request =
            ApiRequest::with_json(Method::Put, item_path(ACTIVITY_TYPES_PATH, id), input)?;
        self.write::<ActivityTypes>(request).await
    }

    /// `DELETE /api/activity-types/{id}`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn delete_activity_type(&self, id: RecordId) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Delete, item_path(ACTIVITY_TYPES_PATH, id));
        self.write::<ActivityTypes>(request).await
    }

    /// Dispatch a validated modal submission to create or update.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn submit_activity_type(
        &self,
        submission: &ActivityTypeSubmission,
    ) -> Result<(), ApiError> {
        match submission {
            ActivityTypeSubmission::Create(input) => self.create_activity_type(input).await,
            ActivityTypeSubmission::Update(id, input) => {
                self.update_activity_type(*id, input).await
            }
        }
    }

    /// `GET /api/time-slots`.
    ///
    /// # Errors
    /// See [`SettingsApi::list`].
    pub async fn list_time_slots(&self) -> Result<Rc<Vec<TimeSlot>>, ApiError> {
        self.list::<TimeSlots>().await
    }

    /// `POST /api/time-slots`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn create_time_slot(&self, input: &TimeSlotInput) -> Result<(), ApiError> {
        let request = ApiRequest::with_json(Method::Post, TIME_SLOTS_PATH, input)?;
        self.write::<TimeSlots>(request).await
    }

    /// `DELETE /api/time-slots/{id}`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request fails or the server rejects it.
    pub async fn delete_time_slot(&self, id: RecordId) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Delete, item_path(TIME_SLOTS_PATH, id));
        self.write::<TimeSlots>(request).await
    }

    async fn write<R: Resource>(&self, request: ApiRequest) -> Result<(), ApiError> {
        let method = request.method;
        let path = request.path.clone();
        match self.transport.send(request).await.and_then(ensure_success) {
            Ok(_) => {
                self.cache.borrow_mut().invalidate(R::key());
                info!(method = method.as_str(), %path, resource = %R::key(), "write succeeded; list invalidated");
                Ok(())
            }
            Err(err) => {
                warn!(method = method.as_str(), %path, error = %err, "write failed");
                Err(err)
            }
        }
    }
}

fn ensure_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response.status, &response.body))
    }
}
