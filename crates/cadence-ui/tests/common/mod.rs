//! In-memory scheduling API used by the integration tests.

use async_trait::async_trait;
use cadence_api_models::{
    ACTIVITY_TYPES_PATH, ActivityType, ActivityTypeInput, ProblemDetails, RecordId,
    TIME_SLOTS_PATH, TimeSlot, TimeSlotInput,
};
use cadence_ui::core::clock::ManualClock;
use cadence_ui::core::config::UiConfig;
use cadence_ui::core::error::ApiError;
use cadence_ui::core::transport::{ApiRequest, ApiResponse, Method, Transport};
use cadence_ui::features::settings::api::SettingsApi;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub const STALE_MS: u64 = 30_000;

/// Canned outcome that pre-empts the next request.
enum Injected {
    Response(ApiResponse),
    Network(String),
}

#[derive(Default)]
pub struct FakeServer {
    activity_types: RefCell<Vec<ActivityType>>,
    time_slots: RefCell<Vec<TimeSlot>>,
    next_id: Cell<RecordId>,
    requests: RefCell<Vec<ApiRequest>>,
    injected: RefCell<VecDeque<Injected>>,
    get_yields: Cell<usize>,
}

impl FakeServer {
    pub fn with_activity_types(rows: Vec<ActivityType>) -> Self {
        let next = rows.iter().map(|row| row.id).max().unwrap_or(0);
        let server = Self::default();
        *server.activity_types.borrow_mut() = rows;
        server.next_id.set(next);
        server
    }

    pub fn with_time_slots(rows: Vec<TimeSlot>) -> Self {
        let next = rows.iter().map(|row| row.id).max().unwrap_or(0);
        let server = Self::default();
        *server.time_slots.borrow_mut() = rows;
        server.next_id.set(next);
        server
    }

    pub fn respond_next(&self, status: u16, body: impl Into<String>) {
        self.injected.borrow_mut().push_back(Injected::Response(ApiResponse {
            status,
            body: body.into(),
        }));
    }

    pub fn fail_next(&self, message: &str) {
        self.injected
            .borrow_mut()
            .push_back(Injected::Network(message.to_string()));
    }

    /// Snapshot GET responses, then yield `turns` times before answering.
    pub fn delay_gets(&self, turns: usize) {
        self.get_yields.set(turns);
    }

    pub fn get_count(&self) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.method == Method::Get)
            .count()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn activity_types(&self) -> Vec<ActivityType> {
        self.activity_types.borrow().clone()
    }

    fn allocate_id(&self) -> RecordId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn route(&self, request: &ApiRequest) -> ApiResponse {
        let (collection, id) = split_path(&request.path);
        match (request.method, collection, id) {
            (Method::Get, ACTIVITY_TYPES_PATH, None) => json(200, &*self.activity_types.borrow()),
            (Method::Get, TIME_SLOTS_PATH, None) => json(200, &*self.time_slots.borrow()),
            (Method::Post, ACTIVITY_TYPES_PATH, None) => {
                let Some(input) = decode::<ActivityTypeInput>(request.body.as_ref()) else {
                    return problem(400, "Bad Request", "malformed body");
                };
                if self
                    .activity_types
                    .borrow()
                    .iter()
                    .any(|row| row.code == input.code)
                {
                    return problem(409, "Conflict", "code already exists");
                }
                let record = ActivityType {
                    id: self.allocate_id(),
                    name: input.name,
                    code: input.code,
                    color: input.color,
                };
                self.activity_types.borrow_mut().push(record.clone());
                json(201, &record)
            }
            (Method::Put, ACTIVITY_TYPES_PATH, Some(id)) => {
                let Some(input) = decode::<ActivityTypeInput>(request.body.as_ref()) else {
                    return problem(400, "Bad Request", "malformed body");
                };
                let mut rows = self.activity_types.borrow_mut();
                let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
                    return problem(404, "Not Found", "activity type not found");
                };
                row.name = input.name;
                row.code = input.code;
                row.color = input.color;
                json(200, &*row)
            }
            (Method::Delete, ACTIVITY_TYPES_PATH, Some(id)) => {
                let mut rows = self.activity_types.borrow_mut();
                let before = rows.len();
                rows.retain(|row| row.id != id);
                if rows.len() == before {
                    problem(404, "Not Found", "activity type not found")
                } else {
                    empty(204)
                }
            }
            (Method::Post, TIME_SLOTS_PATH, None) => {
                let Some(input) = decode::<TimeSlotInput>(request.body.as_ref()) else {
                    return problem(400, "Bad Request", "malformed body");
                };
                let record = TimeSlot {
                    id: self.allocate_id(),
                    start_time: input.start_time,
                    end_time: input.end_time,
                };
                self.time_slots.borrow_mut().push(record.clone());
                json(201, &record)
            }
            (Method::Delete, TIME_SLOTS_PATH, Some(id)) => {
                let mut rows = self.time_slots.borrow_mut();
                let before = rows.len();
                rows.retain(|row| row.id != id);
                if rows.len() == before {
                    problem(404, "Not Found", "time slot not found")
                } else {
                    empty(204)
                }
            }
            _ => problem(405, "Method Not Allowed", "unsupported route"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let injected = self.injected.borrow_mut().pop_front();
        let outcome = match injected {
            Some(Injected::Response(response)) => Ok(response),
            Some(Injected::Network(message)) => Err(ApiError::Network(message)),
            None => Ok(self.route(&request)),
        };
        if request.method == Method::Get {
            for _ in 0..self.get_yields.get() {
                tokio::task::yield_now().await;
            }
        }
        outcome
    }
}

/// Client over `server` driven by a manual clock.
pub fn client(server: FakeServer) -> (SettingsApi<FakeServer>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::at(1_000));
    let config = UiConfig::new("http://localhost:8080").with_list_stale_ms(STALE_MS);
    let api = SettingsApi::with_clock(server, &config, clock.clone());
    (api, clock)
}

pub fn lecture() -> ActivityType {
    ActivityType {
        id: 1,
        name: "Lecture".to_string(),
        code: "LEC".to_string(),
        color: "#3b82f6".to_string(),
    }
}

pub fn morning_slot() -> TimeSlot {
    TimeSlot {
        id: 1,
        start_time: "08:00".to_string(),
        end_time: "09:30".to_string(),
    }
}

fn split_path(path: &str) -> (&str, Option<RecordId>) {
    for collection in [ACTIVITY_TYPES_PATH, TIME_SLOTS_PATH] {
        if path == collection {
            return (collection, None);
        }
        if let Some(rest) = path
            .strip_prefix(collection)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            return (collection, rest.parse().ok());
        }
    }
    (path, None)
}

fn decode<T: serde::de::DeserializeOwned>(body: Option<&Value>) -> Option<T> {
    body.and_then(|value| serde_json::from_value(value.clone()).ok())
}

fn json<T: Serialize + ?Sized>(status: u16, payload: &T) -> ApiResponse {
    ApiResponse {
        status,
        body: serde_json::to_string(payload).unwrap_or_default(),
    }
}

fn empty(status: u16) -> ApiResponse {
    ApiResponse {
        status,
        body: String::new(),
    }
}

fn problem(status: u16, title: &str, detail: &str) -> ApiResponse {
    json(
        status,
        &ProblemDetails {
            kind: "about:blank".to_string(),
            title: title.to_string(),
            status,
            detail: Some(detail.to_string()),
        },
    )
}
