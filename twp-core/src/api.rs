//! Backend access and the request pipeline.
//!
//! `Backend` is the seam between the pipeline and the network. `HttpBackend`
//! talks JSON over HTTP with reqwest (which uses `fetch` on wasm32); tests use
//! an in-memory fake. Futures are not `Send` in the browser, hence `?Send`.

use crate::error::{ApiError, PlanError, Result};
use crate::geo::SelectedLocation;
use crate::plan::{PlanRequest, PlanResult, SavedTrip, TripWindow, UNTITLED_TRIP};
use crate::prefs::Preferences;
use crate::state::{CurrentResult, LocationDetails};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

const NO_DATA_MESSAGE: &str = "No hourly forecast available for that time range.";
const MISSING_LOCATION: &str = "Pick a location on the map first.";
const MISSING_WINDOW: &str = "Choose both a start and an end time.";

#[async_trait(?Send)]
pub trait Backend {
    /// Resolve a display name for a point.
    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<String>;

    /// Timezone identifier of a point, taken from its hourly data.
    async fn timezone(&self, lat: f64, lon: f64) -> Result<String>;

    async fn plan_trip(&self, request: &PlanRequest) -> Result<PlanResult>;

    async fn list_trips(&self) -> Result<Vec<SavedTrip>>;

    async fn delete_trip(&self, id: &str) -> Result<()>;

    async fn fetch_trip(&self, id: &str) -> Result<SavedTrip>;
}

/// Decode a backend JSON envelope.
///
/// The body is parsed regardless of HTTP status since the backend reports
/// validation failures as `{ok: false, error}` with a 400. `ok: false`
/// becomes `ApiError::Backend`; a missing `ok` is treated as success.
pub fn parse_envelope(status: u16, body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse {
        status,
        detail: e.to_string(),
    })?;
    if value.get("ok").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Request failed")
            .to_string();
        return Err(ApiError::Backend(message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Parse {
            status,
            detail: "unsuccessful status without an error message".to_string(),
        });
    }
    Ok(value)
}

fn decode<T: DeserializeOwned>(value: Value, status: u16) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse {
        status,
        detail: e.to_string(),
    })
}

fn field<T: DeserializeOwned>(value: &Value, name: &str, status: u16) -> Result<T> {
    let inner = value.get(name).cloned().ok_or_else(|| ApiError::Parse {
        status,
        detail: format!("missing field `{}`", name),
    })?;
    decode(inner, status)
}

#[derive(Deserialize)]
struct HourlyData {
    timezone: Option<String>,
}

/// Display name from a reverse-geocode response: `display_name`, else `name`.
pub fn place_name(value: &Value) -> Result<String> {
    ["display_name", "name"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Backend("No place name returned".to_string()))
}

/// Timezone from an hourly response, read from `data.timezone`.
pub fn hourly_timezone(value: &Value, status: u16) -> Result<String> {
    let data: HourlyData = field(value, "data", status)?;
    data.timezone
        .filter(|tz| !tz.is_empty())
        .ok_or_else(|| ApiError::Backend("No timezone in hourly data".to_string()))
}

/// Link for the CSV export of one factor of a saved trip.
pub fn csv_export_url(api_base: &str, trip_id: &str, factor: crate::Factor) -> String {
    format!(
        "{}/api/trip/{}/csv?factor={}&with_summary=1",
        api_base.trim_end_matches('/'),
        urlencoding::encode(trip_id),
        factor.key()
    )
}

/// reqwest-backed client for the planner API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl HttpBackend {
    pub fn new(api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, Value)> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let value = parse_envelope(status, &body)?;
        Ok((status, value))
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<String> {
        let request = self
            .client
            .post(self.url("/api/reverse_geocode"))
            .json(&json!({ "lat": lat, "lon": lon }));
        let (_, value) = self.send(request).await?;
        place_name(&value)
    }

    async fn timezone(&self, lat: f64, lon: f64) -> Result<String> {
        let request = self
            .client
            .get(self.url("/api/hourly"))
            .query(&[("lat", lat), ("lon", lon)]);
        let (status, value) = self.send(request).await?;
        hourly_timezone(&value, status)
    }

    async fn plan_trip(&self, request: &PlanRequest) -> Result<PlanResult> {
        let builder = self.client.post(self.url("/api/plan_trip")).json(request);
        let (status, value) = self.send(builder).await?;
        decode(value, status)
    }

    async fn list_trips(&self) -> Result<Vec<SavedTrip>> {
        let (status, value) = self.send(self.client.get(self.url("/api/trips"))).await?;
        field(&value, "trips", status)
    }

    async fn delete_trip(&self, id: &str) -> Result<()> {
        let request = self
            .client
            .post(self.url("/api/trips/delete"))
            .json(&json!({ "id": id }));
        self.send(request).await.map(|_| ())
    }

    async fn fetch_trip(&self, id: &str) -> Result<SavedTrip> {
        let path = format!("/api/trip/{}", urlencoding::encode(id));
        let (status, value) = self.send(self.client.get(self.url(&path))).await?;
        field(&value, "trip", status)
    }
}

/// Form inputs of one plan run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanDraft {
    pub trip_name: String,
    pub location: Option<SelectedLocation>,
    pub start_local: String,
    pub end_local: String,
    pub data_source: String,
    pub prefs: Preferences,
}

impl PlanDraft {
    /// Check required inputs and build the request body.
    pub fn validate(&self) -> std::result::Result<PlanRequest, PlanError> {
        let location = self
            .location
            .as_ref()
            .ok_or(PlanError::MissingInput(MISSING_LOCATION))?;
        let start = self.start_local.trim();
        let end = self.end_local.trim();
        if start.is_empty() || end.is_empty() {
            return Err(PlanError::MissingInput(MISSING_WINDOW));
        }
        let trip_name = match self.trip_name.trim() {
            "" => UNTITLED_TRIP.to_string(),
            name => name.to_string(),
        };
        let data_source = match self.data_source.trim() {
            "" => None,
            source => Some(source.to_string()),
        };
        Ok(PlanRequest {
            trip_name,
            lat: location.lat,
            lon: location.lon,
            data_source,
            window: TripWindow {
                start_local: start.to_string(),
                end_local: end.to_string(),
            },
            prefs: self.prefs,
        })
    }
}

/// Reverse geocode and timezone lookup for a freshly clicked point.
///
/// Never fails: a missing name stays `None` (shown as "Unknown") and a failed
/// timezone lookup produces a notice; the state applies the "UTC" default.
pub async fn lookup_location<B: Backend + ?Sized>(
    backend: &B,
    location: &SelectedLocation,
) -> LocationDetails {
    let name = match backend.reverse_geocode(location.lat, location.lon).await {
        Ok(name) => Some(name),
        Err(e) => {
            log::warn!("Reverse geocode failed: {}", e);
            None
        }
    };
    let (timezone, notice) = match backend.timezone(location.lat, location.lon).await {
        Ok(tz) => (Some(tz), None),
        Err(e) => {
            log::warn!("Timezone lookup failed: {}", e);
            (None, Some(format!("Timezone lookup failed, using UTC ({})", e)))
        }
    };
    LocationDetails {
        name,
        timezone,
        notice,
    }
}

/// Validate and submit a plan run.
///
/// Missing inputs are rejected before any request is made.
pub async fn run_plan<B: Backend + ?Sized>(
    backend: &B,
    draft: &PlanDraft,
) -> std::result::Result<CurrentResult, PlanError> {
    let request = draft.validate()?;
    log::info!(
        "Planning '{}' at {:.4}, {:.4}",
        request.trip_name,
        request.lat,
        request.lon
    );
    let result = backend.plan_trip(&request).await?;
    if result.no_data_for_window {
        let message = result
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| NO_DATA_MESSAGE.to_string());
        return Err(PlanError::NoDataForWindow(message));
    }
    Ok(CurrentResult {
        result,
        prefs: request.prefs,
    })
}

/// Fetch a saved trip and prepare its last result for display.
pub async fn open_trip<B: Backend + ?Sized>(
    backend: &B,
    id: &str,
) -> std::result::Result<CurrentResult, PlanError> {
    let trip = backend.fetch_trip(id).await?;
    let name = trip.name.clone();
    let (result, prefs) = trip.into_result().ok_or_else(|| {
        PlanError::Api(ApiError::Backend(format!(
            "Trip '{}' has no saved result",
            name
        )))
    })?;
    if result.no_data_for_window {
        let message = result.message.unwrap_or_else(|| NO_DATA_MESSAGE.to_string());
        return Err(PlanError::NoDataForWindow(message));
    }
    Ok(CurrentResult { result, prefs })
}

/// Delete a trip, then re-fetch the list whatever the delete did.
pub async fn delete_and_refresh<B: Backend + ?Sized>(
    backend: &B,
    id: &str,
) -> Result<Vec<SavedTrip>> {
    if let Err(e) = backend.delete_trip(id).await {
        log::error!("Deleting trip {} failed: {}", id, e);
    }
    backend.list_trips().await
}
