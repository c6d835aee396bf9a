//! OpenWeatherMap current-conditions client.
//!
//! One GET against the provider's `/weather` endpoint with `q`, `units` and
//! `appid` query parameters. A lookup is a single best-effort attempt
//! triggered by explicit user action: no retry, no backoff, no caching.
//! See: https://openweathermap.org/current

use serde::Deserialize;

use crate::errors::AppError;
use crate::helpers::round_whole;

pub const OWM_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
const OWM_ICON_BASE: &str = "https://openweathermap.org/img/wn";

/// Client for the OpenWeatherMap current-conditions API.
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: reqwest::Client,
    api_base: String,
}

/// Display model extracted from one current-conditions response.
///
/// Fetched fresh on every user-initiated request; never cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// City display name as the provider reports it.
    pub city: String,
    /// Primary condition description (e.g. "light rain").
    pub description: String,
    /// Provider icon code (e.g. "10d"), see [`icon_url`].
    pub icon: String,
    /// Current temperature, rounded to whole degrees Celsius.
    pub temp_c: i64,
    /// Feels-like temperature, rounded to whole degrees Celsius.
    pub feels_like_c: i64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub pressure_hpa: f64,
    /// Rainfall over the last hour in mm, when the provider reports any.
    pub rain_1h_mm: Option<f64>,
}

// --- OpenWeatherMap JSON response types ---

#[derive(Debug, Deserialize)]
pub struct OwmResponse {
    pub name: String,
    pub weather: Vec<OwmCondition>,
    pub main: OwmMain,
    pub wind: OwmWind,
    pub rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
pub struct OwmCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmRain {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

impl OwmClient {
    pub fn new() -> Self {
        Self::with_base(OWM_API_BASE)
    }

    /// Client against a non-default base URL (tests point this at a mock).
    pub fn with_base(api_base: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Fetch current conditions for a city, in metric units.
    ///
    /// Any failure (transport, non-2xx status, undecodable body) comes back
    /// as one [`AppError::ExternalServiceError`]; the caller decides what the
    /// user sees.
    pub async fn current_conditions(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<WeatherSnapshot, AppError> {
        let url = format!("{}/weather", self.api_base);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("units", "metric"), ("appid", api_key)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("weather request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "weather provider returned HTTP {}",
                response.status()
            )));
        }

        let body: OwmResponse = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("weather JSON parse error: {}", e))
        })?;

        snapshot_from_response(body)
    }
}

impl Default for OwmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the display model from a decoded provider response.
///
/// Pure (no I/O). Temperatures round half away from zero to whole degrees.
pub fn snapshot_from_response(body: OwmResponse) -> Result<WeatherSnapshot, AppError> {
    let condition = body.weather.into_iter().next().ok_or_else(|| {
        AppError::ExternalServiceError("weather response contained no conditions".to_string())
    })?;

    Ok(WeatherSnapshot {
        city: body.name,
        description: condition.description,
        icon: condition.icon,
        temp_c: round_whole(body.main.temp),
        feels_like_c: round_whole(body.main.feels_like),
        humidity_pct: body.main.humidity,
        wind_speed_ms: body.wind.speed,
        pressure_hpa: body.main.pressure,
        rain_1h_mm: body.rain.and_then(|r| r.one_hour),
    })
}

/// Image URL for a provider icon code.
pub fn icon_url(icon: &str) -> String {
    format!("{}/{}@2x.png", OWM_ICON_BASE, icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixture() -> serde_json::Value {
        json!({
            "name": "London",
            "weather": [{"description": "light rain", "icon": "10d"}],
            "main": {"temp": 17.46, "feels_like": 17.81, "humidity": 81, "pressure": 1012},
            "wind": {"speed": 4.1},
            "rain": {"1h": 0.35}
        })
    }

    #[test]
    fn test_snapshot_extraction() {
        let body: OwmResponse = serde_json::from_value(fixture()).unwrap();
        let snap = snapshot_from_response(body).unwrap();
        assert_eq!(snap.city, "London");
        assert_eq!(snap.description, "light rain");
        assert_eq!(snap.icon, "10d");
        assert_eq!(snap.temp_c, 17);
        assert_eq!(snap.feels_like_c, 18);
        assert_eq!(snap.humidity_pct, 81.0);
        assert_eq!(snap.wind_speed_ms, 4.1);
        assert_eq!(snap.pressure_hpa, 1012.0);
        assert_eq!(snap.rain_1h_mm, Some(0.35));
    }

    #[test]
    fn test_snapshot_without_rain() {
        let mut fix = fixture();
        fix.as_object_mut().unwrap().remove("rain");
        let body: OwmResponse = serde_json::from_value(fix).unwrap();
        let snap = snapshot_from_response(body).unwrap();
        assert_eq!(snap.rain_1h_mm, None);
    }

    #[test]
    fn test_snapshot_rounds_half_away_from_zero() {
        let mut fix = fixture();
        fix["main"]["temp"] = json!(-0.5);
        fix["main"]["feels_like"] = json!(2.5);
        let body: OwmResponse = serde_json::from_value(fix).unwrap();
        let snap = snapshot_from_response(body).unwrap();
        assert_eq!(snap.temp_c, -1);
        assert_eq!(snap.feels_like_c, 3);
    }

    #[test]
    fn test_snapshot_requires_a_condition() {
        let mut fix = fixture();
        fix["weather"] = json!([]);
        let body: OwmResponse = serde_json::from_value(fix).unwrap();
        assert!(snapshot_from_response(body).is_err());
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[tokio::test]
    async fn test_current_conditions_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
            .mount(&server)
            .await;

        let client = OwmClient::with_base(server.uri());
        let snap = client.current_conditions("London", "test-key").await.unwrap();
        assert_eq!(snap.city, "London");
        assert_eq!(snap.temp_c, 17);
    }

    #[tokio::test]
    async fn test_current_conditions_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = OwmClient::with_base(server.uri());
        let err = client.current_conditions("London", "bad-key").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_current_conditions_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OwmClient::with_base(server.uri());
        let err = client.current_conditions("London", "test-key").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
