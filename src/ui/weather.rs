//! Weather lookup panel.

use crate::helpers::escape_html;
use crate::services::weather::{icon_url, OwmClient, WeatherSnapshot};
use crate::ui::PageSurface;

const WEATHER_RESULT: &str = "weatherResult";
/// Details section hidden until the first successful lookup.
const WEATHER_DETAILS_SECTION: &str = "weather-details";

/// The weather page component: one client, one result container.
#[derive(Debug)]
pub struct WeatherPanel {
    client: OwmClient,
    default_city: String,
}

impl WeatherPanel {
    pub fn new(client: OwmClient, default_city: impl Into<String>) -> Self {
        Self {
            client,
            default_city: default_city.into(),
        }
    }

    /// Get-weather button handler: one best-effort request, no retry.
    ///
    /// A blank credential short-circuits to a guidance message without
    /// touching the network. A blank city falls back to the configured
    /// default. Failures render one generic message; the diagnostic detail
    /// only goes to the log.
    pub async fn fetch_requested(
        &self,
        city_input: &str,
        api_key_input: &str,
        page: &mut impl PageSurface,
    ) {
        page.set_content(WEATHER_RESULT, "<p>Loading\u{2026}</p>");

        let api_key = api_key_input.trim();
        if api_key.is_empty() {
            page.set_content(
                WEATHER_RESULT,
                "<p>No API key provided. Enter an OpenWeatherMap API key to fetch live data.</p>",
            );
            return;
        }

        let city_trimmed = city_input.trim();
        let city = if city_trimmed.is_empty() {
            self.default_city.as_str()
        } else {
            city_trimmed
        };

        match self.client.current_conditions(city, api_key).await {
            Ok(snapshot) => {
                page.set_content(WEATHER_RESULT, &render_snapshot(&snapshot));
                page.reveal(WEATHER_DETAILS_SECTION);
            }
            Err(e) => {
                tracing::error!("Weather lookup failed: {}", e);
                page.set_content(
                    WEATHER_RESULT,
                    "<p>Failed to fetch weather. Check API key, network, and city name.</p>",
                );
            }
        }
    }
}

/// Result panel markup for one snapshot.
pub fn render_snapshot(snapshot: &WeatherSnapshot) -> String {
    let mut out = format!(
        "<div class=\"weather-main\">\
         <img src=\"{icon}\" alt=\"{description}\" class=\"weather-icon\" />\
         <h3>{city} \u{2014} {description}</h3>\
         <div class=\"temp-large\">{temp}\u{b0}C</div>\
         <p class=\"feels-like\">Feels like: {feels}\u{b0}C</p>\
         </div>\
         <div class=\"weather-grid\">\
         <div class=\"weather-item\"><strong>Humidity</strong><span>{humidity}%</span></div>\
         <div class=\"weather-item\"><strong>Wind</strong><span>{wind} m/s</span></div>\
         <div class=\"weather-item\"><strong>Pressure</strong><span>{pressure} hPa</span></div>",
        icon = icon_url(&snapshot.icon),
        description = escape_html(&snapshot.description),
        city = escape_html(&snapshot.city),
        temp = snapshot.temp_c,
        feels = snapshot.feels_like_c,
        humidity = snapshot.humidity_pct,
        wind = snapshot.wind_speed_ms,
        pressure = snapshot.pressure_hpa,
    );

    if let Some(rain) = snapshot.rain_1h_mm {
        out.push_str(&format!(
            "<div class=\"weather-item warning\"><strong>Rain (1h)</strong><span>{} mm</span></div>",
            rain
        ));
    }

    out.push_str("</div>");
    out
}
