//! End-to-end walkthrough of the site components against in-memory hosts.
//!
//! Run with `cargo run --example walkthrough`. Pass a city and an
//! OpenWeatherMap API key to exercise the live weather lookup:
//!
//! ```text
//! cargo run --example walkthrough -- London <api-key>
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use floodsafe::config::SiteConfig;
use floodsafe::services::geo::{GeoError, Geocoder, GeolocationProvider, LatLng, MapSurface};
use floodsafe::services::weather::OwmClient;
use floodsafe::storage::alerts::{AlertStore, Severity};
use floodsafe::storage::MemoryStore;
use floodsafe::ui::alerts::{AlertSubmission, AlertsPanel};
use floodsafe::ui::location::LocationPicker;
use floodsafe::ui::nav::{NavEvent, NavMenu};
use floodsafe::ui::risk::{RiskForm, RiskFormInput};
use floodsafe::ui::weather::WeatherPanel;
use floodsafe::ui::PageSurface;

/// Prints every surface mutation to stdout.
struct ConsolePage;

impl PageSurface for ConsolePage {
    fn set_content(&mut self, container_id: &str, html: &str) -> bool {
        println!("[{}]\n{}\n", container_id, html);
        true
    }

    fn set_class(&mut self, element_id: &str, class: &str) {
        println!("[{}] class = \"{}\"", element_id, class);
    }

    fn reveal(&mut self, element_id: &str) {
        println!("[{}] revealed", element_id);
    }

    fn reset_form(&mut self, form_id: &str) {
        println!("[{}] form reset", form_id);
    }

    fn set_field(&mut self, field_id: &str, value: &str) {
        println!("[{}] = {}", field_id, value);
    }

    fn set_control_label(&mut self, control_id: &str, label: &str) {
        println!("[{}] label = {}", control_id, label);
    }

    fn notify(&mut self, message: &str) {
        println!("!! {}", message);
    }

    fn confirm(&mut self, question: &str) -> bool {
        println!("?? {} -> yes", question);
        true
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        println!("scroll locked: {}", locked);
    }
}

struct StubMap;

impl MapSurface for StubMap {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        println!("map view: ({}, {}) @ z{}", center.lat, center.lng, zoom);
    }

    fn place_marker(&mut self, at: LatLng) {
        println!("marker: ({}, {})", at.lat, at.lng);
    }

    fn clear_marker(&mut self) {}
}

struct StubGeocoder;

impl Geocoder for StubGeocoder {
    async fn reverse_geocode(&self, _point: LatLng) -> Result<String, GeoError> {
        Ok("Thames Embankment, London, UK".to_string())
    }
}

struct StubGeolocation;

impl GeolocationProvider for StubGeolocation {
    async fn current_position(&self) -> Result<LatLng, GeoError> {
        Ok(LatLng::new(51.5072, -0.1276))
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floodsafe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::default();
    let mut page = ConsolePage;

    // Community alerts: render the empty state, then report one.
    let mut alerts = AlertsPanel::new(AlertStore::new(
        MemoryStore::new(),
        config.alerts_storage_key.clone(),
    ));
    alerts.render(&mut page);
    alerts.submit(
        &AlertSubmission {
            title: "River rising".to_string(),
            desc: "Water over the footpath at the weir".to_string(),
            location: "Mill Lane".to_string(),
            severity: Severity::High,
        },
        &mut page,
    );

    // Risk assessment for a worst-case location.
    let report = RiskForm::new().submit(
        &RiskFormInput {
            elevation: "low".to_string(),
            water_distance: "very-close".to_string(),
            drainage: "poor".to_string(),
            history: "frequent".to_string(),
            notes: "Basement flat".to_string(),
            ..Default::default()
        },
        &mut page,
    );
    println!("risk score: {}/12\n", report.assessment.score);

    // Location picker backed by stub map/geocoding/geolocation.
    let mut picker = LocationPicker::new(StubMap, StubGeocoder, StubGeolocation, config.map_view);
    picker.locate_clicked(&mut page).await;

    // Mobile navigation.
    let mut nav = NavMenu::new(vec![
        "index.html".to_string(),
        "weather.html".to_string(),
        "risk.html".to_string(),
    ]);
    nav.handle(NavEvent::OpenClicked, &mut page);
    nav.handle(NavEvent::LinkClicked("weather.html"), &mut page);
    println!("active link: {:?}\n", nav.active_link());

    // Weather lookup. Without an API key this demonstrates the guarded
    // short-circuit instead of a live request.
    let mut args = std::env::args().skip(1);
    let city = args.next().unwrap_or_default();
    let api_key = args.next().unwrap_or_default();
    let weather = WeatherPanel::new(
        OwmClient::with_base(config.weather_api_base.clone()),
        config.default_city.clone(),
    );
    weather.fetch_requested(&city, &api_key, &mut page).await;
}
