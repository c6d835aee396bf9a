use crate::services::geo::{LatLng, MapViewConfig};
use crate::services::weather::OWM_API_BASE;

/// Site-wide configuration.
///
/// Collected in one place so embeddings and tests can override any of it.
/// Deliberately not read from the environment: the page has no environment
/// to read from.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Key-value slot holding the serialized alert list.
    pub alerts_storage_key: String,
    /// City used when the weather form is submitted blank.
    pub default_city: String,
    /// Base URL of the weather provider API.
    pub weather_api_base: String,
    /// Map rendering defaults for the location picker.
    pub map_view: MapViewConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            alerts_storage_key: "floodsafe_alerts_v1".to_string(),
            default_city: "London".to_string(),
            weather_api_base: OWM_API_BASE.to_string(),
            map_view: MapViewConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SiteConfig::default();

        assert_eq!(config.alerts_storage_key, "floodsafe_alerts_v1");
        assert_eq!(config.default_city, "London");
        assert!(config.weather_api_base.contains("openweathermap"));
        assert_eq!(config.map_view.center, LatLng::new(20.0, 0.0));
        assert_eq!(config.map_view.zoom, 2);
        assert_eq!(config.map_view.locate_zoom, 15);
    }
}
