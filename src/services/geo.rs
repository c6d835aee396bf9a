//! Map, geocoding and geolocation seam for the risk-assessment page.
//!
//! The interactive map, reverse geocoder and device geolocation are external
//! capabilities supplied by the host page; the crate only drives them
//! through the traits below. [`crate::ui::location::LocationPicker`] is the
//! component sitting on top of this seam.

/// Geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("Geolocation is not supported by your browser")]
    Unsupported,

    #[error("Reverse geocoding failed: {0}")]
    Geocoding(String),
}

/// Rendering surface of the interactive map.
pub trait MapSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8);
    /// Place the single selection marker, replacing any previous one.
    fn place_marker(&mut self, at: LatLng);
    fn clear_marker(&mut self);
}

/// Resolves a point to a human-readable address.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn reverse_geocode(&self, point: LatLng) -> Result<String, GeoError>;
}

/// Reads the device position.
#[allow(async_fn_in_trait)]
pub trait GeolocationProvider {
    async fn current_position(&self) -> Result<LatLng, GeoError>;
}

/// Map view defaults.
#[derive(Debug, Clone, Copy)]
pub struct MapViewConfig {
    pub center: LatLng,
    pub zoom: u8,
    /// Zoom applied after a successful locate-me request.
    pub locate_zoom: u8,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(20.0, 0.0),
            zoom: 2,
            locate_zoom: 15,
        }
    }
}
