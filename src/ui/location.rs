//! Location picker for the risk-assessment map.

use crate::helpers::escape_html;
use crate::services::geo::{
    GeoError, Geocoder, GeolocationProvider, LatLng, MapSurface, MapViewConfig,
};
use crate::ui::PageSurface;

// Hidden risk-form fields the picker fills in.
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

const LOCATION_DISPLAY: &str = "locationDisplay";
const SELECTED_LOCATION: &str = "selectedLocation";
const LOCATE_BUTTON: &str = "getCurrentLocation";
const LOCATE_IDLE_LABEL: &str = "\u{1F4CD} Use My Current Location";
const LOCATE_PENDING_LABEL: &str = "Getting location...";

/// A point the user picked, with its address when geocoding worked.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSelection {
    pub point: LatLng,
    pub address: Option<String>,
}

/// Owns the marker and selection state for the risk-assessment map.
///
/// Each instance carries its own state, so several pickers can coexist and
/// tests can drive one directly.
#[derive(Debug)]
pub struct LocationPicker<M, G, P> {
    map: M,
    geocoder: G,
    geolocation: P,
    view: MapViewConfig,
    selection: Option<GeoSelection>,
}

impl<M, G, P> LocationPicker<M, G, P>
where
    M: MapSurface,
    G: Geocoder,
    P: GeolocationProvider,
{
    /// Create the picker and render the map at its default view.
    pub fn new(map: M, geocoder: G, geolocation: P, view: MapViewConfig) -> Self {
        let mut map = map;
        map.set_view(view.center, view.zoom);
        Self {
            map,
            geocoder,
            geolocation,
            view,
            selection: None,
        }
    }

    /// The last picked point, if any.
    pub fn selection(&self) -> Option<&GeoSelection> {
        self.selection.as_ref()
    }

    /// Map click handler: moves the marker and resolves the address.
    pub async fn map_clicked(&mut self, point: LatLng, page: &mut impl PageSurface) {
        self.select_point(point, page).await;
    }

    /// Locate-me button handler.
    ///
    /// The trigger label is restored on every exit path. A failed request
    /// surfaces a blocking notification with the underlying reason and is
    /// not retried.
    pub async fn locate_clicked(&mut self, page: &mut impl PageSurface) {
        page.set_control_label(LOCATE_BUTTON, LOCATE_PENDING_LABEL);
        match self.geolocation.current_position().await {
            Ok(point) => {
                self.map.set_view(point, self.view.locate_zoom);
                self.select_point(point, page).await;
            }
            Err(e) => {
                page.notify(&format!("Error getting your location: {}", e));
            }
        }
        page.set_control_label(LOCATE_BUTTON, LOCATE_IDLE_LABEL);
    }

    async fn select_point(&mut self, point: LatLng, page: &mut impl PageSurface) {
        self.map.clear_marker();
        self.map.place_marker(point);
        page.set_field(LATITUDE_FIELD, &point.lat.to_string());
        page.set_field(LONGITUDE_FIELD, &point.lng.to_string());

        // Address resolution is best-effort; the selection stands either way.
        let address = match self.geocoder.reverse_geocode(point).await {
            Ok(address) => {
                page.set_content(LOCATION_DISPLAY, &escape_html(&address));
                page.reveal(SELECTED_LOCATION);
                Some(address)
            }
            Err(e) => {
                tracing::debug!("Reverse geocoding failed: {}", e);
                None
            }
        };

        self.selection = Some(GeoSelection { point, address });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::ui::testing::FakePage;

    #[derive(Debug, Default)]
    struct MapLogInner {
        views: Vec<(LatLng, u8)>,
        placed: Vec<LatLng>,
        cleared: usize,
    }

    #[derive(Debug, Default, Clone)]
    struct MapLog(Rc<RefCell<MapLogInner>>);

    struct FakeMap {
        log: MapLog,
    }

    impl MapSurface for FakeMap {
        fn set_view(&mut self, center: LatLng, zoom: u8) {
            self.log.0.borrow_mut().views.push((center, zoom));
        }

        fn place_marker(&mut self, at: LatLng) {
            self.log.0.borrow_mut().placed.push(at);
        }

        fn clear_marker(&mut self) {
            self.log.0.borrow_mut().cleared += 1;
        }
    }

    struct FakeGeocoder {
        address: Option<String>,
    }

    impl Geocoder for FakeGeocoder {
        async fn reverse_geocode(&self, _point: LatLng) -> Result<String, GeoError> {
            self.address
                .clone()
                .ok_or_else(|| GeoError::Geocoding("quota exceeded".to_string()))
        }
    }

    struct FakeGeolocation {
        position: Option<LatLng>,
    }

    impl GeolocationProvider for FakeGeolocation {
        async fn current_position(&self) -> Result<LatLng, GeoError> {
            self.position
                .ok_or_else(|| GeoError::PermissionDenied("User denied Geolocation".to_string()))
        }
    }

    fn picker(
        address: Option<&str>,
        position: Option<LatLng>,
    ) -> (
        LocationPicker<FakeMap, FakeGeocoder, FakeGeolocation>,
        MapLog,
    ) {
        let log = MapLog::default();
        let picker = LocationPicker::new(
            FakeMap { log: log.clone() },
            FakeGeocoder {
                address: address.map(str::to_string),
            },
            FakeGeolocation { position },
            MapViewConfig::default(),
        );
        (picker, log)
    }

    #[test]
    fn test_new_renders_default_view() {
        let (_picker, log) = picker(None, None);
        assert_eq!(log.0.borrow().views, vec![(LatLng::new(20.0, 0.0), 2)]);
    }

    #[test]
    fn test_map_click_selects_point() {
        let (mut picker, log) = picker(Some("Thames Embankment, London"), None);
        let mut page = FakePage::new();
        let point = LatLng::new(51.5, -0.12);

        tokio_test::block_on(picker.map_clicked(point, &mut page));

        assert_eq!(log.0.borrow().placed, vec![point]);
        assert_eq!(page.fields.get("latitude").unwrap(), "51.5");
        assert_eq!(page.fields.get("longitude").unwrap(), "-0.12");
        assert_eq!(
            page.contents.get("locationDisplay").unwrap(),
            "Thames Embankment, London"
        );
        assert!(page.revealed.contains(&"selectedLocation".to_string()));
        assert_eq!(
            picker.selection(),
            Some(&GeoSelection {
                point,
                address: Some("Thames Embankment, London".to_string()),
            })
        );
    }

    #[test]
    fn test_click_replaces_previous_marker() {
        let (mut picker, log) = picker(Some("somewhere"), None);
        let mut page = FakePage::new();

        tokio_test::block_on(picker.map_clicked(LatLng::new(1.0, 2.0), &mut page));
        tokio_test::block_on(picker.map_clicked(LatLng::new(3.0, 4.0), &mut page));

        assert_eq!(log.0.borrow().cleared, 2);
        assert_eq!(log.0.borrow().placed.len(), 2);
        assert_eq!(picker.selection().unwrap().point, LatLng::new(3.0, 4.0));
    }

    #[test]
    fn test_geocode_failure_is_silent() {
        let (mut picker, _log) = picker(None, None);
        let mut page = FakePage::new();
        let point = LatLng::new(51.5, -0.12);

        tokio_test::block_on(picker.map_clicked(point, &mut page));

        assert!(page.notifications.is_empty());
        assert!(page.revealed.is_empty());
        assert!(!page.contents.contains_key("locationDisplay"));
        // The coordinates are still captured.
        assert_eq!(page.fields.get("latitude").unwrap(), "51.5");
        assert_eq!(picker.selection().unwrap().address, None);
    }

    #[test]
    fn test_locate_success_zooms_in() {
        let home = LatLng::new(47.37, 8.54);
        let (mut picker, log) = picker(Some("Zurich"), Some(home));
        let mut page = FakePage::new();

        tokio_test::block_on(picker.locate_clicked(&mut page));

        assert_eq!(log.0.borrow().views.last().copied(), Some((home, 15)));
        assert_eq!(picker.selection().unwrap().point, home);
        assert_eq!(
            page.labels,
            vec![
                (
                    "getCurrentLocation".to_string(),
                    "Getting location...".to_string()
                ),
                (
                    "getCurrentLocation".to_string(),
                    "\u{1F4CD} Use My Current Location".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_locate_failure_notifies_and_restores_label() {
        let (mut picker, _log) = picker(None, None);
        let mut page = FakePage::new();

        tokio_test::block_on(picker.locate_clicked(&mut page));

        assert_eq!(
            page.notifications,
            vec!["Error getting your location: Permission denied: User denied Geolocation"]
        );
        assert_eq!(
            page.labels.last().unwrap().1,
            "\u{1F4CD} Use My Current Location"
        );
        assert!(picker.selection().is_none());
    }
}
