//! Leaflet map container; clicks select the trip location.

use dioxus::prelude::*;

use crate::actions;
use crate::map_bridge::{self, LEAFLET_CSS, LEAFLET_JS};
use crate::state::{AppState, Services};

/// DOM id Leaflet renders into.
const MAP_CONTAINER_ID: &str = "trip-map";

#[component]
pub fn MapPanel(#[props(default = 360)] height: u32) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    // One-time setup: build the map and forward clicks for the app's lifetime.
    use_effect(move || {
        let services = services.clone();
        let (center, zoom) = (services.config.map_center, services.config.map_zoom);
        spawn(async move {
            let mut clicks = map_bridge::init_map(MAP_CONTAINER_ID, center, zoom);
            loop {
                match clicks.recv::<(f64, f64)>().await {
                    Ok((lat, lon)) => {
                        log::debug!("Map click at {}, {}", lat, lon);
                        actions::select_location(state, services.clone(), lat, lon);
                    }
                    Err(e) => {
                        log::warn!("Map click channel closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        div {
            id: MAP_CONTAINER_ID,
            style: "height: {height}px; width: 100%; border-radius: 6px; border: 1px solid #ddd;",
        }
        p {
            style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
            "Click the map to choose where your trip happens."
        }
    }
}
