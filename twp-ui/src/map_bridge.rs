//! Typed wrappers around the Leaflet map.
//!
//! Leaflet is loaded from a CDN as a global `L`. Setup runs through
//! `document::eval` so clicks can be sent back to Rust with `dioxus.send`;
//! one-off calls like moving the marker go through `js_sys::eval`.

use dioxus::document::{self, Eval};

pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TWP JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Script that waits for Leaflet and the container, builds the map and
/// forwards every click as `[lat, lng]`.
pub fn map_init_script(container_id: &str, center: (f64, f64), zoom: u8) -> String {
    format!(
        r#"
        var poll = setInterval(function() {{
            if (typeof L === 'undefined' || !document.getElementById('{container_id}')) {{
                return;
            }}
            clearInterval(poll);
            if (window.__twpMap) {{
                window.__twpMap.remove();
                window.__twpMarker = null;
            }}
            var map = L.map('{container_id}').setView([{lat}, {lon}], {zoom});
            L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
                attribution: '&copy; OpenStreetMap contributors',
                maxZoom: 18,
            }}).addTo(map);
            map.on('click', function(e) {{
                dioxus.send([e.latlng.lat, e.latlng.lng]);
            }});
            window.__twpMap = map;
        }}, 100);
        await new Promise(function() {{}});
        "#,
        container_id = container_id,
        lat = center.0,
        lon = center.1,
        zoom = zoom,
    )
}

/// Start the map. Receive clicks with `eval.recv::<(f64, f64)>()`.
pub fn init_map(container_id: &str, center: (f64, f64), zoom: u8) -> Eval {
    document::eval(&map_init_script(container_id, center, zoom))
}

/// Place or move the single location marker.
pub fn place_marker(lat: f64, lon: f64) {
    call_js(&format!(
        r#"
        if (window.__twpMap) {{
            if (window.__twpMarker) {{
                window.__twpMarker.setLatLng([{lat}, {lon}]);
            }} else {{
                window.__twpMarker = L.marker([{lat}, {lon}]).addTo(window.__twpMap);
            }}
        }}
        "#,
    ));
}
