//! Browser-side I/O: the one-shot record fetch and typed wrappers around the
//! Leaflet map functions.
//!
//! The map functions live in `assets/js/landslide-map.js` and are evaluated as
//! globals (no ES modules) once Leaflet's `L` is available. Rust serialises the
//! view and markers to JSON and calls those globals via `js_sys::eval()`.

use lrm_core::{LrmError, Record};
use lrm_engine::{MapView, Marker};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Embed the map JS at compile time
static LANDSLIDE_MAP_JS: &str = include_str!("../assets/js/landslide-map.js");

fn js_error(value: JsValue) -> LrmError {
    LrmError::Fetch(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// `GET` `url` once and return the body text.
///
/// A non-success status is an error; there is no retry.
pub async fn fetch_text(url: &str) -> Result<String, LrmError> {
    let window = web_sys::window().ok_or_else(|| LrmError::Fetch("no window".to_string()))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response_value.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(LrmError::HttpStatus(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| LrmError::Fetch("response body was not text".to_string()))
}

/// Fetch and decode every monitoring record from `url`.
pub async fn fetch_records(url: &str) -> Result<Vec<Record>, LrmError> {
    let body = fetch_text(url).await?;
    Record::parse_records(&body)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LRM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
pub fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize the map script with a wait-for-Leaflet polling loop. Call once.
///
/// The script's function declarations are evaluated at global scope via an
/// indirect eval once `L` exists, then promoted to `window.*`.
pub fn init_map() {
    let store_js = format!(
        "window.__lrmMapScript = {};",
        serde_json::to_string(LANDSLIDE_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__lrmMapScript);
                    delete window.__lrmMapScript;
                    if (typeof renderLandslideMap !== 'undefined') window.renderLandslideMap = renderLandslideMap;
                    if (typeof destroyLandslideMap !== 'undefined') window.destroyLandslideMap = destroyLandslideMap;
                    window.__lrmMapReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build the JS call that draws `markers` and flies to `view`.
pub fn render_map_call(container_id: &str, view: &MapView, markers: &[Marker]) -> String {
    let view_json = escape_for_js(&serde_json::to_string(view).unwrap_or_default());
    let markers_json = escape_for_js(&serde_json::to_string(markers).unwrap_or_default());
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lrmMapReady &&
                    typeof window.renderLandslideMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderLandslideMap('{container_id}', '{view_json}', '{markers_json}');
                    }} catch(e) {{ console.error('[LRM] renderLandslideMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Draw the current page's markers and move the map to `view`.
///
/// Polls until Leaflet, the map script and the container element all exist.
pub fn render_map(container_id: &str, view: &MapView, markers: &[Marker]) {
    call_js(&render_map_call(container_id, view, markers));
}

/// Tear down the Leaflet map in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyLandslideMap) window.destroyLandslideMap('{}');",
        container_id
    ));
}
