//! Browser fetch and typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js render functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.

use sie_utils::error::FetchError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// D3 is pulled from a CDN the first time charts are initialised.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth.js");

/// GET a URL with the browser's `fetch` and return the body as text.
///
/// Network failures and non-success statuses become a [`FetchError`]; there is no retry.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::new(url, "no window object"))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::new(url, format!("{:?}", e)))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| FetchError::new(url, "fetch did not return a Response"))?;
    if !response.ok() {
        return Err(FetchError::new(url, format!("HTTP {}", response.status())));
    }
    let text_promise = response
        .text()
        .map_err(|e| FetchError::new(url, format!("{:?}", e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::new(url, format!("{:?}", e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| FetchError::new(url, "response body is not text"))?;
    log::info!("[SIE Debug] fetch: {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SIE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject D3 (if needed) and initialise chart scripts once it is ready.
///
/// The chart JS files define functions via `function` declarations. To make them
/// globally accessible they are evaluated at global scope once D3 is ready, then
/// explicitly promoted to `window.*`. Calling this more than once is a no-op.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, DATA_TABLE_JS, CHOROPLETH_JS].join("\n");

    let store_js = format!(
        "if (!window.__sieChartsRequested) {{ window.__sieChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__sieChartsRequested) return;
            window.__sieChartsRequested = true;
            if (typeof d3 === 'undefined' && !document.getElementById('sie-d3')) {{
                var script = document.createElement('script');
                script.id = 'sie-d3';
                script.src = '{D3_CDN_URL}';
                document.head.appendChild(script);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__sieChartScripts);
                    delete window.__sieChartScripts;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof renderChoropleth !== 'undefined') window.renderChoropleth = renderChoropleth;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof moveTooltip !== 'undefined') window.moveTooltip = moveTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__sieChartsReady = true;
                    console.log('SIE charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until scripts are ready and the container exists, then call `window.<function>`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sieChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SIE] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the county data table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Render the choropleth map from a GeoJSON FeatureCollection whose feature
/// properties carry `fill_color`, `color`, `weight`, `fill_opacity` and `tooltip`.
pub fn render_choropleth(container_id: &str, geojson: &str, config_json: &str) {
    render_when_ready("renderChoropleth", container_id, geojson, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
