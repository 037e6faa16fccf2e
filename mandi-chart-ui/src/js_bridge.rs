//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart and Leaflet map functions live in `assets/js/*.js` and
//! are evaluated as globals (no ES modules), then exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call
//! those globals. D3 and Leaflet themselves arrive via `<script>` tags, so
//! every call site polls until the relevant library and the target DOM
//! container exist.

// Embed all bridge JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SERIES_CHART_JS: &str = include_str!("../assets/js/series-chart.js");
static STORE_MAP_JS: &str = include_str!("../assets/js/store-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('mandi JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the bridge scripts with a wait-for-D3 polling loop.
///
/// The bridge JS files define functions like `renderSeriesChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), they are evaluated
/// at global scope via indirect `eval()` once D3 is ready, and each
/// function is then explicitly promoted to `window.*`.
pub fn init_bridge() {
    let all_js = [TOOLTIP_JS, SERIES_CHART_JS, STORE_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__mandiBridgeScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__mandiBridgeScripts);
                    delete window.__mandiBridgeScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderSeriesChart !== 'undefined') window.renderSeriesChart = renderSeriesChart;
                    if (typeof destroySeriesChart !== 'undefined') window.destroySeriesChart = destroySeriesChart;
                    if (typeof renderStoreMap !== 'undefined') window.renderStoreMap = renderStoreMap;
                    if (typeof destroyStoreMap !== 'undefined') window.destroyStoreMap = destroyStoreMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__mandiBridgeReady = true;
                    console.log('mandi bridge initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a fixed price series as a line chart.
///
/// Uses a polling loop to wait for D3.js to load, the bridge scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_series_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mandiBridgeReady &&
                    typeof window.renderSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSeriesChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[mandi] renderSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the store map with one marker + popup per store.
///
/// Polls for Leaflet (loaded via its own `<script>` tag) in addition to
/// the bridge scripts and the container element.
pub fn render_store_map(container_id: &str, stores_json: &str, config_json: &str) {
    let escaped_stores = stores_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mandiBridgeReady &&
                    typeof L !== 'undefined' &&
                    typeof window.renderStoreMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderStoreMap('{container_id}', '{escaped_stores}', '{escaped_config}');
                    }} catch(e) {{ console.error('[mandi] renderStoreMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Tear down the Leaflet map owning the given container, if any.
pub fn destroy_store_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyStoreMap !== 'undefined') window.destroyStoreMap('{}');",
        container_id
    ));
}
