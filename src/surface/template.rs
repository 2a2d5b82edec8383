//! The fixed page skeleton.
//!
//! Built exactly once at startup; the state machine only ever writes into
//! the time, date and indicator nodes it declares.

use crate::config::TemplateConfig;

/// Time node content before the first tick.
pub const TIME_PLACEHOLDER: &str = "00:00:00";

/// Date node content before the first tick.
pub const DATE_PLACEHOLDER: &str = "Loading...";

const DECORATION_DOTS: usize = 5;

const BRAND_ICON_PATH: &str = "M512 0C229.12 0 0 229.12 0 512c0 226.56 146.56 418.56 350.08 485.76 25.6 4.48 35.2-10.88 35.2-24.32 0-12.16-0.64-52.48-0.64-95.36-128.64 23.68-161.92-31.36-172.16-60.16-5.76-14.72-30.72-60.16-52.48-72.32-17.92-9.6-43.52-33.28-0.64-33.92 40.32-0.64 69.12 37.12 78.72 52.48 46.08 77.44 119.68 55.68 149.12 42.24 4.48-33.28 17.92-55.68 32.64-68.48-113.92-12.8-233.216-56.96-233.216-252.8 0-55.68 19.84-101.76 52.48-137.6-5.12-12.8-23.04-65.28 5.12-135.68 0 0 42.88-13.44 140.8 52.48 40.96-11.52 84.48-17.28 128-17.28 43.52 0 87.04 5.76 128 17.28 97.92-66.56 140.8-52.48 140.8-52.48 28.16 70.4 10.24 122.88 5.12 135.68 32.64 35.84 52.48 81.28 52.48 137.6 0 196.48-119.68 240-233.6 252.8 18.56 16 34.56 46.72 34.56 94.72 0 68.48-0.64 123.52-0.64 140.8 0 13.44 9.6 29.44 35.2 24.32C877.44 930.56 1024 738.56 1024 512 1024 229.12 794.88 0 512 0z";

/// Renders the skeleton markup.
pub fn markup(config: &TemplateConfig, indicator_placeholder: &str) -> String {
    format!(
        r#"<div class="content">
    <div class="background-pattern"></div>
    {decorations}
    <div class="main-container">
        <div class="github-container">
            {icon}
            <div class="github-text">{brand}</div>
        </div>
        <div class="time-section">
            <div class="time-container">{TIME_PLACEHOLDER}</div>
            <div class="date-container">{DATE_PLACEHOLDER}</div>
        </div>
    </div>
    <div class="footer-info">
        <div class="theme-indicator">{prefix}<span id="current-theme">{indicator_placeholder}</span></div>
    </div>
</div>"#,
        decorations = decorations(),
        icon = brand_icon(),
        brand = escape(&config.brand_text),
        prefix = escape(&config.indicator_prefix),
        indicator_placeholder = escape(indicator_placeholder),
    )
}

fn brand_icon() -> String {
    format!(
        r#"<svg class="github-icon" viewBox="0 0 1024 1024" xmlns="http://www.w3.org/2000/svg"><path d="{BRAND_ICON_PATH}"/></svg>"#
    )
}

fn decorations() -> String {
    let dots: String = (1..=DECORATION_DOTS)
        .map(|i| format!(r#"<div class="dot dot-{i}"></div>"#))
        .collect();
    format!(r#"<div class="decoration-dots">{dots}</div>"#)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_placeholders_and_dots() {
        let html = markup(&TemplateConfig::default(), "Auto");

        assert!(html.contains(r#"<div class="time-container">00:00:00</div>"#));
        assert!(html.contains(r#"<div class="date-container">Loading...</div>"#));
        assert!(html.contains(r#"<span id="current-theme">Auto</span>"#));
        assert!(html.contains("dot-5"));
        assert!(!html.contains("dot-6"));
        assert!(html.contains("github-icon"));
    }

    #[test]
    fn config_text_is_escaped() {
        let config = TemplateConfig {
            brand_text: "<b>&</b>".to_string(),
            ..TemplateConfig::default()
        };

        assert!(markup(&config, "Auto").contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }
}
