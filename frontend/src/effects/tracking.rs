use js_sys::{Function, Object, Reflect};
use log::info;
use wasm_bindgen::{JsCast, JsValue};

pub const CTA_EVENT: &str = "cta_click";

pub fn cta_event_params(label: &str) -> [(&'static str, String); 2] {
    [
        ("event_category", "engagement".to_string()),
        ("event_label", label.trim().to_string()),
    ]
}

/// Logs a call-to-action click and forwards it to Google Analytics when the
/// page has `gtag` loaded.
pub fn track_cta_click(label: &str) {
    info!("CTA Clicked: {}", label.trim());

    let Some(window) = web_sys::window() else { return };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<Function>() else {
        return;
    };

    let params = Object::new();
    for (key, value) in cta_event_params(label) {
        let _ = Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(&value));
    }
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(CTA_EVENT),
        &params,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_use_engagement_category_and_trimmed_label() {
        let params = cta_event_params("  Book a Free Demo \n");
        assert_eq!(params[0], ("event_category", "engagement".to_string()));
        assert_eq!(params[1], ("event_label", "Book a Free Demo".to_string()));
    }
}
