use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = getResponse)]
    fn get_response() -> Result<String, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
    fn render(container: &Element, parameters: &JsValue) -> Result<JsValue, JsValue>;
}

/// Token of the solved challenge, empty when unsolved or the widget never loaded.
pub fn response_token() -> String {
    get_response().unwrap_or_else(|e| {
        warn!("reCAPTCHA unavailable: {:?}", e);
        String::new()
    })
}

/// Renders the widget into `container` explicitly. The api script scans the
/// page once on load, which usually happens before the app has mounted.
pub fn render_widget(container: &Element, site_key: &str) -> bool {
    let parameters = js_sys::Object::new();
    if js_sys::Reflect::set(&parameters, &"sitekey".into(), &site_key.into()).is_err() {
        return false;
    }
    match render(container, &parameters) {
        Ok(_) => true,
        Err(e) => {
            warn!("reCAPTCHA render failed: {:?}", e);
            false
        }
    }
}
