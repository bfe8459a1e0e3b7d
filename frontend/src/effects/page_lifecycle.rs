use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub const LOADED_CLASS: &str = "loaded";
pub const TOUCH_CLASS: &str = "touch-device";

fn is_touch_device(window: &web_sys::Window) -> bool {
    Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

/// Marks `<body>` as loaded, and as a touch device where hover effects
/// should be toned down.
#[hook]
pub fn use_page_lifecycle() {
    use_effect_with_deps(
        move |_| {
            let body = web_sys::window().and_then(|window| {
                let touch = is_touch_device(&window);
                window.document().and_then(|d| d.body()).map(|body| (body, touch))
            });
            if let Some((body, touch)) = &body {
                let classes = body.class_list();
                let _ = classes.add_1(LOADED_CLASS);
                if *touch {
                    let _ = classes.add_1(TOUCH_CLASS);
                }
            }
            move || {
                if let Some((body, _)) = body {
                    let _ = body.class_list().remove_2(LOADED_CLASS, TOUCH_CLASS);
                }
            }
        },
        (),
    );
}
