use web_sys::Element;
use yew::prelude::*;

use crate::effects::observer::{query_all, OneShotObserver};

const VIDEO_SELECTOR: &str = ".video-wrapper";
const VIDEO_THRESHOLD: f64 = 0.25;

/// Moves `data-src` to `src` on the wrapper's iframe, so embeds only start
/// loading once a quarter of them is on screen.
fn load_frame(wrapper: &Element) {
    let Ok(Some(frame)) = wrapper.query_selector("iframe") else {
        return;
    };
    if let Some(src) = frame.get_attribute("data-src") {
        let _ = frame.set_attribute("src", &src);
        let _ = frame.remove_attribute("data-src");
    }
}

#[hook]
pub fn use_lazy_videos() {
    use_effect_with_deps(
        move |_| {
            let wrappers = query_all(VIDEO_SELECTOR);
            let observer = OneShotObserver::observe(&wrappers, VIDEO_THRESHOLD, None, |wrapper, _| {
                load_frame(&wrapper);
            });
            move || drop(observer)
        },
        (),
    );
}
