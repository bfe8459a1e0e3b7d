use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::observer::query_all;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const STICKY_BAR_OFFSET: f64 = 200.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
const ANCHOR_GAP: f64 = 20.0;
const PARALLAX_SELECTOR: &str = ".hero-circle";

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn sticky_bar_visible(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height - STICKY_BAR_OFFSET
}

/// Circle `index` drifts at a tenth of the scroll speed per layer.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (index as f64 + 1.0) * 0.1
}

/// Document offset that puts `target` just below the fixed navbar.
pub fn scroll_target_top(rect_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    rect_top + scroll_y - navbar_height - ANCHOR_GAP
}

pub fn current_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn offset_height(node: &NodeRef) -> f64 {
    node.cast::<HtmlElement>().map(|el| el.offset_height() as f64).unwrap_or(0.0)
}

/// Sticky call-to-action visibility, measured against the hero section.
///
/// The hero height is re-measured after resizing settles; every resize
/// replaces (and so cancels) the pending measurement.
#[hook]
pub fn use_sticky_bar(hero: NodeRef) -> bool {
    let visible = use_state_eq(|| false);
    let hero_height = use_mut_ref(|| 0.0_f64);
    let pending_resize = use_mut_ref(|| None::<Timeout>);

    {
        let hero = hero.clone();
        let hero_height = hero_height.clone();
        use_effect_with_deps(
            move |_| {
                *hero_height.borrow_mut() = offset_height(&hero);
                || ()
            },
            (),
        );
    }

    {
        let visible = visible.clone();
        let hero_height = hero_height.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(sticky_bar_visible(current_scroll_y(), *hero_height.borrow()));
        });
    }

    {
        let visible = visible.clone();
        use_event_with_window("resize", move |_: Event| {
            let hero = hero.clone();
            let hero_height = hero_height.clone();
            let visible = visible.clone();
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                let height = offset_height(&hero);
                *hero_height.borrow_mut() = height;
                visible.set(sticky_bar_visible(current_scroll_y(), height));
            });
            *pending_resize.borrow_mut() = Some(timeout);
        });
    }

    *visible
}

#[hook]
pub fn use_parallax() {
    let circles = use_mut_ref(Vec::<Element>::new);

    {
        let circles = circles.clone();
        use_effect_with_deps(
            move |_| {
                *circles.borrow_mut() = query_all(PARALLAX_SELECTOR);
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| {
        let scroll_y = current_scroll_y();
        for (index, circle) in circles.borrow().iter().enumerate() {
            if let Some(circle) = circle.dyn_ref::<HtmlElement>() {
                let transform = format!("translateY({}px)", parallax_offset(scroll_y, index));
                let _ = circle.style().set_property("transform", &transform);
            }
        }
    });
}

/// Intercepts clicks on `#fragment` links and glides to the target instead
/// of jumping, leaving room for the fixed navbar.
#[hook]
pub fn use_smooth_scroll() {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(link) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if href == "#" {
            return;
        }

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        let Ok(Some(target)) = document.query_selector(&href) else {
            return;
        };
        e.prevent_default();

        let navbar_height = document
            .get_element_by_id("navbar")
            .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
            .map(|nav| nav.offset_height() as f64)
            .unwrap_or(0.0);
        let top = scroll_target_top(
            target.get_bounding_client_rect().top(),
            current_scroll_y(),
            navbar_height,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_fifty_pixels() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn sticky_bar_appears_before_hero_ends() {
        assert!(!sticky_bar_visible(0.0, 800.0));
        assert!(!sticky_bar_visible(600.0, 800.0));
        assert!(sticky_bar_visible(601.0, 800.0));
        // A hero shorter than the offset shows the bar right away.
        assert!(sticky_bar_visible(0.0, 150.0));
    }

    #[test]
    fn parallax_layers_move_faster_with_depth() {
        assert_eq!(parallax_offset(100.0, 0), 10.0);
        assert_eq!(parallax_offset(100.0, 1), 20.0);
        assert!((parallax_offset(100.0, 2) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(0.0, 5), 0.0);
    }

    #[test]
    fn anchor_target_clears_navbar() {
        // Target 300px below the viewport top, page already scrolled 1000px, 80px navbar.
        assert_eq!(scroll_target_top(300.0, 1000.0, 80.0), 1200.0);
        assert_eq!(scroll_target_top(-50.0, 400.0, 0.0), 330.0);
    }
}
