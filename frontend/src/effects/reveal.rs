use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::effects::observer::{query_all, OneShotObserver};

pub const REVEAL_SELECTOR: &str = ".problem-card, .outcome-card, .who-card, .curriculum-card, .video-card, .testimonial-card, .facilitator-card";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const STAGGER_MS: u32 = 100;

pub fn reveal_delay_ms(batch_index: usize) -> u32 {
    (batch_index as u32).saturating_mul(STAGGER_MS)
}

fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();
        for (property, value) in styles {
            let _ = style.set_property(property, value);
        }
    }
}

/// Cards start faded and shifted down, and slide in the first time they
/// scroll into view, staggered within each batch.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let cards = query_all(REVEAL_SELECTOR);
            for card in &cards {
                set_styles(card, &[
                    ("opacity", "0"),
                    ("transform", "translateY(30px)"),
                    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
                ]);
            }

            let observer = OneShotObserver::observe(&cards, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |card, index| {
                Timeout::new(reveal_delay_ms(index), move || {
                    set_styles(&card, &[("opacity", "1"), ("transform", "translateY(0)")]);
                })
                .forget();
            });

            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_batch_position() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(1), 100);
        assert_eq!(reveal_delay_ms(6), 600);
    }

    #[test]
    fn selector_covers_every_card_kind() {
        for class in ["problem", "outcome", "who", "curriculum", "video", "testimonial", "facilitator"] {
            assert!(REVEAL_SELECTOR.contains(&format!(".{}-card", class)), "{}", class);
        }
    }
}
