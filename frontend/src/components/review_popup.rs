use log::warn;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config;

pub const POPUP_NAME: &str = "GoogleReviews";
pub const POPUP_WIDTH: f64 = 800.0;
pub const POPUP_HEIGHT: f64 = 600.0;

/// `window.open` feature string for a chrome-less window centered on a
/// screen of the given size.
pub fn popup_features(screen_width: f64, screen_height: f64) -> String {
    let left = (screen_width - POPUP_WIDTH) / 2.0;
    let top = (screen_height - POPUP_HEIGHT) / 2.0;
    format!(
        "width={},height={},top={},left={},resizable=yes,scrollbars=yes,status=no,toolbar=no,menubar=no,location=no",
        POPUP_WIDTH, POPUP_HEIGHT, top, left
    )
}

pub fn activates_popup(key: &str) -> bool {
    key == "Enter" || key == " "
}

fn open_reviews_popup() {
    let Some(window) = web_sys::window() else { return };
    let (width, height) = window
        .screen()
        .ok()
        .and_then(|screen| Some((screen.width().ok()?, screen.height().ok()?)))
        .unwrap_or((POPUP_WIDTH as i32, POPUP_HEIGHT as i32));

    let features = popup_features(width as f64, height as f64);
    if let Err(e) = window.open_with_url_and_target_and_features(config::REVIEWS_URL, POPUP_NAME, &features) {
        warn!("Could not open reviews popup: {:?}", e);
    }
}

#[function_component(ReviewsButton)]
pub fn reviews_button() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        open_reviews_popup();
    });
    let onkeydown = Callback::from(|e: KeyboardEvent| {
        if activates_popup(&e.key()) {
            e.prevent_default();
            open_reviews_popup();
        }
    });

    html! {
        <div id="googleReviewsBtn" class="google-reviews-badge" role="button" tabindex="0" {onclick} {onkeydown}>
            <span class="stars">{"★★★★★"}</span>
            <span>{"Read our parent reviews on Google"}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered() {
        assert_eq!(
            popup_features(1366.0, 768.0),
            "width=800,height=600,top=84,left=283,resizable=yes,scrollbars=yes,status=no,toolbar=no,menubar=no,location=no"
        );
    }

    #[test]
    fn odd_screens_keep_fractional_offsets() {
        assert!(popup_features(1365.0, 900.0).contains("left=282.5"));
    }

    #[test]
    fn enter_and_space_open_the_popup() {
        assert!(activates_popup("Enter"));
        assert!(activates_popup(" "));
        assert!(!activates_popup("Tab"));
        assert!(!activates_popup("Escape"));
    }
}
