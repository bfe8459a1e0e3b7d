use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::effects::observer::{query_all, OneShotObserver};

pub const COUNTER_SELECTOR: &str = ".stat-number[data-count]";
const COUNTER_THRESHOLD: f64 = 0.5;
const DURATION_MS: f64 = 2000.0;
const FRAME_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterFrame {
    Running(i64),
    Done(i64),
}

/// Counts from zero to `target` in equal steps, about 60 per second.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            step: target as f64 / (DURATION_MS / FRAME_MS as f64),
            current: 0.0,
        }
    }

    pub fn advance(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as i64)
        } else {
            CounterFrame::Done(self.target)
        }
    }
}

/// Leading integer of a `data-count` value, the way `parseInt` reads it.
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

fn run(counter: Element, target: i64) {
    spawn_local(async move {
        let mut animation = CounterAnimation::new(target);
        loop {
            match animation.advance() {
                CounterFrame::Running(value) => {
                    counter.set_text_content(Some(&value.to_string()));
                    TimeoutFuture::new(FRAME_MS).await;
                }
                CounterFrame::Done(value) => {
                    counter.set_text_content(Some(&value.to_string()));
                    break;
                }
            }
        }
    });
}

#[hook]
pub fn use_counter_animation() {
    use_effect_with_deps(
        move |_| {
            let counters = query_all(COUNTER_SELECTOR);
            let observer = OneShotObserver::observe(&counters, COUNTER_THRESHOLD, None, |counter, _| {
                let target = counter.get_attribute("data-count").as_deref().and_then(parse_count);
                if let Some(target) = target {
                    run(counter, target);
                }
            });
            move || drop(observer)
        },
        (),
    );
}
