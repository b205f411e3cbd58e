// File: src/counter.rs
// Purpose: Count-up animation for statistics

use crate::observe;
use gloo_timers::future::TimeoutFuture;
use greencape_forms::MotionConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

pub const COUNTER_SELECTOR: &str = ".counter";
pub const TARGET_ATTRIBUTE: &str = "data-target";
pub const COUNTED_CLASS: &str = "counted";

/// Read a `data-target` the way a lenient integer parse would: leading
/// whitespace and a `+` are accepted, trailing garbage is ignored.
pub fn parse_target(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Render with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Values shown on each tick, ending exactly on the target
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(steps.max(1)),
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

fn animate(element: Element, target: u64, motion: &MotionConfig) {
    let interval = crate::timers::millis(motion.counter_interval());
    let frames = CountUp::new(target, motion.counter_steps);
    spawn_local(async move {
        for value in frames {
            TimeoutFuture::new(interval).await;
            element.set_text_content(Some(&format_thousands(value)));
        }
    });
}

/// Start each counter once it is half visible
pub fn init(document: &Document, motion: &MotionConfig) -> usize {
    let Ok(counters) = document.query_selector_all(COUNTER_SELECTOR) else {
        return 0;
    };
    if counters.length() == 0 {
        return 0;
    }

    let settings = motion.clone();
    let observed = observe(
        &counters,
        motion.counter_threshold,
        None,
        move |element: Element| {
            if element.class_list().contains(COUNTED_CLASS) {
                return;
            }
            let raw = element.get_attribute(TARGET_ATTRIBUTE).unwrap_or_default();
            match parse_target(&raw) {
                Some(target) => animate(element.clone(), target, &settings),
                None => tracing::warn!("Counter has non-numeric {}: {:?}", TARGET_ATTRIBUTE, raw),
            }
            if let Err(e) = element.class_list().add_1(COUNTED_CLASS) {
                tracing::warn!("Failed to mark counter {}: {:?}", COUNTED_CLASS, e);
            }
        },
    );
    tracing::debug!("Observing {} counters", observed);
    observed
}
