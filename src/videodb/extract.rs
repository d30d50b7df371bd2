//! Optional scalar field extraction
//!
//! Each extractor reads the first direct child with a given tag and never
//! fails: a missing tag or a value of the wrong shape comes back as `None`.

use crate::xml::{element_text, find_child};
use chrono::TimeDelta;
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::Node;

/// Runtime written as "<minutes> min", anchored at the start
static RUNTIME_MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+) min").unwrap());

/// Text of the child `tag`, verbatim (an empty tag yields `Some("")`)
pub fn get_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag).map(element_text)
}

/// Child `tag` as a non-negative integer
///
/// Anything other than a plain run of ASCII digits is absent, including
/// negative numbers, decimals and values too large for `u32`.
pub fn get_int(node: Node<'_, '_>, tag: &str) -> Option<u32> {
    let text = get_text(node, tag)?;
    if !is_unsigned_int(&text) {
        return None;
    }
    text.parse().ok()
}

/// Child `tag` as a running time in whole minutes
///
/// Accepts a bare minute count ("149") or a leading "<digits> min" ("63 min").
/// Other text is logged and treated as absent.
pub fn get_duration(node: Node<'_, '_>, tag: &str) -> Option<TimeDelta> {
    let text = get_text(node, tag)?;
    if text.is_empty() {
        return None;
    }

    let minutes = if is_unsigned_int(&text) {
        text.parse::<u32>().ok()
    } else {
        RUNTIME_MINUTES_RE
            .captures(&text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
    };

    match minutes {
        Some(minutes) => TimeDelta::try_minutes(i64::from(minutes)),
        None => {
            log::warn!("Unrecognised <{}> value: {:?}", tag, text);
            None
        }
    }
}

fn is_unsigned_int(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
