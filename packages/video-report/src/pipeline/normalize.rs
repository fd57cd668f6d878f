//! Field normalization - raw extractor metadata into canonical records.
//!
//! Extractors disagree on field names across platforms and versions. Every
//! canonical field is resolved from an ordered list of candidate paths; the
//! first usable candidate wins. Coercion never fails: anything unreadable
//! becomes the field's default.

use serde_json::{Map, Number, Value};

use crate::types::{RawMetadata, VideoRecord};

/// A path of object keys, outermost first.
pub type FieldPath = &'static [&'static str];

pub const DEFAULT_TITLE: &str = "No Title";
pub const UNKNOWN: &str = "Unknown";

/// Follower candidates in priority order. Top-level keys come first, then
/// the same counts nested one level under known parent objects.
pub const FOLLOWER_PATHS: &[FieldPath] = &[
    &["channel_follower_count"],
    &["uploader_follower_count"],
    &["follower_count"],
    &["followers"],
    &["channel", "follower_count"],
    &["channel", "followers"],
    &["channel", "channel_follower_count"],
    &["uploader", "follower_count"],
    &["uploader", "followers"],
    &["uploader", "channel_follower_count"],
    &["author", "follower_count"],
    &["author", "followers"],
    &["author", "channel_follower_count"],
    // Apify TikTok scraper
    &["authorMeta", "fans"],
];

const TITLE_PATHS: &[FieldPath] = &[&["title"], &["fulltitle"], &["text"]];
const DISPLAY_NAME_PATHS: &[FieldPath] = &[&["uploader"], &["authorMeta", "nickName"]];
const USERNAME_PATHS: &[FieldPath] = &[&["uploader_id"], &["authorMeta", "name"]];
const VIEW_PATHS: &[FieldPath] = &[&["view_count"], &["playCount"]];
const LIKE_PATHS: &[FieldPath] = &[&["like_count"], &["diggCount"]];
const SHARE_PATHS: &[FieldPath] = &[&["repost_count"], &["shareCount"]];

/// Coerce a loosely-typed value to an integer, returning `default` on failure.
///
/// Integers pass through, finite floats truncate toward zero, booleans map to
/// 0/1, and strings parse as base-10 integers after trimming (an optional sign
/// and single `_` separators between digits are accepted, and so are decimal
/// digits from other scripts such as Arabic-Indic). Null, arrays, objects,
/// and anything out of `i64` range yield `default`.
pub fn coerce_int(value: Option<&Value>, default: i64) -> i64 {
    value.and_then(try_coerce_int).unwrap_or(default)
}

fn try_coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => number_to_i64(n),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

fn number_to_i64(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return None;
    }
    let f = n.as_f64()?.trunc();
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }

    let mut cleaned = String::with_capacity(digits.len() + 1);
    if negative {
        cleaned.push('-');
    }
    for c in digits.chars().filter(|c| *c != '_') {
        let d = decimal_digit(c)?;
        cleaned.push(char::from(b'0' + d as u8));
    }
    cleaned.parse().ok()
}

/// Code points of the zero digit in each BMP run of Unicode decimal digits.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Value of a decimal digit from any script in [`DIGIT_ZEROS`].
fn decimal_digit(c: char) -> Option<u32> {
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|zero| (**zero..**zero + 10).contains(&cp))
        .map(|zero| cp - zero)
}

/// Follow `path` through nested objects.
pub fn lookup<'a>(map: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = map.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Resolve the uploader's follower count.
///
/// Walks [`FOLLOWER_PATHS`] in order and returns the first candidate that
/// coerces to a strictly positive integer. Zero is treated as "not reported",
/// so a spurious top-level `0` falls through to nested candidates. Returns
/// `None` when nothing positive is found.
pub fn resolve_followers(map: &Map<String, Value>) -> Option<u64> {
    FOLLOWER_PATHS.iter().find_map(|path| {
        let count = coerce_int(lookup(map, path), 0);
        (count > 0).then_some(count as u64)
    })
}

/// Render a follower count for display.
///
/// Unknown or zero renders as "N/A"; counts from 1,000 and 1,000,000 up are
/// scaled to one decimal with a K or M suffix.
pub fn format_followers(followers: Option<u64>) -> String {
    match followers {
        None | Some(0) => "N/A".to_string(),
        Some(n) if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1_000_000.0),
        Some(n) if n >= 1_000 => format!("{:.1}K", n as f64 / 1_000.0),
        Some(n) => n.to_string(),
    }
}

/// Build a canonical record from raw metadata.
///
/// Returns `None` when the metadata is null, not an object, or an empty
/// object; the caller skips the URL entirely in that case.
pub fn build_record(metadata: &RawMetadata, url: &str) -> Option<VideoRecord> {
    let map = metadata.as_object().filter(|m| !m.is_empty())?;

    let username = text_field(map, USERNAME_PATHS);
    let display_name = text_field(map, DISPLAY_NAME_PATHS).or_else(|| username.clone());

    Some(VideoRecord {
        title: text_field(map, TITLE_PATHS).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        display_name: display_name.unwrap_or_else(|| UNKNOWN.to_string()),
        username: username.unwrap_or_else(|| UNKNOWN.to_string()),
        views: count_field(map, VIEW_PATHS),
        likes: count_field(map, LIKE_PATHS),
        shares: count_field(map, SHARE_PATHS),
        followers: resolve_followers(map),
        source_url: url.to_string(),
    })
}

/// First candidate holding a non-blank string (or a number, rendered as text).
fn text_field(map: &Map<String, Value>, paths: &[FieldPath]) -> Option<String> {
    paths.iter().find_map(|path| match lookup(map, path)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First candidate that coerces to an integer, clamped at zero.
fn count_field(map: &Map<String, Value>, paths: &[FieldPath]) -> u64 {
    paths
        .iter()
        .find_map(|path| lookup(map, path).and_then(try_coerce_int))
        .map_or(0, |n| n.max(0) as u64)
}
