//! Formatting utilities for file sizes and dates.

use crate::models::{Modified, Timestamp};

/// Units above bytes, in 1024 steps. TB is the ceiling.
const SIZE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a byte count for display (e.g., "512 B", "1.5 KB", "3.2 GB").
///
/// Values below 1024 in magnitude are shown as whole bytes. Larger values
/// are scaled by 1024 until they drop below 1024 or reach TB, and carry
/// exactly one decimal.
pub fn human_size(bytes: i64) -> String {
    const THRESH: f64 = 1024.0;

    if bytes.unsigned_abs() < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    loop {
        value /= THRESH;
        if value.abs() < THRESH || unit == SIZE_UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }

    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Format a modification time as numeric date and time
/// (year, month, day, hour, minute, second).
///
/// In the browser this uses `Date.toLocaleString` with `locale`, so field
/// order and separators follow the locale. Elsewhere it renders
/// `dd/mm/yyyy HH:MM:SS`. Times carrying an offset are shown in the
/// viewer's zone. Unparseable values are shown as sent.
pub fn format_modified(
    modified: &Modified,
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))] locale: &str,
) -> String {
    let Some(timestamp) = modified.timestamp() else {
        return modified.raw().to_string();
    };

    #[cfg(target_arch = "wasm32")]
    if let Some(text) = locale_string(js_date(&timestamp), locale) {
        return text;
    }

    const FORMAT: &str = "%d/%m/%Y %H:%M:%S";
    match timestamp {
        Timestamp::Local(naive) => naive.format(FORMAT).to_string(),
        Timestamp::Absolute(utc) => utc.with_timezone(&chrono::Local).format(FORMAT).to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn js_date(timestamp: &Timestamp) -> js_sys::Date {
    use chrono::{Datelike, Timelike};

    match timestamp {
        // Wall-clock times; build the Date in local time.
        Timestamp::Local(naive) => js_sys::Date::new_with_year_month_day_hr_min_sec(
            naive.year() as u32,
            naive.month0() as i32,
            naive.day() as i32,
            naive.hour() as i32,
            naive.minute() as i32,
            naive.second() as i32,
        ),
        Timestamp::Absolute(utc) => {
            js_sys::Date::new(&(utc.timestamp_millis() as f64).into())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_string(date: js_sys::Date, locale: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    for (field, style) in [
        ("year", "numeric"),
        ("month", "2-digit"),
        ("day", "2-digit"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
        ("second", "2-digit"),
    ] {
        js_sys::Reflect::set(&options, &field.into(), &style.into()).ok()?;
    }

    let text = date.to_locale_string(locale, &JsValue::from(options));
    text.as_string().filter(|s| !s.is_empty() && s != "Invalid Date")
}

/// Format the current local time as `HH:MM:SS`.
pub fn clock_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
