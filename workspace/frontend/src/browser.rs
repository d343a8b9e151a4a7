//! Thin wrappers over the few `window` APIs the dashboard touches.

use chrono::NaiveDate;
#[cfg(target_arch = "wasm32")]
use chrono::Datelike;
use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
use web_sys::window;

pub fn local_storage_item(key: &str) -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Full reload, the only way to get some browsers to show the permission prompt again.
pub fn reload_page() {
    let Some(window) = window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("Page reload failed: {:?}", e);
    }
}

/// Non-cryptographic RNG seeded from `Math.random()`.
pub fn seeded_rng() -> SmallRng {
    let seed = js_sys::Math::random() * u64::MAX as f64;
    SmallRng::seed_from_u64(seed as u64)
}

/// Formats a calendar date with the browser's locale rules.
#[cfg(target_arch = "wasm32")]
pub fn format_locale_date(date: NaiveDate) -> String {
    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Outside the browser there is no `Intl`; use the fixed month/day/year form.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_locale_date(date: NaiveDate) -> String {
    common::format_date_fallback(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_date_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_locale_date(date), "03/01/2024");
    }
}
