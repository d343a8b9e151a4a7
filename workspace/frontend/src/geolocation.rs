use common::{GeoPosition, LocationError, LocationRequestOptions};
use js_sys::{Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError, PositionOptions, window};

pub fn is_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w.navigator(), &JsValue::from_str("geolocation")).unwrap_or(false))
        .unwrap_or(false)
}

/// Asks the browser for a single position fix.
///
/// `getCurrentPosition` is wrapped in a promise so callers can simply await it;
/// nothing is left registered once the promise settles.
pub async fn current_position(options: LocationRequestOptions) -> Result<GeoPosition, LocationError> {
    let geolocation = window()
        .ok_or(LocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| LocationError::Unsupported)?;

    let position_options = PositionOptions::new();
    position_options.set_enable_high_accuracy(options.high_accuracy);
    position_options.set_timeout(options.timeout_ms);
    position_options.set_maximum_age(options.maximum_age_ms);

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &position_options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &e);
        }
    });

    let value = JsFuture::from(promise).await.map_err(position_error)?;
    let position: Position = value
        .dyn_into()
        .map_err(|_| LocationError::Platform("unexpected position object".to_string()))?;
    let coords = position.coords();

    Ok(GeoPosition {
        lat: coords.latitude(),
        lng: coords.longitude(),
    })
}

fn position_error(value: JsValue) -> LocationError {
    match value.dyn_into::<PositionError>() {
        Ok(err) => LocationError::from_code(err.code(), err.message()),
        Err(other) => LocationError::Platform(
            other.as_string().unwrap_or_else(|| format!("{:?}", other)),
        ),
    }
}
