//! Device Geolocation
//!
//! One-shot `navigator.geolocation.getCurrentPosition` wrapped in a future.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::GeolocationError;
use crate::models::LatLng;

/// Query the browser for the current position once
pub async fn current_position() -> Result<LatLng, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unavailable)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unavailable)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_call = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        if let Err(err) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            let _ = reject_call.call1(&JsValue::NULL, &err);
        }
    });

    let position: web_sys::Position = JsFuture::from(promise)
        .await
        .map_err(position_error)?
        .unchecked_into();
    let coords = position.coords();
    Ok(LatLng::new(coords.latitude(), coords.longitude()))
}

// GeolocationPositionError is read structurally; its constructor name
// differs between browsers.
fn position_error(err: JsValue) -> GeolocationError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default() as u16;
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    GeolocationError::Failed { code, message }
}
