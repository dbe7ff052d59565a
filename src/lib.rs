pub mod cell;
pub mod event;
pub mod grid;
pub mod recommend;
pub mod time;
pub mod view;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Deserializes an event-detail payload and returns the derived
/// schedule view across the wasm boundary.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn schedule_view(event: JsValue) -> Result<JsValue, JsValue> {
    let event: event::EventDetail =
        serde_wasm_bindgen::from_value(event).map_err(JsValue::from)?;

    serde_wasm_bindgen::to_value(&event.schedule_view()).map_err(JsValue::from)
}
