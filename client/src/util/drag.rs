//! Palette drag payload encoding for `DataTransfer`.
//!
//! The payload travels as JSON under a private MIME type, with the image path
//! also set as `text/plain` so drops from other tabs still carry something
//! usable. Decoding prefers the JSON form.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use canvas::input::DragPayload;

pub const PAYLOAD_MIME: &str = "application/x-sketch-feature";
pub const PLAIN_MIME: &str = "text/plain";

/// JSON text stored under [`PAYLOAD_MIME`].
#[must_use]
pub fn encode_payload(payload: &DragPayload) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

/// Rebuild a payload from the two transfer slots; empty strings count as absent.
#[must_use]
pub fn decode_payload(json: Option<&str>, plain: Option<&str>) -> Option<DragPayload> {
    if let Some(json) = json.filter(|s| !s.is_empty()) {
        if let Ok(payload) = serde_json::from_str::<DragPayload>(json) {
            return Some(payload);
        }
    }
    let path = plain.map(str::trim).filter(|s| !s.is_empty())?;
    Some(DragPayload { source_path: path.to_owned(), alt_text: String::new() })
}

/// Write a payload into a drag event's transfer.
#[cfg(feature = "hydrate")]
pub fn write_payload(ev: &leptos::ev::DragEvent, payload: &DragPayload) {
    let Some(transfer) = ev.data_transfer() else {
        return;
    };
    transfer.set_effect_allowed("copy");
    if let Err(e) = transfer.set_data(PAYLOAD_MIME, &encode_payload(payload)) {
        log::warn!("drag payload not attached: {e:?}");
    }
    if let Err(e) = transfer.set_data(PLAIN_MIME, &payload.source_path) {
        log::warn!("drag path not attached: {e:?}");
    }
}

/// Read a payload from a drop event, if one was attached.
#[cfg(feature = "hydrate")]
pub fn read_payload(ev: &leptos::ev::DragEvent) -> Option<DragPayload> {
    let transfer = ev.data_transfer()?;
    let json = transfer.get_data(PAYLOAD_MIME).ok();
    let plain = transfer.get_data(PLAIN_MIME).ok();
    decode_payload(json.as_deref(), plain.as_deref())
}
