#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use app_core::{validate_fixtures, AppEvent, EventBus};

mod dom;
mod view;

/// Element id of the mount anchor the host document must provide.
const MOUNT_ANCHOR_ID: &str = "app";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    // Startup is all-or-nothing: any failure surfaces as a thrown JsValue
    // and the host sees an unmounted page.
    init().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The anchor is a startup precondition, checked before anything else
    // (including the fixtures) is touched. There is no recovery path.
    let anchor = document
        .get_element_by_id(MOUNT_ANCHOR_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{MOUNT_ANCHOR_ID} mount anchor"))?;

    validate_fixtures()?;

    // One bus for the whole process, injected into every consumer.
    let bus = Rc::new(EventBus::new());
    bus.on(|event| match event {
        AppEvent::ViewMounted { marker_count } => {
            log::info!("[view] mounted with {marker_count} markers");
        }
        AppEvent::MarkerSelected { index } => {
            log::info!("[view] marker {index} selected");
        }
    });

    view::mount(&document, &anchor, bus)?;
    Ok(())
}
