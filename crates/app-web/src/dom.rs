use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document.create_element("div").map_err(js_error)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
