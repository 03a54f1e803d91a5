use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, Storage, Window};

use shared::types::Timestamp;
use shared::utils::format_date_time;

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_body() -> Option<HtmlElement> {
    get_document().and_then(|d| d.body())
}

pub fn get_local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|d| d.get_element_by_id(id))
}

pub fn get_input_value(id: &str) -> String {
    get_element_by_id(id)
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn clear_input_value(id: &str) {
    if let Some(element) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        element.set_value("");
    }
}

pub fn value_from_target(target: Option<EventTarget>) -> String {
    target
        .map(|target| get_value_from_input(JsValue::from(target)))
        .unwrap_or_default()
}

/// Local wall-clock rendering of a server timestamp.
pub fn local_date_time(date: Timestamp) -> String {
    let js_date = js_sys::Date::new(&JsValue::from_f64(date as f64));
    format_date_time(
        js_date.get_full_year() as i32,
        js_date.get_month() + 1,
        js_date.get_date(),
        js_date.get_hours(),
        js_date.get_minutes(),
        js_date.get_seconds(),
    )
}
