#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use viewport::host::ElementHost;
use viewport::{Overflow, ScrollTo, ViewportEvent};
use viewport_web::{
    DomDocument, DomElement, element_viewport, element_viewport_by_selector, window_viewport,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, KeyboardEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn container(overflow: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.style().set_property("width", "200px").unwrap();
    el.style().set_property("height", "100px").unwrap();
    el.style().set_property("overflow", overflow).unwrap();

    let content: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    content.style().set_property("width", "400px").unwrap();
    content.style().set_property("height", "1100px").unwrap();
    el.append_child(&content).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn record(v: &viewport_web::WebElementViewport) -> Rc<RefCell<Vec<ViewportEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    v.subscribe(move |e| sink.borrow_mut().push(*e));
    log
}

#[wasm_bindgen_test]
fn visible_overflow_becomes_auto() {
    let el = container("visible");
    let _v = element_viewport(el.clone()).unwrap();
    let host = DomElement::new(el);
    assert_eq!(host.overflow_x(), Overflow::Auto);
    assert_eq!(host.overflow_y(), Overflow::Auto);
}

#[wasm_bindgen_test]
fn scroll_overflow_is_kept() {
    let el = container("scroll");
    let _v = element_viewport(el.clone()).unwrap();
    let host = DomElement::new(el);
    assert_eq!(host.overflow_x(), Overflow::Scroll);
    assert_eq!(host.overflow_y(), Overflow::Scroll);
}

#[wasm_bindgen_test]
fn detached_element_keeps_inline_scroll_overflow() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.style().set_property("overflow", "scroll").unwrap();

    let _v = element_viewport(el.clone()).unwrap();
    let host = DomElement::new(el.clone());
    assert_eq!(host.overflow_x(), Overflow::Scroll);
    assert_eq!(host.overflow_y(), Overflow::Scroll);
    assert_eq!(el.style().get_property_value("overflow-y").unwrap(), "scroll");
}

#[wasm_bindgen_test]
fn scroll_offsets_are_not_rounded_to_integers() {
    let el = container("auto");
    let v = element_viewport(el.clone()).unwrap();
    v.scroll_to(ScrollTo::y(50.5));

    // Whatever the browser snapped to, the metrics report the exact DOM offset.
    let raw = js_sys::Reflect::get(&el, &"scrollTop".into())
        .unwrap()
        .as_f64()
        .unwrap();
    assert_eq!(v.metrics().scroll.y, raw);
    assert!((raw - 50.5).abs() < 1.0);
}

#[wasm_bindgen_test]
fn element_metrics_follow_scroll() {
    let el = container("auto");
    let v = element_viewport(el.clone()).unwrap();
    v.scroll_to(ScrollTo::y(100.0));

    let m = v.metrics();
    assert_eq!(m.scroll.x, 0.0);
    assert_eq!(m.scroll.y, 100.0);
    assert_eq!(m.inner.top, m.outer.top - 100.0);
    assert!(m.inner.height >= m.outer.height);
    assert!(m.scroll.ratio_y > 0.0 && m.scroll.ratio_y < 1.0);
    assert_eq!(m.inner.bottom, m.inner.top + m.inner.height);
}

#[wasm_bindgen_test]
fn dom_scroll_event_emits_scroll_then_change() {
    let el = container("auto");
    let v = element_viewport(el.clone()).unwrap();
    let log = record(&v);

    el.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_eq!(*log.borrow(), [ViewportEvent::Scroll, ViewportEvent::Change]);
}

#[wasm_bindgen_test]
fn remove_detaches_dom_listeners() {
    let el = container("auto");
    let mut v = element_viewport(el.clone()).unwrap();
    let log = record(&v);
    v.remove();

    el.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    let document = DomDocument::global().unwrap();
    let key = KeyboardEvent::new("keydown").unwrap();
    document.document().dispatch_event(&key).unwrap();
    assert!(log.borrow().is_empty());
}

#[wasm_bindgen_test]
fn keydown_on_document_emits_keypress() {
    let el = container("auto");
    let v = element_viewport(el).unwrap();
    let log = record(&v);

    let document = DomDocument::global().unwrap();
    let key = KeyboardEvent::new("keydown").unwrap();
    document.document().dispatch_event(&key).unwrap();
    document.document().dispatch_event(&key).unwrap();
    assert_eq!(*log.borrow(), [ViewportEvent::KeyPress(0)]);
}

#[wasm_bindgen_test]
fn selector_errors_are_reported() {
    assert_eq!(
        element_viewport_by_selector(".does-not-exist").unwrap_err(),
        viewport_web::Error::SelectorNotFound(".does-not-exist".into())
    );
    assert!(matches!(
        element_viewport_by_selector("[[").unwrap_err(),
        viewport_web::Error::InvalidSelector(_)
    ));
}

#[wasm_bindgen_test]
fn window_viewport_outer_matches_inner_size() {
    let v = window_viewport().unwrap();
    let m = v.metrics();
    assert_eq!((m.outer.left, m.outer.top), (0.0, 0.0));
    assert!(m.outer.width > 0.0);
    assert!(m.scroll.ratio_x >= 0.0 && m.scroll.ratio_x <= 1.0);
}
