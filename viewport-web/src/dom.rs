use viewport::Overflow;
use viewport::host::{
    BoundingBox, ElementHost, InputHandler, InputKind, InputTarget, Measure, ScrollBox, WindowHost,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::Error;
use crate::target::{DomListener, DomTarget};

/// Geometry and scroll extent of any DOM element.
#[derive(Clone, Debug)]
pub struct DomBox {
    element: Element,
}

impl DomBox {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    // `scrollLeft`/`scrollTop` are fractional on high-DPI layouts; the typed bindings round them
    // to `i32`, so go through the property directly.
    fn offset(&self, property: &str) -> f64 {
        js_sys::Reflect::get(self.element.as_ref(), &JsValue::from_str(property))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set_offset(&self, property: &str, value: f64) {
        if let Err(_err) = js_sys::Reflect::set(
            self.element.as_ref(),
            &JsValue::from_str(property),
            &JsValue::from_f64(value),
        ) {
            vwarn!(property, error = ?_err, "failed to set scroll offset");
        }
    }
}

impl Measure for DomBox {
    fn bounding_box(&self) -> BoundingBox {
        let r = self.element.get_bounding_client_rect();
        BoundingBox::new(r.x(), r.y(), r.width(), r.height())
    }
}

impl ScrollBox for DomBox {
    fn scroll_left(&self) -> f64 {
        self.offset("scrollLeft")
    }

    fn scroll_top(&self) -> f64 {
        self.offset("scrollTop")
    }

    fn scroll_width(&self) -> f64 {
        f64::from(self.element.scroll_width())
    }

    fn scroll_height(&self) -> f64 {
        f64::from(self.element.scroll_height())
    }

    fn set_scroll_left(&self, x: f64) {
        self.set_offset("scrollLeft", x);
    }

    fn set_scroll_top(&self, y: f64) {
        self.set_offset("scrollTop", y);
    }
}

/// The browser window as a scroll surface.
#[derive(Clone, Debug)]
pub struct DomWindow {
    window: Window,
    root: DomBox,
    target: DomTarget,
}

impl DomWindow {
    pub fn new(window: Window) -> Result<Self, Error> {
        let root = window
            .document()
            .ok_or(Error::NoDocument)?
            .document_element()
            .ok_or(Error::NoDocumentElement)?;
        Ok(Self {
            target: DomTarget::new(window.clone()),
            root: DomBox::new(root),
            window,
        })
    }

    /// Binds to the global `window`.
    pub fn global() -> Result<Self, Error> {
        Self::new(web_sys::window().ok_or(Error::NoWindow)?)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl InputTarget for DomWindow {
    type Listener = DomListener;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> DomListener {
        self.target.add_listener(kind, handler)
    }

    fn remove_listener(&self, listener: DomListener) {
        self.target.remove_listener(listener);
    }
}

impl WindowHost for DomWindow {
    type Root = DomBox;

    fn document_element(&self) -> DomBox {
        self.root.clone()
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_x(&self) -> f64 {
        self.window.scroll_x().unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scroll_x(&self, x: f64) {
        self.window.scroll_to_with_x_and_y(x, self.scroll_y());
    }

    fn set_scroll_y(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(self.scroll_x(), y);
    }
}

/// The document, which receives the keyboard listeners.
#[derive(Clone, Debug)]
pub struct DomDocument {
    document: Document,
    target: DomTarget,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self {
            target: DomTarget::new(document.clone()),
            document,
        }
    }

    pub fn global() -> Result<Self, Error> {
        let document = web_sys::window()
            .ok_or(Error::NoWindow)?
            .document()
            .ok_or(Error::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Resolves `selector` to the first matching `HTMLElement`.
    pub fn query(&self, selector: &str) -> Result<HtmlElement, Error> {
        self.document
            .query_selector(selector)
            .map_err(|_| Error::InvalidSelector(selector.to_owned()))?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_owned()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::NotAnHtmlElement)
    }
}

impl InputTarget for DomDocument {
    type Listener = DomListener;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> DomListener {
        self.target.add_listener(kind, handler)
    }

    fn remove_listener(&self, listener: DomListener) {
        self.target.remove_listener(listener);
    }
}

/// A scrollable `HTMLElement`.
///
/// Overflow is read from the computed style (falling back to the inline style when the computed
/// value is missing or empty, as for a detached element) and written to the inline style.
#[derive(Clone, Debug)]
pub struct DomElement {
    element: HtmlElement,
    scroll_box: DomBox,
    target: DomTarget,
}

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self {
            scroll_box: DomBox::new(element.clone().into()),
            target: DomTarget::new(element.clone()),
            element,
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn overflow(&self, property: &str) -> Overflow {
        let computed = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.element).ok().flatten())
            .and_then(|style| style.get_property_value(property).ok());
        resolve_overflow(computed, || {
            self.element.style().get_property_value(property).ok()
        })
    }

    fn set_overflow(&self, property: &str, overflow: &Overflow) {
        if let Err(_err) = self
            .element
            .style()
            .set_property(property, overflow.as_str())
        {
            vwarn!(property, error = ?_err, "failed to set overflow");
        }
    }
}

impl Measure for DomElement {
    fn bounding_box(&self) -> BoundingBox {
        self.scroll_box.bounding_box()
    }
}

impl ScrollBox for DomElement {
    fn scroll_left(&self) -> f64 {
        self.scroll_box.scroll_left()
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_box.scroll_top()
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_box.scroll_width()
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_box.scroll_height()
    }

    fn set_scroll_left(&self, x: f64) {
        self.scroll_box.set_scroll_left(x);
    }

    fn set_scroll_top(&self, y: f64) {
        self.scroll_box.set_scroll_top(y);
    }
}

impl InputTarget for DomElement {
    type Listener = DomListener;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> DomListener {
        self.target.add_listener(kind, handler)
    }

    fn remove_listener(&self, listener: DomListener) {
        self.target.remove_listener(listener);
    }
}

impl ElementHost for DomElement {
    fn overflow_x(&self) -> Overflow {
        self.overflow("overflow-x")
    }

    fn overflow_y(&self) -> Overflow {
        self.overflow("overflow-y")
    }

    fn set_overflow_x(&self, overflow: &Overflow) {
        self.set_overflow("overflow-x", overflow);
    }

    fn set_overflow_y(&self, overflow: &Overflow) {
        self.set_overflow("overflow-y", overflow);
    }
}

/// Picks the computed overflow value unless it is absent or blank, then the inline one.
fn resolve_overflow(computed: Option<String>, inline: impl FnOnce() -> Option<String>) -> Overflow {
    let value = computed
        .filter(|v| !v.trim().is_empty())
        .or_else(inline)
        .unwrap_or_default();
    Overflow::parse(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    #[test]
    fn computed_overflow_wins_when_present() {
        assert_eq!(resolve_overflow(some("hidden"), || some("scroll")), Overflow::Hidden);
    }

    #[test]
    fn empty_computed_overflow_falls_back_to_inline() {
        assert_eq!(resolve_overflow(some(""), || some("scroll")), Overflow::Scroll);
        assert_eq!(resolve_overflow(some("  "), || some("auto")), Overflow::Auto);
        assert_eq!(resolve_overflow(None, || some("scroll")), Overflow::Scroll);
    }

    #[test]
    fn inline_is_not_read_when_computed_is_usable() {
        let overflow = resolve_overflow(some("auto"), || panic!("inline style read"));
        assert_eq!(overflow, Overflow::Auto);
    }

    #[test]
    fn missing_everywhere_is_an_unrecognized_keyword() {
        let overflow = resolve_overflow(some(""), || None);
        assert_eq!(overflow, Overflow::Other(String::new()));
        assert_eq!(overflow.normalized_scrollable(), Overflow::Auto);
    }
}
