//! Browser host for the `viewport` crate.
//!
//! Implements the `viewport::host` traits on top of `web-sys`:
//!
//! - [`DomWindow`]: the whole window as the scroll surface (content = `document.documentElement`)
//! - [`DomElement`]: a scrollable `HTMLElement`
//! - [`DomDocument`]: the keyboard input source shared by every viewport on the page
//!
//! Each viewport attaches its own closures and detaches exactly those on `remove()`/drop.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dom;
mod error;
mod target;

use web_sys::HtmlElement;

pub use dom::{DomBox, DomDocument, DomElement, DomWindow};
pub use error::Error;
pub use target::{DomListener, DomTarget, now_ms};

pub type WebWindowViewport = viewport::WindowViewport<DomWindow, DomDocument>;
pub type WebElementViewport = viewport::ElementViewport<DomElement, DomDocument>;

/// Creates a viewport over the global window.
pub fn window_viewport() -> Result<WebWindowViewport, Error> {
    let window = DomWindow::global()?;
    let document = DomDocument::global()?;
    vdebug!("window_viewport");
    Ok(viewport::Viewport::window(window, document, now_ms()))
}

/// Creates a viewport over `element`, forcing its overflow to a scrollable mode.
pub fn element_viewport(element: HtmlElement) -> Result<WebElementViewport, Error> {
    let document = DomDocument::global()?;
    vdebug!("element_viewport");
    Ok(viewport::Viewport::element(
        DomElement::new(element),
        document,
        now_ms(),
    ))
}

/// Creates a viewport over the first element matching `selector`.
pub fn element_viewport_by_selector(selector: &str) -> Result<WebElementViewport, Error> {
    let document = DomDocument::global()?;
    let element = document.query(selector)?;
    vdebug!(selector, "element_viewport_by_selector");
    Ok(viewport::Viewport::element(
        DomElement::new(element),
        document,
        now_ms(),
    ))
}
