// Example: wire an element viewport to a `.container` and log what a list renderer would see.
//
// Build for `wasm32-unknown-unknown` and load it in a page that has a `.container` element.
use viewport::{EventKind, ScrollTo, ViewportEvent};

fn main() -> Result<(), viewport_web::Error> {
    let v = viewport_web::element_viewport_by_selector(".container")?;

    v.subscribe(|e| {
        if let ViewportEvent::KeyPress(code) = e {
            web_sys::console::log_1(&format!("keypress {code}").into());
        }
    });
    v.on(EventKind::Change, |_| {
        web_sys::console::log_1(&"change".into());
    });

    let m = v.metrics();
    let row = 40.0;
    let first = (m.scroll.y / row).floor();
    let last = ((m.scroll.y + m.outer.height) / row).ceil();
    web_sys::console::log_1(&format!("visible rows {first}..{last}").into());

    v.scroll_to(ScrollTo::y(row * 1_000.0));

    // The page owns the viewport from here on.
    std::mem::forget(v);
    Ok(())
}
