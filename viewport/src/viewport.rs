use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::emitter::{Emitter, EventKind, Subscription, ViewportEvent};
use crate::host::{
    ElementHost, Input, InputHandler, InputKind, InputTarget, ScrollBox, WindowHost,
};
use crate::keys::KeyCoalescer;
use crate::{Metrics, Rect, ScrollTo, TimestampMs, read_rect};

/// A scrollable surface strategy: where input comes from, how metrics are computed, and how
/// the surface is scrolled.
pub trait Surface {
    type Target: InputTarget;

    /// The target that receives `resize`/`scroll` listeners.
    fn target(&self) -> &Self::Target;

    fn metrics(&self) -> Metrics;

    fn scroll_to(&self, to: ScrollTo);
}

/// The whole window is the scrollable surface.
///
/// The content belongs to the document root element while the visible port belongs to the
/// window, so metrics combine both.
#[derive(Clone, Debug)]
pub struct WindowSurface<W> {
    window: W,
}

impl<W: WindowHost> WindowSurface<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}

impl<W: WindowHost> Surface for WindowSurface<W> {
    type Target = W;

    fn target(&self) -> &W {
        &self.window
    }

    fn metrics(&self) -> Metrics {
        let root = self.window.document_element();
        let inner = read_rect(&root).with_size(root.scroll_width(), root.scroll_height());
        let outer =
            Rect::from_origin_size(0.0, 0.0, self.window.inner_width(), self.window.inner_height());
        Metrics::from_parts(inner, outer, self.window.scroll_x(), self.window.scroll_y())
    }

    fn scroll_to(&self, to: ScrollTo) {
        if let Some(x) = to.finite_x() {
            self.window.set_scroll_x(x);
        }
        if let Some(y) = to.finite_y() {
            self.window.set_scroll_y(y);
        }
    }
}

/// A designated element is the scrollable surface.
#[derive(Clone, Debug)]
pub struct ElementSurface<E> {
    element: E,
}

impl<E: ElementHost> ElementSurface<E> {
    /// Wraps `element`, forcing both overflow axes to a scrollable mode.
    ///
    /// `auto` and `scroll` are kept as-is; anything else becomes `auto`.
    pub fn new(element: E) -> Self {
        let x = element.overflow_x();
        if !x.is_scrollable() {
            vdebug!(from = x.as_str(), "overflow-x normalized to auto");
            element.set_overflow_x(&x.normalized_scrollable());
        }
        let y = element.overflow_y();
        if !y.is_scrollable() {
            vdebug!(from = y.as_str(), "overflow-y normalized to auto");
            element.set_overflow_y(&y.normalized_scrollable());
        }
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<E: ElementHost> Surface for ElementSurface<E> {
    type Target = E;

    fn target(&self) -> &E {
        &self.element
    }

    fn metrics(&self) -> Metrics {
        let outer = read_rect(&self.element);
        let x = self.element.scroll_left();
        let y = self.element.scroll_top();
        let inner = Rect::from_origin_size(
            outer.left - x,
            outer.top - y,
            self.element.scroll_width(),
            self.element.scroll_height(),
        );
        Metrics::from_parts(inner, outer, x, y)
    }

    fn scroll_to(&self, to: ScrollTo) {
        if let Some(x) = to.finite_x() {
            self.element.set_scroll_left(x);
        }
        if let Some(y) = to.finite_y() {
            self.element.set_scroll_top(y);
        }
    }
}

/// State reachable from the host's listener closures.
struct Shared {
    emitter: Emitter,
    keys: RefCell<KeyCoalescer>,
    removed: Cell<bool>,
}

impl Shared {
    fn dispatch(&self, input: &Input) {
        if self.removed.get() {
            vdebug!(input = input.kind().as_str(), "input after remove ignored");
            return;
        }
        match *input {
            Input::Scroll => {
                self.emitter.emit(&ViewportEvent::Scroll);
                self.emitter.emit(&ViewportEvent::Change);
            }
            Input::Resize => {
                self.emitter.emit(&ViewportEvent::Resize);
                self.emitter.emit(&ViewportEvent::Change);
            }
            Input::KeyDown { key_code, time_ms } => {
                let accepted = self.keys.borrow_mut().key_down(key_code, time_ms);
                if accepted {
                    self.emitter.emit(&ViewportEvent::KeyPress(key_code));
                }
            }
            Input::KeyUp { .. } => self.keys.borrow_mut().key_up(),
        }
    }
}

struct Listeners<A, B> {
    resize: A,
    scroll: A,
    key_down: B,
    key_up: B,
}

/// A scrollable surface plus its event wiring.
///
/// Construction attaches four listeners: `resize` and `scroll` on the surface, `keydown` and
/// `keyup` on the document. [`Viewport::remove`] (or dropping the viewport) detaches exactly
/// those four and nothing else, so several viewports can share one document.
///
/// Lifecycle: active until removed; a removed viewport never emits again.
pub struct Viewport<S: Surface, D: InputTarget> {
    surface: S,
    document: D,
    shared: Rc<Shared>,
    listeners: Option<Listeners<<S::Target as InputTarget>::Listener, D::Listener>>,
}

pub type WindowViewport<W, D> = Viewport<WindowSurface<W>, D>;
pub type ElementViewport<E, D> = Viewport<ElementSurface<E>, D>;

impl<W: WindowHost, D: InputTarget> Viewport<WindowSurface<W>, D> {
    pub fn window(window: W, document: D, now_ms: TimestampMs) -> Self {
        Self::new(WindowSurface::new(window), document, now_ms)
    }
}

impl<E: ElementHost, D: InputTarget> Viewport<ElementSurface<E>, D> {
    pub fn element(element: E, document: D, now_ms: TimestampMs) -> Self {
        Self::new(ElementSurface::new(element), document, now_ms)
    }
}

impl<S: Surface, D: InputTarget> Viewport<S, D> {
    pub fn new(surface: S, document: D, now_ms: TimestampMs) -> Self {
        Self::with_key_coalescer(surface, document, KeyCoalescer::new(now_ms))
    }

    pub fn with_key_coalescer(surface: S, document: D, keys: KeyCoalescer) -> Self {
        let shared = Rc::new(Shared {
            emitter: Emitter::new(),
            keys: RefCell::new(keys),
            removed: Cell::new(false),
        });

        let handler = |shared: &Rc<Shared>| -> InputHandler {
            let weak: Weak<Shared> = Rc::downgrade(shared);
            Rc::new(move |input: &Input| {
                if let Some(shared) = weak.upgrade() {
                    shared.dispatch(input);
                }
            })
        };

        let target = surface.target();
        let listeners = Listeners {
            resize: target.add_listener(InputKind::Resize, handler(&shared)),
            scroll: target.add_listener(InputKind::Scroll, handler(&shared)),
            key_down: document.add_listener(InputKind::KeyDown, handler(&shared)),
            key_up: document.add_listener(InputKind::KeyUp, handler(&shared)),
        };
        vdebug!(
            key_window_ms = keys.window_ms(),
            "Viewport::new: listeners attached"
        );

        Self {
            surface,
            document,
            shared,
            listeners: Some(listeners),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Subscribes to every event.
    pub fn subscribe(&self, handler: impl Fn(&ViewportEvent) + 'static) -> Subscription {
        self.shared.emitter.subscribe(handler)
    }

    /// Subscribes to one kind of event.
    pub fn on(&self, kind: EventKind, handler: impl Fn(&ViewportEvent) + 'static) -> Subscription {
        self.shared.emitter.on(kind, handler)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.shared.emitter.unsubscribe(subscription)
    }

    /// Current geometry and scroll snapshot.
    pub fn metrics(&self) -> Metrics {
        self.surface.metrics()
    }

    /// Alias for [`Viewport::metrics`].
    pub fn get_metrics(&self) -> Metrics {
        self.metrics()
    }

    /// Scrolls the surface immediately (no animation). Axes that are absent or not finite are
    /// left untouched.
    pub fn scroll_to(&self, to: ScrollTo) {
        vtrace!(x = ?to.x, y = ?to.y, "Viewport::scroll_to");
        self.surface.scroll_to(to);
    }

    pub fn is_removed(&self) -> bool {
        self.listeners.is_none()
    }

    /// Detaches this viewport's listeners and drops its subscribers.
    ///
    /// Calling it again is a no-op.
    pub fn remove(&mut self) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        let target = self.surface.target();
        target.remove_listener(listeners.resize);
        target.remove_listener(listeners.scroll);
        self.document.remove_listener(listeners.key_down);
        self.document.remove_listener(listeners.key_up);
        self.shared.removed.set(true);
        self.shared.emitter.clear();
        vdebug!("Viewport::remove: listeners detached");
    }
}

impl<S: Surface, D: InputTarget> Drop for Viewport<S, D> {
    fn drop(&mut self) {
        self.remove();
    }
}

impl<S: Surface, D: InputTarget> fmt::Debug for Viewport<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("removed", &self.is_removed())
            .field("keys", &*self.shared.keys.borrow())
            .field("emitter", &self.shared.emitter)
            .finish()
    }
}
