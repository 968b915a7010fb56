//! Traits a host environment implements so the viewport can read geometry and receive input.
//!
//! The core never talks to a UI toolkit directly. A browser adapter implements these on top of
//! the DOM; tests implement them in memory.

use alloc::rc::Rc;

use crate::{KeyCode, Overflow, TimestampMs};

/// The host's native bounding box of a surface, as reported by the layout engine.
///
/// This mirrors a DOM `DOMRect`; the viewport only reads `left`/`top`/`width`/`height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }
}

/// Kinds of native input a viewport listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputKind {
    Resize,
    Scroll,
    KeyDown,
    KeyUp,
}

impl InputKind {
    pub const ALL: [InputKind; 4] = [
        InputKind::Resize,
        InputKind::Scroll,
        InputKind::KeyDown,
        InputKind::KeyUp,
    ];

    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Scroll => "scroll",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

/// A native input delivered by the host to a registered handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Resize,
    Scroll,
    KeyDown {
        key_code: KeyCode,
        time_ms: TimestampMs,
    },
    KeyUp {
        key_code: KeyCode,
    },
}

impl Input {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Resize => InputKind::Resize,
            Self::Scroll => InputKind::Scroll,
            Self::KeyDown { .. } => InputKind::KeyDown,
            Self::KeyUp { .. } => InputKind::KeyUp,
        }
    }
}

pub type InputHandler = Rc<dyn Fn(&Input)>;

/// Something listeners can be attached to (a window, a document, an element).
///
/// Every `add_listener` call yields its own `Listener` handle, and `remove_listener` must detach
/// exactly that registration. Other registrations of the same kind stay attached.
pub trait InputTarget {
    type Listener;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> Self::Listener;

    fn remove_listener(&self, listener: Self::Listener);
}

/// A box whose layout geometry can be read.
pub trait Measure {
    fn bounding_box(&self) -> BoundingBox;
}

/// A box with its own scroll extent and offsets.
pub trait ScrollBox: Measure {
    fn scroll_left(&self) -> f64;
    fn scroll_top(&self) -> f64;
    /// Full scrollable content width.
    fn scroll_width(&self) -> f64;
    /// Full scrollable content height.
    fn scroll_height(&self) -> f64;
    fn set_scroll_left(&self, x: f64);
    fn set_scroll_top(&self, y: f64);
}

/// The top-level window: owns the visible port, while the scrollable content belongs to the
/// document's root element.
pub trait WindowHost: InputTarget {
    type Root: ScrollBox;

    fn document_element(&self) -> Self::Root;
    fn inner_width(&self) -> f64;
    fn inner_height(&self) -> f64;
    fn scroll_x(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn set_scroll_x(&self, x: f64);
    fn set_scroll_y(&self, y: f64);
}

/// A scrollable element whose overflow mode can be inspected and changed.
pub trait ElementHost: ScrollBox + InputTarget {
    fn overflow_x(&self) -> Overflow;
    fn overflow_y(&self) -> Overflow;
    fn set_overflow_x(&self, overflow: &Overflow);
    fn set_overflow_y(&self, overflow: &Overflow);
}
