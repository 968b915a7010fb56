use alloc::string::String;

/// Key code reported by the host for keyboard input.
pub type KeyCode = u32;

/// Monotonic host clock in milliseconds, with the sub-millisecond part the host reports.
pub type TimestampMs = f64;

/// A read-only geometric snapshot of a box.
///
/// Every `Rect` built by this crate satisfies `right == left + width` and
/// `bottom == top + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Returns a copy with a new size, keeping the origin and rederiving `right`/`bottom`.
    pub fn with_size(self, width: f64, height: f64) -> Self {
        Self::from_origin_size(self.left, self.top, width, height)
    }
}

/// Raw scroll offsets plus their normalized position on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub x: f64,
    pub y: f64,
    /// `x` over the maximum horizontal offset, in `[0, 1]`. `0` when there is no overflow.
    pub ratio_x: f64,
    /// `y` over the maximum vertical offset, in `[0, 1]`. `0` when there is no overflow.
    pub ratio_y: f64,
}

/// A combined geometry + scroll snapshot of a surface.
///
/// `inner` is the full scrollable content box, `outer` the visible box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub inner: Rect,
    pub outer: Rect,
    pub scroll: ScrollState,
}

impl Metrics {
    /// Builds a snapshot from both boxes and the raw offsets, deriving the scroll ratios.
    pub fn from_parts(inner: Rect, outer: Rect, x: f64, y: f64) -> Self {
        let scroll = ScrollState {
            x,
            y,
            ratio_x: crate::ratio(x, inner.width - outer.width),
            ratio_y: crate::ratio(y, inner.height - outer.height),
        };
        Self {
            inner,
            outer,
            scroll,
        }
    }

    /// Maximum horizontal scroll offset (`0` when the content fits).
    pub fn max_scroll_x(&self) -> f64 {
        (self.inner.width - self.outer.width).max(0.0)
    }

    /// Maximum vertical scroll offset (`0` when the content fits).
    pub fn max_scroll_y(&self) -> f64 {
        (self.inner.height - self.outer.height).max(0.0)
    }
}

/// A programmatic scroll request. Absent (or non-finite) axes are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTo {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScrollTo {
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn finite_x(&self) -> Option<f64> {
        self.x.filter(|v| v.is_finite())
    }

    pub fn finite_y(&self) -> Option<f64> {
        self.y.filter(|v| v.is_finite())
    }
}

/// CSS overflow mode of one axis of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
    /// Any other keyword the host reported (including an empty/unset value).
    Other(String),
}

impl Overflow {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "visible" => Self::Visible,
            "hidden" => Self::Hidden,
            "clip" => Self::Clip,
            "scroll" => Self::Scroll,
            "auto" => Self::Auto,
            other => Self::Other(String::from(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Clip => "clip",
            Self::Scroll => "scroll",
            Self::Auto => "auto",
            Self::Other(s) => s,
        }
    }

    pub fn is_scrollable(&self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }

    /// Keeps `scroll`/`auto`, maps everything else to `auto`.
    pub fn normalized_scrollable(&self) -> Self {
        if self.is_scrollable() {
            self.clone()
        } else {
            Self::Auto
        }
    }
}
