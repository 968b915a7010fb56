use viewport::TimestampMs;
use viewport::host::{Input, InputHandler, InputKind, InputTarget};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, KeyboardEvent};

/// Milliseconds from `performance.now()`, fraction included, or `0` outside a browsing context.
pub fn now_ms() -> TimestampMs {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// A DOM event target (window, document or element) that hands out per-registration listeners.
#[derive(Clone, Debug)]
pub struct DomTarget {
    target: EventTarget,
}

/// One registered DOM listener. Owns the JS closure so it stays alive while attached.
pub struct DomListener {
    kind: InputKind,
    closure: Closure<dyn FnMut(Event)>,
}

impl core::fmt::Debug for DomListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomListener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl DomTarget {
    pub fn new(target: impl Into<EventTarget>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

fn to_input(kind: InputKind, event: &Event) -> Input {
    let key_code = event
        .dyn_ref::<KeyboardEvent>()
        .map(KeyboardEvent::key_code)
        .unwrap_or(0);
    match kind {
        InputKind::Resize => Input::Resize,
        InputKind::Scroll => Input::Scroll,
        InputKind::KeyDown => Input::KeyDown {
            key_code,
            time_ms: now_ms(),
        },
        InputKind::KeyUp => Input::KeyUp { key_code },
    }
}

impl InputTarget for DomTarget {
    type Listener = DomListener;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> DomListener {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&to_input(kind, &event));
        }) as Box<dyn FnMut(Event)>);

        if let Err(_err) = self
            .target
            .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        {
            vwarn!(event = kind.as_str(), error = ?_err, "addEventListener failed");
        }
        DomListener { kind, closure }
    }

    fn remove_listener(&self, listener: DomListener) {
        let DomListener { kind, closure } = listener;
        if let Err(_err) = self
            .target
            .remove_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        {
            vwarn!(event = kind.as_str(), error = ?_err, "removeEventListener failed");
        }
        vdebug!(event = kind.as_str(), "listener removed");
    }
}
