// Example: an in-memory element host driving a viewport.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use viewport::host::{
    BoundingBox, ElementHost, Input, InputHandler, InputKind, InputTarget, Measure, ScrollBox,
};
use viewport::{Overflow, ScrollTo, Viewport, ViewportEvent};

#[derive(Clone, Default)]
struct Listeners(Rc<RefCell<Vec<(usize, InputKind, InputHandler)>>>, Rc<Cell<usize>>);

impl Listeners {
    fn fire(&self, input: Input) {
        let handlers: Vec<_> = self
            .0
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == input.kind())
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for h in handlers {
            h(&input);
        }
    }
}

impl InputTarget for Listeners {
    type Listener = usize;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> usize {
        let id = self.1.get();
        self.1.set(id + 1);
        self.0.borrow_mut().push((id, kind, handler));
        id
    }

    fn remove_listener(&self, listener: usize) {
        self.0.borrow_mut().retain(|(id, _, _)| *id != listener);
    }
}

/// A 300px tall list box holding 10_000 rows of 40px.
#[derive(Clone, Default)]
struct ListBox {
    listeners: Listeners,
    top: Rc<Cell<f64>>,
    overflow: Rc<RefCell<(Overflow, Overflow)>>,
}

impl Measure for ListBox {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(0.0, 64.0, 320.0, 300.0)
    }
}

impl ScrollBox for ListBox {
    fn scroll_left(&self) -> f64 {
        0.0
    }
    fn scroll_top(&self) -> f64 {
        self.top.get()
    }
    fn scroll_width(&self) -> f64 {
        320.0
    }
    fn scroll_height(&self) -> f64 {
        10_000.0 * 40.0
    }
    fn set_scroll_left(&self, _x: f64) {}
    fn set_scroll_top(&self, y: f64) {
        self.top.set(y);
        self.listeners.fire(Input::Scroll);
    }
}

impl InputTarget for ListBox {
    type Listener = usize;

    fn add_listener(&self, kind: InputKind, handler: InputHandler) -> usize {
        self.listeners.add_listener(kind, handler)
    }

    fn remove_listener(&self, listener: usize) {
        self.listeners.remove_listener(listener);
    }
}

impl ElementHost for ListBox {
    fn overflow_x(&self) -> Overflow {
        self.overflow.borrow().0.clone()
    }
    fn overflow_y(&self) -> Overflow {
        self.overflow.borrow().1.clone()
    }
    fn set_overflow_x(&self, overflow: &Overflow) {
        self.overflow.borrow_mut().0 = overflow.clone();
    }
    fn set_overflow_y(&self, overflow: &Overflow) {
        self.overflow.borrow_mut().1 = overflow.clone();
    }
}

fn main() {
    let list = ListBox::default();
    let keyboard = Listeners::default();
    let v = Rc::new(Viewport::element(list.clone(), keyboard.clone(), 0.0));
    println!("overflow after construction: {:?}", list.overflow.borrow());

    let weak = Rc::downgrade(&v);
    v.subscribe(move |e| {
        let Some(v) = weak.upgrade() else { return };
        match e {
            ViewportEvent::Change => {
                let m = v.metrics();
                let first = (m.scroll.y / 40.0).floor() as usize;
                let last = ((m.scroll.y + m.outer.height) / 40.0).ceil() as usize;
                println!(
                    "rows {first}..{last} (ratio_y={:.3})",
                    m.scroll.ratio_y
                );
            }
            // Page Down jumps one viewport.
            ViewportEvent::KeyPress(34) => {
                let m = v.metrics();
                v.scroll_to(ScrollTo::y(m.scroll.y + m.outer.height));
            }
            other => println!("event {:?}", other),
        }
    });

    v.scroll_to(ScrollTo::y(4_000.0));
    keyboard.fire(Input::KeyDown {
        key_code: 34,
        time_ms: 10.0,
    });
    // Auto-repeat within 200ms is folded.
    keyboard.fire(Input::KeyDown {
        key_code: 34,
        time_ms: 40.0,
    });
    println!("final metrics: {:?}", v.metrics());
}
