// Host-side tests for the event bus.

use app_core::{AppEvent, EventBus, HandlerId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const MOUNTED: AppEvent = AppEvent::ViewMounted { marker_count: 5 };

#[test]
fn emit_reaches_all_subscribers() {
    let bus = EventBus::new();
    let calls = Rc::new(Cell::new(0u32));

    for _ in 0..3 {
        let calls = Rc::clone(&calls);
        bus.on(move |_| calls.set(calls.get() + 1));
    }
    assert_eq!(bus.handler_count(), 3);

    bus.emit(&MOUNTED);
    assert_eq!(calls.get(), 3);
    bus.emit(&AppEvent::MarkerSelected { index: 2 });
    assert_eq!(calls.get(), 6);
}

#[test]
fn handlers_receive_the_emitted_event() {
    let bus = EventBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        bus.on(move |event| seen.borrow_mut().push(*event));
    }

    bus.emit(&MOUNTED);
    bus.emit(&AppEvent::MarkerSelected { index: 4 });
    assert_eq!(
        *seen.borrow(),
        vec![MOUNTED, AppEvent::MarkerSelected { index: 4 }]
    );
}

#[test]
fn off_stops_delivery() {
    let bus = EventBus::new();
    let calls = Rc::new(Cell::new(0u32));
    let id = {
        let calls = Rc::clone(&calls);
        bus.on(move |_| calls.set(calls.get() + 1))
    };

    bus.emit(&MOUNTED);
    assert_eq!(calls.get(), 1);

    assert!(bus.off(id));
    assert!(!bus.off(id), "second off for the same id should be a no-op");

    bus.emit(&MOUNTED);
    assert_eq!(calls.get(), 1);
    assert_eq!(bus.handler_count(), 0);
}

#[test]
fn handler_ids_are_never_reused() {
    let bus = EventBus::new();
    let mut ids = Vec::new();
    for _ in 0..4 {
        let id = bus.on(|_| {});
        assert!(!ids.contains(&id));
        bus.off(id);
        ids.push(id);
    }
}

#[test]
fn delivery_follows_subscription_order() {
    let bus = EventBus::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        bus.on(move |_| order.borrow_mut().push(label));
    }

    bus.emit(&MOUNTED);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn handler_can_unsubscribe_itself_during_emit() {
    let bus = Rc::new(EventBus::new());
    let calls = Rc::new(Cell::new(0u32));
    let own_id: Rc<Cell<Option<HandlerId>>> = Rc::new(Cell::new(None));

    let id = {
        let bus_inner = Rc::clone(&bus);
        let calls = Rc::clone(&calls);
        let own_id = Rc::clone(&own_id);
        bus.on(move |_| {
            calls.set(calls.get() + 1);
            if let Some(id) = own_id.get() {
                assert!(bus_inner.off(id));
            }
        })
    };
    own_id.set(Some(id));

    bus.emit(&MOUNTED);
    bus.emit(&MOUNTED);
    assert_eq!(calls.get(), 1, "handler ran again after removing itself");
    assert_eq!(bus.handler_count(), 0);
}

#[test]
fn subscription_during_emit_first_hears_the_next_event() {
    let bus = Rc::new(EventBus::new());
    let late_calls = Rc::new(Cell::new(0u32));

    {
        let bus_inner = Rc::clone(&bus);
        let late_calls = Rc::clone(&late_calls);
        let armed = Cell::new(false);
        bus.on(move |_| {
            if !armed.get() {
                armed.set(true);
                let late_calls = Rc::clone(&late_calls);
                bus_inner.on(move |_| late_calls.set(late_calls.get() + 1));
            }
        });
    }

    bus.emit(&MOUNTED);
    assert_eq!(late_calls.get(), 0, "mid-emit subscriber ran too early");
    bus.emit(&MOUNTED);
    assert_eq!(late_calls.get(), 1);
}
