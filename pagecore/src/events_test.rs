use super::*;

use std::cell::Cell;

#[test]
fn publish_reaches_all_subscribers() {
    let bus = EventBus::<u32>::new();
    let total = Rc::new(Cell::new(0));
    let t1 = Rc::clone(&total);
    let t2 = Rc::clone(&total);
    let _a = bus.subscribe(move |n| t1.set(t1.get() + n));
    let _b = bus.subscribe(move |n| t2.set(t2.get() + n * 10));

    bus.publish(&2);
    assert_eq!(total.get(), 22);
    assert_eq!(bus.subscriber_count(), 2);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let bus = EventBus::<u32>::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let sub = bus.subscribe(move |_| h.set(h.get() + 1));
    bus.publish(&1);
    drop(sub);
    bus.publish(&1);

    assert_eq!(hits.get(), 1);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn cancel_is_same_as_drop() {
    let bus = EventBus::<()>::new();
    let sub = bus.subscribe(|()| {});
    sub.cancel();
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn subscription_outliving_bus_is_harmless() {
    let bus = EventBus::<()>::new();
    let sub = bus.subscribe(|()| {});
    drop(bus);
    drop(sub);
}

#[test]
fn handler_may_unsubscribe_during_dispatch() {
    let bus = EventBus::<()>::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let slot_in = Rc::clone(&slot);
    let calls_in = Rc::clone(&calls);
    let sub = bus.subscribe(move |()| {
        calls_in.set(calls_in.get() + 1);
        slot_in.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    bus.publish(&());
    bus.publish(&());
    assert_eq!(calls.get(), 1);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn handler_added_during_dispatch_waits_for_next_publish() {
    let bus = EventBus::<()>::new();
    let late_hits = Rc::new(Cell::new(0));
    let keep: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

    let bus_in = bus.clone();
    let keep_in = Rc::clone(&keep);
    let late_in = Rc::clone(&late_hits);
    let _first = bus.subscribe(move |()| {
        if keep_in.borrow().is_empty() {
            let late = Rc::clone(&late_in);
            let sub = bus_in.subscribe(move |()| late.set(late.get() + 1));
            keep_in.borrow_mut().push(sub);
        }
    });

    bus.publish(&());
    assert_eq!(late_hits.get(), 0);
    bus.publish(&());
    assert_eq!(late_hits.get(), 1);
}

#[test]
fn page_events_carry_payloads() {
    let bus = EventBus::<PageEvent>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let _sub = bus.subscribe(move |e| s.borrow_mut().push(e.clone()));

    bus.publish(&PageEvent::Online(false));
    bus.publish(&PageEvent::Key(KeyInput::new("Escape", false)));
    assert_eq!(
        *seen.borrow(),
        vec![PageEvent::Online(false), PageEvent::Key(KeyInput::new("Escape", false))]
    );
}
