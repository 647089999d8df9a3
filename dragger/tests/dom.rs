use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dragger::dom::{ListenerRegistry, Priority};
use dragger::{Document, Event, EventKind, Listener, Rect};

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_registry_refuses_duplicates() {
    let mut registry = ListenerRegistry::new();
    let listener = Listener::new(|_| {});
    let other = Listener::new(|_| {});

    assert!(registry.add(EventKind::Click, &listener));
    assert!(!registry.add(EventKind::Click, &listener.clone()));
    assert!(registry.add(EventKind::Wheel, &listener));
    assert!(registry.add(EventKind::Click, &other));
    assert_eq!(registry.len(), 3);

    assert!(registry.remove(EventKind::Click, &listener));
    assert!(!registry.remove(EventKind::Click, &listener));
    assert_eq!(registry.count(EventKind::Click), 1);
}

#[test]
fn test_dispatch_in_registration_order() {
    let document = Document::new();
    let el = document.create_element("div");
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let log = log.clone();
        Listener::new(move |_| log.borrow_mut().push("first"))
    };
    let second = {
        let log = log.clone();
        Listener::new(move |e: &Event| {
            log.borrow_mut().push("second");
            e.prevent_default();
        })
    };
    el.add_event_listener(EventKind::Click, &first);
    el.add_event_listener(EventKind::Click, &second);

    assert!(el.dispatch(&Event::wheel(1.0, 1.0)));
    assert!(!el.dispatch(&Event::click(0.0, 0.0)));
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_listener_removed_during_dispatch_is_skipped() {
    let document = Document::new();
    let el = document.create_element("div");
    let calls = Rc::new(Cell::new(0));

    let second = {
        let calls = calls.clone();
        Listener::new(move |_| calls.set(calls.get() + 1))
    };
    let first = {
        let el = el.clone();
        let second = second.clone();
        Listener::new(move |_| {
            el.remove_event_listener(EventKind::Click, &second);
        })
    };
    el.add_event_listener(EventKind::Click, &first);
    el.add_event_listener(EventKind::Click, &second);

    el.dispatch(&Event::click(0.0, 0.0));
    assert_eq!(calls.get(), 0);
    assert_eq!(el.listener_count_for(EventKind::Click), 1);

    // Clear the self-reference held by `first`
    el.clear_listeners();
}

#[test]
fn test_listener_added_during_dispatch_waits() {
    let document = Document::new();
    let el = document.create_element("div");
    let calls = Rc::new(Cell::new(0));

    let late = {
        let calls = calls.clone();
        Listener::new(move |_| calls.set(calls.get() + 1))
    };
    let first = {
        let el = el.clone();
        let late = late.clone();
        Listener::new(move |_| {
            el.add_event_listener(EventKind::Click, &late);
        })
    };
    el.add_event_listener(EventKind::Click, &first);

    el.dispatch(&Event::click(0.0, 0.0));
    assert_eq!(calls.get(), 0);
    el.dispatch(&Event::click(0.0, 0.0));
    assert_eq!(calls.get(), 1);

    el.clear_listeners();
}

// ============================================================================
// Geometry and scroll
// ============================================================================

#[test]
fn test_scroll_is_clamped() {
    let document = Document::new();
    let el = document.create_element("div");
    el.set_bounds(Rect::new(10.0, 20.0, 200.0, 50.0));
    el.set_content_size(500.0, 40.0);

    assert_eq!(el.offset_left(), 10.0);
    assert_eq!(el.offset_top(), 20.0);
    assert_eq!(el.scroll_width(), 500.0);
    assert_eq!(el.scroll_height(), 50.0);

    el.set_scroll_left(1000.0);
    assert_eq!(el.scroll_left(), 300.0);
    el.set_scroll_left(-5.0);
    assert_eq!(el.scroll_left(), 0.0);
    el.set_scroll_top(10.0);
    assert_eq!(el.scroll_top(), 0.0);

    el.set_scroll_left(300.0);
    el.set_content_size(250.0, 40.0);
    assert_eq!(el.scroll_left(), 50.0);
}

#[test]
fn test_resize_observer_fires_on_size_change() {
    let document = Document::new();
    let el = document.create_element("div");
    let hits = Rc::new(Cell::new(0));
    let seen = hits.clone();
    let id = el.observe_resize(move |_| seen.set(seen.get() + 1));

    el.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
    // Moving without resizing is not a resize
    el.set_bounds(Rect::new(50.0, 0.0, 100.0, 100.0));
    el.set_content_size(300.0, 100.0);
    el.set_content_size(300.0, 100.0);
    assert_eq!(hits.get(), 2);

    assert!(el.unobserve_resize(id));
    el.set_content_size(400.0, 100.0);
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_inline_style() {
    let document = Document::new();
    let el = document.create_element("div");

    el.set_style_property("cursor", "grab", Priority::Normal);
    el.set_style_property("scroll-behavior", "smooth", Priority::Important);
    assert_eq!(el.style().len(), 2);
    assert_eq!(el.style_priority("scroll-behavior"), Some(Priority::Important));

    el.set_style_property("cursor", "", Priority::Normal);
    assert_eq!(el.style_property("cursor"), None);
    assert_eq!(el.remove_style_property("scroll-behavior").as_deref(), Some("smooth"));
    assert!(el.style().is_empty());
}

// ============================================================================
// Tree and mutations
// ============================================================================

#[test]
fn test_mutations_reported_for_connected_tree() {
    let document = Document::new();
    let records = Rc::new(Cell::new(0));
    let seen = records.clone();
    let observer = document.observe_mutations(move |_| seen.set(seen.get() + 1));

    let list = document.create_element("ul");
    let item = document.create_element("li");
    list.append_child(&item);
    assert_eq!(records.get(), 0);

    document.body().append_child(&list);
    assert!(item.is_connected());
    list.remove_child(&item);
    assert_eq!(records.get(), 2);

    assert!(document.disconnect(observer));
    assert!(!document.disconnect(observer));
    list.append_child(&item);
    assert_eq!(records.get(), 2);
}

#[test]
fn test_append_moves_between_parents() {
    let document = Document::new();
    let a = document.create_element("div");
    let b = document.create_element("div");
    let child = document.create_element("span");

    a.append_child(&child);
    b.append_child(&child);

    assert!(a.children().is_empty());
    assert_eq!(b.children().len(), 1);
    assert!(child.parent().unwrap().ptr_eq(&b));
    assert!(!b.append_child(&b));
    assert!(!child.append_child(&b));
}

// ============================================================================
// Style elements
// ============================================================================

#[test]
fn test_owned_styles_removed_by_owner() {
    let document = Document::new();
    document.append_style("html {}");
    document.append_owned_style("a", ".a {}");
    document.append_owned_style("a", ".a::x {}");
    document.append_owned_style("b", ".b {}");

    assert_eq!(document.remove_styles_owned_by("a"), 2);
    assert_eq!(document.remove_styles_owned_by("a"), 0);
    assert_eq!(document.style_count(), 2);
    assert_eq!(document.styles_owned_by("b").len(), 1);
}

#[test]
fn test_remove_single_style() {
    let document = Document::new();
    let host = document.append_style("html {}");
    let owned = document.append_owned_style("a", ".a {}");

    assert!(document.remove_style(owned));
    assert!(!document.remove_style(owned));
    assert!(document.styles_owned_by("a").is_empty());
    assert_eq!(document.styles()[0].id, host);
}

// ============================================================================
// Timers
// ============================================================================

#[test]
fn test_interval_fires_per_period() {
    let document = Document::new();
    let ticks = Rc::new(Cell::new(0));
    let seen = ticks.clone();
    let timer = document.set_interval(Duration::from_millis(20), move || seen.set(seen.get() + 1));

    assert_eq!(document.advance(Duration::from_millis(100)), 5);
    assert_eq!(ticks.get(), 5);
    assert_eq!(document.now(), Duration::from_millis(100));

    assert!(document.clear_interval(timer));
    assert!(!document.clear_interval(timer));
    document.advance(Duration::from_millis(100));
    assert_eq!(ticks.get(), 5);
}

#[test]
fn test_intervals_fire_in_due_order() {
    let document = Document::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let slow = order.clone();
    let fast = order.clone();
    document.set_interval(Duration::from_millis(30), move || slow.borrow_mut().push("slow"));
    document.set_interval(Duration::from_millis(20), move || fast.borrow_mut().push("fast"));

    document.advance(Duration::from_millis(60));

    // fast@20, slow@30, fast@40, slow@60, fast@60
    assert_eq!(*order.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
}

#[test]
fn test_zero_period_is_clamped() {
    let document = Document::new();
    let ticks = Rc::new(Cell::new(0));
    let seen = ticks.clone();
    document.set_interval(Duration::ZERO, move || seen.set(seen.get() + 1));

    document.advance(Duration::from_millis(3));
    assert_eq!(ticks.get(), 3);
}
