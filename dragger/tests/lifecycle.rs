use std::time::Duration;

use dragger::dom::Priority;
use dragger::{
    Document, Dragger, DraggerError, DraggerOptions, Element, Event, InteractionState, Rect,
};

fn strip(document: &Document) -> Element {
    let el = document.create_element("div");
    el.set_bounds(Rect::new(0.0, 0.0, 500.0, 100.0));
    el.set_content_size(2000.0, 100.0);
    document.body().append_child(&el);
    el
}

fn assert_released(document: &Document, el: &Element) {
    assert_eq!(el.listener_count(), 0);
    assert_eq!(el.resize_observer_count(), 0);
    assert_eq!(document.mutation_observer_count(), 0);
    assert_eq!(document.active_timers(), 0);
    assert_eq!(document.style_count(), 0);
    assert!(el.classes().is_empty());
    assert_eq!(el.style_property("scroll-behavior"), None);
    assert_eq!(el.style_property("cursor"), None);
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_acquires_everything() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();

    dragger.init(Some(&el));

    assert!(dragger.is_initialized());
    // 5 drag handlers, 1 wheel, 2 tracking
    assert_eq!(el.listener_count(), 8);
    assert_eq!(el.resize_observer_count(), 1);
    assert_eq!(document.mutation_observer_count(), 1);
    assert!(el.has_class(dragger.id()));
    assert_eq!(document.styles_owned_by(dragger.id()).len(), 1);
    assert_eq!(el.style_property("scroll-behavior").as_deref(), Some("smooth"));
    assert_eq!(el.style_priority("scroll-behavior"), Some(Priority::Important));
    assert_eq!(el.style_property("cursor").as_deref(), Some("grab"));
    assert!(dragger.overflow_cursor());
}

#[test]
fn test_init_without_container_is_noop() {
    let dragger = Dragger::default();
    dragger.init(None);

    assert!(!dragger.is_initialized());
    assert!(dragger.container().is_none());
    dragger.destroy();
}

#[test]
fn test_init_respects_disabled_features() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().with_drag(false).with_scroll(false)).unwrap();

    dragger.init(Some(&el));

    // Only the tracking handlers remain
    assert_eq!(el.listener_count(), 2);
    assert_eq!(document.style_count(), 0);
    assert!(el.classes().is_empty());
}

#[test]
fn test_reinit_moves_to_new_container() {
    let document = Document::new();
    let first = strip(&document);
    let second = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();

    dragger.init(Some(&first));
    dragger.init(Some(&second));

    assert_eq!(first.listener_count(), 0);
    assert!(!first.has_class(dragger.id()));
    assert_eq!(second.listener_count(), 8);
    assert_eq!(document.mutation_observer_count(), 1);
    assert_eq!(document.style_count(), 1);
    assert!(dragger.container().unwrap().ptr_eq(&second));
}

// ============================================================================
// Destroy
// ============================================================================

#[test]
fn test_destroy_releases_everything() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    dragger.init(Some(&el));
    dragger.tractor().enable();

    dragger.destroy();

    assert!(!dragger.is_initialized());
    assert!(!dragger.tractor().is_running());
    assert_released(&document, &el);
}

#[test]
fn test_destroy_is_idempotent() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    dragger.init(Some(&el));

    dragger.destroy();
    dragger.destroy();

    assert_released(&document, &el);
}

#[test]
fn test_destroy_before_init() {
    let dragger = Dragger::default();
    dragger.destroy();
    dragger.tractor().disable();
    assert!(!dragger.is_initialized());
}

#[test]
fn test_destroy_mid_drag() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    dragger.init(Some(&el));
    dragger.tractor().enable();

    el.dispatch(&Event::pointer_down(200.0, 50.0));
    el.dispatch(&Event::pointer_move(150.0, 50.0));
    assert_eq!(dragger.state(), InteractionState::Dragging);
    assert_eq!(el.style_property("cursor").as_deref(), Some("grabbing"));

    dragger.destroy();

    assert_eq!(dragger.state(), InteractionState::Idle);
    assert_released(&document, &el);

    // Nothing reacts any more
    let offset = el.scroll_left();
    el.dispatch(&Event::pointer_move(50.0, 50.0));
    document.advance(Duration::from_millis(200));
    assert_eq!(el.scroll_left(), offset);
}

#[test]
fn test_destroy_leaves_foreign_styles() {
    let document = Document::new();
    let el = strip(&document);
    let host_style = document.append_style("body { margin: 0; }");
    let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    dragger.init(Some(&el));

    dragger.destroy();

    let styles = document.styles();
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].id, host_style);
}

#[test]
fn test_drop_destroys() {
    let document = Document::new();
    let el = strip(&document);
    {
        let dragger = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
        dragger.init(Some(&el));
        dragger.tractor().enable();
    }
    assert_released(&document, &el);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_ends_drag_and_keeps_listeners() {
    let document = Document::new();
    let el = strip(&document);
    let dragger = Dragger::default();
    dragger.init(Some(&el));

    el.dispatch(&Event::pointer_down(200.0, 50.0));
    assert_eq!(dragger.state(), InteractionState::Dragging);

    dragger.clear();

    assert_eq!(dragger.state(), InteractionState::Idle);
    assert_eq!(el.listener_count(), 8);

    // Moves no longer scroll
    el.dispatch(&Event::pointer_move(100.0, 50.0));
    assert_eq!(el.scroll_left(), 0.0);
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_ids_are_unique() {
    let a = Dragger::default();
    let b = Dragger::default();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_injected_styles_match_only_their_owner() {
    let document = Document::new();
    let el_a = strip(&document);
    let el_b = strip(&document);
    let a = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    let b = Dragger::new(DraggerOptions::default().hide_scrollbar()).unwrap();
    a.init(Some(&el_a));
    b.init(Some(&el_b));

    for style in document.styles() {
        let owner = style.owner.clone().unwrap();
        let other = if owner == a.id() { b.id() } else { a.id() };
        assert!(style.text.contains(&owner));
        assert!(!style.text.contains(other));
    }
    assert!(el_a.has_class(a.id()) && !el_a.has_class(b.id()));

    a.destroy();
    assert_eq!(document.style_count(), 1);
    assert_eq!(document.styles_owned_by(b.id()).len(), 1);
    assert!(el_b.has_class(b.id()));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_new_rejects_invalid_options() {
    let err = Dragger::new(DraggerOptions::default().with_speed(0.0)).unwrap_err();
    assert!(matches!(err, DraggerError::Options(_)));
}
