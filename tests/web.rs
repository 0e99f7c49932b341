//! Browser tests for the canvas mount; run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_field::theme::ThemeController;
use portfolio_field::BackgroundField;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_to_viewport() {
    let canvas = canvas();
    let field = BackgroundField::mount(canvas.clone(), None).unwrap();
    assert!(field.active());
    assert_eq!(field.frames(), 1.0);

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(
        canvas.style().get_property_value("pointer-events").unwrap(),
        "none"
    );
}

#[wasm_bindgen_test]
fn events_after_unmount_are_ignored() {
    let mut field = BackgroundField::mount(canvas(), Some(r#"{"particleCount": 10}"#.to_owned()))
        .unwrap();
    field.unmount();
    assert!(!field.active());

    let window = web_sys::window().unwrap();
    let resize = Event::new("resize").unwrap();
    let mouse = MouseEvent::new("mousemove").unwrap();
    window.dispatch_event(&resize).unwrap();
    window.dispatch_event(&mouse).unwrap();
    assert_eq!(field.frames(), 0.0);

    // unmounting twice is fine
    field.unmount();
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    assert!(BackgroundField::mount(canvas(), Some(r#"{"particleCount": 0}"#.to_owned())).is_err());
}

#[wasm_bindgen_test]
fn canvas_bound_to_another_context_mounts_inert() {
    let canvas = canvas();
    let bound = canvas
        .get_context("bitmaprenderer")
        .ok()
        .flatten()
        .or_else(|| canvas.get_context("webgl").ok().flatten());
    assert!(bound.is_some());

    let field = BackgroundField::mount(canvas, None).unwrap();
    assert!(!field.active());
    assert_eq!(field.frames(), 0.0);
}

#[wasm_bindgen_test]
fn theme_toggle_flips_document_class_and_persists_under_configured_key() {
    let key = "portfolio-field-test-theme";
    let config = format!(r#"{{"themeStorageKey": "{}"}}"#, key);
    let mut controller = ThemeController::init(Some(config)).unwrap();
    let before = controller.is_dark();
    assert_eq!(controller.toggle(), !before);
    assert_eq!(portfolio_field::theme::document_is_dark(), !before);

    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    let saved = storage.get_item(key).unwrap();
    let expected = if before { "light" } else { "dark" };
    assert_eq!(saved.as_deref(), Some(expected));

    controller.toggle();
    assert_eq!(portfolio_field::theme::document_is_dark(), before);
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn theme_controller_rejects_malformed_config() {
    assert!(ThemeController::init(Some("{themeStorageKey".to_owned())).is_err());
}
