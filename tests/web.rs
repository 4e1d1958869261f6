//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field_backdrop::ParticleBackground;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas
        .set_attribute(
            "style",
            &format!("display: block; width: {}px; height: {}px", width, height),
        )
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_starts_loop() {
    let canvas = canvas(800, 600);
    let background = ParticleBackground::mount(canvas.clone()).unwrap();

    assert!(background.is_mounted());
    assert!(background.is_running());
    assert_eq!(background.particle_count(), 50);
    assert_eq!(background.listener_count(), 3);
    assert_eq!((canvas.width(), canvas.height()), (800, 600));
    canvas.remove();
}

#[wasm_bindgen_test]
fn without_pointer_only_resize_is_hooked() {
    let canvas = canvas(400, 300);
    let background = ParticleBackground::mount_with(canvas.clone(), 20, false).unwrap();

    assert_eq!(background.particle_count(), 20);
    assert_eq!(background.listener_count(), 1);
    canvas.remove();
}
