use crate::dom;
use crate::input;
use fireflies_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store (and the camera aspect) in step with the
/// window size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneContext>>) {
    dom::sync_canvas_backing_size(canvas);
    scene
        .borrow_mut()
        .set_viewport(canvas.width(), canvas.height());

    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        scene
            .borrow_mut()
            .set_viewport(canvas_resize.width(), canvas_resize.height());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Project every pointer move onto the ground and re-aim the spotlight.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneContext>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = input::pointer_event_on_canvas(&ev, &canvas);
        scene.borrow_mut().on_pointer_move(pointer);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
