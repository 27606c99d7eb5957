//! Drag-to-scroll wiring for card containers
//!
//! Each container gets its own `DragSession`, shared by its pointer and
//! click listeners through `Rc<RefCell<_>>`. The listeners live as long as
//! the page, so their closures are leaked with `forget`.

use crate::dom::{self, DomResultExt};
use crate::log;
use sitekit_core::drag::{ClickDecision, DragEffect, DragSession, PointerInput};
use sitekit_core::{DragConfig, SiteError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, PointerEvent};

/// Attach drag scrolling to every matching container
///
/// Returns the number of containers attached.
pub fn attach_all(document: &Document, config: &DragConfig) -> Result<usize, SiteError> {
    let list = document
        .query_selector_all(&config.container_selector)
        .dom()?;
    let containers = dom::elements::<HtmlElement>(&list);
    for container in &containers {
        attach(container, config)?;
    }
    Ok(containers.len())
}

/// Attach drag scrolling to one container
pub fn attach(container: &HtmlElement, config: &DragConfig) -> Result<(), SiteError> {
    let session = Rc::new(RefCell::new(DragSession::new(config.click_threshold)));

    let on_pointer = |kind: &'static str, read: fn(&PointerEvent, &HtmlElement) -> PointerInput| {
        let session = Rc::clone(&session);
        let target = container.clone();
        let dragging_class = config.dragging_class.clone();
        let handler = Closure::wrap(Box::new(move |event: PointerEvent| {
            let input = read(&event, &target);
            let effect = session.borrow_mut().handle(input);
            if let Err(e) = apply_effect(&target, &dragging_class, effect) {
                log::warn(&format!("{} handler failed: {}", kind, e));
            }
        }) as Box<dyn FnMut(_)>);
        let result = container
            .add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())
            .dom();
        handler.forget();
        result
    };

    on_pointer("pointerdown", |event, container| PointerInput::Down {
        button: event.button(),
        client_x: f64::from(event.client_x()),
        scroll_offset: f64::from(container.scroll_left()),
    })?;
    on_pointer("pointermove", |event, _| PointerInput::Move {
        client_x: f64::from(event.client_x()),
    })?;
    on_pointer("pointerup", |_, _| PointerInput::Up)?;
    on_pointer("pointercancel", |_, _| PointerInput::Cancel)?;

    let click_session = Rc::clone(&session);
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let in_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| dom::is_within_link(&element))
            .unwrap_or(false);
        if click_session.borrow().click_decision(in_link) == ClickDecision::StopImmediate {
            event.stop_immediate_propagation();
        }
    }) as Box<dyn FnMut(_)>);
    container
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .dom()?;
    on_click.forget();

    Ok(())
}

fn apply_effect(
    container: &HtmlElement,
    dragging_class: &str,
    effect: DragEffect,
) -> Result<(), SiteError> {
    match effect {
        DragEffect::None => {}
        DragEffect::Started => container.class_list().add_1(dragging_class).dom()?,
        DragEffect::ScrollTo(offset) => container.set_scroll_left(offset.round() as i32),
        DragEffect::Ended => container.class_list().remove_1(dragging_class).dom()?,
    }
    Ok(())
}
