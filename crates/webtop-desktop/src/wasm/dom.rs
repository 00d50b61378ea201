//! DOM-backed window surface
//!
//! Builds the window chrome as plain elements:
//!
//! ```text
//! div.window#window-{id}
//! ├── div.status-bar        (drag handle, title, buttons)
//! │   ├── span.title
//! │   └── button.minimize / button.maximize / button.close
//! ├── iframe.content
//! └── div.resize.resize-{n,s,e,w,ne,nw,se,sw}
//! button.taskbar-entry      (lives in the taskbar region)
//! ```
//!
//! Styling is left to the page's stylesheet; only geometry, stacking and
//! visibility are written as inline styles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlIFrameElement, PointerEvent};

use super::{log, warn};
use crate::engine::DesktopEngine;
use crate::events::InteractionHook;
use crate::math::LayoutBox;
use crate::surface::WindowSurface;
use crate::types::{PointerId, WindowId};
use crate::window::{ContentRef, ResizeHandle, WindowRegion};

pub(crate) type SharedEngine = Rc<RefCell<DesktopEngine<DomSurface>>>;
pub(crate) type WeakEngine = Weak<RefCell<DesktopEngine<DomSurface>>>;

type PointerListener = Closure<dyn FnMut(PointerEvent)>;
type EventListener = Closure<dyn FnMut(Event)>;

/// Run `f` against the engine if it is still alive and not already borrowed
pub(crate) fn with_engine(engine: &WeakEngine, f: impl FnOnce(&mut DesktopEngine<DomSurface>)) {
    let Some(shared) = engine.upgrade() else {
        return;
    };
    match shared.try_borrow_mut() {
        Ok(mut engine) => f(&mut engine),
        Err(_) => log("[webtop] engine busy, input dropped"),
    };
}

/// Run `f` against the engine after the current DOM callback returns
///
/// Used for anything that may close a window, so a listener is never
/// dropped while it is running.
pub(crate) fn defer(engine: WeakEngine, f: impl FnOnce(&mut DesktopEngine<DomSurface>) + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        with_engine(&engine, f);
    });
}

fn pointer_pos(event: &PointerEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    el.set_class_name(class);
    Ok(el)
}

/// One window's DOM nodes and listeners
pub struct DomSurface {
    root: HtmlElement,
    maximize_button: HtmlElement,
    iframe: HtmlIFrameElement,
    taskbar_entry: HtmlElement,
    engine: WeakEngine,
    listeners: Vec<PointerListener>,
    taskbar_listener: Option<EventListener>,
    load_listener: Option<EventListener>,
    /// Listeners registered inside the hosted document, replaced on every load
    content_listeners: Rc<RefCell<Vec<PointerListener>>>,
}

impl DomSurface {
    /// Build the chrome for window `id` and wire its pointer listeners
    pub(crate) fn build(
        document: &Document,
        id: WindowId,
        content: &ContentRef,
        engine: WeakEngine,
    ) -> Result<Self, JsValue> {
        let root = create(document, "div", "window")?;
        root.set_id(&format!("window-{}", id));

        let status_bar = create(document, "div", "status-bar")?;
        let title = create(document, "span", "title")?;
        title.set_text_content(Some(&content.title));
        let minimize = create(document, "button", "minimize")?;
        minimize.set_text_content(Some("Minimize"));
        let maximize_button = create(document, "button", "maximize")?;
        let close = create(document, "button", "close")?;
        close.set_text_content(Some("Close"));
        status_bar.append_child(&title)?;
        status_bar.append_child(&minimize)?;
        status_bar.append_child(&maximize_button)?;
        status_bar.append_child(&close)?;

        let iframe = create(document, "iframe", "content")?.dyn_into::<HtmlIFrameElement>()?;
        iframe.set_title(&content.title);

        root.append_child(&status_bar)?;
        root.append_child(&iframe)?;

        let taskbar_entry = create(document, "button", "taskbar-entry")?;
        taskbar_entry.set_text_content(Some(&content.title));

        let mut surface = Self {
            root,
            maximize_button,
            iframe,
            taskbar_entry,
            engine,
            listeners: Vec::new(),
            taskbar_listener: None,
            load_listener: None,
            content_listeners: Rc::new(RefCell::new(Vec::new())),
        };

        for handle in ResizeHandle::ALL {
            let border = create(
                document,
                "div",
                &format!("resize resize-{}", handle.as_str()),
            )?;
            surface.root.append_child(&border)?;
            surface.on_pointer_down(&border, id, WindowRegion::Resize(handle), false)?;
        }

        let root = surface.root.clone();
        let maximize = surface.maximize_button.clone();
        surface.on_pointer_down(&root, id, WindowRegion::Content, false)?;
        surface.on_pointer_down(&status_bar, id, WindowRegion::TitleBar, false)?;
        surface.on_pointer_down(&minimize, id, WindowRegion::MinimizeButton, true)?;
        surface.on_pointer_down(&maximize, id, WindowRegion::MaximizeButton, true)?;
        surface.on_pointer_down(&close, id, WindowRegion::CloseButton, true)?;
        surface.track_pointer(id)?;

        let engine = surface.engine.clone();
        let taskbar_listener = EventListener::new(move |_event: Event| {
            defer(engine.clone(), move |engine| {
                engine.handle_taskbar_click(id);
            });
        });
        surface
            .taskbar_entry
            .add_event_listener_with_callback("click", taskbar_listener.as_ref().unchecked_ref())?;
        surface.taskbar_listener = Some(taskbar_listener);

        Ok(surface)
    }

    /// Route pointer-down on `target` to `region`
    ///
    /// Buttons are deferred because they may close the window that owns
    /// this very listener.
    fn on_pointer_down(
        &mut self,
        target: &Element,
        id: WindowId,
        region: WindowRegion,
        deferred: bool,
    ) -> Result<(), JsValue> {
        let engine = self.engine.clone();
        let listener = PointerListener::new(move |event: PointerEvent| {
            event.stop_propagation();
            let pointer = event.pointer_id();
            let (x, y) = pointer_pos(&event);
            if deferred {
                defer(engine.clone(), move |engine| {
                    engine.handle_pointer_down(id, region, pointer, x, y);
                });
            } else {
                with_engine(&engine, |engine| {
                    engine.handle_pointer_down(id, region, pointer, x, y);
                });
            }
        });
        target.add_event_listener_with_callback("pointerdown", listener.as_ref().unchecked_ref())?;
        self.listeners.push(listener);
        Ok(())
    }

    /// Route move/up/cancel of captured pointers to the interaction session
    fn track_pointer(&mut self, id: WindowId) -> Result<(), JsValue> {
        let engine = self.engine.clone();
        let on_move = PointerListener::new(move |event: PointerEvent| {
            let (x, y) = pointer_pos(&event);
            with_engine(&engine, |engine| {
                engine.handle_pointer_move(id, event.pointer_id(), x, y);
            });
        });

        let engine = self.engine.clone();
        let on_up = PointerListener::new(move |event: PointerEvent| {
            with_engine(&engine, |engine| {
                engine.handle_pointer_up(id, event.pointer_id());
            });
        });

        let engine = self.engine.clone();
        let on_cancel = PointerListener::new(move |event: PointerEvent| {
            with_engine(&engine, |engine| {
                engine.handle_pointer_cancel(id, event.pointer_id());
            });
        });

        let target: &Element = &self.root;
        target.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("pointercancel", on_cancel.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback(
            "lostpointercapture",
            on_cancel.as_ref().unchecked_ref(),
        )?;

        self.listeners.push(on_move);
        self.listeners.push(on_up);
        self.listeners.push(on_cancel);
        Ok(())
    }
}

impl WindowSurface for DomSurface {
    type Container = Element;

    fn mount(&mut self, parent: &Element) {
        if let Err(err) = parent.append_child(&self.root) {
            warn(&format!("[webtop] mount failed: {:?}", err));
        }
    }

    fn unmount(&mut self) {
        self.root.remove();
    }

    fn mount_taskbar_entry(&mut self, taskbar: &Element) {
        if let Err(err) = taskbar.append_child(&self.taskbar_entry) {
            warn(&format!("[webtop] taskbar mount failed: {:?}", err));
        }
    }

    fn unmount_taskbar_entry(&mut self) {
        self.taskbar_entry.remove();
    }

    fn set_visible(&mut self, visible: bool) {
        let style = self.root.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        result.ok();
    }

    fn set_taskbar_minimized(&mut self, minimized: bool) {
        self.taskbar_entry
            .class_list()
            .toggle_with_force("minimized", minimized)
            .ok();
    }

    fn set_maximize_label(&mut self, label: &str) {
        self.maximize_button.set_text_content(Some(label));
    }

    fn apply_layout(&mut self, layout: &LayoutBox) {
        let style = self.root.style();
        style.set_property("left", &layout.left.to_string()).ok();
        style.set_property("top", &layout.top.to_string()).ok();
        style.set_property("width", &layout.width.to_string()).ok();
        style.set_property("height", &layout.height.to_string()).ok();
    }

    fn set_stacking(&mut self, z: u32) {
        self.root.style().set_property("z-index", &z.to_string()).ok();
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.root.set_pointer_capture(pointer).ok();
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        // The browser already released it after pointerup
        if self.root.has_pointer_capture(pointer) {
            self.root.release_pointer_capture(pointer).ok();
        }
    }

    fn watch_content(&mut self, content: &ContentRef, hook: InteractionHook) {
        let iframe = self.iframe.clone();
        let engine = self.engine.clone();
        let content_listeners = Rc::clone(&self.content_listeners);
        let address = content.address.clone();

        let load_listener = EventListener::new(move |_event: Event| {
            content_listeners.borrow_mut().clear();

            let Some(document) = iframe.content_document() else {
                warn(&format!(
                    "[webtop] {} is cross-origin, focus-on-click inside it is unavailable",
                    address
                ));
                return;
            };

            let hook = hook.clone();
            let engine = engine.clone();
            let listener = PointerListener::new(move |_event: PointerEvent| {
                hook.notify();
                defer(engine.clone(), |engine| {
                    engine.dispatch_events();
                });
            });
            if document
                .add_event_listener_with_callback("pointerdown", listener.as_ref().unchecked_ref())
                .is_ok()
            {
                content_listeners.borrow_mut().push(listener);
            }
        });

        self.iframe
            .add_event_listener_with_callback("load", load_listener.as_ref().unchecked_ref())
            .ok();
        self.load_listener = Some(load_listener);
        self.iframe.set_src(&content.address);
    }
}
