//! Browser bindings
//!
//! `WebDesktop` is the JS-facing handle: it owns the engine behind an
//! `Rc<RefCell<_>>` and builds a [`DomSurface`] for every window it opens.
//! Window ids cross the boundary as `u32` so JS sees plain numbers.

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::math::LayoutBox;
use crate::types::WindowId;
use crate::window::WindowConfig;

pub use dom::DomSurface;
use dom::SharedEngine;

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn document() -> DesktopResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DesktopError::DomError("no document available".into()))
}

fn query(document: &Document, selector: &str) -> DesktopResult<Element> {
    document
        .query_selector(selector)
        .map_err(|err| DesktopError::DomError(format!("bad selector {}: {:?}", selector, err)))?
        .ok_or_else(|| DesktopError::DomError(format!("no element matches {}", selector)))
}

/// Desktop bound to a desktop region and a taskbar region of the page
#[wasm_bindgen]
pub struct WebDesktop {
    engine: SharedEngine,
    document: Document,
    desktop: Element,
}

#[wasm_bindgen]
impl WebDesktop {
    /// Bind to the elements matching the two selectors
    ///
    /// `config_json` may be empty; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        desktop_selector: &str,
        taskbar_selector: &str,
        config_json: Option<String>,
    ) -> Result<WebDesktop, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => DesktopConfig::from_json(json).map_err(js_error)?,
            _ => DesktopConfig::default(),
        };

        let document = document().map_err(js_error)?;
        let desktop = query(&document, desktop_selector).map_err(js_error)?;
        let taskbar = query(&document, taskbar_selector).map_err(js_error)?;

        let mut engine = DesktopEngine::new(config, desktop.clone(), taskbar);
        engine.init(desktop.client_width() as f32, desktop.client_height() as f32);
        log(&format!(
            "[webtop] desktop ready ({}x{})",
            desktop.client_width(),
            desktop.client_height()
        ));

        Ok(WebDesktop {
            engine: Rc::new(RefCell::new(engine)),
            document,
            desktop,
        })
    }

    /// Open a window hosting `address`; returns its id
    #[wasm_bindgen]
    pub fn open(&mut self, address: &str, title: &str) -> Result<u32, JsValue> {
        self.open_with(WindowConfig::new(address, title))
    }

    /// Open a window at an explicit position, skipping the cascade
    #[wasm_bindgen(js_name = openAt)]
    pub fn open_at(&mut self, address: &str, title: &str, x: f32, y: f32) -> Result<u32, JsValue> {
        self.open_with(WindowConfig::new(address, title).with_position(x, y))
    }

    /// Open a window from CSS values (`"120px"`, `"50%"`, ...)
    ///
    /// Percentages resolve against the current desktop size. Unset or
    /// non-numeric values are rejected.
    #[wasm_bindgen(js_name = openStyled)]
    pub fn open_styled(
        &mut self,
        address: &str,
        title: &str,
        left: &str,
        top: &str,
        width: &str,
        height: &str,
    ) -> Result<u32, JsValue> {
        let layout = LayoutBox::parse(left, top, width, height).map_err(js_error)?;
        let viewport = self.engine.borrow().viewport().size;
        self.open_with(WindowConfig::new(address, title).with_layout(&layout, viewport))
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, id: u32) -> bool {
        self.engine.borrow_mut().focus_window(WindowId::from(id))
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: u32) -> bool {
        self.engine.borrow_mut().close_window(WindowId::from(id))
    }

    /// Toggle minimized; returns the new state, or undefined for an unknown id
    #[wasm_bindgen(js_name = toggleMinimized)]
    pub fn toggle_minimized(&mut self, id: u32) -> Option<bool> {
        self.engine.borrow_mut().toggle_minimized(WindowId::from(id))
    }

    /// Toggle maximized; returns the new state, or undefined for an unknown id
    #[wasm_bindgen(js_name = toggleMaximized)]
    pub fn toggle_maximized(&mut self, id: u32) -> Option<bool> {
        self.engine.borrow_mut().toggle_maximized(WindowId::from(id))
    }

    /// Re-read the desktop region's size (call from a resize observer)
    #[wasm_bindgen]
    pub fn resize(&mut self) {
        let (width, height) = (self.desktop.client_width(), self.desktop.client_height());
        self.engine
            .borrow_mut()
            .resize(width as f32, height as f32);
    }

    /// All windows bottom to top, as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.engine.borrow().snapshot_json().map_err(js_error)
    }

    /// Detach every window; returns how many were removed
    #[wasm_bindgen]
    pub fn shutdown(&mut self) -> u32 {
        let removed = self.engine.borrow_mut().shutdown();
        log(&format!("[webtop] shutdown, {} windows removed", removed));
        u32::try_from(removed).unwrap_or(u32::MAX)
    }
}

impl WebDesktop {
    fn open_with(&mut self, config: WindowConfig) -> Result<u32, JsValue> {
        let id = self.engine.borrow().next_window_id();
        let js_id = u32::try_from(id).map_err(js_error)?;

        let surface = DomSurface::build(
            &self.document,
            id,
            &config.content,
            Rc::downgrade(&self.engine),
        )?;
        let opened = self.engine.borrow_mut().open_window(config, surface);
        debug_assert_eq!(opened, id);
        Ok(js_id)
    }
}
