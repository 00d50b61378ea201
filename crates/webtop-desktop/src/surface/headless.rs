//! Recording surface for headless hosts

use super::WindowSurface;
use crate::events::InteractionHook;
use crate::math::LayoutBox;
use crate::types::PointerId;
use crate::window::ContentRef;

/// Surface that keeps whatever state the core pushes into it
///
/// Containers are plain names (`"desktop"`, `"taskbar"`).
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    /// Container the pane is inserted into
    pub parent: Option<String>,
    /// Number of times the pane was actually inserted
    pub mount_count: usize,
    /// Container the taskbar entry is inserted into
    pub taskbar: Option<String>,
    pub visible: bool,
    pub taskbar_minimized: bool,
    pub maximize_label: String,
    pub layout: Option<LayoutBox>,
    pub stacking: Option<u32>,
    /// Pointers currently captured
    pub captured: Vec<PointerId>,
    /// Content loaded by `watch_content`
    pub content: Option<ContentRef>,
    hook: Option<InteractionHook>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    /// Create a detached, visible surface
    pub fn new() -> Self {
        Self {
            parent: None,
            mount_count: 0,
            taskbar: None,
            visible: true,
            taskbar_minimized: false,
            maximize_label: String::new(),
            layout: None,
            stacking: None,
            captured: Vec::new(),
            content: None,
            hook: None,
        }
    }

    /// Simulate a pointer-down inside the hosted content
    ///
    /// Returns `false` if no content has been loaded yet.
    pub fn simulate_content_interaction(&self) -> bool {
        match &self.hook {
            Some(hook) => {
                hook.notify();
                true
            }
            None => false,
        }
    }
}

impl WindowSurface for HeadlessSurface {
    type Container = String;

    fn mount(&mut self, parent: &String) {
        self.parent = Some(parent.clone());
        self.mount_count += 1;
    }

    fn unmount(&mut self) {
        self.parent = None;
    }

    fn mount_taskbar_entry(&mut self, taskbar: &String) {
        self.taskbar = Some(taskbar.clone());
    }

    fn unmount_taskbar_entry(&mut self) {
        self.taskbar = None;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_taskbar_minimized(&mut self, minimized: bool) {
        self.taskbar_minimized = minimized;
    }

    fn set_maximize_label(&mut self, label: &str) {
        self.maximize_label = label.to_string();
    }

    fn apply_layout(&mut self, layout: &LayoutBox) {
        self.layout = Some(*layout);
    }

    fn set_stacking(&mut self, z: u32) {
        self.stacking = Some(z);
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        if !self.captured.contains(&pointer) {
            self.captured.push(pointer);
        }
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        self.captured.retain(|&p| p != pointer);
    }

    fn watch_content(&mut self, content: &ContentRef, hook: InteractionHook) {
        self.content = Some(content.clone());
        self.hook = Some(hook);
    }
}
