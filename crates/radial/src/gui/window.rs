use crate::gui::menu::Frame;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use radial_core::geometry::Point;
use radial_core::ports::{OverlayError, OverlayWindow};
use radial_core::wm::{self, MonitorName};
use std::cell::RefCell;
use std::rc::Rc;

/// Pointer position in the overlay's surface coordinates. The overlay covers
/// the whole monitor, so this is the monitor-local point used as menu center.
pub fn get_cursor_position(window: &gtk::ApplicationWindow) -> Option<Point> {
    gdk::Display::default()
        .and_then(|d| d.default_seat())
        .and_then(|s| s.pointer())
        .zip(window.surface())
        .and_then(|(p, s)| s.device_position(&p))
        .map(|(x, y, _)| Point::new(x, y))
}

/// Turns the window into a transparent full-screen overlay surface. Must run
/// before the window is first mapped; returns false when the compositor
/// has no layer-shell support.
pub fn init_layer_shell(window: &gtk::ApplicationWindow) -> bool {
    if !gtk4_layer_shell::is_supported() {
        log::warn!("Compositor does not support wlr-layer-shell");
        return false;
    }

    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("radial"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(KeyboardMode::None);
    true
}

/// Looks up a GDK monitor by its connector name (`DP-1`, `eDP-1`), which is
/// the name Hyprland reports for the focused monitor.
pub fn get_monitor_by_name(name: &MonitorName) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == **name))
    })
}

/// Moves the overlay to the given monitor so cursor points measured there
/// line up with the painted menu.
pub fn set_window_monitor(window: &gtk::ApplicationWindow, monitor_name: &MonitorName) {
    if let Some(monitor) = get_monitor_by_name(monitor_name) {
        window.set_monitor(Some(&monitor));
    }
}

/// The application window is created once; `create`/`destroy` bracket one
/// gesture by placing it on the focused monitor and dropping the last frame.
pub struct LayerOverlay {
    window: gtk::ApplicationWindow,
    frame: Rc<RefCell<Frame>>,
    layer_shell: bool,
}

impl LayerOverlay {
    pub fn new(
        window: gtk::ApplicationWindow,
        frame: Rc<RefCell<Frame>>,
        layer_shell: bool,
    ) -> Self {
        Self {
            window,
            frame,
            layer_shell,
        }
    }
}

impl OverlayWindow for LayerOverlay {
    fn create(&mut self) -> Result<(), OverlayError> {
        if gdk::Display::default().is_none() {
            return Err(OverlayError::NoDisplay);
        }
        if !self.layer_shell {
            return Err(OverlayError::LayerShellUnsupported);
        }
        // pointer coordinates are monitor-local, so the overlay must sit on
        // the monitor the cursor position was measured against
        if let Some(name) = wm::get_active_monitor() {
            set_window_monitor(&self.window, &name);
        }
        Ok(())
    }

    fn move_to(&mut self, top_left: Point) {
        self.frame.borrow_mut().origin = top_left;
    }

    fn show(&mut self) {
        self.frame.borrow_mut().visible = true;
        self.window.set_opacity(1.0);
        self.window.set_visible(true);
    }

    fn hide(&mut self) {
        self.frame.borrow_mut().visible = false;
        self.window.set_opacity(0.0);
        self.window.set_visible(false);
    }

    fn destroy(&mut self) {
        self.frame.borrow_mut().markers.clear();
    }
}
