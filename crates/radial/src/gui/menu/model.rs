use gtk::prelude::*;
use gtk4 as gtk;
use radial_core::geometry::{MenuLayout, Point};
use radial_core::ports::{RenderError, Renderer};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub hot: bool,
    pub label: String,
}

/// What the draw callback paints. Shared between the overlay window, the
/// renderer and the drawing area; all three live on the GTK main thread.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub layout: MenuLayout,
    /// Top-left corner of the menu inside the full-screen overlay.
    pub origin: Point,
    pub markers: Vec<Marker>,
    pub visible: bool,
}

impl Frame {
    pub fn new(layout: MenuLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }
}

pub struct FrameRenderer {
    frame: Rc<RefCell<Frame>>,
    drawing_area: gtk::DrawingArea,
    pending: Vec<Marker>,
}

impl FrameRenderer {
    pub fn new(frame: Rc<RefCell<Frame>>, drawing_area: gtk::DrawingArea) -> Self {
        Self {
            frame,
            drawing_area,
            pending: Vec::new(),
        }
    }
}

impl Renderer for FrameRenderer {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_sector_marker(&mut self, position: Point, is_hot: bool, label: &str) {
        self.pending.push(Marker {
            position,
            hot: is_hot,
            label: label.to_string(),
        });
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let mut frame = self.frame.borrow_mut();
        if !frame.visible {
            return Err(RenderError::NotShown);
        }
        frame.markers = std::mem::take(&mut self.pending);
        self.drawing_area.queue_draw();
        Ok(())
    }
}
