//! Narrow interfaces the controller drives. The daemon backs them with a
//! layer-shell window, cairo and Hyprland; tests back them with recorders.

use crate::geometry::Point;
use crate::sector::KeyName;
use hyprland::error::HyprError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no display available")]
    NoDisplay,
    #[error("compositor does not support the layer-shell protocol")]
    LayerShellUnsupported,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("overlay is not shown")]
    NotShown,
    #[error("drawing failed: {0}")]
    Draw(String),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to launch `{path}`: {source}")]
    Launch {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("hotkey `{0}` has no key besides modifiers")]
    MissingKey(String),
    #[error("hotkey `{0}` names more than one non-modifier key")]
    TooManyKeys(String),
    #[error(transparent)]
    Hypr(#[from] HyprError),
}

pub trait OverlayWindow {
    fn create(&mut self) -> Result<(), OverlayError>;
    fn move_to(&mut self, top_left: Point);
    fn show(&mut self);
    fn hide(&mut self);
    fn destroy(&mut self);
}

/// A frame is `clear`, any number of markers, then `present`.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sector_marker(&mut self, position: Point, is_hot: bool, label: &str);
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Fire-and-forget: implementations must not wait for the action to finish.
pub trait ActionDispatcher {
    fn launch_program(&mut self, path: &str, args: &[String]) -> Result<(), DispatchError>;
    /// Sends modifiers plus one key as a single chord: all pressed, then all
    /// released. Combos outside that shape are rejected at config load.
    fn send_hotkey(&mut self, keys: &[KeyName]) -> Result<(), DispatchError>;
}
