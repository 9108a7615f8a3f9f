//! Toolkit-independent core of the radial shortcut menu: sector hit testing,
//! the press/hold/release interaction controller, configuration loading and
//! the Hyprland-backed action dispatcher.

mod macros;

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod geometry;
pub mod ipc;
pub mod ports;
pub mod sector;
pub mod selection;
pub mod wm;
