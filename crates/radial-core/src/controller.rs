//! Press/hold/release state machine.
//!
//! The controller is `Idle` until the trigger button goes down, `Armed` while
//! it is held, and back to `Idle` on release or on any overlay failure. All
//! OS work goes through the injected collaborators, so the whole gesture can
//! be driven without a window system.

use crate::config::{Menu, TriggerButton};
use crate::geometry::{MenuLayout, Point};
use crate::ports::{ActionDispatcher, OverlayWindow, RenderError, Renderer};
use crate::sector::Sector;
use crate::selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Armed,
}

/// `hot` is only ever `Some` while `visible` is true.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    /// Cursor position at press time, in global coordinates.
    pub center: Point,
    /// Top-left corner of the overlay, in global coordinates.
    pub origin: Point,
    pub visible: bool,
    pub hot: Option<usize>,
}

pub struct Controller<W, R, D> {
    sectors: Vec<Sector>,
    trigger: TriggerButton,
    layout: MenuLayout,
    window: W,
    renderer: R,
    dispatcher: D,
    state: MenuState,
}

impl<W, R, D> Controller<W, R, D>
where
    W: OverlayWindow,
    R: Renderer,
    D: ActionDispatcher,
{
    pub fn new(menu: Menu, window: W, renderer: R, dispatcher: D) -> Self {
        Self {
            sectors: menu.sectors,
            trigger: menu.trigger,
            layout: menu.layout,
            window,
            renderer,
            dispatcher,
            state: MenuState::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.state.visible {
            Phase::Armed
        } else {
            Phase::Idle
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn hot_sector(&self) -> Option<&Sector> {
        self.state.hot.map(|idx| &self.sectors[idx])
    }

    /// `cursor` is only queried when the press arms the menu.
    pub fn on_button(
        &mut self,
        button: TriggerButton,
        pressed: bool,
        cursor: impl FnOnce() -> Point,
    ) {
        if button != self.trigger {
            log::trace!("Ignoring {} button", button);
            return;
        }

        match (pressed, self.phase()) {
            (true, Phase::Idle) => self.arm(cursor()),
            (false, Phase::Armed) => self.release(),
            (true, Phase::Armed) => log::debug!("Trigger pressed while menu is open"),
            (false, Phase::Idle) => {}
        }
    }

    pub fn on_pointer_move(&mut self, global: Point) {
        if !self.state.visible {
            return;
        }

        let local = global - self.state.origin;
        self.state.hot = selection::compute_hot_sector(
            self.layout.center(),
            local,
            &self.sectors,
            self.layout.radius(),
            self.layout.dead_zone_radius(),
        );
        self.redraw();
    }

    pub fn on_render_failure(&mut self, err: RenderError) {
        if !self.state.visible {
            log::debug!("Render error after the menu closed: {}", err);
            return;
        }
        log::error!("Render error, closing menu: {}", err);
        self.teardown();
    }

    /// Closes an open menu without running anything.
    pub fn shutdown(&mut self) {
        if self.state.visible {
            log::info!("Closing menu on shutdown");
            self.teardown();
        }
    }

    pub fn redraw(&mut self) {
        if !self.state.visible {
            return;
        }

        self.renderer.clear();
        for (idx, sector) in self.sectors.iter().enumerate() {
            self.renderer.draw_sector_marker(
                self.layout.marker_position(sector.angle),
                self.state.hot == Some(idx),
                sector.label.truncated(),
            );
        }
        if let Err(e) = self.renderer.present() {
            self.on_render_failure(e);
        }
    }

    fn arm(&mut self, cursor: Point) {
        if let Err(e) = self.window.create() {
            log::error!("Failed to create overlay: {}", e);
            return;
        }

        self.state = MenuState {
            center: cursor,
            origin: self.layout.origin_for(cursor),
            visible: true,
            hot: None,
        };
        log::debug!("Menu armed at ({}, {})", cursor.x, cursor.y);

        self.window.move_to(self.state.origin);
        self.window.show();
        self.redraw();
    }

    fn release(&mut self) {
        let selected = self.state.hot;
        self.teardown();

        let Some(idx) = selected else {
            log::debug!("Released without a selection");
            return;
        };
        let sector = &self.sectors[idx];
        log::info!("Running '{}': {}", sector.label, sector.action);
        if let Err(e) = sector.action.dispatch(&mut self.dispatcher) {
            log::error!("Failed to run '{}': {}", sector.label, e);
        }
    }

    fn teardown(&mut self) {
        self.state.visible = false;
        self.state.hot = None;
        self.window.hide();
        self.window.destroy();
    }
}
