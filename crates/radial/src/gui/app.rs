use crate::events::AppEvent;
use crate::gui::menu::{Frame, FrameRenderer, paint};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window::{self, LayerOverlay};
use gtk::prelude::*;
use gtk4 as gtk;
use radial_core::config::{Menu, TriggerButton};
use radial_core::controller::Controller;
use radial_core::dispatch::SystemDispatcher;
use radial_core::geometry::Point;
use radial_core::ports::RenderError;
use radial_core::wm;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type MenuController = Controller<LayerOverlay, FrameRenderer, SystemDispatcher>;

pub struct AppModel {
    pub controller: MenuController,
    pub root: gtk::ApplicationWindow,
}

#[derive(Debug)]
pub enum AppMsg {
    Button(TriggerButton, bool),
    PointerMove(Point),
    RenderFailed(String),
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Button { button, pressed } => AppMsg::Button(button, pressed),
            AppEvent::PointerMove(p) => AppMsg::PointerMove(p),
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Menu, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Radial"),
            add_css_class: "radial-window",
            set_decorated: false,

            #[local_ref]
            drawing_area -> gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "radial-drawing-area",

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::PointerMove(Point::new(x, y)));
                    }
                },

                add_controller = gtk::GestureClick {
                    set_button: 0, // Listen to all buttons
                    connect_pressed[sender] => move |gesture, _, _, _| {
                        if let Some(button) = TriggerButton::from_button_number(gesture.current_button()) {
                            sender.input(AppMsg::Button(button, true));
                        }
                    },
                    connect_released[sender] => move |gesture, _, _, _| {
                        if let Some(button) = TriggerButton::from_button_number(gesture.current_button()) {
                            sender.input(AppMsg::Button(button, false));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (menu, rx) = init;

        theme::load_css();
        let layer_shell = window::init_layer_shell(&root);

        let frame = Rc::new(RefCell::new(Frame::new(menu.layout)));
        let drawing_area = gtk::DrawingArea::default();

        let controller = Controller::new(
            menu,
            LayerOverlay::new(root.clone(), frame.clone(), layer_shell),
            FrameRenderer::new(frame.clone(), drawing_area.clone()),
            SystemDispatcher,
        );
        let model = AppModel {
            controller,
            root: root.clone(),
        };

        let drawing_area = &drawing_area;
        let widgets = view_output!();

        let colors = ThemeColors::default();
        let sender_draw = sender.clone();
        drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = paint(cr, &frame.borrow(), &colors) {
                log::error!("Drawing error: {}", e);
                sender_draw.input(AppMsg::RenderFailed(e.to_string()));
            }
        });

        let sender_events = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_events.input(AppMsg::from(event));
            }
        });

        for signal in [libc::SIGINT, libc::SIGTERM] {
            let sender = sender.clone();
            glib::unix_signal_add_local(signal, move || {
                sender.input(AppMsg::Quit);
                glib::ControlFlow::Break
            });
        }

        // the application shows its root window after init; stay hidden
        // until the first trigger press
        let hidden = root.clone();
        hidden.set_opacity(0.0);
        glib::idle_add_local_once(move || hidden.set_visible(false));

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Button(button, pressed) => {
                let root = &self.root;
                self.controller.on_button(button, pressed, || {
                    wm::get_cursor_pos_on_active_monitor()
                        .or_else(|| window::get_cursor_position(root))
                        .unwrap_or_default()
                });
            }
            AppMsg::PointerMove(point) => self.controller.on_pointer_move(point),
            AppMsg::RenderFailed(reason) => {
                self.controller.on_render_failure(RenderError::Draw(reason));
            }
            AppMsg::Quit => {
                self.controller.shutdown();
                relm4::main_application().quit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_events_map_to_messages() {
        let msg = AppMsg::from(AppEvent::Button {
            button: TriggerButton::XButton1,
            pressed: false,
        });
        assert!(matches!(msg, AppMsg::Button(TriggerButton::XButton1, false)));

        let msg = AppMsg::from(AppEvent::PointerMove(Point::new(3.0, 4.0)));
        assert!(matches!(msg, AppMsg::PointerMove(p) if p == Point::new(3.0, 4.0)));

        assert!(matches!(AppMsg::from(AppEvent::Quit), AppMsg::Quit));
    }
}
