use radial_core::config::TriggerButton;
use radial_core::geometry::Point;
use radial_core::ipc::IpcCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Button { button: TriggerButton, pressed: bool },
    PointerMove(Point),
    Quit,
}

impl From<IpcCommand> for AppEvent {
    fn from(command: IpcCommand) -> Self {
        match command {
            IpcCommand::Press(button) => AppEvent::Button {
                button,
                pressed: true,
            },
            IpcCommand::Release(button) => AppEvent::Button {
                button,
                pressed: false,
            },
            IpcCommand::Move(p) => AppEvent::PointerMove(p),
            IpcCommand::Quit => AppEvent::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipc_commands_become_events() {
        let event = AppEvent::from(IpcCommand::Press(TriggerButton::Middle));
        assert!(matches!(
            event,
            AppEvent::Button {
                button: TriggerButton::Middle,
                pressed: true
            }
        ));
        let event = AppEvent::from(IpcCommand::Move(Point::new(10.0, 20.0)));
        assert!(matches!(event, AppEvent::PointerMove(p) if p == Point::new(10.0, 20.0)));
        assert!(matches!(AppEvent::from(IpcCommand::Quit), AppEvent::Quit));
    }
}
