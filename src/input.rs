use macroquad::prelude::*;

use crate::vector::Vector2;

pub const DRAG_KEY: KeyCode = KeyCode::D;
const LINK_MODIFIERS: [KeyCode; 2] = [KeyCode::LeftControl, KeyCode::RightControl];

/// An input event, already translated into the simulation's terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    PointerMoved(Vector2),
    PrimaryDown(Vector2),
    SecondaryDown(Vector2),
    DragKey { pressed: bool },
    LinkModifier { pressed: bool },
}

/// Polls macroquad once per frame and queues the resulting commands.
#[derive(Debug, Default)]
pub struct InputTranslator {
    last_pointer: Option<Vector2>,
}
impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self) -> Vec<Command> {
        let mut commands = vec![];

        // Moves go first so clicks in the same frame land where the pointer is now
        let pointer = Vector2::from(mouse_position());
        if self.last_pointer != Some(pointer) {
            self.last_pointer = Some(pointer);
            commands.push(Command::PointerMoved(pointer));
        }

        if LINK_MODIFIERS.iter().any(|key| is_key_pressed(*key)) {
            commands.push(Command::LinkModifier { pressed: true });
        }
        if LINK_MODIFIERS.iter().any(|key| is_key_released(*key))
            && !LINK_MODIFIERS.iter().any(|key| is_key_down(*key))
        {
            commands.push(Command::LinkModifier { pressed: false });
        }

        if is_key_pressed(DRAG_KEY) {
            commands.push(Command::DragKey { pressed: true });
        }
        if is_key_released(DRAG_KEY) {
            commands.push(Command::DragKey { pressed: false });
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            commands.push(Command::PrimaryDown(pointer));
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            commands.push(Command::SecondaryDown(pointer));
        }

        commands
    }
}
