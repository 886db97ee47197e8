/// Translate raw terminal events into per-tick game input.
///
/// The frame loop drains every event that arrived since the previous tick and
/// hands them to [`classify`], which collapses them into a single decision.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Input;

/// What a single key press means to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    Reset,
    Quit,
}

/// The outcome of one tick's worth of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameInput {
    /// Leave the frame loop without stepping.
    Quit,
    /// Run the simulation with this input.
    Step(Input),
}

pub fn key_to_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Reset),
        KeyCode::Char(' ') | KeyCode::Up => Some(KeyAction::Jump),
        _ => None,
    }
}

/// Collapse a batch of events: Quit beats Reset, Reset beats Jump.
pub fn classify<I>(events: I) -> FrameInput
where
    I: IntoIterator<Item = Event>,
{
    let mut jump = false;
    let mut reset = false;

    for event in events {
        let Event::Key(key) = event else { continue };
        match key_to_action(&key) {
            Some(KeyAction::Quit) => return FrameInput::Quit,
            Some(KeyAction::Reset) => reset = true,
            Some(KeyAction::Jump) => jump = true,
            None => {}
        }
    }

    if reset {
        FrameInput::Step(Input::Reset)
    } else if jump {
        FrameInput::Step(Input::Jump)
    } else {
        FrameInput::Step(Input::None)
    }
}
