//! Key mapping from terminal events to stage commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a stage command.
///
/// Release events (only reported by terminals with the kitty protocol) are
/// ignored so one keystroke yields one command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::Impulse),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::ToggleGravity),

        // Reset
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(Command::Reset)
        }

        // Population
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::GrowPopulation),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Command::ShrinkPopulation),

        _ => None,
    }
}

/// Check if key should stop the dance.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_stage_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Impulse)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(Command::ToggleGravity)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('G'))),
            Some(Command::ToggleGravity)
        );
    }

    #[test]
    fn test_reset_keys() {
        for c in ['w', 'W', 'r', 'R'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(Command::Reset)
            );
        }
    }

    #[test]
    fn test_population_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(Command::GrowPopulation)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('='))),
            Some(Command::GrowPopulation)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(Command::ShrinkPopulation)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('_'))),
            Some(Command::ShrinkPopulation)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unmapped_and_release_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);

        let mut release = KeyEvent::from(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(release), None);
    }
}
