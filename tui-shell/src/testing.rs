//! Test utilities
//!
//! - [`key`]: build a `KeyEvent` from a string (`"a"`, `"enter"`, `"ctrl+p"`)
//! - [`RenderHarness`]: render into a `TestBackend` and assert on the text
//! - [`ActionAssertions`]: terse checks on a component's emitted actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

/// Build a `KeyEvent` from a key string.
///
/// Supports single characters, named keys (`enter`, `esc`, `backspace`,
/// `delete`, `tab`, `up`, `down`, `left`, `right`, `home`, `end`, `space`)
/// and `ctrl+`/`alt+`/`shift+` prefixes. `shift+tab` maps to `BackTab`.
///
/// # Panics
///
/// Panics on a string it cannot parse, which is what a test wants.
pub fn key(s: &str) -> KeyEvent {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = s;

    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(tail) = lower.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = &rest[rest.len() - tail.len()..];
        } else if let Some(tail) = lower.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = &rest[rest.len() - tail.len()..];
        } else if let Some(tail) = lower.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = &rest[rest.len() - tail.len()..];
        } else {
            break;
        }
    }

    // Named keys compare case-insensitively; a single character keeps its
    // case so "G" stays Char('G').
    let code = match rest.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => panic!("invalid key string: {s:?}"),
            }
        }
    };

    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// A `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// A `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Renders components into an in-memory terminal for assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    /// Render via the closure and return the buffer as plain text
    /// (one line per row, styling stripped).
    pub fn render_to_string_plain<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw");

        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

/// Terse assertions for the actions a component emitted.
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
}

impl<A: PartialEq + std::fmt::Debug> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {self:?}");
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {expected} action(s), got: {self:?}"
        );
    }

    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(*first, expected),
            None => panic!("expected {expected:?}, but no actions were emitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn key_with_ctrl() {
        let k = key("ctrl+p");
        assert_eq!(k.code, KeyCode::Char('p'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
        assert_eq!(key("down").code, KeyCode::Down);
        assert_eq!(key("G").code, KeyCode::Char('G'));
    }

    #[test]
    fn render_harness_captures_text() {
        let mut harness = RenderHarness::new(20, 3);
        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello there"), frame.area());
        });
        assert!(output.contains("hello there"));
    }

    #[test]
    fn action_assertions() {
        let actions = vec![1, 2, 3];
        actions.assert_count(3);
        actions.assert_first(1);

        let empty: Vec<i32> = vec![];
        empty.assert_empty();
    }
}
