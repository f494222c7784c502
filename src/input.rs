//! Input adapter: raw crossterm events in, game actions out.
//!
//! The mapping does not look at the game status; `compute::handle_action`
//! decides what an action means in each state.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use egg_catcher::entities::Action;

/// Translate one terminal event. `px_per_col` converts a mouse column into
/// playfield pixels (the pointer lands in the middle of the cell).
pub fn map_event(event: &Event, px_per_col: f32) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(MouseEvent { kind, column, .. }) => match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => Some(
                Action::SetBasketPosition(f32::from(*column) * px_per_col + px_per_col / 2.0),
            ),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    // Press and auto-repeat both count; releases never do.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::PauseResume),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::ToMenu),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveBasketLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveBasketRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn letters_map_to_actions() {
        let cases = [
            ('s', Action::Start),
            ('R', Action::Restart),
            ('p', Action::PauseResume),
            ('m', Action::ToMenu),
            ('q', Action::Quit),
            ('a', Action::MoveBasketLeft),
            ('D', Action::MoveBasketRight),
        ];
        for (c, expected) in cases {
            let ev = key(KeyCode::Char(c), KeyEventKind::Press);
            assert_eq!(map_event(&ev, 10.0), Some(expected), "key {c:?}");
        }
    }

    #[test]
    fn arrows_and_escape() {
        assert_eq!(
            map_event(&key(KeyCode::Left, KeyEventKind::Press), 10.0),
            Some(Action::MoveBasketLeft)
        );
        assert_eq!(
            map_event(&key(KeyCode::Right, KeyEventKind::Repeat), 10.0),
            Some(Action::MoveBasketRight)
        );
        assert_eq!(
            map_event(&key(KeyCode::Esc, KeyEventKind::Press), 10.0),
            Some(Action::Quit)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&ev, 10.0), Some(Action::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        let ev = key(KeyCode::Char('s'), KeyEventKind::Release);
        assert_eq!(map_event(&ev, 10.0), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let ev = key(KeyCode::Char('x'), KeyEventKind::Press);
        assert_eq!(map_event(&ev, 10.0), None);
        assert_eq!(map_event(&Event::FocusGained, 10.0), None);
    }

    #[test]
    fn pointer_column_maps_to_cell_centre() {
        let ev = mouse(MouseEventKind::Moved, 12);
        assert_eq!(map_event(&ev, 10.0), Some(Action::SetBasketPosition(125.0)));

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 0);
        assert_eq!(map_event(&drag, 10.0), Some(Action::SetBasketPosition(5.0)));
    }

    #[test]
    fn scroll_is_ignored() {
        let ev = mouse(MouseEventKind::ScrollUp, 12);
        assert_eq!(map_event(&ev, 10.0), None);
    }
}
