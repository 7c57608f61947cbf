//! Drag gesture state
//!
//! A press records the cursor, each move reports how far the cursor went
//! since the last recorded point, and a release forgets everything.

/// Cursor movement since the last recorded position, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDelta {
    pub dx: i32,
    pub dy: i32,
}

impl DragDelta {
    /// New `(top, left)` for an element currently at `(top, left)`
    pub fn shift(self, top: i32, left: i32) -> (i32, i32) {
        (top + self.dy, left + self.dx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last_x: i32, last_y: i32 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Start (or restart) a gesture at the given cursor position
    pub fn press(&mut self, x: i32, y: i32) {
        *self = DragState::Dragging { last_x: x, last_y: y };
    }

    /// Record a cursor move; `None` when no gesture is active
    pub fn move_to(&mut self, x: i32, y: i32) -> Option<DragDelta> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { last_x, last_y } => {
                *self = DragState::Dragging { last_x: x, last_y: y };
                Some(DragDelta { dx: x - last_x, dy: y - last_y })
            }
        }
    }

    pub fn release(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut state = DragState::default();
        assert_eq!(state.move_to(10, 10), None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_gesture_accumulates_deltas() {
        let mut state = DragState::Idle;
        state.press(100, 100);

        let first = state.move_to(120, 115).unwrap();
        assert_eq!(first, DragDelta { dx: 20, dy: 15 });

        let second = state.move_to(90, 130).unwrap();
        assert_eq!(second, DragDelta { dx: -30, dy: 15 });

        assert_eq!(first.dx + second.dx, -10);
        assert_eq!(first.dy + second.dy, 30);

        let (top, left) = first.shift(500, 700);
        assert_eq!(second.shift(top, left), (530, 690));

        state.release();
        assert!(!state.is_dragging());
        assert_eq!(state.move_to(0, 0), None);
    }

    #[test]
    fn test_controller_is_reusable() {
        let mut state = DragState::Idle;
        state.press(0, 0);
        state.move_to(5, 5);
        state.release();

        state.press(50, 50);
        assert_eq!(state.move_to(49, 52), Some(DragDelta { dx: -1, dy: 2 }));
    }
}
