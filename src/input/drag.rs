/// Primary-button drag tracking.
///
/// `Idle` until the primary button goes down; `Dragging` records the last
/// pointer position so each move yields a delta. Release returns to `Idle`
/// and discards the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging {
        last_x: i32,
        last_y: i32,
    },
}

impl DragState {
    /// Start (or restart) a drag at `(x, y)`.
    pub(crate) fn press(&mut self, x: i32, y: i32) {
        *self = Self::Dragging {
            last_x: x,
            last_y: y,
        };
    }

    /// Record a pointer move. Returns the delta from the previous position
    /// while dragging, `None` while idle.
    pub(crate) fn motion(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_x, last_y } => {
                let delta = (x.saturating_sub(*last_x), y.saturating_sub(*last_y));
                *last_x = x;
                *last_y = y;
                Some(delta)
            }
        }
    }

    /// End the drag. Returns whether a drag was in progress.
    pub(crate) fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }

    pub(crate) fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_motion_yields_nothing() {
        let mut drag = DragState::default();
        assert_eq!(drag.motion(10, 10), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn deltas_are_relative_to_last_position() {
        let mut drag = DragState::default();
        drag.press(100, 100);
        assert_eq!(drag.motion(110, 95), Some((10, -5)));
        assert_eq!(drag.motion(110, 95), Some((0, 0)));
        assert_eq!(drag.motion(100, 100), Some((-10, 5)));
        assert!(drag.release());
        assert!(!drag.release());
        assert_eq!(drag.motion(0, 0), None);
    }
}
