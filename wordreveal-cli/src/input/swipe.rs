//! Horizontal drag gestures

/// Direction of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged toward the left edge; reveals
    Left,
    /// Dragged toward the right edge; hides
    Right,
}

/// Recognizes at most one swipe per drag
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_columns: u16,
    max_rows: u16,
    origin: Option<(u16, u16)>,
    fired: bool,
}

impl SwipeTracker {
    pub fn new(min_columns: u16, max_rows: u16) -> Self {
        Self {
            min_columns,
            max_rows,
            origin: None,
            fired: false,
        }
    }

    /// Pointer went down at `(column, row)`
    pub fn begin(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
        self.fired = false;
    }

    /// Pointer moved with the button held
    ///
    /// Returns the swipe the first time the horizontal distance exceeds the
    /// column threshold while the vertical drift stays under the row
    /// threshold.
    pub fn update(&mut self, column: u16, row: u16) -> Option<Swipe> {
        let (start_column, start_row) = self.origin?;
        if self.fired {
            return None;
        }

        let dx = i32::from(column) - i32::from(start_column);
        let dy = i32::from(row) - i32::from(start_row);
        if dx.unsigned_abs() <= u32::from(self.min_columns)
            || dy.unsigned_abs() >= u32::from(self.max_rows)
        {
            return None;
        }

        self.fired = true;
        Some(if dx < 0 { Swipe::Left } else { Swipe::Right })
    }

    /// Pointer released; returns whether the drag was a swipe
    pub fn end(&mut self) -> bool {
        let fired = self.fired;
        self.origin = None;
        self.fired = false;
        fired
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
