/// Highlighted row over a list of `len` items.
///
/// `selected` is `None` exactly when the list is empty; otherwise it is a
/// valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<usize>,
    len: usize,
}

impl Selection {
    /// Selection for a freshly rendered list: first row, or nothing.
    pub fn new(len: usize) -> Self {
        Self {
            selected: if len == 0 { None } else { Some(0) },
            len,
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wraps from the last row to the first.
    pub fn move_down(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.len);
        }
    }

    /// Wraps from the first row to the last.
    pub fn move_up(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + self.len - 1) % self.len);
        }
    }
}
