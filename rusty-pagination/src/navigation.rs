//! Pure page index state machine.

use crate::emoji::NavSymbol;

/// Clamped page cursor over `page_count` pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Navigator {
    index: usize,
    page_count: usize,
}

impl Navigator {
    /// Start at the first page. `page_count` is treated as at least one.
    pub fn new(page_count: usize) -> Self {
        Self {
            index: 0,
            page_count: page_count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn last_index(&self) -> usize {
        self.page_count - 1
    }

    /// Index `symbol` would move to, or `None` at a boundary.
    pub fn target(&self, symbol: NavSymbol) -> Option<usize> {
        let target = match symbol {
            NavSymbol::First => 0,
            NavSymbol::Previous => self.index.saturating_sub(1),
            NavSymbol::Next => (self.index + 1).min(self.last_index()),
            NavSymbol::Last => self.last_index(),
        };

        (target != self.index).then_some(target)
    }

    /// Move to `index`. Out-of-range values are clamped.
    pub fn commit(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }

    /// Apply `symbol` and return the new index when it changed.
    pub fn apply(&mut self, symbol: NavSymbol) -> Option<usize> {
        let target = self.target(symbol)?;
        self.commit(target);
        Some(target)
    }
}
