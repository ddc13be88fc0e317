//! Unit completion tracking.

use towerdoku_core::Unit;

/// Membership sets for the units currently complete: rows, columns, and
/// 3×3 boxes.
///
/// The board state manager updates these during completion checks so each
/// unit's incomplete-to-complete transition is reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionStatus {
    rows: [bool; 9],
    columns: [bool; 9],
    boxes: [bool; 9],
}

impl CompletionStatus {
    /// Returns `true` if the unit is currently marked complete.
    #[must_use]
    pub fn contains(&self, unit: Unit) -> bool {
        match unit {
            Unit::Row { row } => self.rows[usize::from(row)],
            Unit::Column { col } => self.columns[usize::from(col)],
            Unit::Box { index } => self.boxes[usize::from(index)],
        }
    }

    /// Marks the unit complete, returning `true` if it was newly marked.
    pub(crate) fn insert(&mut self, unit: Unit) -> bool {
        let slot = self.slot_mut(unit);
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Clears the unit's completion mark.
    pub(crate) fn remove(&mut self, unit: Unit) {
        *self.slot_mut(unit) = false;
    }

    fn slot_mut(&mut self, unit: Unit) -> &mut bool {
        match unit {
            Unit::Row { row } => &mut self.rows[usize::from(row)],
            Unit::Column { col } => &mut self.columns[usize::from(col)],
            Unit::Box { index } => &mut self.boxes[usize::from(index)],
        }
    }

    /// Returns the indices of the completed rows, in increasing order.
    pub fn completed_rows(&self) -> impl Iterator<Item = u8> {
        Self::indices(self.rows)
    }

    /// Returns the indices of the completed columns, in increasing order.
    pub fn completed_columns(&self) -> impl Iterator<Item = u8> {
        Self::indices(self.columns)
    }

    /// Returns the indices of the completed boxes, in increasing order.
    pub fn completed_boxes(&self) -> impl Iterator<Item = u8> {
        Self::indices(self.boxes)
    }

    /// Returns the total number of completed units.
    #[must_use]
    pub fn len(&self) -> usize {
        Unit::ALL
            .into_iter()
            .filter(|unit| self.contains(*unit))
            .count()
    }

    /// Returns `true` if no unit is complete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn indices(flags: [bool; 9]) -> impl Iterator<Item = u8> {
        (0_u8..9).filter(move |i| flags[usize::from(*i)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_transitions_once() {
        let mut status = CompletionStatus::default();
        let unit = Unit::Row { row: 3 };

        assert!(!status.contains(unit));
        assert!(status.insert(unit));
        assert!(!status.insert(unit));
        assert!(status.contains(unit));

        status.remove(unit);
        assert!(!status.contains(unit));
        assert!(status.insert(unit));
    }

    #[test]
    fn test_kinds_are_tracked_independently() {
        let mut status = CompletionStatus::default();
        status.insert(Unit::Row { row: 2 });
        status.insert(Unit::Column { col: 2 });

        assert!(!status.contains(Unit::Box { index: 2 }));
        assert_eq!(status.completed_rows().collect::<Vec<_>>(), vec![2]);
        assert_eq!(status.completed_columns().collect::<Vec<_>>(), vec![2]);
        assert_eq!(status.completed_boxes().count(), 0);
        assert_eq!(status.len(), 2);
    }
}
