use crate::cell::Cell;
use crate::classify::Classification;

/// Read-only access to the host-owned grid.
///
/// The engine never stores grid contents between ticks; it queries them
/// through this seam whenever it needs them. Hosts implement it over
/// whatever board representation they already own.
pub trait GridView {
    /// Grid width in cells. Valid `x` coordinates are `0..columns`.
    fn columns(&self) -> i32;

    /// Grid height in cells. Valid `y` coordinates are `0..rows`.
    fn rows(&self) -> i32;

    /// What occupies `cell`, or `None` when nothing does.
    fn entity_at(&self, cell: Cell) -> Option<Classification>;

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.columns() && cell.y < self.rows()
    }

    /// [`GridView::entity_at`] with vacancy normalized to
    /// [`Classification::Empty`].
    fn classification_at(&self, cell: Cell) -> Classification {
        self.entity_at(cell).unwrap_or(Classification::Empty)
    }
}
