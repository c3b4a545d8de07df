//! Cardinal directions for grid traversal

/// One of the four cardinal offsets used when traversing a grid
///
/// Pure data with no behavior of its own; consumed by
/// [`Position::destination`](crate::grid::Position::destination). `Up`
/// increases y and `Right` increases x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The south direction (decreasing y)
    Down = 0,
    /// The west direction (decreasing x)
    Left,
    /// The east direction (increasing x)
    Right,
    /// The north direction (increasing y)
    Up,
}
