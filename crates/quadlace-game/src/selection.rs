use quadlace_core::Position;

/// The currently selected cell, with both coordinate systems resolved.
///
/// This is the bundle a UI needs to highlight the selection: the global
/// position, the group-major coordinates, and whether a placement at the
/// cell can succeed. It is a snapshot; the next call to
/// [`Engine::select_cell`](crate::Engine::select_cell) overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Global board position.
    pub position: Position,
    /// Index of the containing 2×2 group (0-3).
    pub group: u8,
    /// Cell index within the group (0-3).
    pub cell: u8,
    /// Whether the cell accepts input under the engine's policy.
    pub editable: bool,
}

impl Selection {
    pub(crate) fn new(position: Position, editable: bool) -> Self {
        Self {
            position,
            group: position.group_index(),
            cell: position.cell_index(),
            editable,
        }
    }
}
