use crate::grid::Grid;

/// Walk `parent` links from the end cell back to the start, flagging each
/// cell `is_path` (start included when the chain reaches it).
/// Returns the number of cells flagged.
pub fn reconstruct_path(grid: &mut Grid) -> usize {
    let start = grid.start_index();
    let limit = grid.size();
    let mut current = Some(grid.end_index());
    let mut marked = 0;

    while let Some(idx) = current {
        // A corrupted parent chain must not spin forever
        if marked >= limit {
            break;
        }
        let cell = grid.get_mut(idx);
        cell.is_path = true;
        marked += 1;
        if idx == start {
            break;
        }
        current = cell.parent;
    }
    marked
}

/// Path cells ordered start -> end, following the recorded parents.
/// Empty when the end was never reached.
pub fn path_indices(grid: &Grid) -> Vec<usize> {
    let start = grid.start_index();
    let mut out = Vec::new();
    let mut current = Some(grid.end_index());

    while let Some(idx) = current {
        if out.len() >= grid.size() {
            return Vec::new();
        }
        out.push(idx);
        if idx == start {
            out.reverse();
            return out;
        }
        current = grid.get(idx).parent;
    }
    Vec::new()
}
