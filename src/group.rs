use crate::{
    cells::CellSet,
    error::KMapResult,
    grid::{Cell, Grid},
    region::generate_regions,
};
use serde::Serialize;

/// A rectangle (with wraparound) of cells that are all minterms or don't-cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub cells: Vec<Cell>,
    /// Every cell of the group.
    pub members: CellSet,
    /// The cells of the group that are required minterms.
    pub covered_minterms: CellSet,
}

impl Group {
    pub fn new(cells: Vec<Cell>, minterms: CellSet) -> Self {
        let members: CellSet = cells.iter().map(|c| c.decimal).collect();
        Self {
            cells,
            members,
            covered_minterms: members & minterms,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every valid group containing `decimal`.
///
/// A group is valid when all of its cells are in `minterms | dont_cares`.
/// Groups with the same cells are reported once.
pub fn find_groups(
    decimal: usize,
    minterms: CellSet,
    dont_cares: CellSet,
    grid: &Grid,
) -> KMapResult<Vec<Group>> {
    let allowed = minterms | dont_cares;
    let anchor = grid.locate(decimal)?;
    let mut groups: Vec<Group> = vec![];

    for region in generate_regions(grid.row_count(), grid.col_count()) {
        let mut cells = Vec::with_capacity(region.area());
        let mut includes_anchor = false;
        let mut valid = true;
        for pos in region.walk(anchor, grid) {
            let cell = grid.cell(pos);
            if !allowed.contains(cell.decimal) {
                valid = false;
                break;
            }
            includes_anchor |= cell.decimal == decimal;
            cells.push(cell.clone());
        }

        if !valid || !includes_anchor {
            continue;
        }
        let group = Group::new(cells, minterms);
        if groups.iter().all(|g| g.members != group.members) {
            trace!("cell {}: group {}", decimal, group.members);
            groups.push(group);
        }
    }

    Ok(groups)
}
