//! Breadth-first reachability over passable cells.

use std::collections::{BTreeSet, VecDeque};

use crate::grid::Grid;
use crate::types::{CellType, Pos};

pub(crate) fn reachable_cells(grid: &Grid<CellType>, from: Pos) -> BTreeSet<Pos> {
    let mut visited = BTreeSet::new();
    if !grid.get(from).is_some_and(CellType::is_passable) {
        return visited;
    }

    let mut queue = VecDeque::from([from]);
    visited.insert(from);
    while let Some(current) = queue.pop_front() {
        for direction in Pos::DIRECTIONS {
            let next = current + direction;
            if grid.get(next).is_some_and(CellType::is_passable) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

pub(crate) fn path_exists(grid: &Grid<CellType>, from: Pos, to: Pos) -> bool {
    reachable_cells(grid, from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor_fixture() -> Grid<CellType> {
        let mut grid = Grid::filled(5, 5, CellType::Block);
        for x in 0..5 {
            grid.set(Pos::new(x, 0), CellType::Floor);
        }
        grid.set(Pos::new(0, 0), CellType::Goal);
        grid.set(Pos::new(4, 1), CellType::Ceiling);
        grid.set(Pos::new(4, 2), CellType::Start);
        grid.set(Pos::new(0, 4), CellType::Floor);
        grid
    }

    #[test]
    fn ceilings_do_not_block_reachability() {
        let grid = corridor_fixture();
        assert!(path_exists(&grid, Pos::new(4, 2), Pos::new(0, 0)));
    }

    #[test]
    fn isolated_cells_are_unreachable() {
        let grid = corridor_fixture();
        assert!(!path_exists(&grid, Pos::new(4, 2), Pos::new(0, 4)));
        assert_eq!(reachable_cells(&grid, Pos::new(0, 4)).len(), 1);
    }

    #[test]
    fn solid_origin_reaches_nothing() {
        let grid = corridor_fixture();
        assert!(reachable_cells(&grid, Pos::new(1, 1)).is_empty());
    }
}
