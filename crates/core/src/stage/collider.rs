//! Run-length merging of solid cells into coarse collider spans.

use serde::Serialize;

use crate::error::LayoutError;
use crate::grid::Grid;
use crate::types::{CellType, Pos, Vec3};

use super::StageLayout;

/// Shortest run worth merging; single solid cells are left to per-cell handling.
pub const MIN_SPAN_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SpanAxis {
    Row,
    Column,
}

/// Inclusive, axis-aligned run of physical cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColliderSpan {
    start: Pos,
    end: Pos,
}

impl ColliderSpan {
    pub fn new(start: Pos, end: Pos, width: usize, height: usize) -> Result<Self, LayoutError> {
        for pos in [start, end] {
            let inside =
                pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height;
            if !inside {
                return Err(LayoutError::OutOfRange { pos, width, height });
            }
        }
        let same_row = start.y == end.y && start.x <= end.x;
        let same_column = start.x == end.x && start.y <= end.y;
        if !same_row && !same_column {
            return Err(LayoutError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    pub fn axis(&self) -> SpanAxis {
        if self.start.y == self.end.y { SpanAxis::Row } else { SpanAxis::Column }
    }

    pub fn cell_count(&self) -> usize {
        (self.end.x - self.start.x + self.end.y - self.start.y) as usize + 1
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + use<> {
        let Self { start, end } = *self;
        (start.y..=end.y).flat_map(move |y| (start.x..=end.x).map(move |x| Pos { y, x }))
    }
}

/// Box collider derived from a span, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColliderBox {
    pub center: Vec3,
    pub size: Vec3,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColliderSpans {
    pub rows: Vec<ColliderSpan>,
    pub columns: Vec<ColliderSpan>,
}

impl ColliderSpans {
    pub fn len(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColliderSpan> {
        self.rows.iter().chain(self.columns.iter())
    }
}

impl StageLayout {
    pub fn collider_spans(&self) -> ColliderSpans {
        scan_solid_runs(&self.physical)
    }

    /// World-space box covering `span`, one cell deep on the cross axis.
    pub fn collider_box(&self, span: &ColliderSpan) -> ColliderBox {
        let size = self.params.cell_size;
        let first = self.world_position(span.start);
        let last = self.world_position(span.end);
        ColliderBox {
            center: (first + last) / 2.0,
            size: Vec3::new(
                (span.end.x - span.start.x + 1) as f32 * size,
                size,
                (span.end.y - span.start.y + 1) as f32 * size,
            ),
        }
    }
}

pub(crate) fn scan_solid_runs(grid: &Grid<CellType>) -> ColliderSpans {
    let width = grid.width();
    let height = grid.height();
    let mut spans = ColliderSpans::default();

    for y in 0..height {
        let lane: Vec<bool> = grid.row(y).iter().map(|cell| cell.is_solid()).collect();
        for (first, last) in solid_runs(&lane) {
            let start = Pos { y: y as i32, x: first as i32 };
            let end = Pos { y: y as i32, x: last as i32 };
            spans.rows.push(checked_span(start, end, width, height));
        }
    }

    for x in 0..width {
        let lane: Vec<bool> = (0..height)
            .map(|y| grid.get(Pos { y: y as i32, x: x as i32 }).is_some_and(CellType::is_solid))
            .collect();
        for (first, last) in solid_runs(&lane) {
            let start = Pos { y: first as i32, x: x as i32 };
            let end = Pos { y: last as i32, x: x as i32 };
            spans.columns.push(checked_span(start, end, width, height));
        }
    }

    spans
}

/// Inclusive index pairs of every run of `true` at least `MIN_SPAN_LEN` long.
fn solid_runs(lane: &[bool]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut run_start = None;
    for index in 0..=lane.len() {
        let solid = lane.get(index).copied().unwrap_or(false);
        match (solid, run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(first)) => {
                if index - first >= MIN_SPAN_LEN {
                    runs.push((first, index - 1));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    runs
}

fn checked_span(start: Pos, end: Pos, width: usize, height: usize) -> ColliderSpan {
    ColliderSpan::new(start, end, width, height)
        .unwrap_or_else(|err| panic!("solid-run scan produced an invalid span: {err}"))
}
