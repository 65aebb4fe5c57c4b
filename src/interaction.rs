//! Point-interaction controller.
//!
//! Owns the two labeled endpoints `A` and `B` of an interactive demo and turns
//! pointer events into coordinate edits. Rasterizers only ever read the
//! resulting [`Segment`]; nothing else mutates the points.
//!
//! ```text
//!             PointerDown(cell)
//!   Idle ───────────────────────────▶ Dragging(A | B)
//!    ▲                                  │  PointerMove(cell): subject = clamp(cell)
//!    └──────── PointerUp / Leave ───────┘
//! ```

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{GridBounds, GridPoint, Segment};
use crate::presets;

/// Default pointer-down grab radius, in Manhattan cells.
pub const DEFAULT_HIT_RADIUS: u32 = 1;

/// Identity of an endpoint. Labels never swap; only coordinates change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLabel {
    /// First endpoint.
    A,
    /// Second endpoint.
    B,
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
        })
    }
}

/// Current drag subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No point is being dragged.
    #[default]
    Idle,
    /// The labeled point follows pointer moves.
    Dragging(PointLabel),
}

/// Pointer input, already mapped to a grid cell by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed over a cell.
    Down(GridPoint),
    /// Pointer moved over a cell.
    Move(GridPoint),
    /// Button released.
    Up,
    /// Pointer left the grid surface.
    Leave,
}

/// Two labeled, grid-bounded points and the drag state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    a: GridPoint,
    b: GridPoint,
    grid_size: u32,
    bounds: GridBounds,
    hit_radius: u32,
    drag: DragState,
}

impl InteractionState {
    /// Create an idle state on a `grid_size` x `grid_size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] for an unusable grid size and
    /// [`Error::OutOfBounds`] if either point lies outside the grid.
    pub fn new(grid_size: u32, a: GridPoint, b: GridPoint) -> Result<Self> {
        let bounds = GridBounds::square(grid_size)?;
        for point in [a, b] {
            if !bounds.contains(point) {
                return Err(Error::OutOfBounds { point, bounds });
            }
        }
        Ok(Self {
            a,
            b,
            grid_size,
            bounds,
            hit_radius: DEFAULT_HIT_RADIUS,
            drag: DragState::Idle,
        })
    }

    /// Set the pointer-down grab radius.
    #[must_use]
    pub fn with_hit_radius(mut self, hit_radius: u32) -> Self {
        self.hit_radius = hit_radius;
        self
    }

    /// Position of a labeled point.
    #[must_use]
    pub const fn point(&self, label: PointLabel) -> GridPoint {
        match label {
            PointLabel::A => self.a,
            PointLabel::B => self.b,
        }
    }

    /// Position of `A`.
    #[must_use]
    pub const fn a(&self) -> GridPoint {
        self.a
    }

    /// Position of `B`.
    #[must_use]
    pub const fn b(&self) -> GridPoint {
        self.b
    }

    /// Segment `A -> B` for the rasterizers.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        Segment::new(self.a, self.b)
    }

    /// Cells per side.
    #[must_use]
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Grid as bounds, `[0, grid_size - 1]²`.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Pointer-down grab radius.
    #[must_use]
    pub const fn hit_radius(&self) -> u32 {
        self.hit_radius
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    /// Label being dragged, if any.
    #[must_use]
    pub const fn dragging(&self) -> Option<PointLabel> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(label) => Some(label),
        }
    }

    /// Pure transition: consume the state and return the next one.
    #[must_use]
    pub fn transition(mut self, event: PointerEvent) -> Self {
        self.apply(event);
        self
    }

    /// Apply one pointer event in place.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(cell) => self.pointer_down(cell),
            PointerEvent::Move(cell) => self.pointer_move(cell),
            PointerEvent::Up | PointerEvent::Leave => self.release(),
        }
    }

    /// Pick a drag subject for a press at `cell`.
    ///
    /// A point within the hit radius is grabbed as-is (`A` checked first).
    /// Otherwise the closer point (`A` only when strictly closer) jumps to the
    /// clicked cell and is grabbed.
    pub fn pointer_down(&mut self, cell: GridPoint) {
        let cell = self.bounds.clamp(cell);
        let radius = u64::from(self.hit_radius);
        let dist_a = cell.manhattan(self.a);
        let dist_b = cell.manhattan(self.b);

        let label = if dist_a <= radius {
            PointLabel::A
        } else if dist_b <= radius {
            PointLabel::B
        } else {
            let closer = if dist_a < dist_b { PointLabel::A } else { PointLabel::B };
            self.set(closer, cell);
            closer
        };

        self.drag = DragState::Dragging(label);
        debug!("pointer down at {cell}: dragging {label} at {}", self.point(label));
    }

    /// Move the drag subject to `cell`, clamped to the grid. Ignored when idle.
    pub fn pointer_move(&mut self, cell: GridPoint) {
        if let DragState::Dragging(label) = self.drag {
            let clamped = self.bounds.clamp(cell);
            self.set(label, clamped);
        }
    }

    /// End any drag.
    pub fn release(&mut self) {
        if let DragState::Dragging(label) = self.drag {
            debug!("released {label} at {}", self.point(label));
        }
        self.drag = DragState::Idle;
    }

    fn set(&mut self, label: PointLabel, cell: GridPoint) {
        match label {
            PointLabel::A => self.a = cell,
            PointLabel::B => self.b = cell,
        }
    }
}

/// The opening demo: 12x12 grid, `A = (2, 2)`, `B = (9, 8)`.
impl Default for InteractionState {
    fn default() -> Self {
        let preset = presets::INTRO;
        Self {
            a: preset.p0,
            b: preset.p1,
            grid_size: preset.grid_size,
            bounds: GridBounds::new(
                GridPoint::ORIGIN,
                GridPoint::new(preset.grid_size as i32 - 1, preset.grid_size as i32 - 1),
            ),
            hit_radius: DEFAULT_HIT_RADIUS,
            drag: DragState::Idle,
        }
    }
}
