//! 3x3 structuring kernels for skeleton pattern matching
//!
//! Each kernel lists the pixels that must be set around (and including) the
//! center for a match; zero cells are ignored. The tables are built at compile
//! time, with rotated variants derived by [`Kernel::rotate90`].
//!
//! Kernel diagrams below use `x` for a required pixel and `.` for a cell that
//! is ignored, with `C` marking the required center.

use crate::error::MorphError;
use std::fmt;
use std::str::FromStr;

/// Immutable 3x3 {0,1} kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    name: &'static str,
    cells: [[u8; 3]; 3],
}

impl Kernel {
    /// Create a kernel from row-major cells
    pub const fn new(name: &'static str, cells: [[u8; 3]; 3]) -> Self {
        Self { name, cells }
    }

    /// Copy of this kernel rotated 90° counterclockwise
    ///
    /// `rotated[i][j] = cells[j][2 - i]`
    pub const fn rotate90(&self, name: &'static str) -> Self {
        let mut out = [[0u8; 3]; 3];
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                out[i][j] = self.cells[j][2 - i];
                j += 1;
            }
            i += 1;
        }
        Self { name, cells: out }
    }

    /// Full 3x3 neighborhood
    pub const fn square() -> Self {
        Self::new("square", [[1, 1, 1], [1, 1, 1], [1, 1, 1]])
    }

    /// Kernel name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Row-major cells
    pub fn cells(&self) -> &[[u8; 3]; 3] {
        &self.cells
    }

    /// Number of required pixels
    pub fn hit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// `(row, col)` offsets from the center of each required pixel
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(c, _)| (r as i64 - 1, c as i64 - 1))
        })
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                let ch = match (v != 0, r == 1 && c == 1) {
                    (true, true) => 'C',
                    (true, false) => 'x',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Branch-point kernels
// ============================================================================

// branch_y:
// .x.
// .C.
// x.x
const BRANCH_Y: Kernel = Kernel::new("branch_y", [[0, 1, 0], [0, 1, 0], [1, 0, 1]]);

// branch_v:
// x..
// .C.
// x.x
const BRANCH_V: Kernel = Kernel::new("branch_v", [[1, 0, 0], [0, 1, 0], [1, 0, 1]]);

// branch_t:
// x..
// .Cx
// .x.
const BRANCH_T: Kernel = Kernel::new("branch_t", [[1, 0, 0], [0, 1, 1], [0, 1, 0]]);

const BRANCH_Y_90: Kernel = BRANCH_Y.rotate90("branch_y_90");
const BRANCH_V_90: Kernel = BRANCH_V.rotate90("branch_v_90");
const BRANCH_T_90: Kernel = BRANCH_T.rotate90("branch_t_90");
const BRANCH_Y_180: Kernel = BRANCH_Y_90.rotate90("branch_y_180");
const BRANCH_V_180: Kernel = BRANCH_V_90.rotate90("branch_v_180");
const BRANCH_T_180: Kernel = BRANCH_T_90.rotate90("branch_t_180");
const BRANCH_Y_270: Kernel = BRANCH_Y_180.rotate90("branch_y_270");
const BRANCH_V_270: Kernel = BRANCH_V_180.rotate90("branch_v_270");
const BRANCH_T_270: Kernel = BRANCH_T_180.rotate90("branch_t_270");

// branch_plus:
// .x.
// xCx
// .x.
const BRANCH_PLUS: Kernel = Kernel::new("branch_plus", [[0, 1, 0], [1, 1, 1], [0, 1, 0]]);

// branch_x:
// x.x
// .C.
// x.x
const BRANCH_X: Kernel = Kernel::new("branch_x", [[1, 0, 1], [0, 1, 0], [1, 0, 1]]);

static BRANCH_KERNELS: [Kernel; 14] = [
    BRANCH_Y,
    BRANCH_V,
    BRANCH_T,
    BRANCH_Y_90,
    BRANCH_V_90,
    BRANCH_T_90,
    BRANCH_Y_180,
    BRANCH_V_180,
    BRANCH_T_180,
    BRANCH_Y_270,
    BRANCH_V_270,
    BRANCH_T_270,
    BRANCH_PLUS,
    BRANCH_X,
];

// ============================================================================
// Knight-move kernels (a diagonal step next to a straight step)
// ============================================================================

static MID_KERNELS: [Kernel; 8] = [
    // ...
    // .Cx
    // x..
    Kernel::new("mid_1", [[0, 0, 0], [0, 1, 1], [1, 0, 0]]),
    // x..
    // .Cx
    // ...
    Kernel::new("mid_2", [[1, 0, 0], [0, 1, 1], [0, 0, 0]]),
    // ..x
    // xC.
    // ...
    Kernel::new("mid_3", [[0, 0, 1], [1, 1, 0], [0, 0, 0]]),
    // ...
    // xC.
    // ..x
    Kernel::new("mid_4", [[0, 0, 0], [1, 1, 0], [0, 0, 1]]),
    // .x.
    // .C.
    // x..
    Kernel::new("mid_5", [[0, 1, 0], [0, 1, 0], [1, 0, 0]]),
    // .x.
    // .C.
    // ..x
    Kernel::new("mid_6", [[0, 1, 0], [0, 1, 0], [0, 0, 1]]),
    // x..
    // .C.
    // .x.
    Kernel::new("mid_7", [[1, 0, 0], [0, 1, 0], [0, 1, 0]]),
    // ..x
    // .C.
    // .x.
    Kernel::new("mid_8", [[0, 0, 1], [0, 1, 0], [0, 1, 0]]),
];

// ============================================================================
// Diagonal-run kernels
// ============================================================================

static DIAG_KERNELS: [Kernel; 2] = [
    // ..x
    // .C.
    // x..
    Kernel::new("diag_anti", [[0, 0, 1], [0, 1, 0], [1, 0, 0]]),
    // x..
    // .C.
    // ..x
    Kernel::new("diag_main", [[1, 0, 0], [0, 1, 0], [0, 0, 1]]),
];

/// Closed set of kernel families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelSet {
    /// Branch points: three-way junctions in all four orientations plus the
    /// four-way "+" and "x" junctions (14 kernels)
    Branch,
    /// Pixels between a straight step and a diagonal step (8 kernels)
    Mid,
    /// Pixels inside a diagonal run (2 kernels)
    Diag,
}

impl KernelSet {
    /// All kernel sets
    pub const ALL: [KernelSet; 3] = [KernelSet::Branch, KernelSet::Mid, KernelSet::Diag];

    /// The kernels of this set
    pub fn kernels(self) -> &'static [Kernel] {
        match self {
            KernelSet::Branch => &BRANCH_KERNELS,
            KernelSet::Mid => &MID_KERNELS,
            KernelSet::Diag => &DIAG_KERNELS,
        }
    }

    /// Lowercase category name
    pub fn name(self) -> &'static str {
        match self {
            KernelSet::Branch => "branch",
            KernelSet::Mid => "mid",
            KernelSet::Diag => "diag",
        }
    }
}

impl fmt::Display for KernelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelSet {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch" => Ok(KernelSet::Branch),
            "mid" => Ok(KernelSet::Mid),
            "diag" => Ok(KernelSet::Diag),
            other => Err(MorphError::InvalidCategory(other.to_string())),
        }
    }
}
