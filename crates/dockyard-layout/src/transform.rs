use dockyard_core::{Edge, Path, PointF, Rect};

// ──────────────────────────────────────────────
// Matrix
// ──────────────────────────────────────────────

/// 2×3 affine transform in row-vector form:
/// `x' = x·m11 + y·m21 + dx`, `y' = x·m12 + y·m22 + dy`.
/// Positive angles turn clockwise on screen (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Rotation by `degrees` about `pivot`. Quarter turns use exact
    /// coefficients so rotated integer geometry stays on the grid.
    pub fn rotate_at(degrees: f32, pivot: PointF) -> Matrix {
        let (sin, cos) = exact_sin_cos(degrees);
        Matrix {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            dx: pivot.x - pivot.x * cos + pivot.y * sin,
            dy: pivot.y - pivot.x * sin - pivot.y * cos,
        }
    }

    /// Horizontal mirror `x' = width − x`, swapping `0` and `width`.
    pub fn mirror_x(width: i32) -> Matrix {
        Matrix {
            m11: -1.0,
            m12: 0.0,
            m21: 0.0,
            m22: 1.0,
            dx: width as f32,
            dy: 0.0,
        }
    }

    /// `self` applied first, then `other`.
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            m11: self.m11 * other.m11 + self.m12 * other.m21,
            m12: self.m11 * other.m12 + self.m12 * other.m22,
            m21: self.m21 * other.m11 + self.m22 * other.m21,
            m22: self.m21 * other.m12 + self.m22 * other.m22,
            dx: self.dx * other.m11 + self.dy * other.m21 + other.dx,
            dy: self.dx * other.m12 + self.dy * other.m22 + other.dy,
        }
    }

    pub fn invert(&self) -> Option<Matrix> {
        let det = self.m11 * self.m22 - self.m12 * self.m21;
        if det.abs() < f32::EPSILON {
            return None;
        }
        Some(Matrix {
            m11: self.m22 / det,
            m12: -self.m12 / det,
            m21: -self.m21 / det,
            m22: self.m11 / det,
            dx: (self.m21 * self.dy - self.m22 * self.dx) / det,
            dy: (self.m12 * self.dx - self.m11 * self.dy) / det,
        })
    }

    pub fn transform_point(&self, p: PointF) -> PointF {
        PointF::new(
            p.x * self.m11 + p.y * self.m21 + self.dx,
            p.x * self.m12 + p.y * self.m22 + self.dy,
        )
    }

    /// Whether the transform exchanges the x and y extents of a rectangle.
    pub fn swaps_axes(&self) -> bool {
        self.m11.abs() < 0.5 && self.m22.abs() < 0.5
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn exact_sin_cos(degrees: f32) -> (f32, f32) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}

fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Carry a rectangle through `matrix` by moving its center and re-deriving
/// the sides, swapped when the transform is a quarter turn.
fn map_rect(matrix: &Matrix, rect: Rect) -> Rect {
    if rect.is_empty() {
        return Rect::EMPTY;
    }
    let center = matrix.transform_point(rect.center());
    let (width, height) = if matrix.swaps_axes() {
        (rect.height, rect.width)
    } else {
        (rect.width, rect.height)
    };
    Rect::new(
        round_half_up(center.x - width as f32 / 2.0),
        round_half_up(center.y - height as f32 / 2.0),
        width,
        height,
    )
}

// ──────────────────────────────────────────────
// StripTransform
// ──────────────────────────────────────────────

/// Logical-to-client transform of one strip.
///
/// Left and right strips are rotated 90° about the center of their first
/// `h × h` square, `(x + h/2, y + h/2)`. That square maps onto itself, so the
/// rotated strip starts at the same visual origin and grows downwards.
/// In right-to-left layouts top and bottom strips are mirrored about their
/// own center, so tabs run from the right end while the strip stays put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripTransform {
    matrix: Matrix,
    inverse: Matrix,
}

impl StripTransform {
    pub const IDENTITY: StripTransform = StripTransform {
        matrix: Matrix::IDENTITY,
        inverse: Matrix::IDENTITY,
    };

    pub fn for_edge(edge: Edge, logical_strip: Rect, right_to_left: bool) -> Self {
        if edge.is_vertical() {
            if logical_strip.is_empty() {
                return Self::IDENTITY;
            }
            let half = logical_strip.height as f32 / 2.0;
            let pivot = PointF::new(logical_strip.x as f32 + half, logical_strip.y as f32 + half);
            Self::from_matrix(Matrix::rotate_at(90.0, pivot))
        } else if right_to_left && !logical_strip.is_empty() {
            Self::from_matrix(Matrix::mirror_x(logical_strip.x * 2 + logical_strip.width))
        } else {
            Self::IDENTITY
        }
    }

    pub fn from_matrix(matrix: Matrix) -> Self {
        let inverse = matrix.invert().unwrap_or(Matrix::IDENTITY);
        Self { matrix, inverse }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix::IDENTITY
    }

    pub fn rotates(&self) -> bool {
        self.matrix.swaps_axes()
    }

    pub fn transform_rect(&self, rect: Rect) -> Rect {
        map_rect(&self.matrix, rect)
    }

    pub fn inverse_rect(&self, rect: Rect) -> Rect {
        map_rect(&self.inverse, rect)
    }

    pub fn transform_point(&self, p: PointF) -> PointF {
        self.matrix.transform_point(p)
    }

    pub fn inverse_point(&self, p: PointF) -> PointF {
        self.inverse.transform_point(p)
    }

    pub fn transform_path(&self, path: &Path) -> Path {
        if self.is_identity() {
            return path.clone();
        }
        path.map_points(|p| self.matrix.transform_point(p))
    }
}
