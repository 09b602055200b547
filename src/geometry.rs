/// Integer gcell coordinate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let x_diff = (self.x - other.x) as f64;
        let y_diff = (self.y - other.y) as f64;
        (x_diff.powi(2) + y_diff.powi(2)).sqrt()
    }
}

impl rstar::Point for Point {
    type Scalar = i32;
    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Point {
            x: generator(0),
            y: generator(1),
        }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => panic!("Index out of bounds"),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds"),
        }
    }
}

/// Grid extent in gcells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Size { width, height }
    }

    /// Euclidean length of the grid diagonal.
    pub fn diagonal(&self) -> f64 {
        let width = self.width as f64;
        let height = self.height as f64;
        (width.powi(2) + height.powi(2)).sqrt()
    }
}

/// Cell adjacency rule used when labeling routed regions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Neighborhood {
    /// 4-connected: cells sharing an edge.
    Orthogonal,
    /// 8-connected: cells sharing an edge or a corner.
    Moore,
}

impl Neighborhood {
    /// Offsets to the neighbors already visited in a row-major scan.
    pub(crate) fn backward_offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::Orthogonal => &[(-1, 0), (0, -1)],
            Neighborhood::Moore => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}
