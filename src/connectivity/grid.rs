use crate::error::ConnectivityError;
use crate::geometry::Point;

/// Row-major raster of integer class labels for one sample.
///
/// Label 0 is background; any other label marks a routed cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelGrid {
    width: usize,
    height: usize,
    labels: Vec<u32>,
}

impl LabelGrid {
    pub fn new(width: usize, height: usize, labels: Vec<u32>) -> Result<Self, ConnectivityError> {
        if width == 0 || height == 0 {
            return Err(ConnectivityError::InvalidGrid { width, height });
        }
        let expected = width * height;
        if labels.len() != expected {
            return Err(ConnectivityError::LabelMismatch {
                actual: labels.len(),
                expected,
            });
        }
        Ok(LabelGrid {
            width,
            height,
            labels,
        })
    }

    /// Grid of the given extent with every cell set to background.
    pub fn background(width: usize, height: usize) -> Result<Self, ConnectivityError> {
        if width == 0 || height == 0 {
            return Err(ConnectivityError::InvalidGrid { width, height });
        }
        Self::new(width, height, vec![0; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn contains(&self, pin: &Point) -> bool {
        pin.x >= 0 && pin.y >= 0 && (pin.x as usize) < self.width && (pin.y as usize) < self.height
    }

    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.width + x]
    }

    pub fn set_label(&mut self, x: usize, y: usize, label: u32) {
        self.labels[y * self.width + x] = label;
    }

    pub fn is_routed(&self, x: usize, y: usize) -> bool {
        self.label_at(x, y) != 0
    }
}
