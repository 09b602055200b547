use petgraph::unionfind::UnionFind;

use crate::geometry::Neighborhood;

use super::grid::LabelGrid;

/// Component ids for the routed cells of one grid.
///
/// Background cells carry no id; two routed cells share an id exactly when
/// they belong to the same connected region under the chosen adjacency.
pub(crate) struct ComponentMap {
    width: usize,
    cells: Vec<Option<u32>>,
}

impl ComponentMap {
    pub fn build(grid: &LabelGrid, neighborhood: Neighborhood) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut union = UnionFind::<u32>::new(grid.size());

        // Single row-major pass: each routed cell joins the regions of the
        // routed neighbors scanned before it.
        for y in 0..height {
            for x in 0..width {
                if !grid.is_routed(x, y) {
                    continue;
                }
                let cell = (y * width + x) as u32;
                for &(dx, dy) in neighborhood.backward_offsets() {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if grid.is_routed(nx, ny) {
                        union.union(cell, (ny * width + nx) as u32);
                    }
                }
            }
        }

        let roots = union.into_labeling();
        let cells = (0..grid.size())
            .map(|index| {
                let (x, y) = (index % width, index / width);
                grid.is_routed(x, y).then(|| roots[index])
            })
            .collect();

        ComponentMap { width, cells }
    }

    /// Component id of the cell, or `None` for background.
    pub fn component(&self, x: usize, y: usize) -> Option<u32> {
        self.cells[y * self.width + x]
    }
}
