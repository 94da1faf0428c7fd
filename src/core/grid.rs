use glam::Vec3;

/// Column and row counts of a tile grid covering `world_width × world_height`.
///
/// One extra column and row keep the edges covered once tiles are centered
/// on grid points rather than filling cells.
#[inline]
pub fn grid_dimensions(world_width: f32, world_height: f32, tile: f32) -> (usize, usize) {
    if tile.is_nan() || tile <= 0.0 {
        return (0, 0);
    }
    let count = |extent: f32| (extent.max(0.0) / tile).ceil() as usize + 1;
    (count(world_width), count(world_height))
}

/// Tile centers in column-major order (`i` outer, `j` inner), starting at the
/// bottom-left corner of the visible rectangle.
///
/// The last column/row can overshoot the far edge by up to one tile; those
/// centers are clamped onto the edge so every center stays visible.
pub fn grid_positions(world_width: f32, world_height: f32, tile: f32) -> Vec<Vec3> {
    let (nx, ny) = grid_dimensions(world_width, world_height, tile);
    let half_w = world_width.max(0.0) / 2.0;
    let half_h = world_height.max(0.0) / 2.0;
    let mut out = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        let x = (-half_w + i as f32 * tile).min(half_w);
        for j in 0..ny {
            let y = (-half_h + j as f32 * tile).min(half_h);
            out.push(Vec3::new(x, y, 0.0));
        }
    }
    out
}
