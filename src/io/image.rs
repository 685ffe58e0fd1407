//! PNG export of a map drawn as pipes on a transparent background

use crate::io::configuration::{BACKGROUND_COLOR, MAX_IMAGE_SIDE, PIPE_COLOR, START_COLOR};
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::spatial::TileGrid;
use crate::spatial::connectivity::Edge;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Pattern cells per tile side
const PATTERN_SIZE: u32 = 3;

// Pattern cell lit by an open edge
const fn edge_cell(edge: Edge) -> (u32, u32) {
    match edge {
        Edge::Top => (1, 0),
        Edge::Right => (2, 1),
        Edge::Bottom => (1, 2),
        Edge::Left => (0, 1),
    }
}

/// Pixels per side of a rendered grid
///
/// # Errors
///
/// Returns an error if `scale` is zero or the image side would exceed
/// `MAX_IMAGE_SIDE`
pub fn image_side(width: usize, scale: u32) -> Result<u32> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }

    u32::try_from(width)
        .ok()
        .and_then(|w| w.checked_mul(PATTERN_SIZE))
        .and_then(|w| w.checked_mul(scale))
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!("a {width} cell wide image would exceed {MAX_IMAGE_SIDE} pixels per side"),
            )
        })
}

/// Draw a grid as an image, `scale` pixels per pattern cell
///
/// Every tile covers a 3x3 pattern: the middle cell is lit for placed
/// tiles and the middle of each side is lit when that edge is open, so
/// neighboring tiles join into continuous pipes.
///
/// # Errors
///
/// Returns an error if the image size is invalid, see [`image_side`]
pub fn render_grid(grid: &TileGrid, scale: u32) -> Result<RgbaImage> {
    let side = image_side(grid.width(), scale)?;
    let mut img: RgbaImage = ImageBuffer::from_pixel(side, side, Rgba(BACKGROUND_COLOR));
    let center = grid.center();

    for (index, id) in grid.iter() {
        if id.is_empty() {
            continue;
        }
        let (x, y) = grid.coordinates(index);
        let origin = (x as u32 * PATTERN_SIZE, y as u32 * PATTERN_SIZE);

        let hub_color = if index == center { START_COLOR } else { PIPE_COLOR };
        fill_cell(&mut img, (origin.0 + 1, origin.1 + 1), scale, hub_color);

        for edge in id.edges() {
            let (dx, dy) = edge_cell(edge);
            fill_cell(&mut img, (origin.0 + dx, origin.1 + dy), scale, PIPE_COLOR);
        }
    }

    Ok(img)
}

// Cells lie inside an image whose side passed `image_side`, so the products fit
fn fill_cell(img: &mut RgbaImage, cell: (u32, u32), scale: u32, color: [u8; 4]) {
    for py in cell.1 * scale..(cell.1 + 1) * scale {
        for px in cell.0 * scale..(cell.0 + 1) * scale {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or too large for the grid
/// - No tiles have been placed in the grid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path, scale: u32) -> Result<()> {
    if grid.placed_count() == 0 {
        return Err(GenerationError::InvalidParameter {
            parameter: "grid",
            value: String::new(),
            reason: "No tiles have been placed in the grid".to_string(),
        });
    }

    let img = render_grid(grid, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
