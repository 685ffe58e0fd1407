//! Plain-text map dump, one glyph per cell
//!
//! ```text
//! +-----+
//! |     |
//! | ╔╦╗ |
//! | ╠╬╣ |
//! | ╚╩╝ |
//! |     |
//! +-----+
//! ```

use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use crate::spatial::tiles::TileId;

/// Horizontal border line for a grid of `width` columns
fn separator(width: usize) -> String {
    format!("+{}+", "-".repeat(width))
}

/// Render a grid as bordered rows of glyphs
pub fn render(grid: &TileGrid) -> String {
    let mut out = separator(grid.width());
    out.push('\n');
    for row in grid.rows() {
        out.push('|');
        out.extend(row.iter().map(|id| id.glyph()));
        out.push_str("|\n");
    }
    out.push_str(&separator(grid.width()));
    out.push('\n');
    out
}

/// Parse a dump produced by [`render`] back into a grid
///
/// # Errors
///
/// Returns an error if:
/// - Either border line is missing or malformed
/// - A row is not delimited by `|` or has the wrong length
/// - A row contains a character that is not a tile glyph
/// - The row count is not a valid grid width
pub fn parse(text: &str) -> Result<TileGrid> {
    // Blank lines are skipped but keep their place in the numbering
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let (Some(&(first_line, first)), Some(&(last_line, last))) = (lines.first(), lines.last())
    else {
        return Err(parse_error(1, "map is empty"));
    };
    let rows = lines.get(1..lines.len().saturating_sub(1)).unwrap_or(&[]);
    let width = rows.len();

    if first != separator(width) {
        return Err(parse_error(
            first_line,
            &format!("expected border for {width} rows"),
        ));
    }
    if lines.len() < 2 || last != separator(width) {
        return Err(parse_error(last_line, "missing closing border"));
    }

    let mut grid = TileGrid::new(width)?;

    for (y, &(line, row)) in rows.iter().enumerate() {
        let inner = row
            .strip_prefix('|')
            .and_then(|r| r.strip_suffix('|'))
            .ok_or_else(|| parse_error(line, "row must start and end with '|'"))?;

        let glyphs: Vec<char> = inner.chars().collect();
        if glyphs.len() != width {
            return Err(parse_error(
                line,
                &format!("expected {width} cells, found {}", glyphs.len()),
            ));
        }

        for (x, glyph) in glyphs.into_iter().enumerate() {
            let id = TileId::from_glyph(glyph)
                .ok_or_else(|| parse_error(line, &format!("unknown glyph {glyph:?}")))?;
            let index = grid.index_of(x, y);
            grid.try_set(index, id)?;
        }
    }

    Ok(grid)
}

fn parse_error(line: usize, reason: &str) -> GenerationError {
    GenerationError::ParseMap {
        line,
        reason: reason.to_string(),
    }
}
