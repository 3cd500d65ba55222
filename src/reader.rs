//! Line-oriented polygon text format.
//!
//! One polygon per line, written as whitespace-separated coordinates
//! `x0 y0 x1 y1 x2 y2 ...`. The ring is implicitly closed; the first point
//! need not be repeated.

use std::io::{BufRead, Write};

use geo_types::{Coord, LineString};
use log::{debug, warn};

use crate::error::{Result, SoupError};
use crate::kernel::vertices;

/// Points closer than this to their predecessor are dropped.
pub const DEFAULT_EPSILON: f64 = 1e-5;

pub struct PolygonReader {
    pub epsilon: f64,
}

impl Default for PolygonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonReader {
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Reads every polygon from `input`.
    ///
    /// Blank lines and lines that collapse to fewer than three distinct points
    /// are skipped.
    pub fn read<R: BufRead>(&self, input: R) -> Result<Vec<LineString<f64>>> {
        let mut rings = Vec::new();
        let mut skipped = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match self.parse_line(&line, index + 1)? {
                Some(ring) => rings.push(ring),
                None => skipped += 1,
            }
        }
        debug!("read {} polygons, skipped {} lines", rings.len(), skipped);
        Ok(rings)
    }

    /// Parses one line. `line_no` is only used in error messages.
    pub fn parse_line(&self, line: &str, line_no: usize) -> Result<Option<LineString<f64>>> {
        if line.trim().len() <= 2 {
            return Ok(None);
        }

        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| SoupError::ParseError {
                    line: line_no,
                    message: format!("invalid coordinate {:?}: {}", token, e),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() % 2 != 0 {
            return Err(SoupError::ParseError {
                line: line_no,
                message: format!("odd number of coordinates ({})", values.len()),
            });
        }

        let tol2 = self.epsilon * self.epsilon;
        let near = |a: Coord<f64>, b: Coord<f64>| {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            dx * dx + dy * dy < tol2
        };

        let mut points: Vec<Coord<f64>> = Vec::with_capacity(values.len() / 2);
        for pair in values.chunks_exact(2) {
            let pt = Coord { x: pair[0], y: pair[1] };
            if points.last().map_or(true, |&last| !near(pt, last)) {
                points.push(pt);
            }
        }

        // Drop trailing points that would duplicate the start once the ring closes.
        while let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if !near(first, last) {
                break;
            }
            points.pop();
        }

        if points.len() < 3 {
            warn!("line {}: fewer than 3 distinct points, skipped", line_no);
            return Ok(None);
        }

        Ok(Some(LineString::new(points)))
    }
}

/// Reads polygons with the default tolerance.
pub fn read_polygons<R: BufRead>(input: R) -> Result<Vec<LineString<f64>>> {
    PolygonReader::new().read(input)
}

/// Writes `rings` in the same format, one per line, without closing points.
pub fn write_polygons<W: Write>(rings: &[LineString<f64>], mut out: W) -> Result<()> {
    for ring in rings {
        let line = vertices(ring)
            .iter()
            .map(|c| format!("{} {}", c.x, c.y))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
