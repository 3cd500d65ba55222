//! Trivial Graph Format for skeleton graphs.
//!
//! ```text
//! 0 1.5,2,0.5
//! 1 3,2,-0.25
//! #
//! 0 1
//! ```
//!
//! Node lines are `id x,y,r`, a lone `#` ends the node section, and every
//! following line is an undirected edge `id1 id2`.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use geo_types::Coord;

use crate::error::{Result, SoupError};
use crate::skeleton::{GraphNode, SkeletonGraph};

pub fn write_tgf<W: Write>(graph: &SkeletonGraph, mut out: W) -> Result<()> {
    for node in &graph.nodes {
        writeln!(out, "{} {},{},{}", node.id, node.xy.x, node.xy.y, node.r)?;
    }
    writeln!(out, "#")?;
    for &(a, b) in &graph.edges {
        writeln!(out, "{} {}", a, b)?;
    }
    Ok(())
}

pub fn read_tgf<R: BufRead>(input: R) -> Result<SkeletonGraph> {
    let mut graph = SkeletonGraph::default();
    let mut ids = HashSet::new();
    let mut in_edges = false;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !in_edges && line == "#" {
            in_edges = true;
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            return Err(parse_error(line_no, "expected two fields"));
        };

        if in_edges {
            let a = parse_id(first, line_no)?;
            let b = parse_id(second, line_no)?;
            if !ids.contains(&a) || !ids.contains(&b) {
                return Err(parse_error(
                    line_no,
                    &format!("edge {} {} references an unknown node", a, b),
                ));
            }
            graph.edges.push((a, b));
        } else {
            let id = parse_id(first, line_no)?;
            let label = second
                .split(',')
                .map(|v| v.parse::<f64>())
                .collect::<std::result::Result<Vec<f64>, _>>()
                .map_err(|e| parse_error(line_no, &format!("invalid label {:?}: {}", second, e)))?;
            let [x, y, r] = label[..] else {
                return Err(parse_error(
                    line_no,
                    &format!("label {:?} must be x,y,r", second),
                ));
            };
            if !ids.insert(id) {
                return Err(parse_error(line_no, &format!("duplicate node id {}", id)));
            }
            graph.nodes.push(GraphNode {
                id,
                xy: Coord { x, y },
                r,
            });
        }
    }

    Ok(graph)
}

fn parse_id(token: &str, line_no: usize) -> Result<usize> {
    token
        .parse()
        .map_err(|e| parse_error(line_no, &format!("invalid node id {:?}: {}", token, e)))
}

fn parse_error(line: usize, message: &str) -> SoupError {
    SoupError::ParseError {
        line,
        message: message.to_string(),
    }
}
