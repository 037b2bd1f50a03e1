use std::fmt::Debug;
use std::io::Write;

use log::warn;
use num_traits::{PrimInt, Unsigned};

use crate::algorithm::ShortestPathResult;
use crate::naming::VertexNamer;
use crate::{Error, Result};

/// Distance printed for a destination that was never reached
pub const UNREACHED_DISTANCE: u64 = 10_000_000;

/// Outcome of reconstructing the path to one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathReport {
    /// Vertices from the source to the destination, both inclusive
    Found(Vec<usize>),

    /// The destination cannot be reached from the source
    NoPath { destination: usize },
}

impl PathReport {
    pub fn is_found(&self) -> bool {
        matches!(self, PathReport::Found(_))
    }

    /// Renders the report as one line of vertex names
    pub fn render(&self, namer: &VertexNamer) -> Result<String> {
        match self {
            PathReport::Found(path) => {
                let names = path
                    .iter()
                    .map(|&vertex| namer.name_of(vertex))
                    .collect::<Result<Vec<_>>>()?;
                Ok(names.join(" "))
            }
            PathReport::NoPath { destination } => Ok(format!(
                "No path from start to {}",
                namer.name_of(*destination)?
            )),
        }
    }
}

/// Walks the predecessor chain from `destination` back to the source
pub fn report_path<W>(result: &ShortestPathResult<W>, destination: usize) -> Result<PathReport>
where
    W: PrimInt + Unsigned + Debug,
{
    if destination >= result.vertex_count() {
        return Err(Error::InvalidVertex(destination));
    }
    if !result.is_reachable(destination) {
        return Ok(PathReport::NoPath { destination });
    }

    let mut path = vec![destination];
    let mut current = destination;

    while current != result.source {
        match result.predecessors[current] {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Ok(PathReport::NoPath { destination }),
        }

        // A simple path visits every vertex at most once
        if path.len() > result.vertex_count() {
            warn!("predecessor chain from {} does not reach the source", destination);
            return Ok(PathReport::NoPath { destination });
        }
    }

    path.reverse();
    Ok(PathReport::Found(path))
}

/// Writes the two-line case report followed by a blank separator line
pub fn write_report<Out: Write>(
    out: &mut Out,
    distance: Option<u64>,
    path: &PathReport,
    namer: &VertexNamer,
) -> Result<()> {
    writeln!(out, "{}", distance.unwrap_or(UNREACHED_DISTANCE))?;
    writeln!(out, "{}", path.render(namer)?)?;
    writeln!(out)?;
    Ok(())
}
