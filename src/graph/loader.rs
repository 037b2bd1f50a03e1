//! Reader for the fixed-column case format
//!
//! ```text
//! 3
//! A B 5
//! A C 2
//! C B 1
//! ```
//!
//! The first line holds the vertex count. Every following line is one directed
//! edge: tail letter at column 0, head letter at column 2, weight from column 4
//! to the end of the line. Columns 1 and 3 are separators and are not checked.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{DirectedGraph, Graph};
use crate::naming::VertexNamer;
use crate::{Error, Result};

const TAIL_COLUMN: usize = 0;
const HEAD_COLUMN: usize = 2;
const WEIGHT_COLUMN: usize = 4;

/// Reads and parses a case file
pub fn load_graph(path: &Path, namer: &VertexNamer) -> Result<DirectedGraph<u64>> {
    let text = fs::read_to_string(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    parse_graph(&text, &path.display().to_string(), namer)
}

/// Parses case text. `origin` names the input in diagnostics.
pub fn parse_graph(text: &str, origin: &str, namer: &VertexNamer) -> Result<DirectedGraph<u64>> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    let vertex_count = match lines.next() {
        Some((line_no, line)) => parse_vertex_count(line, origin, line_no, namer.len())?,
        None => return Err(Error::format(origin, 1, "missing vertex count")),
    };

    let mut graph = DirectedGraph::with_capacity(vertex_count);

    for (line_no, line) in lines {
        // A trailing newline leaves an empty record behind
        if line.trim().is_empty() {
            continue;
        }

        let (tail, head, weight) = parse_edge(line, origin, line_no, vertex_count, namer)?;
        graph.add_edge(tail, head, weight)?;
    }

    debug!(
        "loaded {}: {} vertices, {} edges",
        origin,
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn parse_vertex_count(line: &str, origin: &str, line_no: usize, max: usize) -> Result<usize> {
    let field = line.trim();
    let count: i64 = field.parse().map_err(|_| {
        Error::format(origin, line_no, format!("vertex count `{}` is not a number", field))
    })?;

    if count < 0 {
        return Err(Error::format(origin, line_no, format!("negative vertex count {}", count)));
    }
    if count == 0 {
        return Err(Error::format(origin, line_no, "graph must have at least one vertex"));
    }

    let count = count as usize;
    if count > max {
        return Err(Error::format(
            origin,
            line_no,
            format!("vertex count {} exceeds the {} available names", count, max),
        ));
    }

    Ok(count)
}

fn parse_edge(
    line: &str,
    origin: &str,
    line_no: usize,
    vertex_count: usize,
    namer: &VertexNamer,
) -> Result<(usize, usize, u64)> {
    let fields = (
        line.get(TAIL_COLUMN..TAIL_COLUMN + 1),
        line.get(HEAD_COLUMN..HEAD_COLUMN + 1),
        line.get(WEIGHT_COLUMN..),
    );

    let (tail, head, weight) = match fields {
        (Some(tail), Some(head), Some(weight)) if !weight.trim().is_empty() => (tail, head, weight),
        _ => {
            return Err(Error::format(
                origin,
                line_no,
                format!("expected `<tail> <head> <weight>`, got `{}`", line),
            ))
        }
    };

    let tail = vertex_index(tail, origin, line_no, vertex_count, namer)?;
    let head = vertex_index(head, origin, line_no, vertex_count, namer)?;
    let weight = parse_weight(weight.trim(), origin, line_no)?;

    Ok((tail, head, weight))
}

fn vertex_index(
    name: &str,
    origin: &str,
    line_no: usize,
    vertex_count: usize,
    namer: &VertexNamer,
) -> Result<usize> {
    let index = namer
        .index_of(name)
        .map_err(|_| Error::format(origin, line_no, format!("unknown vertex name `{}`", name)))?;

    if index >= vertex_count {
        return Err(Error::format(
            origin,
            line_no,
            format!("vertex {} is outside the {} declared vertices", name, vertex_count),
        ));
    }

    Ok(index)
}

fn parse_weight(field: &str, origin: &str, line_no: usize) -> Result<u64> {
    let value: i64 = field.parse().map_err(|_| {
        Error::format(origin, line_no, format!("weight `{}` is not an integer", field))
    })?;

    if value < 0 {
        return Err(Error::format(origin, line_no, format!("negative edge weight {}", value)));
    }

    // Weights stay within u32 so a path over every vertex cannot overflow u64
    let value = u32::try_from(value)
        .map_err(|_| Error::format(origin, line_no, format!("weight {} is too large", value)))?;

    Ok(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<DirectedGraph<u64>> {
        parse_graph(text, "case.txt", &VertexNamer::alphabet())
    }

    fn format_error_line(result: Result<DirectedGraph<u64>>) -> usize {
        match result {
            Err(Error::GraphFormatError { line, .. }) => line,
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_fixed_columns() {
        let graph = parse("3\nA B 5\nA C 2\nC B 1\n").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_weight(0, 1), Some(5));
        assert_eq!(graph.get_edge_weight(0, 2), Some(2));
        assert_eq!(graph.get_edge_weight(2, 1), Some(1));
    }

    #[test]
    fn test_separators_are_not_validated() {
        let graph = parse("2\nA,B:17").unwrap();
        assert_eq!(graph.get_edge_weight(0, 1), Some(17));
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let graph = parse("2\r\nA B 3\r\n\r\nB A 4\r\n").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_edge_weight(1, 0), Some(4));
    }

    #[test]
    fn test_count_only() {
        let graph = parse("2").unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_bad_vertex_counts() {
        assert_eq!(format_error_line(parse("")), 1);
        assert_eq!(format_error_line(parse("three\nA B 1")), 1);
        assert_eq!(format_error_line(parse("-2\n")), 1);
        assert_eq!(format_error_line(parse("0\n")), 1);
        assert_eq!(format_error_line(parse("27\n")), 1);
    }

    #[test]
    fn test_short_edge_line() {
        assert_eq!(format_error_line(parse("2\nA B 1\nA B")), 3);
        assert_eq!(format_error_line(parse("2\nA B \n")), 2);
    }

    #[test]
    fn test_unknown_and_undeclared_vertices() {
        assert_eq!(format_error_line(parse("2\na B 1")), 2);
        assert_eq!(format_error_line(parse("2\nA C 1")), 2);
    }

    #[test]
    fn test_bad_weights() {
        assert_eq!(format_error_line(parse("2\nA B x")), 2);
        assert_eq!(format_error_line(parse("2\nA B 1\nB A -4")), 3);
        assert_eq!(format_error_line(parse("2\nA B 99999999999")), 2);
    }

    #[test]
    fn test_error_names_origin() {
        let err = parse("2\nA B oops").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("case.txt:2:"), "{}", message);
        assert!(message.contains("oops"), "{}", message);
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph(Path::new("no/such/Case9.txt"), &VertexNamer::alphabet()).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }
}
