//! Reader for whitespace-separated `source destination weight` edge lists.
//!
//! Blank lines and lines whose first non-blank character is `#` are skipped.
//! Vertices are declared implicitly by the edges that mention them. Parsing
//! stops at the first malformed line.

use std::hash::Hash;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::{EdgeListError, LineDefect};
use crate::graph::{Graph, Weight};

/// A single parsed edge-list record.
type Record<V> = (V, V, Weight);

/// Reads an edge list from `reader` into a [`Graph`].
///
/// Repeated `(source, destination)` pairs replace the earlier weight.
///
/// # Errors
/// Returns [`EdgeListError::MalformedLine`] for the first line that does not
/// hold exactly two vertices and a non-negative integer weight, and
/// [`EdgeListError::Io`] when the reader fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use waymark_core::{Graph, read_edge_list};
///
/// let input = "# roads\n1 2 4\n2 3 1\n\n1 3 10\n";
/// let graph: Graph<u32> = read_edge_list(Cursor::new(input))?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(&2, &3), Some(1));
/// # Ok::<(), waymark_core::EdgeListError>(())
/// ```
#[instrument(name = "edge_list.read", err, skip(reader))]
pub fn read_edge_list<V, R>(reader: R) -> Result<Graph<V>, EdgeListError>
where
    V: FromStr + Clone + Eq + Hash,
    R: BufRead,
{
    let mut graph = Graph::new();
    let mut replaced = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| EdgeListError::Io {
            line: number,
            source: Arc::new(source),
        })?;
        let Some((source, target, weight)) = parse_line(number, &line)? else {
            continue;
        };
        if graph.add_edge(source, target, weight).is_some() {
            replaced += 1;
        }
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        replaced,
        "edge list read"
    );
    Ok(graph)
}

/// Parses one line, returning `None` for blank and comment lines.
fn parse_line<V: FromStr>(line: usize, content: &str) -> Result<Option<Record<V>>, EdgeListError> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    parse_record(trimmed)
        .map(Some)
        .map_err(|defect| EdgeListError::MalformedLine {
            line,
            content: trimmed.to_owned(),
            defect,
        })
}

fn parse_record<V: FromStr>(trimmed: &str) -> Result<Record<V>, LineDefect> {
    let mut fields = trimmed.split_whitespace();
    let source = fields.next().ok_or(LineDefect::MissingField { field: "source" })?;
    let target = fields
        .next()
        .ok_or(LineDefect::MissingField { field: "destination" })?;
    let weight = fields.next().ok_or(LineDefect::MissingField { field: "weight" })?;
    if let Some(extra) = fields.next() {
        return Err(LineDefect::TrailingField {
            extra: extra.to_owned(),
        });
    }
    Ok((vertex(source)?, vertex(target)?, parse_weight(weight)?))
}

fn vertex<V: FromStr>(raw: &str) -> Result<V, LineDefect> {
    raw.parse().map_err(|_| LineDefect::InvalidVertex {
        raw: raw.to_owned(),
    })
}

fn parse_weight(raw: &str) -> Result<Weight, LineDefect> {
    raw.parse().map_err(|_| LineDefect::InvalidWeight {
        raw: raw.to_owned(),
    })
}
