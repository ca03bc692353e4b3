//! Command implementations and argument parsing for the waymark CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use waymark_core::{
    DijkstraConfig, Distance, EdgeListError, Graph, GraphError, KruskalConfig, KruskalOutcome,
    Orientation, PathCompression, dijkstra, kruskal, read_edge_list,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "waymark",
    about = "Minimum spanning forests and shortest paths over weighted edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning forest with Kruskal's algorithm.
    Mst(MstArgs),
    /// Compute single-source shortest paths with Dijkstra's algorithm.
    ShortestPath(ShortestPathArgs),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Edge-list files with one `source destination weight` triple per line.
    /// Each file is reported in its own block, in the order given.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path-compression modes to run.
    #[arg(long, value_enum, default_value_t = CompressionChoice::Both)]
    pub compression: CompressionChoice,
}

/// Options accepted by the `shortest-path` command.
#[derive(Debug, Args, Clone)]
pub struct ShortestPathArgs {
    /// Edge-list file with one `source destination weight` triple per line.
    pub path: PathBuf,

    /// Vertex the distances are measured from.
    #[arg(long)]
    pub source: String,

    /// How edges may be travelled.
    #[arg(long, value_enum, default_value_t = OrientationChoice::Undirected)]
    pub orientation: OrientationChoice,
}

/// Path-compression selection for the `mst` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompressionChoice {
    /// Run without compression, then with it.
    Both,
    /// Run without compression only.
    #[value(name = "none")]
    Uncompressed,
    /// Run with compression only.
    #[value(name = "full")]
    Compressed,
}

impl CompressionChoice {
    /// Returns the modes to run, in report order.
    #[must_use]
    pub fn modes(self) -> &'static [PathCompression] {
        match self {
            Self::Both => &PathCompression::ALL,
            Self::Uncompressed => &[PathCompression::Disabled],
            Self::Compressed => &[PathCompression::Enabled],
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Uncompressed => "none",
            Self::Compressed => "full",
        }
    }
}

/// Edge orientation selection for the `shortest-path` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationChoice {
    /// Edges can be travelled both ways.
    Undirected,
    /// Edges are only followed from source to destination.
    AsListed,
}

impl From<OrientationChoice> for Orientation {
    fn from(choice: OrientationChoice) -> Self {
        match choice {
            OrientationChoice::Undirected => Self::Undirected,
            OrientationChoice::AsListed => Self::AsListed,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed or could not be read.
    #[error("failed to read edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the edge-list file.
        path: PathBuf,
        /// Parse or read failure.
        #[source]
        source: EdgeListError,
    },
    /// An algorithm rejected its input.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable error code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::EdgeList { source, .. } => Some(source.code().as_str()),
            Self::Graph(graph) => Some(graph.code().as_str()),
        }
    }

    /// Returns the code of a nested heap or union-find failure, if any.
    #[must_use]
    pub const fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(graph) => graph.detail_code(),
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of the `mst` command, one summary per input file.
    Mst(Vec<MstSummary>),
    /// Result of the `shortest-path` command.
    ShortestPath(ShortestPathSummary),
}

/// Kruskal runs over one edge list.
#[derive(Debug, Clone)]
pub struct MstSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// Number of vertices read.
    pub vertices: usize,
    /// Number of distinct edges read.
    pub edges: usize,
    /// One entry per compression mode, in the order they ran.
    pub runs: Vec<MstRun>,
}

/// A single timed Kruskal run.
#[derive(Debug, Clone)]
pub struct MstRun {
    /// Spanning forest, shape and mode.
    pub outcome: KruskalOutcome,
    /// Wall-clock time spent in [`kruskal`].
    pub elapsed: Duration,
}

/// Dijkstra results with labels resolved for printing.
#[derive(Debug, Clone)]
pub struct ShortestPathSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// Vertex the distances are measured from.
    pub source: String,
    /// Orientation used for relaxation.
    pub orientation: Orientation,
    /// One row per vertex in first-appearance order.
    pub rows: Vec<PathRow>,
}

/// Distance and route to one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRow {
    /// Destination vertex.
    pub vertex: String,
    /// Shortest distance, or infinity when unreachable.
    pub distance: Distance,
    /// Route from the source, source first; empty when unreachable.
    pub path: Vec<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or an algorithm
/// rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use waymark_cli::cli::{
/// #     Cli, Command, ExecutionSummary, OrientationChoice, ShortestPathArgs, run_cli,
/// # };
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 2 4\n2 3 1\n1 3 10\n")?;
/// let cli = Cli {
///     command: Command::ShortestPath(ShortestPathArgs {
///         path: file.path().to_path_buf(),
///         source: "1".into(),
///         orientation: OrientationChoice::Undirected,
///     }),
/// };
/// let ExecutionSummary::ShortestPath(summary) = run_cli(cli)? else {
///     unreachable!("shortest-path yields a path summary");
/// };
/// assert_eq!(summary.rows.len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(args) => {
            span.record("command", field::display("mst"));
            run_mst(args).map(ExecutionSummary::Mst)
        }
        Command::ShortestPath(args) => {
            span.record("command", field::display("shortest-path"));
            run_shortest_path(args).map(ExecutionSummary::ShortestPath)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(files = args.paths.len(), compression = field::Empty),
)]
pub(super) fn run_mst(args: MstArgs) -> Result<Vec<MstSummary>, CliError> {
    let MstArgs { paths, compression } = args;
    Span::current().record("compression", field::display(compression.label()));
    paths
        .iter()
        .map(|path| summarise_mst(path, compression))
        .collect()
}

#[instrument(name = "cli.mst.graph", err, skip(compression), fields(path = field::Empty))]
fn summarise_mst(path: &Path, compression: CompressionChoice) -> Result<MstSummary, CliError> {
    Span::current().record("path", field::display(path.display()));
    let graph = load_graph(path)?;
    let mut runs = Vec::with_capacity(compression.modes().len());
    for &mode in compression.modes() {
        let started = Instant::now();
        let outcome = kruskal(&graph, KruskalConfig::new().with_compression(mode))?;
        let elapsed = started.elapsed();
        info!(
            mode = mode.label(),
            total_weight = outcome.forest().total_weight(),
            elapsed_us = elapsed.as_micros(),
            "kruskal run completed"
        );
        runs.push(MstRun { outcome, elapsed });
    }
    Ok(MstSummary {
        data_source: derive_data_source_name(path),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        runs,
    })
}

#[instrument(
    name = "cli.shortest_path",
    err,
    skip(args),
    fields(path = field::Empty, source = field::Empty, orientation = field::Empty),
)]
pub(super) fn run_shortest_path(args: ShortestPathArgs) -> Result<ShortestPathSummary, CliError> {
    let ShortestPathArgs {
        path,
        source,
        orientation,
    } = args;
    let orientation = Orientation::from(orientation);
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("source", field::display(&source));
    span.record("orientation", field::debug(orientation));

    let graph = load_graph(&path)?;
    let paths = dijkstra(
        &graph,
        &source,
        DijkstraConfig::new().with_orientation(orientation),
    )?;
    let rows: Vec<PathRow> = paths
        .iter()
        .map(|(vertex, distance)| PathRow {
            vertex: vertex.clone(),
            distance,
            path: paths
                .path_to(vertex)
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();
    info!(
        vertices = rows.len(),
        reached = rows.iter().filter(|row| row.distance.is_finite()).count(),
        "shortest paths completed"
    );
    Ok(ShortestPathSummary {
        data_source: derive_data_source_name(&path),
        source,
        orientation,
        rows,
    })
}

fn load_graph(path: &Path) -> Result<Graph<String>, CliError> {
    let reader = open_edge_list(path)?;
    read_edge_list(reader).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// `mst` summaries list one block per input file, separated by a blank
/// line, with one entry per compression mode. `shortest-path`
/// summaries print one `path <vertex> <distance> <route...>` line per
/// vertex, with `inf` and no route for unreachable vertices.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use waymark_cli::cli::{ExecutionSummary, PathRow, ShortestPathSummary, render_summary};
/// # use waymark_core::{Distance, Orientation};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::ShortestPath(ShortestPathSummary {
///     data_source: "demo".into(),
///     source: "a".into(),
///     orientation: Orientation::Undirected,
///     rows: vec![
///         PathRow { vertex: "a".into(), distance: Distance::ZERO, path: vec!["a".into()] },
///         PathRow { vertex: "z".into(), distance: Distance::Infinite, path: Vec::new() },
///     ],
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "path a 0 a\npath z inf\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Mst(graphs) => {
            for (index, mst) in graphs.iter().enumerate() {
                if index > 0 {
                    writeln!(writer)?;
                }
                render_mst(mst, &mut writer)?;
            }
            Ok(())
        }
        ExecutionSummary::ShortestPath(paths) => render_paths(paths, &mut writer),
    }
}

fn render_mst(summary: &MstSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    for run in &summary.runs {
        let forest = run.outcome.forest();
        let shape = run.outcome.shape();
        writeln!(writer, "{}:", run.outcome.compression())?;
        writeln!(writer, "  cost: {}", forest.total_weight())?;
        match shape.root_rank {
            Some(rank) => writeln!(writer, "  root rank: {rank}")?,
            None => writeln!(writer, "  root rank: -")?,
        }
        writeln!(writer, "  height: {}", shape.height)?;
        writeln!(writer, "  selected edges: {}", forest.edges().len())?;
        writeln!(writer, "  components: {}", forest.component_count())?;
        writeln!(
            writer,
            "  time: {:.3} ms",
            run.elapsed.as_secs_f64() * 1_000.0
        )?;
    }
    Ok(())
}

fn render_paths(summary: &ShortestPathSummary, writer: &mut impl Write) -> io::Result<()> {
    for row in &summary.rows {
        write!(writer, "path {} {}", row.vertex, row.distance)?;
        for vertex in &row.path {
            write!(writer, " {vertex}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
