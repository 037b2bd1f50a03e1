use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm};
use crate::graph::{load_graph, Graph};
use crate::naming::VertexNamer;
use crate::report::{report_path, write_report, PathReport};
use crate::{Error, Result};

/// Priority structure used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueStrategy {
    /// Binary heap with a position index and decrease-key
    #[default]
    Indexed,
    /// Binary heap re-heapified after every relaxation
    Rebuild,
}

/// Configuration for a run over the case files
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub case_files: Vec<String>,
    pub source: String,
    pub destination: String,
    pub queue: QueueStrategy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            case_files: vec![
                "Case1.txt".to_string(),
                "Case2.txt".to_string(),
                "Case3.txt".to_string(),
            ],
            source: "A".to_string(),
            destination: "B".to_string(),
            queue: QueueStrategy::Indexed,
        }
    }
}

impl RunConfig {
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_case_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.case_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_destination(mut self, name: impl Into<String>) -> Self {
        self.destination = name.into();
        self
    }

    pub fn with_queue_strategy(mut self, queue: QueueStrategy) -> Self {
        self.queue = queue;
        self
    }

    /// Paths of the case files, in processing order
    pub fn case_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.case_files.iter().map(|file| self.input_dir.join(file))
    }
}

/// Solved case: distance and path to the configured destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub file: PathBuf,
    pub distance: Option<u64>,
    pub path: PathReport,
}

/// Tally of one run over all case files
#[derive(Debug, Default)]
pub struct RunSummary {
    pub solved: usize,
    pub failed: Vec<(PathBuf, Error)>,
}

impl RunSummary {
    pub fn all_solved(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Loads, solves and reports a single case file
pub fn solve_case(path: &Path, namer: &VertexNamer, config: &RunConfig) -> Result<CaseOutcome> {
    let source = namer.index_of(&config.source)?;
    let destination = namer.index_of(&config.destination)?;
    let graph = load_graph(path, namer)?;

    let result = match config.queue {
        QueueStrategy::Indexed => Dijkstra::new().compute_shortest_paths(&graph, source)?,
        QueueStrategy::Rebuild => Dijkstra::rebuilding().compute_shortest_paths(&graph, source)?,
    };

    // A destination the file never declared is simply unreachable
    if !graph.has_vertex(destination) {
        warn!(
            "{}: destination {} is not among the {} declared vertices",
            path.display(),
            config.destination,
            graph.vertex_count()
        );
        return Ok(CaseOutcome {
            file: path.to_path_buf(),
            distance: None,
            path: PathReport::NoPath { destination },
        });
    }

    Ok(CaseOutcome {
        file: path.to_path_buf(),
        distance: result.distance_to(destination),
        path: report_path(&result, destination)?,
    })
}

/// Processes every configured case in order, writing each report to `out`.
///
/// A case that fails to load or solve is logged and skipped; later cases still
/// run. Only a failure to write the report aborts the run.
pub fn run_cases<Out: Write>(
    config: &RunConfig,
    namer: &VertexNamer,
    out: &mut Out,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for path in config.case_paths() {
        match solve_case(&path, namer, config) {
            Ok(outcome) => {
                info!("{}: solved", outcome.file.display());
                write_report(out, outcome.distance, &outcome.path, namer)?;
                summary.solved += 1;
            }
            Err(err) => {
                error!("skipping {}: {}", path.display(), err);
                summary.failed.push((path, err));
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_fixed_input_set() {
        let config = RunConfig::default();
        let paths: Vec<PathBuf> = config.case_paths().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("./Case1.txt"),
                PathBuf::from("./Case2.txt"),
                PathBuf::from("./Case3.txt"),
            ]
        );
        assert_eq!(config.source, "A");
        assert_eq!(config.destination, "B");
        assert_eq!(config.queue, QueueStrategy::Indexed);
    }

    #[test]
    fn test_unknown_destination_name() {
        let config = RunConfig::default().with_destination("b");
        let err =
            solve_case(Path::new("Case1.txt"), &VertexNamer::alphabet(), &config).unwrap_err();
        assert!(matches!(err, Error::UnknownVertexName(name) if name == "b"));
    }
}
