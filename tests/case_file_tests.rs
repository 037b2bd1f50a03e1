use std::path::PathBuf;

use lettered_sssp::runner::{run_cases, solve_case, QueueStrategy};
use lettered_sssp::{Error, PathReport, RunConfig, VertexNamer};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run(config: &RunConfig) -> (String, lettered_sssp::runner::RunSummary) {
    let mut out = Vec::new();
    let summary = run_cases(config, &VertexNamer::alphabet(), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_fixed_input_set() {
    let config = RunConfig::default().with_input_dir(fixtures());
    let (output, summary) = run(&config);

    assert!(summary.all_solved());
    assert_eq!(summary.solved, 3);
    assert_eq!(
        output,
        "3\nA C B\n\n\
         10000000\nNo path from start to B\n\n\
         10000000\nNo path from start to B\n\n"
    );
}

#[test]
fn test_queue_strategies_print_the_same_report() {
    let indexed = RunConfig::default()
        .with_input_dir(fixtures())
        .with_case_files(["Case1.txt", "Dense.txt"]);
    let rebuilding = indexed.clone().with_queue_strategy(QueueStrategy::Rebuild);

    let (expected, _) = run(&indexed);
    let (actual, _) = run(&rebuilding);
    assert_eq!(expected, "3\nA C B\n\n7\nA B\n\n");
    assert_eq!(actual, expected);
}

#[test]
fn test_failed_cases_do_not_stop_the_run() {
    let config = RunConfig::default()
        .with_input_dir(fixtures())
        .with_case_files(["Malformed.txt", "Missing.txt", "Negative.txt", "Case1.txt"]);
    let (output, summary) = run(&config);

    assert_eq!(output, "3\nA C B\n\n");
    assert_eq!(summary.solved, 1);
    assert_eq!(summary.failed.len(), 3);

    match &summary.failed[0].1 {
        Error::GraphFormatError { origin, line, .. } => {
            assert!(origin.ends_with("Malformed.txt"));
            assert_eq!(*line, 3);
        }
        other => panic!("expected a format error, got {:?}", other),
    }
    assert!(matches!(
        &summary.failed[1].1,
        Error::InputNotFound { path, .. } if path.ends_with("Missing.txt")
    ));
    assert!(matches!(&summary.failed[2].1, Error::GraphFormatError { line: 3, .. }));
}

#[test]
fn test_other_destination() {
    let config = RunConfig::default().with_destination("E");
    let outcome =
        solve_case(&fixtures().join("Dense.txt"), &VertexNamer::alphabet(), &config).unwrap();

    assert_eq!(outcome.distance, Some(20));
    assert_eq!(outcome.path, PathReport::Found(vec![0, 2, 5, 4]));
}
