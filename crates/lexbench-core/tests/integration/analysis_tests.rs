//! End-to-end analysis runs through the public API

use crate::support::{
    fixed_analyzer, queue_of, seeded_analyzer, stack_of, Capture, CountingVisualizer,
};
use lexbench_core::{
    AnalyzerConfig, Error, LexemeCategory, OperationKind, PerformanceReport, SampledWorkload,
    StructureKind, TextChart, TimeUnit, TimingAnalyzer,
};

const SAMPLE: &str = r#"
public class Inventory {
    private final Map<String, Integer> counts = new HashMap<>();

    // Increment the stock level for an item
    public void restock(String item, int amount) {
        counts.merge(item, amount, Integer::sum);
    }
}
"#;

#[test]
fn test_scenario_seed_subset_order() {
    // Pool flattens to ["bar", "baz", "foo"]; the fixed sampler keeps that order
    let mut analyzer = fixed_analyzer(&["foo", "bar", "baz"], 2);

    let seeded = analyzer.seed_from_code("foo bar baz", None).unwrap();

    assert_eq!(seeded, 2);
    assert_eq!(queue_of(&analyzer), vec!["bar", "baz"]);
    assert_eq!(stack_of(&analyzer), vec!["bar", "baz"]);
    assert_eq!(analyzer.stack().last().map(String::as_str), Some("baz"));
    for kind in StructureKind::ALL {
        assert_eq!(analyzer.stats_for(kind).count(OperationKind::Add), 2);
    }
}

#[test]
fn test_scenario_lexeme_at_position() {
    let analyzer = seeded_analyzer(&["x", "y", "z"]);

    assert_eq!(analyzer.lexeme_at_position(1), Some("y"));
    assert_eq!(analyzer.lexeme_at_position(5), None);
}

#[test]
fn test_scenario_remove_absent_then_present() {
    let mut analyzer = seeded_analyzer(&["a", "b"]);

    assert!(analyzer.remove_lexeme("c").neither());
    assert_eq!(queue_of(&analyzer), vec!["a", "b"]);
    assert_eq!(stack_of(&analyzer), vec!["a", "b"]);
    for kind in StructureKind::ALL {
        assert_eq!(analyzer.stats_for(kind).count(OperationKind::Remove), 1);
    }

    assert!(analyzer.remove_lexeme("a").both());
    assert_eq!(queue_of(&analyzer), vec!["b"]);
    assert_eq!(stack_of(&analyzer), vec!["b"]);
    for kind in StructureKind::ALL {
        assert_eq!(analyzer.stats_for(kind).count(OperationKind::Remove), 2);
    }
}

#[test]
fn test_run_analysis_on_java_source() {
    let output = Capture::default();
    let chart = Capture::default();
    let config = AnalyzerConfig::default().with_seed(42).with_chart_width(20);
    let mut analyzer = TimingAnalyzer::with_config(config)
        .with_output(output.clone())
        .with_visualizer(TextChart::new(chart.clone(), 20, TimeUnit::Ns));

    let report = analyzer.run_analysis(SAMPLE, SampledWorkload, None).unwrap();

    let seeded = report.seeded.queue.len() as u64;
    assert!(seeded >= 1);
    assert_eq!(report.seeded.queue, report.seeded.stack);
    assert_eq!(report.entries.len(), 6);

    // Every sampled lexeme is searched, removed and re-added once
    for structure in StructureKind::ALL {
        let searches = report.entry(structure, OperationKind::Search).unwrap().count;
        let removes = report.entry(structure, OperationKind::Remove).unwrap().count;
        let adds = report.entry(structure, OperationKind::Add).unwrap().count;
        assert!((1..=seeded).contains(&searches));
        assert_eq!(removes, searches);
        assert_eq!(adds, seeded + searches);
    }
    assert_eq!(analyzer.queue().len() as u64, seeded);

    let text = output.text();
    assert!(text.starts_with("Extracted lexemes in each data structure:"));
    assert!(text.contains("Timing analysis of each function:"));
    assert!(text.contains("Queue Additions:"));
    assert!(text.contains("Stack Searches:"));

    let chart = chart.text();
    assert!(chart.starts_with("Performance comparison (ns)"));
    assert!(chart.contains("Removals"));
    assert!(chart.contains("  Queue |"));
}

#[test]
fn test_keyword_only_analysis() {
    let mut analyzer = TimingAnalyzer::with_config(AnalyzerConfig::default().with_seed(3))
        .with_output(std::io::sink())
        .with_visualizer(CountingVisualizer::default());
    let keywords = ["class", "final", "int", "new", "private", "public", "void"];

    let report = analyzer
        .run_analysis(SAMPLE, |_: &mut TimingAnalyzer| {}, Some(LexemeCategory::Keyword))
        .unwrap();

    assert!(!report.seeded.queue.is_empty());
    assert!(report.seeded.queue.iter().all(|l| keywords.contains(&l.as_str())));
}

#[test]
fn test_comment_only_source_has_no_identifiers() {
    let visualizer = CountingVisualizer::default();
    let output = Capture::default();
    let mut analyzer = TimingAnalyzer::new()
        .with_output(output.clone())
        .with_visualizer(visualizer.clone());

    let result = analyzer.run_analysis(
        "// nothing to see here",
        |_: &mut TimingAnalyzer| {},
        Some(LexemeCategory::Identifier),
    );

    assert!(matches!(result, Err(Error::EmptyLexemePool)));
    assert!(output.text().is_empty());
    assert_eq!(visualizer.renders(), 0);
}

#[test]
fn test_report_json_export() {
    let mut analyzer = fixed_analyzer(&["alpha", "beta"], 2);

    let report = analyzer
        .run_analysis(
            "",
            |a: &mut TimingAnalyzer| {
                a.search_lexeme("alpha");
            },
            None,
        )
        .unwrap();

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["time_unit"], "ns");
    assert_eq!(value["seeded"]["stack"], serde_json::json!(["alpha", "beta"]));
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["entries"][1]["structure"], "queue");
    assert_eq!(value["entries"][1]["operation"], "search");
    assert_eq!(value["entries"][1]["count"], 1);

    let restored: PerformanceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn test_visualizer_runs_once_per_analysis() {
    let visualizer = CountingVisualizer::default();
    let mut analyzer = fixed_analyzer(&["a", "b", "c"], 1).with_visualizer(visualizer.clone());

    analyzer.run_analysis("", |_: &mut TimingAnalyzer| {}, None).unwrap();
    let report = analyzer.run_analysis("", |_: &mut TimingAnalyzer| {}, None).unwrap();

    assert_eq!(visualizer.renders(), 2);
    // Statistics accumulate across runs
    assert_eq!(report.entry(StructureKind::Stack, OperationKind::Add).unwrap().count, 2);
    assert_eq!(stack_of(&analyzer), vec!["a", "a"]);
}
