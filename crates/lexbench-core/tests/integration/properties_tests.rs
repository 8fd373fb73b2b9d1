//! Invariants that hold for any input or operation sequence

use crate::support::{fixed_analyzer, queue_of, seeded_analyzer, stack_of};
use lexbench_core::lexeme::flatten;
use lexbench_core::{
    AnalyzerConfig, CodeLexer, Error, LexemeCategory, LexemeSource, OperationKind, StructureKind,
    StructureStats, TimingAnalyzer,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

#[test]
fn test_empty_pool_never_mutates_stats() {
    // Comments are lexemes too, so comment-only text needs a filter to be empty
    let inputs = [
        ("", None),
        ("   \n\t", None),
        ("/* block */", Some(LexemeCategory::Identifier)),
        ("// line", Some(LexemeCategory::Keyword)),
    ];
    for (code, category) in inputs {
        let mut analyzer = TimingAnalyzer::new().with_output(io::sink());

        let result = analyzer.run_analysis(code, |_: &mut TimingAnalyzer| {}, category);

        assert!(matches!(result, Err(Error::EmptyLexemePool)), "code: {:?}", code);
        assert_eq!(analyzer.stats(), &StructureStats::new());
        assert!(analyzer.queue().is_empty());
        assert!(analyzer.stack().is_empty());
    }

    let mut analyzer = fixed_analyzer(&[], 1);
    assert!(matches!(analyzer.seed_from_code("x", None), Err(Error::EmptyLexemePool)));
    assert_eq!(analyzer.stats(), &StructureStats::new());
}

#[test]
fn test_seed_size_within_pool_bounds() {
    let code = "while (left < right) { int mid = (left + right) / 2; }";
    let pool = flatten(CodeLexer::new().analyze(code, None));

    for seed in 0..50 {
        let mut analyzer = TimingAnalyzer::with_config(AnalyzerConfig::default().with_seed(seed))
            .with_output(io::sink());

        let k = analyzer.seed_from_code(code, None).unwrap();

        assert!((1..=pool.len()).contains(&k), "seed {} drew {}", seed, k);
        assert_eq!(analyzer.queue().len(), k);
        assert_eq!(analyzer.stack().len(), k);
        assert!(analyzer.queue().iter().all(|l| pool.contains(l)));
        for kind in StructureKind::ALL {
            assert_eq!(analyzer.stats_for(kind).count(OperationKind::Add), k as u64);
        }
    }
}

#[test]
fn test_counts_track_every_call() {
    let words = ["a", "b", "c", "d"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut analyzer = TimingAnalyzer::new().with_output(io::sink());
    let mut expected = [0u64; 3];

    for _ in 0..200 {
        let word = words[rng.gen_range(0..words.len())];
        let before = analyzer.stats().clone();

        match rng.gen_range(0..3) {
            0 => {
                analyzer.add_lexeme(word);
                expected[0] += 1;
            },
            1 => {
                analyzer.search_lexeme(word);
                expected[1] += 1;
            },
            _ => {
                analyzer.remove_lexeme(word);
                expected[2] += 1;
            },
        }

        for kind in StructureKind::ALL {
            let after = analyzer.stats_for(kind);
            assert_eq!(after.total_count(), before[kind].total_count() + 1);
            for op in OperationKind::ALL {
                assert!(after.count(op) >= before[kind].count(op));
                assert!(after.elapsed(op) >= before[kind].elapsed(op));
            }
        }
    }

    for kind in StructureKind::ALL {
        let stats = analyzer.stats_for(kind);
        assert_eq!(stats.count(OperationKind::Add), expected[0]);
        assert_eq!(stats.count(OperationKind::Search), expected[1]);
        assert_eq!(stats.count(OperationKind::Remove), expected[2]);
    }
    // Same operations applied to both: same multiset of contents
    let mut queue = queue_of(&analyzer);
    let mut stack = stack_of(&analyzer);
    queue.sort();
    stack.sort();
    assert_eq!(queue, stack);
}

#[test]
fn test_removing_absent_lexeme_keeps_contents() {
    let mut analyzer = seeded_analyzer(&["if", "else", "return"]);
    let queue = queue_of(&analyzer);
    let stack = stack_of(&analyzer);

    for attempt in 1..=3u64 {
        let presence = analyzer.remove_lexeme("while");

        assert!(presence.neither());
        assert_eq!(queue_of(&analyzer), queue);
        assert_eq!(stack_of(&analyzer), stack);
        for kind in StructureKind::ALL {
            assert_eq!(analyzer.stats_for(kind).count(OperationKind::Remove), attempt);
        }
    }
}

#[test]
fn test_added_lexeme_is_found_in_both() {
    let mut analyzer = seeded_analyzer(&["x", "y"]);

    for lexeme in ["x", "fresh", "", "x"] {
        analyzer.add_lexeme(lexeme);
        let presence = analyzer.search_lexeme(lexeme);
        assert!(presence.both(), "{:?} not found after add", lexeme);
    }
}

#[test]
fn test_duplicates_removed_one_at_a_time() {
    let mut analyzer = TimingAnalyzer::new().with_output(io::sink());
    for lexeme in ["dup", "mid", "dup"] {
        analyzer.add_lexeme(lexeme);
    }

    assert!(analyzer.remove_lexeme("dup").both());
    assert_eq!(queue_of(&analyzer), vec!["mid", "dup"]);
    assert_eq!(stack_of(&analyzer), vec!["mid", "dup"]);
    assert!(analyzer.search_lexeme("dup").both());
}
