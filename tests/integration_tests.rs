// Integration tests for the wordle-solver library
// These tests drive the feedback, constraint, filter and ranking pieces together

use std::io::Cursor;
use wordle_solver::cli::CliInterface;
use wordle_solver::wordbank::EMBEDDED_WORDBANK;
use wordle_solver::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn embedded() -> Vec<String> {
    load_wordbank_from_str(EMBEDDED_WORDBANK)
}

#[test]
fn test_alloy_loyal_feedback_has_no_double_credit() {
    let feedback = compute_feedback("loyal", "alloy");
    assert_eq!(feedback.to_string(), "YYYYY");

    // reversed roles: loyal guessed against alloy
    let feedback = compute_feedback("alloy", "loyal");
    assert_eq!(feedback.to_string(), "YYYYY");

    // a repeated guess letter only earns as many colors as the solution holds
    let feedback = compute_feedback("loyal", "llama");
    let l_credits = feedback
        .colors()
        .iter()
        .zip("llama".bytes())
        .filter(|(c, l)| *l == b'l' && **c != LetterColor::Blank)
        .count();
    assert_eq!(l_credits, 2);
    assert_eq!(feedback.to_string(), "GYYBB");
}

#[test]
fn test_every_word_scores_all_green_against_itself() {
    for word in embedded() {
        assert!(compute_feedback(&word, &word).is_solved(), "{word}");
    }
}

#[test]
fn test_crane_against_trace_end_to_end() {
    let dictionary = embedded();
    assert_eq!(compute_feedback("trace", "crane").to_string(), "YGGBG");

    let config = GameConfig {
        opening: Some("crane".to_string()),
        ..GameConfig::default()
    };
    let record = Simulator::new(&dictionary, config).unwrap().play("trace").unwrap();
    let path: Vec<&str> = record.guesses.iter().map(|(g, _)| g.as_str()).collect();
    assert_eq!(path, vec!["crane", "brace", "grace", "trace"]);
    assert_eq!(record.outcome, Outcome::Solved { turns: 4 });
}

#[test]
fn test_filter_never_grows_and_keeps_solution() {
    let dictionary = embedded();
    let probes = ["crane", "sloth", "geese", "lolly", "eerie", "mamma"];

    for solution in dictionary.iter().step_by(5) {
        let mut state = ConstraintState::new(WORD_LENGTH);
        let mut previous = dictionary.len();
        for probe in probes {
            state.apply(probe, &compute_feedback(solution, probe));
            let candidates = filter_candidates(&dictionary, &state);
            assert!(candidates.len() <= previous, "{solution} after {probe}");
            assert!(candidates.contains(&solution.as_str()), "{solution} lost after {probe}");
            previous = candidates.len();
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let dictionary = embedded();
    let mut state = ConstraintState::new(WORD_LENGTH);
    state.apply("slate", &compute_feedback("speed", "slate"));
    state.apply("geese", &compute_feedback("speed", "geese"));

    let first = filter_candidates(&dictionary, &state);
    let second = filter_candidates(&dictionary, &state);
    assert_eq!(first, second);
    assert!(first.contains(&"speed"));
}

#[test]
fn test_recommendation_narrows_small_pool() {
    let wordbank = words(&["brain", "train", "grain", "drain", "stain", "chain", "plain"]);
    let answer = "brain";
    let mut state = ConstraintState::new(WORD_LENGTH);
    let mut candidates = filter_candidates(&wordbank, &state);

    for _ in 0..MAX_TURNS {
        let guess = recommend_guess(&candidates).unwrap().to_string();
        let feedback = compute_feedback(answer, &guess);
        if feedback.is_solved() {
            return;
        }
        state.apply(&guess, &feedback);
        let next = filter_candidates(&wordbank, &state);
        assert!(next.len() < candidates.len());
        assert!(next.contains(&answer));
        candidates = next;
    }
    panic!("brain was not found within {MAX_TURNS} guesses");
}

#[test]
fn test_batch_over_embedded_wordbank() {
    let dictionary = embedded();
    let report = run_batch(&dictionary, GameConfig::default(), None).unwrap();

    assert_eq!(report.total(), dictionary.len());
    assert_eq!(report.histogram().len(), MAX_TURNS);
    assert_eq!(report.solved() + report.failures(), dictionary.len());
    // every solution is in the word list, so autoplay never runs dry
    assert!(
        report
            .entries()
            .iter()
            .all(|e| !matches!(e.record.outcome, Outcome::NoCandidates { .. }))
    );

    let mean = report.mean_turns().unwrap();
    assert!((3.0..4.5).contains(&mean), "mean {mean}");
    assert!(report.failures() * 50 < dictionary.len(), "{} failures", report.failures());
}

#[test]
fn test_batch_histogram_sums_for_small_dictionary() {
    let dictionary = words(&["crane", "slate", "trace", "grape", "crate", "brake", "flake"]);
    let config = GameConfig {
        max_turns: 2,
        ..GameConfig::default()
    };
    let report = run_batch(&dictionary, config, Some(2)).unwrap();
    assert_eq!(report.histogram().len(), 2);
    assert_eq!(report.total(), dictionary.len());
    // brake needs three guesses from trace
    assert_eq!(report.failures(), 1);
    assert_eq!(report.solved_in(1), 1);
    assert_eq!(report.solved_in(2), 5);
}

#[test]
fn test_interactive_game_through_cli_interface() {
    let wordbank = words(&["crane", "slate", "trace", "place", "grace"]);
    let input = "crane\nYGGBG\nTRACE\nggggg\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let outcome = game_loop(&wordbank, &GameConfig::default(), &mut interface);
    assert_eq!(outcome, Outcome::Solved { turns: 2 });
}

#[test]
fn test_interactive_game_recovers_from_bad_input() {
    let wordbank = words(&["crane", "slate"]);
    let input = "cr4ne\ncranes\ncrane\nGGXGG\nGGG\nGGGGG\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let outcome = game_loop(&wordbank, &GameConfig::default(), &mut interface);
    assert_eq!(outcome, Outcome::Solved { turns: 1 });
}

#[test]
fn test_interactive_game_runs_out_of_turns() {
    let wordbank = words(&["crane", "slate", "trace", "grace", "brace"]);
    let config = GameConfig {
        max_turns: 2,
        ..GameConfig::default()
    };
    // solution is brace
    let input = "crane\nYGGBG\ntrace\nBGGGG\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let outcome = game_loop(&wordbank, &config, &mut interface);
    assert_eq!(
        outcome,
        Outcome::Failed {
            turns: 2,
            residual: words(&["grace", "brace"]),
        }
    );
}

#[test]
fn test_interactive_game_quit_and_end_of_input() {
    let wordbank = words(&["crane", "slate"]);

    let mut interface = CliInterface::new(Cursor::new("crane\nq\n"));
    assert_eq!(game_loop(&wordbank, &GameConfig::default(), &mut interface), Outcome::Aborted);

    let mut interface = CliInterface::new(Cursor::new("crane\n"));
    assert_eq!(game_loop(&wordbank, &GameConfig::default(), &mut interface), Outcome::Aborted);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let wordbank_path = std::env::temp_dir().join("wordle-solver-integration-wordbank.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "apple,grape").unwrap();
        writeln!(file, "LEMON").unwrap();
        writeln!(file, "melon").unwrap();
        writeln!(file, "peach").unwrap();
        writeln!(file, "melon").unwrap();
    }

    let wordbank = load_wordbank_from_file(&wordbank_path).unwrap();
    assert_eq!(wordbank, words(&["apple", "grape", "lemon", "melon", "peach"]));

    let simulator = Simulator::new(&wordbank, GameConfig::default()).unwrap();
    for solution in &wordbank {
        let record = simulator.play(solution).unwrap();
        assert!(record.outcome.solved_in().is_some(), "{solution}");
    }

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_direct_engine_calls_reject_malformed_input() {
    let mut state = ConstraintState::new(WORD_LENGTH);
    let feedback = Feedback::parse("BBBBB", WORD_LENGTH).unwrap();
    assert!(matches!(
        state.try_apply("abc", &feedback),
        Err(SolverError::MalformedWord { .. })
    ));
    assert!(matches!(
        Feedback::parse("BBBBZ", WORD_LENGTH),
        Err(SolverError::MalformedFeedback { .. })
    ));
    assert!(validate_word("Crane", WORD_LENGTH).is_ok());
}

#[test]
fn test_uppercase_dictionary_is_an_error_not_a_crash() {
    let dictionary = words(&["CRANE", "TRACE"]);
    assert!(matches!(
        Simulator::new(&dictionary, GameConfig::default()),
        Err(SolverError::MalformedWord { .. })
    ));
    assert!(run_batch(&dictionary, GameConfig::default(), None).is_err());

    // the pure filter just skips such words
    let state = ConstraintState::new(WORD_LENGTH);
    assert!(filter_candidates(&dictionary, &state).is_empty());
    assert_eq!(recommend_guess(&dictionary), Some("CRANE"));
}
