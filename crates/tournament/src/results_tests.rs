use super::*;

fn record(game: u32, result: GameResult, ending: GameEnding) -> GameRecord {
    GameRecord {
        game,
        first_is_white: game % 2 == 0,
        result,
        ending,
        plies: 10,
        final_state: GameState::startpos(),
    }
}

#[test]
fn test_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(record(0, GameResult::Win, GameEnding::NoMoves { loser: Side::Black }));
    result.record(record(1, GameResult::Draw, GameEnding::PlyCap));
    assert_eq!(result.total_games(), 2);
    assert_eq!(result.games.len(), 2);
    assert!((result.score() - 0.75).abs() < 1e-9);
}

#[test]
fn test_white_result() {
    assert_eq!(
        GameEnding::NoMoves { loser: Side::White }.white_result(),
        GameResult::Loss
    );
    assert_eq!(
        GameEnding::NoMoves { loser: Side::Black }.white_result(),
        GameResult::Win
    );
    assert_eq!(GameEnding::PlyCap.white_result(), GameResult::Draw);
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_save_and_load() {
    let mut result = MatchResult::new();
    result.record(record(0, GameResult::Loss, GameEnding::NoMoves { loser: Side::White }));
    let report = MatchReport::new("minimax:3", "random", MatchConfig::default(), result);

    let path = std::env::temp_dir().join(format!("match_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, report);
}

#[test]
fn test_report_lists_games() {
    let mut result = MatchResult::new();
    result.record(record(0, GameResult::Win, GameEnding::NoMoves { loser: Side::Black }));
    result.record(record(1, GameResult::Draw, GameEnding::PlyCap));
    let text = MatchReport::new("a", "b", MatchConfig::default(), result).generate_report();

    assert!(text.contains("=== Match: a vs b ==="));
    assert!(text.contains("black has no move"));
    assert!(text.contains("ply cap"));
    assert!(text.contains("a: 1 wins, 0 losses, 1 draws (score 75.0%)"));
}
