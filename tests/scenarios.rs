use serde::Deserialize;

use chess_referee::board::{BoardBuilder, Color, PieceKind};
use chess_referee::engine::{Game, GameOptions, GameState, ScriptedPrompter};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    setup: Option<Setup>,
    #[serde(default)]
    promotions: Vec<String>,
    moves: Vec<(String, String)>,
    notations: Vec<String>,
    state: String,
    #[serde(default)]
    winner: Option<String>,
}

#[derive(Deserialize)]
struct Setup {
    to_move: String,
    pieces: Vec<(String, String, String)>,
}

fn color(name: &str) -> Color {
    match name {
        "White" => Color::White,
        "Black" => Color::Black,
        other => panic!("unknown color {other}"),
    }
}

fn kind(name: &str) -> PieceKind {
    match name {
        "Pawn" => PieceKind::Pawn,
        "Knight" => PieceKind::Knight,
        "Bishop" => PieceKind::Bishop,
        "Rook" => PieceKind::Rook,
        "Queen" => PieceKind::Queen,
        "King" => PieceKind::King,
        other => panic!("unknown piece kind {other}"),
    }
}

fn state(name: &str) -> GameState {
    match name {
        "InProgress" => GameState::InProgress,
        "DecisiveEnd" => GameState::DecisiveEnd,
        "DrawnEnd" => GameState::DrawnEnd,
        other => panic!("unknown state {other}"),
    }
}

fn start(scenario: &Scenario) -> Game<ScriptedPrompter> {
    let prompter = ScriptedPrompter::new().with_promotions(scenario.promotions.iter().cloned());
    let Some(setup) = &scenario.setup else {
        return Game::new(GameOptions::default(), prompter);
    };

    let mut builder = BoardBuilder::new();
    for (square, side, piece) in &setup.pieces {
        builder = builder.piece(square.parse().unwrap(), color(side), kind(piece));
    }
    let board = builder
        .build()
        .unwrap_or_else(|e| panic!("{}: bad setup: {e}", scenario.name));
    Game::from_board(board, color(&setup.to_move), GameOptions::default(), prompter)
}

#[test]
fn scripted_scenarios() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let mut game = start(scenario);
        let mut notations = Vec::new();
        for (from, to) in &scenario.moves {
            let record = game
                .submit_turn(from, to)
                .unwrap_or_else(|e| panic!("{}: {from} -> {to} rejected: {e}", scenario.name));
            notations.push(record.notation);
        }

        assert_eq!(notations, scenario.notations, "{}", scenario.name);
        assert_eq!(game.state(), state(&scenario.state), "{}", scenario.name);
        assert_eq!(
            game.winner().map(|p| p.color()),
            scenario.winner.as_deref().map(color),
            "{}",
            scenario.name
        );
    }
}
