//! Drives the console front end with scripted input.

use std::io::Cursor;
use strictly_noughts::{ConsoleOptions, PlayerSetup, Session, run_console};

fn session() -> Session {
    let ada = PlayerSetup::new("Ada", "X");
    let grace = PlayerSetup::new("Grace", "O");
    Session::with_players(&ada, &grace).unwrap()
}

fn run(script: &str, options: ConsoleOptions) -> (Session, String) {
    let mut session = session();
    let mut output = Vec::new();
    run_console(&mut session, Cursor::new(script), &mut output, options).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_console_plays_to_a_win() {
    let (session, output) = run("1\n4\n2\n5\n3\nquit\n", ConsoleOptions::default());

    assert!(output.contains("Ada (X) wins!"));
    assert!(output.contains("Type 'new' for another game"));
    let game = session.game().unwrap();
    assert_eq!(game.roster().players()[0].wins(), 1);
}

#[test]
fn test_console_reports_taken_and_off_board_cells() {
    let (session, output) = run("5\n5\n3,3\nwhat\n", ConsoleOptions::default());

    assert!(output.contains("That cell is taken. Grace (O) to move."));
    assert!(output.contains("Cell (3, 3) is off the board"));
    assert!(output.contains("Unrecognized input \"what\""));
    assert_eq!(session.game().unwrap().turn_index(), 1);
}

#[test]
fn test_console_lists_open_cells() {
    let (_, output) = run("5\n1\n", ConsoleOptions::default());

    assert!(output.contains("Open cells: 1 2 3 4 5 6 7 8 9"));
    assert!(output.contains("Open cells: 1 2 3 4 6 7 8 9"));
    assert!(output.contains("Open cells: 2 3 4 6 7 8 9"));
}

#[test]
fn test_console_new_game_keeps_scores() {
    let (session, output) = run("1\n4\n2\n5\n3\nnew\n9\n", ConsoleOptions::default());

    let game = session.game().unwrap();
    assert_eq!(game.board().marked_count(), 1);
    assert_eq!(game.roster().players()[0].wins(), 1);
    assert!(output.contains("Final score:"));
}

#[test]
fn test_console_json_reports() {
    let (_, output) = run("2,2\n", ConsoleOptions { json: true });

    let reports: Vec<serde_json::Value> = output
        .lines()
        .filter_map(|line| line.find('{').map(|start| &line[start..]))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect();

    assert_eq!(reports.len(), 2);
    let last = &reports[1];
    assert_eq!(last["valid"], true);
    assert_eq!(last["tie"], false);
    assert_eq!(last["board"][8]["Marked"], "X");
    assert_eq!(last["current_player"]["name"], "Grace");
}

#[test]
fn test_console_needs_players() {
    let mut session = Session::new();
    let mut output = Vec::new();
    let result = run_console(
        &mut session,
        Cursor::new(""),
        &mut output,
        ConsoleOptions::default(),
    );
    assert!(result.is_err());
}
