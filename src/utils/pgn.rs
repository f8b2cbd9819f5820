//! PGN export and the numbered move list.
//!
//! Both read the position's notation log, so check and mate suffixes appear
//! exactly as they were patched during play.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::Color, game_state::GameState};

/// Numbered move list, e.g. `"1. e4 e5 2. Nf3 "`.
pub fn moves_notation_text(notation_log: &[String]) -> String {
    let mut out = String::new();
    for (ply, entry) in notation_log.iter().enumerate() {
        if ply % 2 == 0 {
            out.push_str(&format!("{}. ", ply / 2 + 1));
        }
        out.push_str(entry);
        out.push(' ');
    }
    out
}

/// Result token from the flags of the latest legal-move computation.
pub fn game_result(game_state: &GameState) -> &'static str {
    if game_state.is_checkmate {
        match game_state.side_to_move {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        }
    } else if game_state.is_stalemate {
        "1/2-1/2"
    } else {
        "*"
    }
}

pub fn write_pgn(game_state: &GameState, initial_fen: &str, white: &str, black: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Ray Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), game_result(game_state).to_owned());

    if initial_fen.trim() != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen.trim().to_owned());
    }

    write_pgn_with_headers(&game_state.notation_log, &headers)
}

pub fn write_pgn_with_headers(notation_log: &[String], headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    out.push_str(&moves_notation_text(notation_log));
    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    out.push_str(result);
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &str {
    if matches!(result, "1-0" | "0-1" | "1/2-1/2" | "*") {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
