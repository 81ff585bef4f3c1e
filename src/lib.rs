//! # Connect Four
//!
//! A Connect Four game with a minimax opponent. The engine validates moves,
//! detects wins and draws, scores positions with a window heuristic and
//! searches with alpha-beta pruning; a small state machine drives menu,
//! play and rematch. A terminal UI built with Ratatui sits on top.
//!
//! ## Modules
//!
//! - [`game`]: Board, rules, positions, and the game state machine
//! - [`ai`]: Agent trait, heuristic evaluator, minimax search, random agent
//! - [`arena`]: Headless agent-vs-agent matches
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
