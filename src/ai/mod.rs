mod agent;
pub mod heuristic;
mod random;
pub mod search;

pub use agent::Agent;
pub use heuristic::{Heuristic, Score, WindowHeuristic};
pub use random::RandomAgent;
pub use search::{choose_ai_move, MinimaxAgent, SearchResult, Searcher, SCORE_LOSS, SCORE_WIN};
