//! Score archive for the Games Zone.
//!
//! Each finished session produces one record `(game, score, stars)`. The
//! board keeps every record, exposes the per-game average star rating the
//! menu cards show, and persists everything to localStorage as versioned
//! JSON so ratings survive a reload. Persistence is fire-and-forget:
//! failures warn on the console and never affect gameplay.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

/// The five games of the zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameId {
    TicTacToe,
    Snake,
    Memory,
    Puzzle,
    Quiz,
}

/// Menu display order.
pub const ALL_GAMES: [GameId; 5] = [
    GameId::TicTacToe,
    GameId::Snake,
    GameId::Memory,
    GameId::Puzzle,
    GameId::Quiz,
];

impl GameId {
    /// Stable identifier used in the persisted score records.
    pub fn slug(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "tic-tac-toe",
            GameId::Snake => "snake",
            GameId::Memory => "memory",
            GameId::Puzzle => "puzzle",
            GameId::Quiz => "quiz",
        }
    }

    pub fn from_slug(slug: &str) -> Option<GameId> {
        match slug {
            "tic-tac-toe" => Some(GameId::TicTacToe),
            "snake" => Some(GameId::Snake),
            "memory" => Some(GameId::Memory),
            "puzzle" => Some(GameId::Puzzle),
            "quiz" => Some(GameId::Quiz),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "Tic Tac Toe",
            GameId::Snake => "Snake",
            GameId::Memory => "Memory",
            GameId::Puzzle => "Puzzle",
            GameId::Quiz => "Quiz",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "×",
            GameId::Snake => "🐍",
            GameId::Memory => "🧠",
            GameId::Puzzle => "🧩",
            GameId::Quiz => "❓",
        }
    }

    /// One-line pitch shown on the menu card.
    pub fn tagline(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "三目並べ - AIと対戦",
            GameId::Snake => "ヘビを育てよう",
            GameId::Memory => "絵合わせで記憶力テスト",
            GameId::Puzzle => "スライドパズル",
            GameId::Quiz => "30秒クイズ",
        }
    }
}

/// What a finished game session reports to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    /// 1..=5
    pub stars: u8,
}

/// One persisted play session.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    pub game: GameId,
    pub score: u32,
    pub stars: u8,
    /// Unix epoch milliseconds (`Date.now()` at record time).
    pub completed_at_ms: f64,
}

/// All recorded sessions, newest last.
pub struct ScoreBoard {
    records: Vec<ScoreRecord>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load the persisted archive, or start empty.
    pub fn restore() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let mut board = Self::new();
            save::load(&mut board);
            board
        }
        #[cfg(not(target_arch = "wasm32"))]
        Self::new()
    }

    /// Record a finished session and persist the archive.
    pub fn record(&mut self, game: GameId, result: GameResult, completed_at_ms: f64) {
        self.records.push(ScoreRecord {
            game,
            score: result.score,
            stars: result.stars.clamp(1, 5),
            completed_at_ms,
        });
        #[cfg(target_arch = "wasm32")]
        save::store(self);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Rounded average star rating for a game. 0 when never played.
    pub fn average_stars(&self, game: GameId) -> u8 {
        let scores: Vec<u8> = self
            .records
            .iter()
            .filter(|r| r.game == game)
            .map(|r| r.stars)
            .collect();
        if scores.is_empty() {
            return 0;
        }
        let sum: u32 = scores.iter().map(|&s| s as u32).sum();
        ((sum as f64 / scores.len() as f64).round()) as u8
    }

    /// Number of recorded sessions for a game.
    pub fn plays(&self, game: GameId) -> usize {
        self.records.iter().filter(|r| r.game == game).count()
    }

    /// Best score for a game, if any session was recorded.
    pub fn best_score(&self, game: GameId) -> Option<u32> {
        self.records
            .iter()
            .filter(|r| r.game == game)
            .map(|r| r.score)
            .max()
    }
}

// ── Persistence ──────────────────────────────────────────────
//
// Versioning: `SAVE_VERSION` is the current format, bumped when fields
// are added. `MIN_COMPATIBLE_VERSION` only moves on breaking changes;
// an older-but-compatible archive is loaded as-is.

#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "games_zone_scores";

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    scores: Vec<ScoreSave>,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct ScoreSave {
    game: String,
    score: u32,
    stars: u8,
    completed_at_ms: f64,
}

#[cfg(any(target_arch = "wasm32", test))]
fn extract_save(board: &ScoreBoard) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        scores: board
            .records
            .iter()
            .map(|r| ScoreSave {
                game: r.game.slug().to_string(),
                score: r.score,
                stars: r.stars,
                completed_at_ms: r.completed_at_ms,
            })
            .collect(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply_save(board: &mut ScoreBoard, save: &SaveData) {
    board.records = save
        .scores
        .iter()
        // Records for unknown games (e.g. a removed game) are skipped, not errors.
        .filter_map(|s| {
            Some(ScoreRecord {
                game: GameId::from_slug(&s.game)?,
                score: s.score,
                stars: s.stars.clamp(1, 5),
                completed_at_ms: s.completed_at_ms,
            })
        })
        .collect();
}

#[cfg(target_arch = "wasm32")]
mod save {
    use super::*;

    fn get_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn store(board: &ScoreBoard) {
        let save_data = extract_save(board);
        let json = match serde_json::to_string(&save_data) {
            Ok(j) => j,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Games Zone: スコアのシリアライズに失敗: {e}").into(),
                );
                return;
            }
        };

        if let Some(storage) = get_storage() {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                web_sys::console::warn_1(
                    &format!("Games Zone: localStorage への保存に失敗: {e:?}").into(),
                );
            }
        }
    }

    pub fn load(board: &mut ScoreBoard) -> bool {
        let storage = match get_storage() {
            Some(s) => s,
            None => return false,
        };

        let json = match storage.get_item(STORAGE_KEY) {
            Ok(Some(j)) => j,
            _ => return false,
        };

        let save_data: SaveData = match serde_json::from_str(&json) {
            Ok(d) => d,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Games Zone: スコアデータのパースに失敗（破棄します）: {e}").into(),
                );
                let _ = storage.remove_item(STORAGE_KEY);
                return false;
            }
        };

        if save_data.version < MIN_COMPATIBLE_VERSION {
            web_sys::console::log_1(
                &format!(
                    "Games Zone: スコアバージョンが古すぎます (saved={}, min_compatible={})。破棄します。",
                    save_data.version, MIN_COMPATIBLE_VERSION
                )
                .into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }

        apply_save(board, &save_data);
        true
    }
}
