//! Shared plumbing for the headless simulation binaries: scenario files,
//! move scripts and the built-in demo level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use zelda_core::{Direction, GameConfig, Pos};

pub const DEFAULT_SEED: u64 = 42;

/// A level plus an optional seed, as stored in a TOML scenario file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub level: GameConfig,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
    }

    /// CLI seed first, then the scenario's, then [`DEFAULT_SEED`].
    pub fn resolve_seed(&self, cli_seed: Option<u64>) -> u64 {
        cli_seed.or(self.seed).unwrap_or(DEFAULT_SEED)
    }
}

/// Small arena used when no scenario file is given.
pub fn demo_level() -> GameConfig {
    GameConfig {
        link: Some(Pos::new(1, 1)),
        wanderer: Some(Pos::new(6, 6)),
        blocks: vec![Pos::new(4, 3), Pos::new(4, 4), Pos::new(4, 5), Pos::new(8, 1)],
        pushable_blocks: vec![Pos::new(2, 1), Pos::new(6, 3)],
        ..GameConfig::default()
    }
}

/// Parses a move script: `U`, `D`, `L`, `R` request a direction and `.` is an
/// idle tick. Whitespace is ignored.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(index, c)| match c {
            '.' => Ok(None),
            _ => match Direction::from_char(c) {
                Some(direction) => Ok(Some(direction)),
                None => bail!("invalid move '{c}' at position {index}; expected U, D, L, R or ."),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use zelda_core::Game;

    use super::*;

    #[test]
    fn parses_moves_and_idle_ticks() {
        let moves = parse_moves("Rr . d\nL").expect("script should parse");
        assert_eq!(
            moves,
            vec![
                Some(Direction::Right),
                Some(Direction::Right),
                None,
                Some(Direction::Down),
                Some(Direction::Left),
            ]
        );
    }

    #[test]
    fn rejects_unknown_move_letters() {
        let err = parse_moves("RRX").expect_err("X is not a move");
        assert!(err.to_string().contains("position 2"), "error should locate the move: {err}");
    }

    #[test]
    fn loads_scenario_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
seed = 7

[level]
grid_size = 8
link = {{ x = 1, y = 2 }}
blocks = [{{ x = 3, y = 3 }}, {{ x = 4, y = 3 }}]
"#
        )
        .unwrap();

        let scenario = Scenario::load(file.path()).expect("scenario should load");
        assert_eq!(scenario.seed, Some(7));
        assert_eq!(scenario.level.grid_size, 8);
        assert_eq!(scenario.level.link, Some(Pos::new(1, 2)));
        assert_eq!(scenario.level.blocks, vec![Pos::new(3, 3), Pos::new(4, 3)]);
        assert!(scenario.level.pushable_blocks.is_empty());
        assert_eq!(scenario.level.wanderer, None);
    }

    #[test]
    fn missing_scenario_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Scenario::load(&path).expect_err("file does not exist");
        assert!(err.to_string().contains("missing.toml"), "{err}");
    }

    #[test]
    fn seed_resolution_prefers_cli_then_file() {
        let scenario = Scenario { seed: Some(9), level: GameConfig::default() };
        assert_eq!(scenario.resolve_seed(Some(1)), 1);
        assert_eq!(scenario.resolve_seed(None), 9);
        assert_eq!(Scenario::default().resolve_seed(None), DEFAULT_SEED);
    }

    #[test]
    fn demo_level_is_valid() {
        assert!(Game::new(&demo_level(), DEFAULT_SEED).is_ok());
    }
}
