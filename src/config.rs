//! External configuration loader.
//!
//! Reads `mazerunner.toml` from the executable's directory (or CWD), or from
//! an explicit path given on the command line. A searched file that is
//! missing or broken falls back to defaults; an explicit one must load.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::grid::Grid;

pub const CONFIG_FILE: &str = "mazerunner.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub solver: SolverConfig,
    pub render: RenderConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub step_limit_factor: usize, // 0 = unlimited
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: bool,
    pub show_path: bool,
    pub glyphs: Glyphs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub empty: char,
    pub start: char,
    pub end: char,
    pub coin: char,
    pub path: char,
}

impl SolverConfig {
    /// Step budget for `grid`: `factor × width × height`.
    pub fn step_limit(&self, grid: &Grid) -> Option<usize> {
        if self.step_limit_factor == 0 {
            return None;
        }
        Some(
            self.step_limit_factor
                .saturating_mul(grid.width())
                .saturating_mul(grid.height()),
        )
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    solver: TomlSolver,
    #[serde(default)]
    render: TomlRender,
}

#[derive(Deserialize, Debug)]
struct TomlSolver {
    #[serde(default = "default_step_limit_factor")]
    step_limit_factor: usize,
    #[serde(default)]
    verbose: bool,
}

#[derive(Deserialize, Debug)]
struct TomlRender {
    #[serde(default = "default_true")]
    color: bool,
    #[serde(default = "default_true")]
    show_path: bool,
    #[serde(default)]
    glyphs: TomlGlyphs,
}

#[derive(Deserialize, Debug)]
struct TomlGlyphs {
    #[serde(default = "default_wall")]
    wall: char,
    #[serde(default = "default_empty")]
    empty: char,
    #[serde(default = "default_start")]
    start: char,
    #[serde(default = "default_end")]
    end: char,
    #[serde(default = "default_coin")]
    coin: char,
    #[serde(default = "default_path")]
    path: char,
}

// ── Defaults ──

fn default_step_limit_factor() -> usize { 2 }
fn default_true() -> bool { true }
fn default_wall() -> char { '*' }
fn default_empty() -> char { '.' }
fn default_start() -> char { 's' }
fn default_end() -> char { 'e' }
fn default_coin() -> char { 'C' }
fn default_path() -> char { '+' }

impl Default for TomlSolver {
    fn default() -> Self {
        TomlSolver {
            step_limit_factor: default_step_limit_factor(),
            verbose: false,
        }
    }
}

impl Default for TomlRender {
    fn default() -> Self {
        TomlRender {
            color: true,
            show_path: true,
            glyphs: TomlGlyphs::default(),
        }
    }
}

impl Default for TomlGlyphs {
    fn default() -> Self {
        TomlGlyphs {
            wall: default_wall(),
            empty: default_empty(),
            start: default_start(),
            end: default_end(),
            coin: default_coin(),
            path: default_path(),
        }
    }
}

impl From<TomlConfig> for MazeConfig {
    fn from(cfg: TomlConfig) -> Self {
        MazeConfig {
            solver: SolverConfig {
                step_limit_factor: cfg.solver.step_limit_factor,
                verbose: cfg.solver.verbose,
            },
            render: RenderConfig {
                color: cfg.render.color,
                show_path: cfg.render.show_path,
                glyphs: Glyphs {
                    wall: cfg.render.glyphs.wall,
                    empty: cfg.render.glyphs.empty,
                    start: cfg.render.glyphs.start,
                    end: cfg.render.glyphs.end,
                    coin: cfg.render.glyphs.coin,
                    path: cfg.render.glyphs.path,
                },
            },
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl MazeConfig {
    /// Load from `explicit` if given, otherwise search for `mazerunner.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Ok(read_toml(path)?.into()),
            None => Ok(search_toml(&candidate_dirs()).into()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TomlConfig>(text).map(Into::into)
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    dirs
}

fn read_toml(path: &Path) -> Result<TomlConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<TomlConfig>(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// First `mazerunner.toml` found in `search_dirs`; defaults if none loads.
fn search_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            continue;
        }
        match read_toml(&path) {
            Ok(cfg) => {
                log::debug!("loaded config from {}", path.display());
                return cfg;
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                return TomlConfig::default();
            }
        }
    }
    TomlConfig::default()
}
