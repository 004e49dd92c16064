//! Host configuration: environment variables first, command-line flags on top.
//!
//! ```text
//! falling-balls [play] [--blocks N] [--seed S] [--log PATH]
//! falling-balls simulate [--blocks N] [--seed S] [--log PATH]
//!                        [--frames F] [--width W] [--height H] [--click-every K]
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::validate_num_blocks;
use crate::types::DEFAULT_NUM_BLOCKS;

/// Piece count for every session.
pub const ENV_BLOCKS: &str = "FALLING_BALLS_BLOCKS";
/// RNG seed for spawn positions.
pub const ENV_SEED: &str = "FALLING_BALLS_SEED";
/// File that receives log output.
pub const ENV_LOG_PATH: &str = "FALLING_BALLS_LOG_PATH";
/// `tracing` filter directives (e.g. `debug`, `falling_balls_core=trace`).
pub const ENV_LOG: &str = "FALLING_BALLS_LOG";

/// Parameters of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulateOptions {
    /// Frames to simulate at 60Hz.
    pub frames: u32,
    pub width: f32,
    pub height: f32,
    /// Catch the next piece every K frames; `None` never clicks.
    pub click_every: Option<u32>,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            width: 800.0,
            height: 600.0,
            click_every: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive terminal game.
    Play,
    /// Headless run that prints the final snapshot as JSON.
    Simulate(SimulateOptions),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub command: Command,
    pub num_blocks: usize,
    /// `None` picks a seed from the wall clock.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Load from the process environment and `args` (without the program name).
    pub fn from_env_and_args(args: &[String]) -> Result<Self> {
        Self::load(|key| std::env::var(key).ok(), args)
    }

    /// Load with an injectable environment lookup.
    pub fn load(env: impl Fn(&str) -> Option<String>, args: &[String]) -> Result<Self> {
        let mut num_blocks = match env(ENV_BLOCKS) {
            Some(v) => parse_blocks(&v).with_context(|| format!("invalid {ENV_BLOCKS}"))?,
            None => DEFAULT_NUM_BLOCKS,
        };
        let mut seed = match env(ENV_SEED) {
            Some(v) => Some(parse_num::<u32>(&v).with_context(|| format!("invalid {ENV_SEED}"))?),
            None => None,
        };
        let mut log_path = env(ENV_LOG_PATH).filter(|p| !p.is_empty()).map(PathBuf::from);

        let mut rest = args;
        let mut simulate = match rest.first().map(String::as_str) {
            Some("simulate") => {
                rest = &rest[1..];
                Some(SimulateOptions::default())
            }
            Some("play") => {
                rest = &rest[1..];
                None
            }
            _ => None,
        };

        let mut i = 0usize;
        while i < rest.len() {
            let flag = rest[i].as_str();
            let value = || {
                rest.get(i + 1)
                    .map(String::as_str)
                    .ok_or_else(|| anyhow!("missing value for {flag}"))
            };
            match (flag, simulate.as_mut()) {
                ("--blocks", _) => num_blocks = parse_blocks(value()?)?,
                ("--seed", _) => seed = Some(parse_num(value()?)?),
                ("--log", _) => log_path = Some(PathBuf::from(value()?)),
                ("--frames", Some(opts)) => opts.frames = parse_num(value()?)?,
                ("--width", Some(opts)) => opts.width = parse_extent(value()?)?,
                ("--height", Some(opts)) => opts.height = parse_extent(value()?)?,
                ("--click-every", Some(opts)) => {
                    let k: u32 = parse_num(value()?)?;
                    opts.click_every = (k > 0).then_some(k);
                }
                (other, _) => return Err(anyhow!("unknown argument: {other}")),
            }
            i += 2;
        }

        Ok(Self {
            command: simulate.map_or(Command::Play, Command::Simulate),
            num_blocks,
            seed,
            log_path,
        })
    }
}

fn parse_num<T: std::str::FromStr>(v: &str) -> Result<T> {
    v.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("not a valid number: {v}"))
}

fn parse_blocks(v: &str) -> Result<usize> {
    Ok(validate_num_blocks(parse_num(v)?)?)
}

fn parse_extent(v: &str) -> Result<f32> {
    let x: f32 = parse_num(v)?;
    if x.is_finite() && x >= 0.0 {
        Ok(x)
    } else {
        Err(anyhow!("extent must be a non-negative number: {v}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_play() {
        let cfg = Config::load(no_env, &[]).unwrap();
        assert_eq!(cfg.command, Command::Play);
        assert_eq!(cfg.num_blocks, DEFAULT_NUM_BLOCKS);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn flags_override_env() {
        let env = |k: &str| match k {
            ENV_BLOCKS => Some("7".to_string()),
            ENV_SEED => Some("99".to_string()),
            _ => None,
        };
        let cfg = Config::load(env, &args(&["play", "--blocks", "3"])).unwrap();
        assert_eq!(cfg.num_blocks, 3);
        assert_eq!(cfg.seed, Some(99));
    }

    #[test]
    fn parses_simulate_options() {
        let cfg = Config::load(
            no_env,
            &args(&[
                "simulate",
                "--frames",
                "120",
                "--height",
                "250",
                "--click-every",
                "10",
            ]),
        )
        .unwrap();
        let Command::Simulate(opts) = cfg.command else {
            panic!("expected simulate");
        };
        assert_eq!(opts.frames, 120);
        assert_eq!(opts.height, 250.0);
        assert_eq!(opts.width, 800.0);
        assert_eq!(opts.click_every, Some(10));
    }

    #[test]
    fn rejects_bad_block_counts() {
        assert!(Config::load(no_env, &args(&["--blocks", "0"])).is_err());
        assert!(Config::load(no_env, &args(&["--blocks", "21"])).is_err());
        let env = |k: &str| (k == ENV_BLOCKS).then(|| "zero".to_string());
        assert!(Config::load(env, &[]).is_err());
    }

    #[test]
    fn simulate_flags_need_simulate() {
        assert!(Config::load(no_env, &args(&["--frames", "10"])).is_err());
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(Config::load(no_env, &args(&["--nope"])).is_err());
        assert!(Config::load(no_env, &args(&["--seed"])).is_err());
        assert!(Config::load(no_env, &args(&["simulate", "--height", "-1"])).is_err());
    }
}
