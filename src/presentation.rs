//! End screen model
//!
//! Turns the terminal event into the messages and decorations the page shows.
//! Nothing here touches the DOM; `platform::dom` applies the result.

use rand::Rng;
use serde::Serialize;

use crate::config::EndScreenConfig;
use crate::sim::{Outcome, TerminalEvent};

/// Confetti colours
pub const NEON_COLORS: [&str; 5] = ["#FF00FF", "#00FFFF", "#00FF00", "#FFFF00", "#FF4081"];

/// Text for the score display
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// A floating balloon (pixel units relative to the viewport)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balloon {
    /// Square side in px, 30-89
    pub size: u32,
    pub left: f64,
    pub top: f64,
    /// Float animation duration, 3000-3999 ms
    pub duration_ms: u32,
}

/// A falling confetti piece
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confetti {
    pub color: &'static str,
    /// Horizontal position, percent of the container width
    pub left_pct: f64,
    /// Vertical position, percent of the viewport height
    pub top_vh: f64,
    /// Fall animation duration, 3-6 s
    pub duration_s: f64,
}

/// Decorations released on a win
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Celebration {
    pub balloons: Vec<Balloon>,
    pub confetti: Vec<Confetti>,
}

/// Everything the game-over container shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndScreen {
    pub outcome: Outcome,
    pub headline: String,
    pub subline: String,
    pub score: u32,
    /// Present on a win only
    pub celebration: Option<Celebration>,
}

impl EndScreen {
    pub fn build<R: Rng>(
        event: &TerminalEvent,
        config: &EndScreenConfig,
        viewport: (f64, f64),
        rng: &mut R,
    ) -> Self {
        match event.outcome {
            Outcome::Won => Self {
                outcome: event.outcome,
                headline: config.win_headline.clone(),
                subline: config.win_subline.clone(),
                score: event.score,
                celebration: Some(Celebration {
                    balloons: generate_balloons(rng, config.balloon_count, viewport),
                    confetti: generate_confetti(rng, config.confetti_count),
                }),
            },
            Outcome::Lost => Self {
                outcome: event.outcome,
                headline: config.loss_headline.clone(),
                subline: config.loss_subline.clone(),
                score: event.score,
                celebration: None,
            },
        }
    }
}

/// Balloons scattered over a `viewport` of (width, height) px
pub fn generate_balloons<R: Rng>(rng: &mut R, count: usize, viewport: (f64, f64)) -> Vec<Balloon> {
    let (width, height) = viewport;
    (0..count)
        .map(|_| {
            let size = (rng.random::<f64>() * 60.0 + 30.0).floor() as u32;
            let max_left = (width - size as f64).max(0.0);
            let max_top = (height - size as f64).max(0.0);
            Balloon {
                size,
                left: rng.random::<f64>() * max_left,
                top: rng.random::<f64>() * max_top,
                duration_ms: (rng.random::<f64>() * 1000.0 + 3000.0).floor() as u32,
            }
        })
        .collect()
}

pub fn generate_confetti<R: Rng>(rng: &mut R, count: usize) -> Vec<Confetti> {
    (0..count)
        .map(|_| Confetti {
            color: NEON_COLORS[rng.random_range(0..NEON_COLORS.len())],
            left_pct: rng.random::<f64>() * 100.0,
            top_vh: rng.random::<f64>() * 100.0,
            duration_s: rng.random::<f64>() * 3.0 + 3.0,
        })
        .collect()
}
