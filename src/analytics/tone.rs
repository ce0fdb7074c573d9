//! Geometry for the per-source tone bar.

use super::TONE_COLOR_THRESHOLD;

/// Which edge of the track the bar grows from. Negative tone grows from
/// the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneAnchor {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneColor {
    Positive,
    Negative,
    Neutral,
}

/// Rendered form of a -1..1 tone score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneBar {
    pub width_percent: f64,
    pub anchor: ToneAnchor,
    pub color: ToneColor,
}

impl ToneBar {
    /// Maps a tone score to bar geometry. A missing score is treated as 0
    /// and renders as an empty neutral track.
    pub fn from_tone(tone: Option<f64>) -> Self {
        let tone = tone.unwrap_or(0.0);
        let color = if tone > TONE_COLOR_THRESHOLD {
            ToneColor::Positive
        } else if tone < -TONE_COLOR_THRESHOLD {
            ToneColor::Negative
        } else {
            ToneColor::Neutral
        };
        ToneBar {
            width_percent: (tone.abs() * 100.0).clamp(0.0, 100.0),
            anchor: if tone < 0.0 {
                ToneAnchor::Right
            } else {
                ToneAnchor::Left
            },
            color,
        }
    }
}
