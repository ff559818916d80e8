//! Clock face document.
//!
//! The document the overlay window loads: a JSON description of the lines
//! the face draws, each with a strftime format, point size, color, and
//! display flags. Once loaded it belongs to the windowing shell; the
//! launcher only ever sees its path.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::model::constants::*;
use crate::{clamp, parse_hex_color};

/// One line of the clock face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceLine {
    /// strftime format rendered against local time.
    pub format: String,
    /// Point size.
    pub size: f32,
    /// `#RRGGBB` or `#RRGGBBAA` color.
    pub color: String,
    /// Render with the monospace family.
    pub monospace: bool,
    /// Uppercase the rendered text.
    pub uppercase: bool,
    /// Dim the line on odd seconds.
    pub pulse: bool,
}

impl Default for FaceLine {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIME_FORMAT.to_string(),
            size: DEFAULT_TIME_SIZE,
            color: DEFAULT_TIME_COLOR.to_string(),
            monospace: false,
            uppercase: false,
            pulse: false,
        }
    }
}

impl FaceLine {
    /// Render the line's text for the given instant.
    pub fn text(&self, now: &DateTime<Local>) -> String {
        let rendered = now.format(&self.format).to_string();
        if self.uppercase {
            rendered.to_uppercase()
        } else {
            rendered
        }
    }

    /// The line's color for the given instant, pulse applied.
    pub fn rgba(&self, now: &DateTime<Local>) -> (u8, u8, u8, u8) {
        let (r, g, b, mut a) = parse_hex_color(&self.color).unwrap_or((255, 255, 255, 255));
        if self.pulse && now.second() % 2 == 1 {
            a = (a as f64 * PULSE_DIM).round() as u8;
        }
        (r, g, b, a)
    }

    fn validate(&mut self) {
        if !format_is_valid(&self.format) {
            log::warn!("invalid time format {:?}, using default", self.format);
            self.format = DEFAULT_TIME_FORMAT.to_string();
        }
        if parse_hex_color(&self.color).is_none() {
            log::warn!("invalid color {:?}, using white", self.color);
            self.color = "#FFFFFF".to_string();
        }
        self.size = clamp(self.size as f64, MIN_FACE_SIZE as f64, MAX_FACE_SIZE as f64) as f32;
    }
}

/// The whole face: an ordered stack of lines drawn centered in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceDocument {
    /// Lines, top to bottom.
    pub lines: Vec<FaceLine>,
    /// Vertical gap between lines in pixels.
    pub spacing: f32,
}

impl Default for FaceDocument {
    fn default() -> Self {
        // Day banner, pulsing time, date: the built-in face.
        Self {
            lines: vec![
                FaceLine {
                    format: DEFAULT_BANNER_FORMAT.to_string(),
                    size: DEFAULT_BANNER_SIZE,
                    color: DEFAULT_BANNER_COLOR.to_string(),
                    monospace: false,
                    uppercase: true,
                    pulse: false,
                },
                FaceLine {
                    format: DEFAULT_TIME_FORMAT.to_string(),
                    size: DEFAULT_TIME_SIZE,
                    color: DEFAULT_TIME_COLOR.to_string(),
                    monospace: true,
                    uppercase: false,
                    pulse: true,
                },
                FaceLine {
                    format: DEFAULT_DATE_FORMAT.to_string(),
                    size: DEFAULT_DATE_SIZE,
                    color: DEFAULT_DATE_COLOR.to_string(),
                    monospace: true,
                    uppercase: false,
                    pulse: false,
                },
            ],
            spacing: DEFAULT_LINE_SPACING,
        }
    }
}

impl FaceDocument {
    /// Load a face document, falling back to the built-in face if the file
    /// is missing or does not parse.
    pub fn load(path: &Path) -> Self {
        let mut face = match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<FaceDocument>(&contents) {
                Ok(face) => face,
                Err(err) => {
                    log::warn!("face document {} did not parse: {err}", path.display());
                    FaceDocument::default()
                }
            },
            Err(err) => {
                log::warn!("face document {} unreadable: {err}", path.display());
                FaceDocument::default()
            }
        };
        face.validate();
        face
    }

    /// Validates and clamps every line to drawable values.
    pub fn validate(&mut self) {
        for line in &mut self.lines {
            line.validate();
        }
        self.spacing = clamp(self.spacing as f64, 0.0, MAX_LINE_SPACING as f64) as f32;
    }
}

/// True if chrono can render the whole format string.
fn format_is_valid(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
