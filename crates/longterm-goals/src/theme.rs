// theme.rs — Colour palette for the goal list UI.
//
// The stock palette is the four iOS system colours the app has always used.
// Config can add colours or override the stock ones by name.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// An sRGB colour written as `#RRGGBB` (or `#RGB` shorthand on input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Error for a string that is not a hex colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a #RGB or #RRGGBB colour", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            // #RGB expands each digit: #F0A == #FF00AA.
            3 => {
                let d: Vec<String> = hex.chars().map(|c| format!("{c}{c}")).collect();
                Ok(Color::new(channel(&d[0])?, channel(&d[1])?, channel(&d[2])?))
            }
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Named colours, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// The stock palette.
    pub fn ios() -> Self {
        let mut palette = Self::default();
        palette.insert("ios-gray", Color::new(0xF2, 0xF2, 0xF7));
        palette.insert("ios-blue", Color::new(0x00, 0x7A, 0xFF));
        palette.insert("ios-red", Color::new(0xFF, 0x3B, 0x30));
        palette.insert("ios-green", Color::new(0x34, 0xC7, 0x59));
        palette
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(name.into(), color)
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Parse and add raw `name = "#hex"` entries, overriding existing names.
    pub fn extend_raw<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<(), GoalError> {
        for (name, value) in entries {
            let color = value.parse().map_err(|_| GoalError::InvalidColor {
                name: name.clone(),
                value: value.clone(),
            })?;
            self.insert(name.clone(), color);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
