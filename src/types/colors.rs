use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "gray_background" => Ok(Color::GrayBackground),
            "brown_background" => Ok(Color::BrownBackground),
            "red_background" => Ok(Color::RedBackground),
            "orange_background" => Ok(Color::OrangeBackground),
            "yellow_background" => Ok(Color::YellowBackground),
            "green_background" => Ok(Color::GreenBackground),
            "blue_background" => Ok(Color::BlueBackground),
            "purple_background" => Ok(Color::PurpleBackground),
            "pink_background" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

// Notion adds colors over time; an unknown one must not reject the object.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(name) => name.parse().unwrap_or_else(|e| {
                log::debug!("{}; using default", e);
                Color::Default
            }),
            None => Color::Default,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
