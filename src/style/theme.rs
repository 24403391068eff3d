use crate::calendar::model::Level;
use crate::style::color::HexColor;

/// Default color for days without contributions (GitHub's light gray).
pub const DEFAULT_EMPTY_CELL: HexColor = HexColor::rgb(0xeb, 0xed, 0xf0);

/// Named empty-cell presets offered to the configuration UI.
pub const EMPTY_CELL_PRESETS: [(&str, HexColor); 5] = [
    ("GitHub Gray", HexColor::rgb(0xeb, 0xed, 0xf0)),
    ("Warm Gray", HexColor::rgb(0xe5, 0xe7, 0xeb)),
    ("Cool Gray", HexColor::rgb(0xe2, 0xe8, 0xf0)),
    ("Light", HexColor::rgb(0xf3, 0xf4, 0xf6)),
    ("Dark", HexColor::rgb(0xcb, 0xd5, 0xe1)),
];

/// Marker, impact and background colors for the animated document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub marker: HexColor,
    pub impact: HexColor,
    /// `None` renders on a transparent canvas.
    #[serde(default)]
    pub background: Option<HexColor>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Default,
    Github,
    Ocean,
    Sunset,
}

impl ThemePreset {
    pub const ALL: [Self; 4] = [Self::Default, Self::Github, Self::Ocean, Self::Sunset];

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Github => "GitHub",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
        }
    }

    pub fn theme(self) -> Theme {
        let (marker, impact, background) = match self {
            Self::Default => (
                HexColor::rgb(0x4f, 0x46, 0xe5),
                HexColor::rgb(0xff, 0x6b, 0x35),
                HexColor::rgb(0xff, 0xff, 0xff),
            ),
            Self::Github => (
                HexColor::rgb(0x21, 0x6e, 0x39),
                HexColor::rgb(0xff, 0x44, 0x44),
                HexColor::rgb(0xf6, 0xf8, 0xfa),
            ),
            Self::Ocean => (
                HexColor::rgb(0x0e, 0xa5, 0xe9),
                HexColor::rgb(0xf9, 0x73, 0x16),
                HexColor::rgb(0xf0, 0xf9, 0xff),
            ),
            Self::Sunset => (
                HexColor::rgb(0xdc, 0x26, 0x26),
                HexColor::rgb(0xfb, 0xbf, 0x24),
                HexColor::rgb(0xfe, 0xf3, 0xc7),
            ),
        };
        Theme {
            marker,
            impact,
            background: Some(background),
        }
    }
}

/// A theme given either by preset name or spelled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ThemeChoice {
    Preset(ThemePreset),
    Custom(Theme),
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self::Preset(ThemePreset::Default)
    }
}

impl ThemeChoice {
    pub fn resolve(self) -> Theme {
        match self {
            Self::Preset(p) => p.theme(),
            Self::Custom(t) => t,
        }
    }
}

/// Animation speed; scales every shot and gap duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl Speed {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Fast => 0.6,
            Self::Normal => 1.0,
            Self::Slow => 1.6,
        }
    }
}

/// Five level colors, index = level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub levels: [HexColor; 5],
}

impl Palette {
    pub const GITHUB_LIGHT: Self = Self {
        levels: [
            DEFAULT_EMPTY_CELL,
            HexColor::rgb(0x9b, 0xe9, 0xa8),
            HexColor::rgb(0x40, 0xc4, 0x63),
            HexColor::rgb(0x30, 0xa1, 0x4e),
            HexColor::rgb(0x21, 0x6e, 0x39),
        ],
    };

    pub const GITHUB_DARK: Self = Self {
        levels: [
            HexColor::rgb(0x16, 0x1b, 0x22),
            HexColor::rgb(0x0e, 0x44, 0x29),
            HexColor::rgb(0x00, 0x6d, 0x32),
            HexColor::rgb(0x26, 0xa6, 0x41),
            HexColor::rgb(0x39, 0xd3, 0x53),
        ],
    };

    /// Color for `level`; level 0 uses `empty_override` when given.
    pub fn color(&self, level: Level, empty_override: Option<HexColor>) -> HexColor {
        if level == Level::NONE
            && let Some(c) = empty_override
        {
            return c;
        }
        self.levels[level.index().min(self.levels.len() - 1)]
    }
}

/// Level color in the GitHub light palette, with an optional empty-cell override.
pub fn level_color(level: Level, empty_override: Option<HexColor>) -> HexColor {
    Palette::GITHUB_LIGHT.color(level, empty_override)
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
