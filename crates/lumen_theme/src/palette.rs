//! Color tokens and the light/dark palette pair

use lumen_core::Color;
use serde::{Deserialize, Serialize};

use crate::store::ThemeMode;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorToken {
    Background,
    Surface,
    SurfaceOverlay,
    TextPrimary,
    TextSecondary,
    TextLink,
    Border,
    Accent,
    AccentSubtle,
    SidebarBackground,
    HighlightActive,
    HighlightHover,
}

/// Complete set of semantic color tokens for one mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub surface_overlay: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_link: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_subtle: Color,
    pub sidebar_bg: Color,
    pub highlight_active: Color,
    pub highlight_hover: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceOverlay => self.surface_overlay,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::Accent => self.accent,
            ColorToken::AccentSubtle => self.accent_subtle,
            ColorToken::SidebarBackground => self.sidebar_bg,
            ColorToken::HighlightActive => self.highlight_active,
            ColorToken::HighlightHover => self.highlight_hover,
        }
    }

    /// Linear interpolation between two token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            surface_overlay: Color::lerp(&from.surface_overlay, &to.surface_overlay, t),
            text_primary: Color::lerp(&from.text_primary, &to.text_primary, t),
            text_secondary: Color::lerp(&from.text_secondary, &to.text_secondary, t),
            text_link: Color::lerp(&from.text_link, &to.text_link, t),
            border: Color::lerp(&from.border, &to.border, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            accent_subtle: Color::lerp(&from.accent_subtle, &to.accent_subtle, t),
            sidebar_bg: Color::lerp(&from.sidebar_bg, &to.sidebar_bg, t),
            highlight_active: Color::lerp(&from.highlight_active, &to.highlight_active, t),
            highlight_hover: Color::lerp(&from.highlight_hover, &to.highlight_hover, t),
        }
    }

    /// Default light palette
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xF8F9FB),
            surface: Color::WHITE,
            surface_overlay: Color::from_hex(0xEDEFF4),
            text_primary: Color::from_hex(0x1A1A2E),
            text_secondary: Color::from_hex(0x5C6070),
            text_link: Color::from_hex(0x1E66F5),
            border: Color::from_hex(0xD8DCE5),
            accent: Color::from_hex(0x1E66F5),
            accent_subtle: Color::from_hex(0x1E66F5).with_alpha(0.12),
            sidebar_bg: Color::from_hex(0xF1F3F7),
            highlight_active: Color::from_hex(0x1E66F5).with_alpha(0.18),
            highlight_hover: Color::from_hex(0x1A1A2E).with_alpha(0.06),
        }
    }

    /// Default dark palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x12131A),
            surface: Color::from_hex(0x1A1C26),
            surface_overlay: Color::from_hex(0x232633),
            text_primary: Color::from_hex(0xE8EAF2),
            text_secondary: Color::from_hex(0x9CA1B5),
            text_link: Color::from_hex(0x7AA2F7),
            border: Color::from_hex(0x2E3240),
            accent: Color::from_hex(0x7AA2F7),
            accent_subtle: Color::from_hex(0x7AA2F7).with_alpha(0.14),
            sidebar_bg: Color::from_hex(0x161822),
            highlight_active: Color::from_hex(0x7AA2F7).with_alpha(0.22),
            highlight_hover: Color::from_hex(0xE8EAF2).with_alpha(0.07),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// A light/dark pair of token sets
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemePalette {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ThemePalette {
    pub fn new(light: ColorTokens, dark: ColorTokens) -> Self {
        Self { light, dark }
    }

    /// Token set for a resolved mode
    pub fn for_mode(&self, mode: ThemeMode) -> &ColorTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            light: ColorTokens::light(),
            dark: ColorTokens::dark(),
        }
    }
}
