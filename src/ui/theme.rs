//! Theme system for Feather
//! Supports both dark and light modes with a system-style palette

use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme, Vector, color};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SECONDARY_BACKGROUND: Color = color!(0x1c1c1e);
    pub const TERTIARY_BACKGROUND: Color = color!(0x2c2c2e);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0x98989f);
    pub const ACCENT: Color = color!(0x0a84ff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SECONDARY_BACKGROUND: Color = color!(0xf2f2f7);
    pub const TERTIARY_BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
    pub const TEXT_SECONDARY: Color = color!(0x6c6c70);
    pub const ACCENT: Color = color!(0x007aff);
}

/// Diagonal from the top-leading corner to the bottom-trailing one
const DIAGONAL: Degrees = Degrees(135.0);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn secondary_background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SECONDARY_BACKGROUND
    } else {
        light::SECONDARY_BACKGROUND
    }
}

pub fn tertiary_background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TERTIARY_BACKGROUND
    } else {
        light::TERTIARY_BACKGROUND
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// System blue accent
pub fn accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ACCENT
    } else {
        light::ACCENT
    }
}

/// Multiply a color's alpha (used for fade transitions)
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

fn diagonal_gradient(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(DIAGONAL).add_stop(0.0, from).add_stop(1.0, to),
    ))
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Update banner card: rounded gradient surface with accent outline
pub fn update_banner_card(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(diagonal_gradient(
            faded(secondary_background(theme), opacity),
            faded(tertiary_background(theme), opacity),
        )),
        text_color: Some(faded(text_primary(theme), opacity)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: faded(accent(theme), 0.2 * opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1 * opacity),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Circular gradient badge behind the update icon
pub fn update_icon_badge(theme: &Theme, opacity: f32) -> container::Style {
    let accent = accent(theme);
    container::Style {
        background: Some(diagonal_gradient(
            faded(accent, 0.2 * opacity),
            faded(accent, 0.1 * opacity),
        )),
        border: Border {
            radius: 18.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Filled accent pill ("Update")
pub fn update_pill_button(theme: &Theme, status: button::Status, opacity: f32) -> button::Style {
    let accent = accent(theme);
    let fill = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..accent
        },
        button::Status::Pressed => Color { a: 0.7, ..accent },
        _ => accent,
    };

    button::Style {
        background: Some(Background::Color(faded(fill, opacity))),
        text_color: faded(Color::WHITE, opacity),
        border: Border {
            radius: 100.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small circular dismiss button
pub fn dismiss_button(theme: &Theme, status: button::Status, opacity: f32) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(faded(tertiary_background(theme), opacity))),
        text_color: faded(text_secondary(theme), opacity),
        border: Border {
            radius: 14.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: faded(text_primary(theme), opacity),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: tertiary_background(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(secondary_background(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_secondary(theme),
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha() {
        let c = faded(Color::from_rgba(0.1, 0.2, 0.3, 0.5), 0.5);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, 0.1);

        assert_eq!(faded(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(faded(Color::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn test_palette_follows_mode() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_ne!(accent(&Theme::Dark), accent(&Theme::Light));
    }

    #[test]
    fn test_hidden_card_is_transparent() {
        let style = update_banner_card(&Theme::Dark, 0.0);
        assert_eq!(style.shadow.color.a, 0.0);
        assert_eq!(style.border.color.a, 0.0);
    }
}
