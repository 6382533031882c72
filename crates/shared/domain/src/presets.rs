//! Preset lookup tables: total, pure mappings from settings enumerations to
//! concrete CSS-able values. The projection layer consumes these; nothing
//! here touches the DOM-equivalent or the store.

use crate::settings::{BorderRadius, FontFace, FontFamily, FontSize, Spacing};

/// Base spacing unit, in rem.
#[must_use]
pub const fn spacing_rem(spacing: Spacing) -> &'static str {
    match spacing {
        Spacing::UltraCompact => "0.2rem",
        Spacing::Compact => "0.22rem",
        Spacing::Comfortable => "0.25rem",
    }
}

/// Corner radius, in rem.
#[must_use]
pub const fn radius_rem(radius: BorderRadius) -> &'static str {
    match radius {
        BorderRadius::None => "0rem",
        BorderRadius::Small => "0.3rem",
        BorderRadius::Medium => "0.625rem",
        BorderRadius::Large => "1rem",
    }
}

/// Root font size, in px.
#[must_use]
pub const fn font_size_px(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "14px",
        FontSize::Medium => "16px",
        FontSize::Large => "18px",
    }
}

/// Numeric font weight for the active face.
#[must_use]
pub const fn font_weight(face: FontFace) -> u16 {
    match face {
        FontFace::Regular => 400,
        FontFace::Medium => 500,
        FontFace::Semibold => 600,
        FontFace::Bold => 700,
    }
}

/// CSS font-family stack for the selected family.
#[must_use]
pub const fn font_family_css(family: FontFamily) -> &'static str {
    match family {
        FontFamily::System => {
            "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
        },
        FontFamily::Sans => "'Inter', 'Segoe UI', sans-serif",
        FontFamily::Serif => "'Georgia', 'Times New Roman', serif",
        FontFamily::Mono => "'JetBrains Mono', 'Fira Code', monospace",
    }
}
