//! Projection of an applied settings record into CSS custom properties and
//! the sidebar placement attribute.

use crewdeck_domain::presets::{
    font_family_css, font_size_px, font_weight, radius_rem, spacing_rem,
};
use crewdeck_domain::settings::AppSettings;

/// Attribute the host sets on its root element for sidebar placement.
pub const SIDEBAR_ATTRIBUTE: &str = "data-sidebar-position";

/// The concrete presentation values derived from one applied record.
///
/// `variables` is ordered and complete: every projected custom property is
/// present on every projection, so the host can assign without diffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssProjection {
    /// `(custom property name, value)` pairs, in stable declaration order.
    pub variables: Vec<(&'static str, String)>,
    /// Value for [`SIDEBAR_ATTRIBUTE`]: `"left"` or `"right"`.
    pub sidebar_position: &'static str,
}

impl CssProjection {
    /// Looks up one projected variable by its custom property name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    /// Renders the variables as a CSS declaration block body.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.variables {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }
}

/// Projects `settings` into its CSS form.
///
/// The primary color also drives `--ring` and the sidebar accents, matching
/// the focus-ring and sidebar styling contract of the stylesheet.
#[must_use]
pub fn project(settings: &AppSettings) -> CssProjection {
    let primary = settings.primary_color.as_str();
    let accent = settings.accent_color.as_str();

    let variables = vec![
        ("--primary", primary.to_owned()),
        ("--accent", accent.to_owned()),
        ("--ring", primary.to_owned()),
        ("--sidebar-primary", primary.to_owned()),
        ("--sidebar-ring", primary.to_owned()),
        ("--active-font-family", font_family_css(settings.font_family).to_owned()),
        ("--active-font-weight", font_weight(settings.font_face).to_string()),
        ("--base-font-size", font_size_px(settings.font_size).to_owned()),
        ("--spacing", spacing_rem(settings.spacing).to_owned()),
        ("--radius", radius_rem(settings.border_radius).to_owned()),
    ];

    CssProjection {
        variables,
        sidebar_position: match settings.sidebar_position {
            crewdeck_domain::settings::SidebarPosition::Left => "left",
            crewdeck_domain::settings::SidebarPosition::Right => "right",
        },
    }
}
