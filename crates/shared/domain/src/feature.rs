//! Feature descriptors: the registered metadata record for one pluggable
//! application module, plus its structural validation.

use std::borrow::Cow;
use std::fmt;
use typed_builder::TypedBuilder;

/// Sort order assigned to descriptors that do not specify one.
pub const DEFAULT_ORDER: u32 = 999;

/// Opaque key the presentation layer resolves to an actual renderable
/// (an icon glyph or a view entry point). The registry only requires the
/// key to be non-empty; it never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderHandle(Cow<'static, str>);

impl RenderHandle {
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for RenderHandle {
    fn from(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }
}

impl From<String> for RenderHandle {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

impl fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The registered metadata record for one feature module.
///
/// `enabled` is the *default* flag: it only matters when the enablement
/// store seeds itself on first run. The authoritative runtime state lives in
/// the enablement store, which mirrors it back onto registered descriptors.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct FeatureDescriptor {
    /// Stable identity; also the storage/enablement key and route segment.
    #[builder(setter(into))]
    pub id: String,
    /// Human-readable navigation label.
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    pub description: String,
    /// Opaque icon reference, resolved by the presentation layer.
    #[builder(setter(into))]
    pub icon: RenderHandle,
    /// Default enabled flag, consulted only at first-seed time.
    #[builder(default = true)]
    pub enabled: bool,
    /// Ascending navigation sort order; ties keep insertion order.
    #[builder(default = DEFAULT_ORDER)]
    pub order: u32,
    /// Opaque render entry point, resolved by the presentation layer.
    #[builder(setter(into))]
    pub component: RenderHandle,
}

impl FeatureDescriptor {
    /// Structural validation, one issue per offending field.
    ///
    /// An empty result means the descriptor is acceptable for registration.
    #[must_use]
    pub fn issues(&self) -> Vec<DescriptorIssue> {
        let mut issues = Vec::new();
        if !is_valid_feature_id(&self.id) {
            issues.push(DescriptorIssue::InvalidId { id: self.id.clone() });
        }
        if self.name.trim().is_empty() {
            issues.push(DescriptorIssue::EmptyName);
        }
        if self.icon.is_empty() {
            issues.push(DescriptorIssue::EmptyIcon);
        }
        if self.component.is_empty() {
            issues.push(DescriptorIssue::EmptyComponent);
        }
        issues
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }
}

/// Feature ids are route segments and storage keys, so the accepted format
/// is lowercase alphanumeric plus hyphens.
#[must_use]
pub fn is_valid_feature_id(id: &str) -> bool {
    !id.is_empty()
        && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// One structural problem found in a [`FeatureDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorIssue {
    InvalidId { id: String },
    EmptyName,
    EmptyIcon,
    EmptyComponent,
}

impl DescriptorIssue {
    /// Name of the offending descriptor field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "id",
            Self::EmptyName => "name",
            Self::EmptyIcon => "icon",
            Self::EmptyComponent => "component",
        }
    }
}

impl fmt::Display for DescriptorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { id } => {
                write!(f, "id {id:?} must be lowercase alphanumeric with hyphens")
            },
            Self::EmptyName => f.write_str("name must not be empty"),
            Self::EmptyIcon => f.write_str("icon handle must not be empty"),
            Self::EmptyComponent => f.write_str("component handle must not be empty"),
        }
    }
}
