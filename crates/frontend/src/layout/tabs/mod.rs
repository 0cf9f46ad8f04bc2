//! Admin tabs
//!
//! - `AdminTab` - the fixed tab set and its keys / labels / icons
//! - `registry` - tab → view

pub mod registry;

pub use registry::render_tab_content;

use contracts::domain::a002_homepage::SectionKey;

/// Top-level pages of the admin panel, in tab strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Section(SectionKey),
    Destinations,
}

impl AdminTab {
    pub fn all() -> Vec<AdminTab> {
        let mut tabs = vec![Self::Overview];
        tabs.extend(SectionKey::ALL.into_iter().map(Self::Section));
        tabs.push(Self::Destinations);
        tabs
    }

    /// Key used in the `?tab=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Section(section) => section.as_str(),
            Self::Destinations => "destinations",
        }
    }

    pub fn from_key(key: &str) -> Option<AdminTab> {
        Self::all().into_iter().find(|t| t.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Section(section) => section.label(),
            Self::Destinations => "Destinations",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Overview => "bar-chart",
            Self::Section(SectionKey::Hero) => "image",
            Self::Section(SectionKey::FeaturedPackages) => "globe",
            Self::Section(SectionKey::LatestBlogs) => "file-text",
            Self::Section(SectionKey::WhyChooseUs) => "award",
            Self::Section(SectionKey::Testimonials) => "users",
            Self::Section(SectionKey::Cta) => "arrow-right",
            Self::Destinations => "map-pin",
        }
    }
}
