use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::aggregate::{
    CtaSection, FeaturedPackagesSection, HeroSection, HomePageContent, LatestBlogsSection,
    TestimonialsSection, WhyChooseUsSection,
};

/// The six independently editable homepage sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Hero,
    FeaturedPackages,
    LatestBlogs,
    WhyChooseUs,
    Testimonials,
    Cta,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        Self::Hero,
        Self::FeaturedPackages,
        Self::LatestBlogs,
        Self::WhyChooseUs,
        Self::Testimonials,
        Self::Cta,
    ];

    /// Field name in the homepage document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::FeaturedPackages => "featuredPackages",
            Self::LatestBlogs => "latestBlogs",
            Self::WhyChooseUs => "whyChooseUs",
            Self::Testimonials => "testimonials",
            Self::Cta => "cta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Hero Section",
            Self::FeaturedPackages => "Popular Destinations",
            Self::LatestBlogs => "Latest Blogs",
            Self::WhyChooseUs => "Why Choose Us",
            Self::Testimonials => "Testimonials",
            Self::Cta => "Call to Action",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown homepage section: {}", s))
    }
}

/// One section's payload tagged with its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "camelCase")]
pub enum SectionValue {
    Hero(HeroSection),
    FeaturedPackages(FeaturedPackagesSection),
    LatestBlogs(LatestBlogsSection),
    WhyChooseUs(WhyChooseUsSection),
    Testimonials(TestimonialsSection),
    Cta(CtaSection),
}

impl SectionValue {
    pub fn key(&self) -> SectionKey {
        match self {
            Self::Hero(_) => SectionKey::Hero,
            Self::FeaturedPackages(_) => SectionKey::FeaturedPackages,
            Self::LatestBlogs(_) => SectionKey::LatestBlogs,
            Self::WhyChooseUs(_) => SectionKey::WhyChooseUs,
            Self::Testimonials(_) => SectionKey::Testimonials,
            Self::Cta(_) => SectionKey::Cta,
        }
    }
}

impl HomePageContent {
    pub fn section(&self, key: SectionKey) -> SectionValue {
        match key {
            SectionKey::Hero => SectionValue::Hero(self.hero.clone()),
            SectionKey::FeaturedPackages => {
                SectionValue::FeaturedPackages(self.featured_packages.clone())
            }
            SectionKey::LatestBlogs => SectionValue::LatestBlogs(self.latest_blogs.clone()),
            SectionKey::WhyChooseUs => SectionValue::WhyChooseUs(self.why_choose_us.clone()),
            SectionKey::Testimonials => SectionValue::Testimonials(self.testimonials.clone()),
            SectionKey::Cta => SectionValue::Cta(self.cta.clone()),
        }
    }

    /// Replace one section wholesale
    pub fn set_section(&mut self, value: SectionValue) {
        match value {
            SectionValue::Hero(v) => self.hero = v,
            SectionValue::FeaturedPackages(v) => self.featured_packages = v,
            SectionValue::LatestBlogs(v) => self.latest_blogs = v,
            SectionValue::WhyChooseUs(v) => self.why_choose_us = v,
            SectionValue::Testimonials(v) => self.testimonials = v,
            SectionValue::Cta(v) => self.cta = v,
        }
    }
}

/// Typed access to one section of the document
pub trait HomePageSection: Clone + PartialEq + fmt::Debug + Default + 'static {
    const KEY: SectionKey;

    fn into_value(self) -> SectionValue;

    /// `None` when `value` belongs to another section
    fn from_value(value: SectionValue) -> Option<Self>;

    fn from_content(content: &HomePageContent) -> Self;
}

macro_rules! homepage_section {
    ($ty:ty, $variant:ident, $field:ident) => {
        impl HomePageSection for $ty {
            const KEY: SectionKey = SectionKey::$variant;

            fn into_value(self) -> SectionValue {
                SectionValue::$variant(self)
            }

            fn from_value(value: SectionValue) -> Option<Self> {
                match value {
                    SectionValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_content(content: &HomePageContent) -> Self {
                content.$field.clone()
            }
        }
    };
}

homepage_section!(HeroSection, Hero, hero);
homepage_section!(FeaturedPackagesSection, FeaturedPackages, featured_packages);
homepage_section!(LatestBlogsSection, LatestBlogs, latest_blogs);
homepage_section!(WhyChooseUsSection, WhyChooseUs, why_choose_us);
homepage_section!(TestimonialsSection, Testimonials, testimonials);
homepage_section!(CtaSection, Cta, cta);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_document_fields() {
        let json = serde_json::to_value(HomePageContent::default()).unwrap();
        for key in SectionKey::ALL {
            assert!(json.get(key.as_str()).is_some(), "{}", key);
            assert_eq!(key.as_str().parse::<SectionKey>().unwrap(), key);
        }
        assert!("footer".parse::<SectionKey>().is_err());
    }

    #[test]
    fn set_section_replaces_only_that_section() {
        let mut content = HomePageContent::default();
        let cta = CtaSection {
            title: "Book today".into(),
            ..CtaSection::default()
        };
        content.set_section(cta.clone().into_value());

        assert_eq!(content.cta, cta);
        assert_eq!(content.hero, HeroSection::default());
        assert_eq!(content.section(SectionKey::Cta).key(), SectionKey::Cta);
    }

    #[test]
    fn typed_access_rejects_other_sections() {
        let value = HeroSection::default().into_value();
        assert!(CtaSection::from_value(value.clone()).is_none());
        assert_eq!(HeroSection::from_value(value), Some(HeroSection::default()));
    }

    #[test]
    fn section_value_is_tagged() {
        let json = serde_json::to_value(LatestBlogsSection::default().into_value()).unwrap();
        assert_eq!(json["section"], "latestBlogs");
        assert_eq!(json["value"]["postsToShow"], 3);
    }
}
