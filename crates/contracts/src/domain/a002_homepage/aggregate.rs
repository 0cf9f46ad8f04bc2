use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// Document
// ============================================================================

/// Homepage content document, one field per editable section.
///
/// Fields missing on the wire fall back to the built-in content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePageContent {
    pub hero: HeroSection,
    pub featured_packages: FeaturedPackagesSection,
    pub latest_blogs: LatestBlogsSection,
    pub why_choose_us: WhyChooseUsSection,
    pub testimonials: TestimonialsSection,
    pub cta: CtaSection,
}

impl Default for HomePageContent {
    fn default() -> Self {
        Self {
            hero: HeroSection::default(),
            featured_packages: FeaturedPackagesSection::default(),
            latest_blogs: LatestBlogsSection::default(),
            why_choose_us: WhyChooseUsSection::default(),
            testimonials: TestimonialsSection::default(),
            cta: CtaSection::default(),
        }
    }
}

impl AggregateRoot for HomePageContent {
    type Id = String;

    fn id(&self) -> Self::Id {
        "homepage".to_string()
    }

    fn description(&self) -> &str {
        &self.hero.title
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "homepage"
    }

    fn element_name() -> &'static str {
        "Homepage"
    }

    fn list_name() -> &'static str {
        "Homepage"
    }
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_text: String,
    pub cta_link: String,
    pub watch_video_text: String,
    pub watch_video_link: String,
    pub stats: Vec<HeroStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
    /// Icon name understood by the site, e.g. `Users`
    pub icon: String,
}

impl HeroStat {
    pub fn new(label: &str, value: &str, icon: &str) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}

impl HeroSection {
    /// Change the label or value of one stat, out of range is ignored
    pub fn update_stat(&mut self, index: usize, label: Option<String>, value: Option<String>) {
        if let Some(stat) = self.stats.get_mut(index) {
            if let Some(label) = label {
                stat.label = label;
            }
            if let Some(value) = value {
                stat.value = value;
            }
        }
    }
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: "Discover Your Next Adventure".into(),
            subtitle: "Embark on extraordinary journeys to breathtaking destinations around the world. Create memories that last a lifetime with our expertly crafted travel experiences.".into(),
            background_image: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1920&q=80".into(),
            cta_text: "Explore Packages".into(),
            cta_link: "/packages".into(),
            watch_video_text: "Watch Video".into(),
            watch_video_link: "#".into(),
            stats: vec![
                HeroStat::new("Happy Travelers", "50,000+", "Users"),
                HeroStat::new("Destinations", "100+", "Globe"),
                HeroStat::new("Years Experience", "10+", "Award"),
                HeroStat::new("Success Rate", "99.9%", "Shield"),
            ],
        }
    }
}

// ============================================================================
// Featured packages
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedPackagesSection {
    pub title: String,
    pub description: String,
    /// Selected package ids in display order
    #[serde(deserialize_with = "package_ids_lenient")]
    pub package_ids: Vec<String>,
}

impl Default for FeaturedPackagesSection {
    fn default() -> Self {
        Self {
            title: "Popular Destinations".into(),
            description: "Discover our most sought-after travel experiences, carefully curated for unforgettable adventures".into(),
            package_ids: vec![
                "bali-paradise-escape".into(),
                "japan-cherry-blossom-tour".into(),
                "swiss-alps-adventure".into(),
            ],
        }
    }
}

/// Older documents store numeric ids; they are read as their decimal text.
fn package_ids_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let raw = Vec::<RawId>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|id| match id {
            RawId::Text(s) => s,
            RawId::Integer(n) => n.to_string(),
            RawId::Float(f) => f.to_string(),
        })
        .collect())
}

// ============================================================================
// Latest blogs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatestBlogsSection {
    pub title: String,
    pub description: String,
    pub posts_to_show: u32,
}

pub const POSTS_TO_SHOW_CHOICES: [u32; 4] = [2, 3, 4, 6];

impl Default for LatestBlogsSection {
    fn default() -> Self {
        Self {
            title: "Latest Travel Stories".into(),
            description: "Discover inspiring travel stories, expert tips, and hidden gems from around the world".into(),
            posts_to_show: 3,
        }
    }
}

// ============================================================================
// Why choose us
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyChooseUsSection {
    pub title: String,
    pub description: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Partial update of a feature, `None` keeps the current value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeaturePatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl WhyChooseUsSection {
    /// Merge `patch` into the feature at `index`, false when out of range
    pub fn update_feature(&mut self, index: usize, patch: FeaturePatch) -> bool {
        let Some(feature) = self.features.get_mut(index) else {
            return false;
        };
        if let Some(title) = patch.title {
            feature.title = title;
        }
        if let Some(description) = patch.description {
            feature.description = description;
        }
        true
    }
}

impl Default for WhyChooseUsSection {
    fn default() -> Self {
        let feature = |title: &str, description: &str| Feature {
            title: title.into(),
            description: description.into(),
        };
        Self {
            title: "Your Trusted Travel Partner".into(),
            description: "With years of experience and thousands of satisfied customers, we make your travel dreams come true".into(),
            features: vec![
                feature(
                    "100% Safe & Secure",
                    "Your safety is our priority. We ensure all destinations meet the highest safety standards with 24/7 support.",
                ),
                feature(
                    "Award Winning Service",
                    "Recognized globally for excellence in travel services and customer satisfaction ratings.",
                ),
                feature(
                    "Global Network",
                    "Access to exclusive destinations and local experiences through our worldwide partner network.",
                ),
            ],
        }
    }
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    pub title: String,
    pub description: String,
    pub testimonials: Vec<Testimonial>,
}

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            content: String::new(),
            rating: MAX_RATING,
            image: None,
        }
    }
}

impl TestimonialsSection {
    /// Append an empty testimonial and return its index
    pub fn add_testimonial(&mut self) -> usize {
        self.testimonials.push(Testimonial::default());
        self.testimonials.len() - 1
    }

    pub fn remove_testimonial(&mut self, index: usize) -> Option<Testimonial> {
        if index < self.testimonials.len() {
            Some(self.testimonials.remove(index))
        } else {
            None
        }
    }

    /// Replace the testimonial at `index`; rating is clamped to `1..=5`
    pub fn update_testimonial(&mut self, index: usize, mut testimonial: Testimonial) -> bool {
        let Some(slot) = self.testimonials.get_mut(index) else {
            return false;
        };
        testimonial.rating = testimonial.rating.clamp(1, MAX_RATING);
        *slot = testimonial;
        true
    }
}

impl Default for TestimonialsSection {
    fn default() -> Self {
        let testimonial = |name: &str, role: &str, content: &str, image: &str| Testimonial {
            name: name.into(),
            role: role.into(),
            content: content.into(),
            rating: MAX_RATING,
            image: Some(image.into()),
        };
        Self {
            title: "What Our Travelers Say".into(),
            description: "Real experiences from real travelers who have explored the world with us".into(),
            testimonials: vec![
                testimonial(
                    "Sarah Johnson",
                    "Adventure Traveler",
                    "Amazing experience! The team made everything perfect.",
                    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&q=80",
                ),
                testimonial(
                    "Mike Chen",
                    "Business Traveler",
                    "Professional service and unforgettable memories.",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&q=80",
                ),
                testimonial(
                    "Emma Davis",
                    "Family Traveler",
                    "Perfect for family trips. Kids loved every moment!",
                    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&q=80",
                ),
            ],
        }
    }
}

// ============================================================================
// Call to action
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub primary_button: String,
    pub secondary_button: String,
}

impl Default for CtaSection {
    fn default() -> Self {
        Self {
            title: "Ready for Your Next Adventure?".into(),
            description: "Join thousands of travelers who have discovered the world with us. Your perfect journey starts here.".into(),
            primary_button: "Browse Packages".into(),
            secondary_button: "Contact Us".into(),
        }
    }
}
