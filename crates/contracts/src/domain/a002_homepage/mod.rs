pub mod aggregate;
pub mod editor;
pub mod featured;
pub mod section;
pub mod store;

pub use aggregate::{
    CtaSection, Feature, FeaturePatch, FeaturedPackagesSection, HeroSection, HeroStat,
    HomePageContent, LatestBlogsSection, Testimonial, TestimonialsSection, WhyChooseUsSection,
};
pub use editor::{save_failed_message, save_section, EditorError, EditorState, SectionEditor};
pub use featured::resolve_featured;
pub use section::{HomePageSection, SectionKey, SectionValue};
pub use store::{DocumentContentStore, HomePageContentStore, HomePageDocumentBackend};
