mod blogs;
mod cta;
mod featured;
mod hero;
mod testimonials;
mod why_choose_us;

pub use blogs::LatestBlogsEditor;
pub use cta::CtaEditor;
pub use featured::FeaturedPackagesEditor;
pub use hero::HeroEditor;
pub use testimonials::TestimonialsEditor;
pub use why_choose_us::WhyChooseUsEditor;
