use super::sections::{
    CtaEditor, FeaturedPackagesEditor, HeroEditor, LatestBlogsEditor, TestimonialsEditor,
    WhyChooseUsEditor,
};
use super::state::use_homepage_state;
use contracts::domain::a002_homepage::SectionKey;
use leptos::prelude::*;

/// Editor page of one homepage section.
///
/// The editor is created from the document once loading is over; later
/// saves update the document without rebuilding the editor.
#[component]
pub fn HomePageSectionPage(key: SectionKey) -> impl IntoView {
    let state = use_homepage_state();

    move || {
        if state.loading.get() {
            return view! { <p class="empty-state">"Loading homepage content..."</p> }.into_any();
        }
        let content = state.content.get_untracked();
        match key {
            SectionKey::Hero => view! { <HeroEditor initial=content.hero /> }.into_any(),
            SectionKey::FeaturedPackages => {
                view! { <FeaturedPackagesEditor initial=content.featured_packages /> }.into_any()
            }
            SectionKey::LatestBlogs => {
                view! { <LatestBlogsEditor initial=content.latest_blogs /> }.into_any()
            }
            SectionKey::WhyChooseUs => {
                view! { <WhyChooseUsEditor initial=content.why_choose_us /> }.into_any()
            }
            SectionKey::Testimonials => {
                view! { <TestimonialsEditor initial=content.testimonials /> }.into_any()
            }
            SectionKey::Cta => view! { <CtaEditor initial=content.cta /> }.into_any(),
        }
    }
}
