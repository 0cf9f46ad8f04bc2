use super::state::use_homepage_state;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_DASHBOARD};
use contracts::domain::a002_homepage::{HomePageContent, SectionKey};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// One-line summary of a section for the overview list
pub fn section_summary(content: &HomePageContent, key: SectionKey) -> String {
    match key {
        SectionKey::Hero => format!("{} stats · {}", content.hero.stats.len(), content.hero.title),
        SectionKey::FeaturedPackages => {
            format!("{} packages selected", content.featured_packages.package_ids.len())
        }
        SectionKey::LatestBlogs => format!("Shows {} posts", content.latest_blogs.posts_to_show),
        SectionKey::WhyChooseUs => format!("{} features", content.why_choose_us.features.len()),
        SectionKey::Testimonials => {
            format!("{} testimonials", content.testimonials.testimonials.len())
        }
        SectionKey::Cta => content.cta.title.clone(),
    }
}

/// Landing tab: counters and a shortcut into every section editor
#[component]
pub fn HomePageOverview(on_open: Callback<SectionKey>) -> impl IntoView {
    let state = use_homepage_state();
    let count = move |f: fn(&HomePageContent) -> usize| {
        Signal::derive(move || state.content.with(|c| f(c).to_string()))
    };

    view! {
        <PageFrame page_id=page_id(&HomePageContent::full_name(), PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{icon("bar-chart")} "Homepage Overview"</h2>
            </div>
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Hero Stats" icon_name="image" value=count(|c| c.hero.stats.len()) />
                    <StatCard
                        label="Featured Packages"
                        icon_name="globe"
                        value=count(|c| c.featured_packages.package_ids.len())
                    />
                    <StatCard
                        label="Blog Posts Shown"
                        icon_name="file-text"
                        value=count(|c| c.latest_blogs.posts_to_show as usize)
                    />
                    <StatCard
                        label="Testimonials"
                        icon_name="users"
                        value=count(|c| c.testimonials.testimonials.len())
                    />
                </div>

                {move || state.loading.get().then(|| view! {
                    <p class="empty-state">"Loading homepage content..."</p>
                })}

                <div class="card">
                    <div class="card__header">
                        <h3>"Sections"</h3>
                    </div>
                    <div class="card__content section-list">
                        {SectionKey::ALL
                            .into_iter()
                            .map(|key| view! {
                                <div class="section-list__row">
                                    <div>
                                        <h4>{key.label()}</h4>
                                        <p class="text-muted">
                                            {move || state.content.with(|c| section_summary(c, key))}
                                        </p>
                                    </div>
                                    <Button
                                        variant="secondary"
                                        size="sm"
                                        on_click=Callback::new(move |_| on_open.run(key))
                                    >
                                        "Manage"
                                        {icon("arrow-right")}
                                    </Button>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_count_section_items() {
        let mut content = HomePageContent::default();
        content.featured_packages.package_ids = vec!["1".into(), "2".into()];
        content.latest_blogs.posts_to_show = 6;

        assert_eq!(
            section_summary(&content, SectionKey::FeaturedPackages),
            "2 packages selected"
        );
        assert_eq!(section_summary(&content, SectionKey::LatestBlogs), "Shows 6 posts");
        assert_eq!(
            section_summary(&content, SectionKey::Cta),
            content.cta.title
        );
    }
}
