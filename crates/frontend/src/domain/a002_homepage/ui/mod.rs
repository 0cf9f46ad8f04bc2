pub mod overview;
pub mod page;
mod section_card;
pub mod sections;
pub mod state;
pub mod view_model;

pub use overview::HomePageOverview;
pub use page::HomePageSectionPage;
pub use state::{use_homepage_state, HomePageState};
