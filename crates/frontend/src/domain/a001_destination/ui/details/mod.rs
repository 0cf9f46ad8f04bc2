pub mod view;

pub use view::DestinationForm;
