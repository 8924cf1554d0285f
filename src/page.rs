pub mod app;
pub use app::App;

mod hero_edit;
pub use hero_edit::HeroEdit;

mod hero_list;
pub use hero_list::HeroList;

mod hero_view;
pub use hero_view::HeroView;

mod welcome;
pub use welcome::Welcome;
