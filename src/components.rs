mod drawer;
pub use drawer::*;
pub mod export;
mod feature;
pub use feature::*;
mod hero_state;
pub use hero_state::*;
mod import;
pub use import::*;
mod notice;
pub use notice::*;
mod spinner;
pub use spinner::*;
mod tag;
pub use tag::*;
