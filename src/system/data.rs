mod ability;
pub use ability::*;
mod ancestry;
pub use ancestry::*;
mod career;
pub use career::*;
mod characteristic;
pub use characteristic::*;
mod class;
pub use class::*;
mod complication;
pub use complication::*;
mod culture;
pub use culture::*;
mod damage_modifier;
pub use damage_modifier::*;
mod feature;
pub use feature::*;
mod field;
pub use field::*;
mod hero;
pub use hero::*;
mod kit;
pub use kit::*;
mod options;
pub use options::*;
mod setting;
pub use setting::*;
mod size;
pub use size::*;
mod skill;
pub use skill::*;
