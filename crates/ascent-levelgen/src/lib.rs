pub mod catalog;
pub mod error;
pub mod free_slots;
pub mod pads;
pub mod rise_section;
pub mod sampler;

pub use catalog::SectionCatalog;
pub use error::{CatalogError, GenerationError};
pub use pads::{GameAreaPath, PadCollection, build_game_area, generate_pad_collection};
pub use rise_section::generate_section;
