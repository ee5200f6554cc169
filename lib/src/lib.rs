mod api;
mod club;
mod error;
mod record;
mod skill;
pub mod synth;

pub use api::*;
pub use club::*;
pub use error::*;
pub use record::*;
pub use skill::*;
pub use synth::generate;
