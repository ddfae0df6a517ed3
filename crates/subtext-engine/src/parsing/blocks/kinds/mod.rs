pub mod blank;
pub mod sigil;

pub use blank::Blank;
pub use sigil::Sigil;
