pub mod slashlink;
pub mod slug;

pub use slashlink::{Peer, Slashlink, SlashlinkError};
pub use slug::to_slug;
