//! Page state: carousel rotation, fact selection, likes and volume, all owned
//! by an explicit [`CatSession`].

mod facts;
mod likes;
mod rotation;
mod session;
mod volume;

pub use facts::FactPicker;
pub use likes::LikeCounter;
pub use rotation::{Carousel, RotationState};
pub use session::{CatSession, PlaybackRequest};
pub use volume::{VolumeError, VolumeLevel, DEFAULT_VOLUME, MAX_VOLUME};
