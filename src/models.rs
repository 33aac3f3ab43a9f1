//! Display records held by the catalogs. These stay plain data holders; the
//! rotation and selection rules live in `state`, and the terminal layer only
//! reads the fields below.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the breed carousel.
pub struct Breed {
    /// Name shown as the carousel heading.
    pub name: String,
    /// Location of the breed photo. The terminal cannot draw it, so the UI
    /// prints the reference and lets the system opener handle it.
    pub image_ref: String,
    /// One sentence summary shown under the heading.
    pub description: String,
    /// Relative popularity in percent, plotted by the popularity chart.
    pub popularity_percent: u8,
}

impl Breed {
    pub fn new(name: &str, image_ref: &str, description: &str, popularity_percent: u8) -> Self {
        Self {
            name: name.to_string(),
            image_ref: image_ref.to_string(),
            description: description.to_string(),
            popularity_percent,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A playable cat sound. Only the reference is stored; decoding belongs to
/// whatever audio collaborator consumes a playback request.
pub struct Sound {
    pub name: String,
    pub audio_ref: String,
}

impl Sound {
    pub fn new(name: &str, audio_ref: &str) -> Self {
        Self {
            name: name.to_string(),
            audio_ref: audio_ref.to_string(),
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
