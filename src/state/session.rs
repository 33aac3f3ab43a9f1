use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, CatalogError, Catalogs};
use crate::models::{Breed, Sound};

use super::facts::FactPicker;
use super::likes::LikeCounter;
use super::rotation::Carousel;
use super::volume::{VolumeError, VolumeLevel};

/// What the audio collaborator needs to play the selected sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    pub name: String,
    pub audio_ref: String,
    pub volume: u8,
}

/// Owner of all mutable page state for one run of the app. The random source
/// is a type parameter so tests can drive fact selection deterministically.
pub struct CatSession<R = StdRng> {
    breeds: Carousel<Breed>,
    sounds: Carousel<Sound>,
    facts: FactPicker,
    likes: LikeCounter,
    volume: VolumeLevel,
    rng: R,
}

impl CatSession<StdRng> {
    /// Session over the built-in catalogs with a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self, CatalogError> {
        Ok(Self::new(
            Catalogs::builtin()?,
            VolumeLevel::default(),
            StdRng::seed_from_u64(seed),
        ))
    }

    /// Session over the built-in catalogs seeded from the operating system.
    pub fn from_entropy() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Catalogs::builtin()?,
            VolumeLevel::default(),
            StdRng::from_os_rng(),
        ))
    }
}

impl<R: Rng> CatSession<R> {
    pub fn new(catalogs: Catalogs, volume: VolumeLevel, rng: R) -> Self {
        debug!(
            "session created: {} breeds, {} facts, {} sounds, volume {}",
            catalogs.breeds.len(),
            catalogs.facts.len(),
            catalogs.sounds.len(),
            volume.get()
        );
        Self {
            breeds: Carousel::new(catalogs.breeds),
            sounds: Carousel::new(catalogs.sounds),
            facts: FactPicker::new(catalogs.facts),
            likes: LikeCounter::new(),
            volume,
            rng,
        }
    }

    /// Replace the starting volume, typically with the configured level.
    pub fn with_volume(mut self, volume: VolumeLevel) -> Self {
        self.volume = volume;
        self
    }

    pub fn next_breed(&mut self) -> &Breed {
        let breed = self.breeds.next();
        debug!("breed carousel -> {}", breed.name);
        breed
    }

    pub fn previous_breed(&mut self) -> &Breed {
        let breed = self.breeds.previous();
        debug!("breed carousel <- {}", breed.name);
        breed
    }

    pub fn current_breed(&self) -> &Breed {
        self.breeds.current()
    }

    /// Position of the visible breed, for "2 / 5" style indicators.
    pub fn breed_position(&self) -> (usize, usize) {
        (self.breeds.index(), self.breeds.len())
    }

    pub fn breeds(&self) -> &Catalog<Breed> {
        self.breeds.catalog()
    }

    pub fn next_sound(&mut self) -> &Sound {
        self.sounds.next()
    }

    pub fn previous_sound(&mut self) -> &Sound {
        self.sounds.previous()
    }

    pub fn current_sound(&self) -> &Sound {
        self.sounds.current()
    }

    pub fn sound_index(&self) -> usize {
        self.sounds.index()
    }

    pub fn sounds(&self) -> &Catalog<Sound> {
        self.sounds.catalog()
    }

    pub fn generate_fact(&mut self) -> &str {
        let fact = self.facts.generate(&mut self.rng);
        debug!("fact generated: {fact}");
        fact
    }

    pub fn current_fact(&self) -> Option<&str> {
        self.facts.current()
    }

    pub fn facts(&self) -> &Catalog<String> {
        self.facts.catalog()
    }

    pub fn like(&mut self) -> LikeCounter {
        self.likes.like();
        debug!(
            "liked: count {} progress {}%",
            self.likes.count(),
            self.likes.progress()
        );
        self.likes
    }

    pub fn likes(&self) -> LikeCounter {
        self.likes
    }

    pub fn set_volume(&mut self, value: i64) -> Result<u8, VolumeError> {
        self.volume.set(value)?;
        debug!("volume set to {}", self.volume.get());
        Ok(self.volume.get())
    }

    pub fn step_volume(&mut self, delta: i64) -> Result<u8, VolumeError> {
        self.volume.step(delta)?;
        debug!("volume stepped to {}", self.volume.get());
        Ok(self.volume.get())
    }

    pub fn volume(&self) -> u8 {
        self.volume.get()
    }

    /// Package the selected sound and current level for the audio player.
    pub fn play_current_sound(&self) -> PlaybackRequest {
        let sound = self.sounds.current();
        PlaybackRequest {
            name: sound.name.clone(),
            audio_ref: sound.audio_ref.clone(),
            volume: self.volume.get(),
        }
    }

    /// `(catalog position, popularity percent)` points for the chart.
    pub fn popularity_series(&self) -> Vec<(f64, f64)> {
        self.breeds
            .catalog()
            .iter()
            .enumerate()
            .map(|(idx, breed)| (idx as f64, f64::from(breed.popularity_percent)))
            .collect()
    }
}
