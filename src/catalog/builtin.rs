use crate::models::{Breed, Sound};

use super::{Catalog, CatalogError};

/// Bullet points for the "Characteristics of Cats" card.
const CHARACTERISTICS: &[&str] = &[
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

const FACTS: &[&str] = &[
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats have over 20 vocalizations, including the purr, meow, and chirp.",
    "The first cat in space was a French cat named Felicette in 1963.",
    "Cats can jump up to six times their length.",
    "A cat's nose print is unique, like a human's fingerprint.",
    "Cats have 230 bones, while humans only have 206.",
    "The oldest known pet cat was found in a 9,500-year-old grave on Cyprus.",
];

/// The three catalogs the page is built from, validated together so a bad
/// build fails before the terminal is touched.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub breeds: Catalog<Breed>,
    pub facts: Catalog<String>,
    pub sounds: Catalog<Sound>,
}

impl Catalogs {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            breeds: breeds()?,
            facts: facts()?,
            sounds: sounds()?,
        })
    }
}

pub fn breeds() -> Result<Catalog<Breed>, CatalogError> {
    Catalog::new(
        "breeds",
        vec![
            Breed::new(
                "Siamese",
                "https://upload.wikimedia.org/wikipedia/commons/2/25/Siam_lilacpoint.jpg",
                "Known for their distinctive color points and blue almond-shaped eyes.",
                85,
            ),
            Breed::new(
                "Persian",
                "https://upload.wikimedia.org/wikipedia/commons/1/15/White_Persian_Cat.jpg",
                "Characterized by their long, fluffy coat and round face.",
                90,
            ),
            Breed::new(
                "Maine Coon",
                "https://upload.wikimedia.org/wikipedia/commons/5/5f/Maine_Coon_cat_by_Tomitheos.JPG",
                "One of the largest domesticated cat breeds, known for their intelligence and playful personality.",
                80,
            ),
            Breed::new(
                "Bengal",
                "https://upload.wikimedia.org/wikipedia/commons/b/ba/Paintedcats_Red_Star_standing.jpg",
                "Developed to look like exotic jungle cats such as leopards and ocelots.",
                70,
            ),
            Breed::new(
                "British Shorthair",
                "https://upload.wikimedia.org/wikipedia/commons/9/9d/Britishblue.jpg",
                "Known for their dense, plush coat and round face with chubby cheeks.",
                75,
            ),
        ],
    )
}

pub fn facts() -> Result<Catalog<String>, CatalogError> {
    Catalog::new("facts", FACTS.iter().map(|fact| fact.to_string()).collect())
}

pub fn sounds() -> Result<Catalog<Sound>, CatalogError> {
    Catalog::new(
        "sounds",
        vec![
            Sound::new("Meow", "sounds/meow.mp3"),
            Sound::new("Purr", "sounds/purr.mp3"),
            Sound::new("Hiss", "sounds/hiss.mp3"),
            Sound::new("Chirp", "sounds/chirp.mp3"),
        ],
    )
}

pub fn characteristics() -> &'static [&'static str] {
    CHARACTERISTICS
}
