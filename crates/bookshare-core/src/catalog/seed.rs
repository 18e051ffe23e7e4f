//! Listings a fresh catalog starts with.

use crate::types::{BookRecord, ImageRef};

use super::Catalog;

/// (name, artwork, owner, contact, location, genre)
const SEED: [(&str, &str, &str, &str, &str, &str); 9] = [
    ("Atomic Habits", "atomic_habits", "John Doe", "123-456-7890", "New York", "Self-Help"),
    ("Psychology of Money", "psychology_of_money", "Jane Doe", "098-765-4321", "Los Angeles", "Finance"),
    ("The Silent Patient", "the_silent_patient", "Jim Doe", "555-555-5555", "Chicago", "Thriller"),
    ("Rich Dad Poor Dad", "rich_dad_poor_dad", "Jim Doe", "555-555-5555", "Chicago", "Finance"),
    ("Tuesdays with Morrie", "tuesdays_with_morrie", "Jim Doe", "555-555-5555", "Chicago", "Biography"),
    ("The Immortals of Meluha", "the_immortals_of_meluha", "Jim Doe", "555-555-5555", "Chicago", "Fantasy"),
    ("The Secret of Nagas", "the_secret_of_nagas", "Jim Doe", "555-555-5555", "Chicago", "Fantasy"),
    ("The Oath of Vayuputras", "the_oath_of_the_vayuputras", "Jim Doe", "555-555-5555", "Chicago", "Fantasy"),
    ("The Alchemist", "the_alchemist", "Jim Doe", "555-555-5555", "Chicago", "Fiction"),
];

impl Catalog {
    /// A catalog holding the default seed listings.
    pub fn seeded() -> Self {
        Self::from_records(seed_records())
    }
}

fn seed_records() -> impl Iterator<Item = BookRecord> {
    SEED.into_iter()
        .map(|(name, image, owner, contact, location, genre)| {
            BookRecord::from_parts(name, ImageRef::new(image), owner, contact, location, genre)
        })
}
