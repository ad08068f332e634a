//! Synthetic book catalog used when no file is supplied
//!
//! Output goes through the same Row-shaping step as decoded files.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{shape_rows, Row, RowValues};

/// Rows produced by "generate sample data" unless configured otherwise
pub const DEFAULT_SAMPLE_ROWS: usize = 10_000;

/// Inclusive range of generated publication years
pub const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1950..=2024;

pub const GENRES: [&str; 15] = [
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Thriller",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Health",
    "Travel",
    "Cooking",
    "Art",
];

const TITLE_OPENERS: &[&str] = &[
    "The",
    "A",
    "Beyond the",
    "Under the",
    "Return of the",
    "Song of the",
    "House of",
    "Children of the",
    "Letters from the",
    "Last",
];

const TITLE_ADJECTIVES: &[&str] = &[
    "Silent",
    "Crimson",
    "Hidden",
    "Broken",
    "Golden",
    "Forgotten",
    "Endless",
    "Wandering",
    "Burning",
    "Quiet",
    "Northern",
    "Secret",
];

const TITLE_NOUNS: &[&str] = &[
    "Garden",
    "River",
    "Empire",
    "Lighthouse",
    "Kingdom",
    "Orchard",
    "Harbor",
    "Mountain",
    "Library",
    "Voyage",
    "Storm",
    "Winter",
    "Mirror",
    "Frontier",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Elena", "Marcus", "Nora", "Julian", "Priya", "Tomas", "Ingrid", "Samuel", "Yuki",
    "Amara", "Felix", "Clara", "Dmitri", "Lucia", "Owen",
];

const LAST_NAMES: &[&str] = &[
    "Whitfield",
    "Okafor",
    "Lindqvist",
    "Moreau",
    "Castellanos",
    "Hale",
    "Nakamura",
    "Brennan",
    "Adeyemi",
    "Rossi",
    "Kowalski",
    "Fairbanks",
    "Mendes",
    "Sato",
    "Oduya",
    "Calloway",
];

/// Generate `count` plausible book rows
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Row> {
    shape_rows((0..count).map(|_| generate_values(rng)))
}

/// Column values for one synthetic book
pub fn generate_values<R: Rng + ?Sized>(rng: &mut R) -> RowValues {
    [
        title(rng),
        author(rng),
        pick(rng, &GENRES).to_string(),
        rng.gen_range(YEAR_RANGE).to_string(),
        isbn13(rng),
    ]
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, TITLE_OPENERS),
        pick(rng, TITLE_ADJECTIVES),
        pick(rng, TITLE_NOUNS)
    )
}

fn author<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Random ISBN-13 with the `978` prefix and a correct check digit
fn isbn13<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [9u8, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    for digit in &mut digits[3..] {
        *digit = rng.gen_range(0..10);
    }

    let mut isbn: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    isbn.push(char::from(b'0' + isbn13_check_digit(&digits)));
    isbn
}

/// Check digit over the first twelve digits (weights 1, 3, 1, 3, ...)
pub fn isbn13_check_digit(digits: &[u8; 12]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether a 13-digit string carries a valid ISBN-13 check digit
pub fn is_valid_isbn13(isbn: &str) -> bool {
    let digits: Vec<u8> = isbn.bytes().map(|b| b.wrapping_sub(b'0')).collect();
    if digits.len() != 13 || digits.iter().any(|&d| d > 9) {
        return false;
    }

    let mut body = [0u8; 12];
    body.copy_from_slice(&digits[..12]);
    isbn13_check_digit(&body) == digits[12]
}
