use crate::domain::model::Character;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_SEED: &str = include_str!("../../data/characters.json");

/// Characters bundled with the binary.
pub fn default_seed() -> Result<Vec<Character>> {
    parse_seed(DEFAULT_SEED)
}

pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Character>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    tracing::info!("Loading seed characters from {}", path.as_ref().display());
    parse_seed(&content)
}

/// Loads `path` when given, the bundled fixture otherwise.
pub fn load_seed(path: Option<&str>) -> Result<Vec<Character>> {
    let characters = match path {
        Some(path) => load_seed_file(path)?,
        None => default_seed()?,
    };
    tracing::info!("Seeded store with {} characters", characters.len());
    Ok(characters)
}

pub fn parse_seed(content: &str) -> Result<Vec<Character>> {
    let characters: Vec<Character> = serde_json::from_str(content)?;
    validate_seed(&characters)?;
    Ok(characters)
}

/// Names must be non-empty. Locators that are not http(s) URLs and duplicate
/// ids are only logged: the store accepts both, and so does `addPerson`.
pub fn validate_seed(characters: &[Character]) -> Result<()> {
    let mut seen = HashSet::new();

    for character in characters {
        validate_non_empty_string(&format!("characters[{}].name", character.id), &character.name)?;

        let field = format!("characters[{}]", character.id);
        for locator in character.films.iter().chain(character.homeworld.iter()) {
            if let Err(e) = validate_url(&field, locator) {
                tracing::warn!("Seed locator will not resolve upstream: {}", e);
            }
        }

        if !seen.insert(character.id) {
            tracing::warn!("Seed contains duplicate character id {}", character.id);
        }
    }

    Ok(())
}
