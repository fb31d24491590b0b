use crate::domain::model::Character;
use crate::utils::error::{GraphError, Result};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime list of characters.
///
/// Reads share the lock; `insert` and `remove_by_id` take it exclusively, so a
/// removal is a single atomic filter-and-replace even under a multi-threaded
/// runtime. State is never persisted and resets to the seed on restart.
#[derive(Debug, Default)]
pub struct CharacterStore {
    characters: RwLock<Vec<Character>>,
}

impl CharacterStore {
    pub fn new(seed: Vec<Character>) -> Self {
        Self {
            characters: RwLock::new(seed),
        }
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<Character> {
        self.read().clone()
    }

    /// First record with a matching id.
    pub fn find_by_id(&self, id: i32) -> Option<Character> {
        self.read().iter().find(|c| c.id == id).cloned()
    }

    /// Appends unconditionally. Duplicate ids are accepted.
    pub fn insert(&self, character: Character) -> Character {
        let mut characters = self.write();
        if characters.iter().any(|c| c.id == character.id) {
            tracing::warn!("Inserting character with duplicate id {}", character.id);
        }
        characters.push(character.clone());
        tracing::info!(
            "Added character {} ({}), store size {}",
            character.id,
            character.name,
            characters.len()
        );
        character
    }

    /// Removes every record with `id` and returns the first one that matched.
    pub fn remove_by_id(&self, id: i32) -> Result<Character> {
        let mut characters = self.write();
        let removed = characters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(GraphError::NotFound { id })?;

        characters.retain(|c| c.id != id);
        tracing::info!(
            "Deleted character {} ({}), store size {}",
            removed.id,
            removed.name,
            characters.len()
        );
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // 寫入時 panic 不會破壞 Vec 的一致性，直接取回內部資料
    fn read(&self) -> RwLockReadGuard<'_, Vec<Character>> {
        self.characters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Character>> {
        self.characters.write().unwrap_or_else(PoisonError::into_inner)
    }
}
