use crate::core::store::CharacterStore;
use crate::domain::model::{Character, DeletedCharacter, HomeWorld, Movie, NewCharacter};
use crate::domain::ports::UpstreamProvider;
use crate::utils::error::{GraphError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Operations behind every top-level and nested field of the API.
///
/// Closes over the store and the upstream provider. Nested resources are
/// fetched on every call: nothing is cached or de-duplicated, so selecting
/// the same home world twice in one response issues two requests.
#[derive(Clone)]
pub struct CharacterResolver {
    store: Arc<CharacterStore>,
    upstream: Arc<dyn UpstreamProvider>,
    concurrent_requests: usize,
}

impl CharacterResolver {
    pub fn new(
        store: Arc<CharacterStore>,
        upstream: Arc<dyn UpstreamProvider>,
        concurrent_requests: usize,
    ) -> Self {
        Self {
            store,
            upstream,
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    pub fn list_characters(&self) -> Vec<Character> {
        self.store.all()
    }

    pub fn get_character(&self, id: i32) -> Result<Character> {
        self.store
            .find_by_id(id)
            .ok_or(GraphError::NotFound { id })
    }

    /// Fetches every film locator, keeping locator order in the result.
    ///
    /// An empty locator list returns immediately without touching the
    /// upstream. The first failing fetch fails the whole list.
    pub async fn resolve_films(&self, character: &Character) -> Result<Vec<Movie>> {
        if character.films.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            "Fetching {} films for character {}",
            character.films.len(),
            character.id
        );

        // 以擁有所有權的 locator 建立 future，欄位 future 才能滿足 Send
        stream::iter(character.films.clone())
            .map(|locator| {
                let upstream = self.upstream.clone();
                async move { upstream.fetch_movie(&locator).await }
            })
            .buffered(self.concurrent_requests)
            .try_collect()
            .await
    }

    /// `None` when the character has no home world locator.
    pub async fn resolve_home_world(&self, character: &Character) -> Result<Option<HomeWorld>> {
        match character.homeworld.as_deref() {
            Some(locator) => self.upstream.fetch_home_world(locator).await.map(Some),
            None => Ok(None),
        }
    }

    pub fn add_character(&self, input: NewCharacter) -> Character {
        self.store.insert(input.into())
    }

    pub fn delete_character(&self, id: i32) -> Result<DeletedCharacter> {
        let removed = self.store.remove_by_id(id)?;
        Ok(DeletedCharacter::from(&removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UpstreamProvider for CountingProvider {
        async fn fetch_movie(&self, locator: &str) -> Result<Movie> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if locator.contains("broken") {
                return Err(GraphError::UpstreamStatus {
                    locator: locator.to_string(),
                    status: 500,
                });
            }
            Ok(Movie {
                title: Some(format!("Film at {}", locator)),
                release_date: Some("1977-05-25".to_string()),
            })
        }

        async fn fetch_home_world(&self, locator: &str) -> Result<HomeWorld> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HomeWorld {
                name: Some(locator.to_string()),
                climate: Some("arid".to_string()),
                population: Some("200000".to_string()),
            })
        }
    }

    fn luke() -> Character {
        Character {
            id: 1,
            name: "Luke".to_string(),
            height: Some(172),
            films: vec![],
            homeworld: Some("tatooine-url".to_string()),
        }
    }

    fn resolver(seed: Vec<Character>) -> (CharacterResolver, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider::default());
        let resolver = CharacterResolver::new(
            Arc::new(CharacterStore::new(seed)),
            provider.clone(),
            2,
        );
        (resolver, provider)
    }

    #[test]
    fn test_get_character_returns_exact_record() {
        let (resolver, _) = resolver(vec![luke()]);
        assert_eq!(resolver.get_character(1).unwrap(), luke());
    }

    #[test]
    fn test_get_missing_character_is_not_found() {
        let (resolver, _) = resolver(vec![luke()]);
        assert!(matches!(
            resolver.get_character(7),
            Err(GraphError::NotFound { id: 7 })
        ));
    }

    #[test]
    fn test_add_then_get_returns_input_fields() {
        let (resolver, _) = resolver(vec![]);
        let added = resolver.add_character(NewCharacter {
            id: 2,
            name: "Leia".to_string(),
            height: Some(150),
            films: vec![],
            home_world: Some("alderaan-url".to_string()),
        });

        assert_eq!(resolver.get_character(2).unwrap(), added);
        assert_eq!(added.height, Some(150));
        assert_eq!(resolver.list_characters().len(), 1);
    }

    #[test]
    fn test_delete_returns_projection_and_shrinks_store() {
        let (resolver, _) = resolver(vec![luke()]);

        let deleted = resolver.delete_character(1).unwrap();

        assert_eq!(
            deleted,
            DeletedCharacter {
                id: 1,
                name: "Luke".to_string()
            }
        );
        assert!(resolver.list_characters().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_films_empty_list_makes_no_calls() {
        let (resolver, provider) = resolver(vec![]);

        let films = resolver.resolve_films(&luke()).await.unwrap();

        assert!(films.is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_films_keeps_locator_order() {
        let (resolver, provider) = resolver(vec![]);
        let mut character = luke();
        character.films = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let films = resolver.resolve_films(&character).await.unwrap();

        let titles: Vec<_> = films.iter().filter_map(|f| f.title.as_deref()).collect();
        assert_eq!(titles, vec!["Film at a", "Film at b", "Film at c"]);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_resolve_films_future_is_send() {
        fn assert_send<T: Send>(_: &T) {}

        let (resolver, _) = resolver(vec![]);
        let character = luke();
        let future = resolver.resolve_films(&character);

        assert_send(&future);
    }

    #[tokio::test]
    async fn test_resolve_films_fails_when_any_fetch_fails() {
        let (resolver, _) = resolver(vec![]);
        let mut character = luke();
        character.films = vec!["a".to_string(), "broken".to_string()];

        let err = resolver.resolve_films(&character).await.unwrap_err();

        assert!(matches!(err, GraphError::UpstreamStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_resolve_home_world_without_locator_skips_fetch() {
        let (resolver, provider) = resolver(vec![]);
        let mut character = luke();
        character.homeworld = None;

        assert_eq!(resolver.resolve_home_world(&character).await.unwrap(), None);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_home_world_fetches_every_time() {
        let (resolver, provider) = resolver(vec![]);

        resolver.resolve_home_world(&luke()).await.unwrap();
        let world = resolver.resolve_home_world(&luke()).await.unwrap().unwrap();

        assert_eq!(world.name.as_deref(), Some("tatooine-url"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
