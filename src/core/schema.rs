//! GraphQL types over the resolver layer.
//!
//! Each object type attaches one resolving method per field. Scalar fields read
//! the record directly; `films` and `homeWorld` delegate to the upstream provider
//! through [`CharacterResolver`], which is stored in the schema data.

use crate::core::resolver::CharacterResolver;
use crate::domain::model::{Character, DeletedCharacter, HomeWorld, Movie, NewCharacter};
use crate::utils::error::Result as GraphResult;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};

pub type StarWarsSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(resolver: CharacterResolver) -> StarWarsSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(resolver)
        .finish()
}

/// Schema without resolver data, for SDL export.
pub fn schema_sdl() -> String {
    Schema::build(Query, Mutation, EmptySubscription)
        .finish()
        .sdl()
}

#[Object(name = "Person")]
impl Character {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn height(&self) -> Option<i32> {
        self.height
    }

    async fn films(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let resolver = ctx.data::<CharacterResolver>()?;
        let films = resolver.resolve_films(self).await.map(Some);
        Ok(null_on_upstream_error(ctx, films))
    }

    async fn home_world(&self, ctx: &Context<'_>) -> Result<Option<HomeWorld>> {
        let resolver = ctx.data::<CharacterResolver>()?;
        let home_world = resolver.resolve_home_world(self).await;
        Ok(null_on_upstream_error(ctx, home_world))
    }
}

/// Records a failed nested fetch as a field error at the current path and
/// resolves the field to `null`, leaving sibling fields intact.
fn null_on_upstream_error<T>(ctx: &Context<'_>, result: GraphResult<Option<T>>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Nested field resolution failed: {}", e);
            let error = e.extend().into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        }
    }
}

#[Object]
impl Movie {
    async fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    // 上游欄位為 release_date
    async fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }
}

#[Object]
impl HomeWorld {
    async fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn climate(&self) -> Option<&str> {
        self.climate.as_deref()
    }

    async fn population(&self) -> Option<&str> {
        self.population.as_deref()
    }
}

#[Object(name = "DeletedPerson")]
impl DeletedCharacter {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }
}

pub struct Query;

#[Object]
impl Query {
    /// Every character currently in the store.
    async fn people(&self, ctx: &Context<'_>) -> Result<Vec<Character>> {
        let resolver = ctx.data::<CharacterResolver>()?;
        Ok(resolver.list_characters())
    }

    /// A single character. Fails with `NOT_FOUND` when no record has the id.
    async fn person(&self, ctx: &Context<'_>, id: i32) -> Result<Character> {
        let resolver = ctx.data::<CharacterResolver>()?;
        resolver.get_character(id).map_err(|e| e.extend())
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        height: Option<i32>,
        films: Option<Vec<Option<String>>>,
        home_world: Option<String>,
    ) -> Result<Character> {
        let resolver = ctx.data::<CharacterResolver>()?;
        let input = NewCharacter {
            id,
            name,
            height,
            films: films.unwrap_or_default().into_iter().flatten().collect(),
            home_world,
        };
        Ok(resolver.add_character(input))
    }

    async fn delete_person(&self, ctx: &Context<'_>, id: i32) -> Result<DeletedCharacter> {
        let resolver = ctx.data::<CharacterResolver>()?;
        resolver.delete_character(id).map_err(|e| e.extend())
    }
}
