use serde::{Deserialize, Serialize};

/// A character record held by the in-memory store.
///
/// `films` and `homeworld` are upstream locators (absolute URLs); their
/// contents are only fetched when a client selects the matching field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
}

/// Arguments of the `addPerson` mutation after type coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCharacter {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub films: Vec<String>,
    pub home_world: Option<String>,
}

impl From<NewCharacter> for Character {
    fn from(input: NewCharacter) -> Self {
        Self {
            id: input.id,
            name: input.name,
            height: input.height,
            films: input.films,
            homeworld: input.home_world,
        }
    }
}

/// Minimal projection returned when a character is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedCharacter {
    pub id: i32,
    pub name: String,
}

impl From<&Character> for DeletedCharacter {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
        }
    }
}

// 上游 API 回傳的欄位名稱 (snake_case)，缺少的欄位以 None 表示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeWorld {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}
