pub mod resolver;
pub mod schema;
pub mod store;

pub use crate::domain::model::{Character, DeletedCharacter, HomeWorld, Movie, NewCharacter};
pub use crate::domain::ports::{ConfigProvider, UpstreamProvider};
pub use crate::utils::error::Result;
