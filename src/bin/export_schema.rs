//! Prints the GraphQL SDL, or writes it to the path given as first argument.
//! Front-end tooling consumes this to type-check its queries.

use anyhow::Result;
use starwars_graph::core::schema::schema_sdl;

fn main() -> Result<()> {
    let sdl = schema_sdl();

    if let Some(target) = std::env::args().nth(1) {
        std::fs::write(target, sdl)?;
    } else {
        println!("{}", sdl);
    }

    Ok(())
}
