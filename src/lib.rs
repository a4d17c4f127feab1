//! Generate one GraphQL operation document per root field of an SDL schema.
//!
//! ```
//! use better_gql_generator::config::GeneratorConfig;
//! use better_gql_generator::generate::generate_from_sdl;
//!
//! let sdl = "type Query { getUser(id: ID!): User } type User { id: ID! name: String! }";
//! let ops = generate_from_sdl(sdl, &GeneratorConfig::default()).unwrap();
//! assert_eq!(
//!     ops[0].contents,
//!     "query GetUser($id: ID!) {\n  getUser(id: $id) {\n    id\n    name\n  }\n}"
//! );
//! ```

pub mod arguments;
pub mod cli;
pub mod config;
pub mod directives;
pub mod error;
pub mod generate;
pub mod operation;
pub mod output;
pub mod schema;
pub mod selection;
