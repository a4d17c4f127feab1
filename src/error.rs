use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse schema: {0}")]
    Parse(String),

    #[error("type `{name}` is defined more than once")]
    DuplicateType { name: String },

    #[error("`{owner}` references undefined type `{name}`")]
    UndefinedType { owner: String, name: String },

    #[error("union `{union}` member `{member}` is not an object type")]
    InvalidUnionMember { union: String, member: String },

    #[error("cannot extend undefined type `{name}`")]
    UndefinedExtension { name: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operation kind `{0}` (expected query, mutation or subscription)")]
pub struct UnknownOperationKind(pub String);
