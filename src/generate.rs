use serde::Serialize;

use crate::arguments::{call_clause, variable_clause};
use crate::config::GeneratorConfig;
use crate::directives::{AWS_SCALARS, strip_aws_directives};
use crate::error::SchemaError;
use crate::operation::{OperationKind, assemble};
use crate::schema::{FieldDef, Schema};
use crate::selection::synthesize;

pub const FILE_EXTENSION: &str = "graphql";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedOperation {
    pub kind: OperationKind,
    pub field_name: String,
    pub file_name: String,
    #[serde(skip)]
    pub contents: String,
}

impl GeneratedOperation {
    /// Path relative to the output root, e.g. `queries/getUser.graphql`.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.kind.dir_name(), self.file_name)
    }
}

/// Assembled document for one root field.
pub fn operation_for_field(
    schema: &Schema,
    kind: OperationKind,
    field: &FieldDef,
    max_depth: usize,
) -> String {
    assemble(
        kind,
        &field.name,
        &variable_clause(&field.args),
        &call_clause(&field.args),
        &synthesize(schema, &field.ty, 0, max_depth),
    )
}

/// One operation per field of the `kind` root type, in declaration order.
/// A schema without that root type yields nothing.
pub fn operations_for_kind(
    schema: &Schema,
    kind: OperationKind,
    max_depth: usize,
) -> Vec<GeneratedOperation> {
    let Some(fields) = schema.root_fields(kind) else {
        tracing::debug!("no {} root type in schema", kind.root_type_name());
        return Vec::new();
    };

    fields
        .iter()
        .map(|field| {
            let contents = operation_for_field(schema, kind, field, max_depth);
            tracing::debug!("generated {kind}: {}", field.name);
            GeneratedOperation {
                kind,
                field_name: field.name.clone(),
                file_name: format!("{}.{FILE_EXTENSION}", field.name),
                contents,
            }
        })
        .collect()
}

/// Every operation enabled by `config`, queries first, then mutations, then
/// subscriptions.
pub fn generate_operations(schema: &Schema, config: &GeneratorConfig) -> Vec<GeneratedOperation> {
    OperationKind::ALL
        .into_iter()
        .filter(|kind| config.enabled(*kind))
        .flat_map(|kind| operations_for_kind(schema, kind, config.max_recursion_depth))
        .collect()
}

/// Parses `sdl` the way `config` asks (stripping AppSync directives and
/// accepting AppSync scalars when enabled) and generates its operations.
pub fn generate_from_sdl(
    sdl: &str,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedOperation>, SchemaError> {
    let schema = load_schema(sdl, config)?;
    Ok(generate_operations(&schema, config))
}

pub fn load_schema(sdl: &str, config: &GeneratorConfig) -> Result<Schema, SchemaError> {
    if config.strip_aws_directives {
        let stripped = strip_aws_directives(sdl);
        Schema::parse_with_scalars(&stripped, AWS_SCALARS)
    } else {
        Schema::parse(sdl)
    }
}
