//! Selection-set synthesis.
//!
//! Given an output type, build the text of a selection set that fetches every
//! leaf reachable within a depth budget. Composite fields recurse with
//! `depth + 1`; anything past `max_depth` selects nothing, which is what keeps
//! self-referential types finite. Composite fields whose nested selection
//! comes back empty are dropped, since `field` without a sub-selection is not
//! valid for object, interface or union types.
//!
//! Unions render `__typename` followed by one `... on Member { }` fragment per
//! member, each expanding the member's leaves plus a single level of nested
//! composites. A member with nothing selectable in that budget still gets a
//! fragment holding only `__typename`. Interfaces render `__typename` ahead of their own fields.

use crate::schema::{FieldDef, Schema, TypeDef, TypeRef};

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Largest accepted depth budget. Output grows with the fan-out of the schema
/// raised to the depth, and recursion uses one stack frame pair per level.
pub const MAX_DEPTH_LIMIT: usize = 10;

/// Spaces added per nested block.
pub const INDENT_STEP: usize = 2;

/// Indentation of depth-0 selections: the root field itself sits at two
/// spaces inside the operation body.
const ROOT_INDENT: usize = 4;

const TYPENAME: &str = "__typename";

/// Selection-set lines (without the enclosing braces) for `ty`, joined by
/// `\n` and indented for a root field at `depth`. Empty for leaf types or
/// when nothing fits in the depth budget.
pub fn synthesize(schema: &Schema, ty: &TypeRef, depth: usize, max_depth: usize) -> String {
    let indent = ROOT_INDENT + depth * INDENT_STEP;
    type_lines(schema, ty.base_name(), depth, max_depth, indent).join("\n")
}

fn type_lines(
    schema: &Schema,
    type_name: &str,
    depth: usize,
    ceiling: usize,
    indent: usize,
) -> Vec<String> {
    if depth > ceiling {
        return Vec::new();
    }

    match schema.get(type_name) {
        Some(TypeDef::Object(fields)) => field_lines(schema, fields, depth, ceiling, indent),
        Some(TypeDef::Interface(fields)) => {
            let body = field_lines(schema, fields, depth, ceiling, indent);
            if body.is_empty() {
                return body;
            }
            let mut lines = Vec::with_capacity(body.len() + 1);
            lines.push(line(indent, TYPENAME));
            lines.extend(body);
            lines
        }
        Some(TypeDef::Union(members)) => union_lines(schema, members, depth, ceiling, indent),
        Some(TypeDef::Scalar | TypeDef::Enum | TypeDef::InputObject) | None => Vec::new(),
    }
}

fn field_lines(
    schema: &Schema,
    fields: &[FieldDef],
    depth: usize,
    ceiling: usize,
    indent: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    for field in fields {
        let named = field.ty.named_type();
        let Some(category) = schema.classify(named) else {
            continue;
        };
        let base = named.base_name();

        if category.is_leaf() {
            lines.push(line(indent, &field.name));
        } else if category.is_composite() {
            let nested = type_lines(schema, base, depth + 1, ceiling, indent + INDENT_STEP);
            push_block(&mut lines, indent, &field.name, nested);
        }
    }
    lines
}

fn union_lines(
    schema: &Schema,
    members: &[String],
    depth: usize,
    ceiling: usize,
    indent: usize,
) -> Vec<String> {
    // Fragment bodies stay shallow: leaves plus one nested level.
    let fragment_ceiling = ceiling.min(depth + 1);

    let mut lines = vec![line(indent, TYPENAME)];
    for member in members {
        let mut body = type_lines(schema, member, depth, fragment_ceiling, indent + INDENT_STEP);
        if body.is_empty() {
            body.push(line(indent + INDENT_STEP, TYPENAME));
        }
        push_block(&mut lines, indent, &format!("... on {member}"), body);
    }
    lines
}

fn push_block(lines: &mut Vec<String>, indent: usize, head: &str, body: Vec<String>) {
    if body.is_empty() {
        return;
    }
    lines.push(format!("{}{head} {{", " ".repeat(indent)));
    lines.extend(body);
    lines.push(line(indent, "}"));
}

fn line(indent: usize, text: &str) -> String {
    format!("{}{text}", " ".repeat(indent))
}
