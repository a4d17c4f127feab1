use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UnknownOperationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Name of the root type when the schema has no `schema { ... }` block.
    pub fn root_type_name(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }

    /// Output subdirectory for this kind's documents.
    pub fn dir_name(self) -> &'static str {
        match self {
            OperationKind::Query => "queries",
            OperationKind::Mutation => "mutations",
            OperationKind::Subscription => "subscriptions",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for OperationKind {
    type Err = UnknownOperationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(OperationKind::Query),
            "mutation" => Ok(OperationKind::Mutation),
            "subscription" => Ok(OperationKind::Subscription),
            other => Err(UnknownOperationKind(other.to_string())),
        }
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn operation_name(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything needed to render one operation document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDraft {
    pub kind: OperationKind,
    pub operation_name: String,
    pub root_field: String,
    pub variable_clause: String,
    pub call_clause: String,
    pub selection_body: String,
}

impl OperationDraft {
    pub fn new(
        kind: OperationKind,
        root_field: &str,
        variable_clause: String,
        call_clause: String,
        selection_body: String,
    ) -> Self {
        Self {
            kind,
            operation_name: operation_name(root_field),
            root_field: root_field.to_string(),
            variable_clause,
            call_clause,
            selection_body,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} {}", self.kind, self.operation_name);
        push_parenthesized(&mut out, &self.variable_clause);
        out.push_str(" {\n  ");
        out.push_str(&self.root_field);
        push_parenthesized(&mut out, &self.call_clause);
        if !self.selection_body.is_empty() {
            out.push_str(" {\n");
            out.push_str(&self.selection_body);
            out.push_str("\n  }");
        }
        out.push_str("\n}");
        out
    }
}

fn push_parenthesized(out: &mut String, clause: &str) {
    if !clause.is_empty() {
        out.push('(');
        out.push_str(clause);
        out.push(')');
    }
}

/// Renders a single operation document.
///
/// `selection_body` is the already-indented content of the root field's
/// selection set (see [`crate::selection::synthesize`]); an empty body renders
/// the root field without braces.
pub fn assemble(
    kind: OperationKind,
    field_name: &str,
    variable_clause: &str,
    call_clause: &str,
    selection_body: &str,
) -> String {
    OperationDraft::new(
        kind,
        field_name,
        variable_clause.to_string(),
        call_clause.to_string(),
        selection_body.to_string(),
    )
    .render()
}
