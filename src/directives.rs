//! Lexical removal of AWS AppSync directives.
//!
//! AppSync schemas decorate types and fields with authorization directives
//! that plain GraphQL tooling does not know about. They carry no meaning for
//! operation generation, so they are cut out of the SDL text before parsing.

use std::sync::LazyLock;

use regex::Regex;

pub const AWS_DIRECTIVES: &[&str] = &[
    "aws_api_key",
    "aws_iam",
    "aws_oidc",
    "aws_cognito_user_pools",
    "aws_auth",
    "aws_subscribe",
    "aws_lambda",
];

/// Scalars AppSync provides without declaring them in the schema.
pub const AWS_SCALARS: &[&str] = &[
    "AWSDate",
    "AWSTime",
    "AWSDateTime",
    "AWSTimestamp",
    "AWSEmail",
    "AWSJSON",
    "AWSURL",
    "AWSPhone",
    "AWSIPAddress",
];

static DIRECTIVE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]*directive[ \t]+@(?:{})\b(?:\s*\([^)]*\))?\s+(?:repeatable\s+)?on\s+\|?\s*[A-Z_]+(?:\s*\|\s*[A-Z_]+)*[ \t]*\r?\n?",
        AWS_DIRECTIVES.join("|")
    ))
    .expect("invalid directive definition pattern")
});

static DIRECTIVE_USAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\s*@(?:{})\b(?:\s*\([^)]*\))?",
        AWS_DIRECTIVES.join("|")
    ))
    .expect("invalid directive usage pattern")
});

/// Removes every AWS directive application (name plus optional argument
/// list, with the whitespace in front of it, line breaks included) and every
/// `directive @aws_*` definition.
pub fn strip_aws_directives(sdl: &str) -> String {
    let without_definitions = DIRECTIVE_DEFINITION.replace_all(sdl, "");
    DIRECTIVE_USAGE
        .replace_all(&without_definitions, "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_bare_directive_from_type() {
        let input = r#"
type CustomerImport @aws_cognito_user_pools {
  completedAt: String
  createdAt: String!
  status: CustomerImportStatus!
}"#;
        let expected = r#"
type CustomerImport {
  completedAt: String
  createdAt: String!
  status: CustomerImportStatus!
}"#;
        assert_eq!(strip_aws_directives(input), expected);
    }

    #[test]
    fn removes_directive_with_parameters() {
        let input = "type Post @aws_auth(cognito_groups: [\"Admins\"]) {\n  id: ID!\n}";
        assert_eq!(strip_aws_directives(input), "type Post {\n  id: ID!\n}");
    }

    #[test]
    fn removes_field_directives() {
        let input = r#"
type Post @aws_auth(cognito_groups: ["Admins", "Editors"]) {
  id: ID!
  publishedAt: String @aws_api_key
}"#;
        let expected = r#"
type Post {
  id: ID!
  publishedAt: String
}"#;
        assert_eq!(strip_aws_directives(input), expected);
    }

    #[test]
    fn removes_directives_across_types() {
        let input = "type User @aws_cognito_user_pools {\n  id: ID!\n}\n\ntype Post @aws_iam @aws_api_key {\n  id: ID!\n}";
        let expected = "type User {\n  id: ID!\n}\n\ntype Post {\n  id: ID!\n}";
        assert_eq!(strip_aws_directives(input), expected);
    }

    #[test]
    fn removes_subscribe_with_mutations() {
        let input = "type Subscription {\n  onCreatePost: Post @aws_subscribe(mutations: [\"createPost\"])\n}";
        let expected = "type Subscription {\n  onCreatePost: Post\n}";
        assert_eq!(strip_aws_directives(input), expected);
    }

    #[test]
    fn removes_directives_on_their_own_line() {
        let input = "type Post\n  @aws_iam {\n  id: ID!\n  at: String\n    @aws_api_key\n}";
        assert_eq!(strip_aws_directives(input), "type Post {\n  id: ID!\n  at: String\n}");

        let input = "type Query {\n  a: Int\n    @aws_iam\n    @aws_api_key\n  b: Int\n}";
        assert_eq!(strip_aws_directives(input), "type Query {\n  a: Int\n  b: Int\n}");
    }

    #[test]
    fn removes_directive_definitions() {
        let input = "directive @aws_subscribe(mutations: [String]) on FIELD_DEFINITION\ndirective @aws_iam on OBJECT | FIELD_DEFINITION\ntype Query {\n  a: Int\n}";
        assert_eq!(strip_aws_directives(input), "type Query {\n  a: Int\n}");
    }

    #[test]
    fn leaves_other_directives_alone() {
        let input = "type Query {\n  old: Int @deprecated(reason: \"no\")\n  a: Int @aws_iam_custom\n}";
        assert_eq!(strip_aws_directives(input), input);
    }
}
