use crate::schema::ArgumentDef;

/// `$name: Type` pairs for the operation header, or `""` when there are no
/// arguments.
pub fn variable_clause(args: &[ArgumentDef]) -> String {
    args.iter()
        .map(|arg| format!("${}: {}", arg.name, arg.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name: $name` pairs for the root field call, or `""` when there are no
/// arguments.
pub fn call_clause(args: &[ArgumentDef]) -> String {
    args.iter()
        .map(|arg| format!("{0}: ${0}", arg.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeRef;

    fn arg(name: &str, ty: TypeRef) -> ArgumentDef {
        ArgumentDef {
            name: name.to_string(),
            ty,
        }
    }

    #[test]
    fn empty_args_render_nothing() {
        assert_eq!(variable_clause(&[]), "");
        assert_eq!(call_clause(&[]), "");
    }

    #[test]
    fn preserves_order_and_type_syntax() {
        let args = vec![
            arg("id", TypeRef::non_null(TypeRef::named("ID"))),
            arg(
                "tags",
                TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String")))),
            ),
            arg("filter", TypeRef::named("UserFilter")),
        ];
        assert_eq!(
            variable_clause(&args),
            "$id: ID!, $tags: [String!]!, $filter: UserFilter"
        );
        assert_eq!(call_clause(&args), "id: $id, tags: $tags, filter: $filter");
    }

    #[test]
    fn nested_lists() {
        let args = vec![arg(
            "matrix",
            TypeRef::list(TypeRef::list(TypeRef::named("Int"))),
        )];
        assert_eq!(variable_clause(&args), "$matrix: [[Int]]");
    }
}
