use super::*;
use crate::error::SqlError;
use crate::personality::{MySql, Postgres, Sqlite};
use crate::{
    KeyedOptions, ListOptions, identifier, keyed, keyed_with, list, list_with, literal, sql, value,
};

/// Trim and collapse runs of spaces; only token content and order are part of
/// the output contract.
fn squash(text: &str) -> String {
    text.split(' ')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_squashed(stmt: &Statement) -> (String, Vec<Value>) {
    let built = build(stmt).unwrap();
    (squash(&built.text), built.params)
}

fn texts(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| Value::from(*v)).collect()
}

// ==================== Core ====================

#[test]
fn string_identity() {
    let (text, params) = build_squashed(&sql!("a string ? with no {{placeholders}}"));
    assert_eq!(text, "a string ? with no {placeholders}");
    assert!(params.is_empty());
}

#[test]
fn literal_whitespace_is_kept() {
    let built = build(&sql!("SELECT  1")).unwrap();
    assert_eq!(built.text, "SELECT  1");
}

#[test]
fn placeholders_expand_params() {
    let v = ";";
    let (text, params) = build_squashed(&sql!("SELECT {v}"));
    assert_eq!(text, "SELECT ?");
    assert_eq!(params, texts(&[";"]));
}

#[test]
fn adjacent_placeholders() {
    let (text, params) = build_squashed(&sql!("{}{}{}", 1, 2, 3));
    assert_eq!(text, "? ? ?");
    assert_eq!(params, vec![Value::Int4(1), Value::Int4(2), Value::Int4(3)]);
}

#[test]
fn empty_template() {
    let built = build(&sql!("")).unwrap();
    assert_eq!(built.text, "");
    assert!(built.params.is_empty());
}

#[test]
fn exact_join_of_segments_and_placeholders() {
    // "SELECT " + " " + "?" + " " + ""
    let built = build(&sql!("SELECT {}", 1)).unwrap();
    assert_eq!(built.text, "SELECT  ? ");
}

#[test]
fn params_follow_placeholder_order() {
    let values = [10_i64, 20, 30, 40];
    let stmt = sql!(
        "INSERT INTO t VALUES ({}, {}, {}, {})",
        values[0],
        values[1],
        values[2],
        values[3]
    );
    let (text, params) = build_squashed(&stmt);
    assert_eq!(text, "INSERT INTO t VALUES ( ? , ? , ? , ? )");
    assert_eq!(params, values.map(Value::Int8).to_vec());
}

// ==================== Modifiers ====================

#[test]
fn value_modifier() {
    let (text, params) = build_squashed(&sql!("SELECT {}", value("foo")));
    assert_eq!(text, "SELECT ?");
    assert_eq!(params, texts(&["foo"]));
}

#[test]
fn identifier_modifier() {
    let (text, params) = build_squashed(&sql!("SELECT {}", identifier("foo")));
    assert_eq!(text, "SELECT ??");
    assert_eq!(params, texts(&["foo"]));
}

#[test]
fn identifier_and_value_differ_only_in_text() {
    let (id_text, id_params) = build_squashed(&sql!("{}", identifier("x")));
    let (val_text, val_params) = build_squashed(&sql!("{}", value("x")));
    assert_ne!(id_text, val_text);
    assert_eq!(id_params, val_params);
}

#[test]
fn literal_modifier() {
    let (text, params) = build_squashed(&sql!("SELECT {}", literal("foo")));
    assert_eq!(text, "SELECT foo");
    assert!(params.is_empty());
}

#[test]
fn literal_that_looks_like_placeholders() {
    let built = build_with(&sql!("SELECT {}", literal("?? $1 ?")), &Postgres::new()).unwrap();
    assert_eq!(squash(&built.text), "SELECT ?? $1 ?");
    assert!(built.params.is_empty());
}

#[test]
fn null_binds_as_value() {
    let missing: Option<i32> = None;
    let (text, params) = build_squashed(&sql!("SELECT {missing}"));
    assert_eq!(text, "SELECT ?");
    assert_eq!(params, vec![Value::Null]);
}

// ==================== Lists ====================

#[test]
fn list_defaults() {
    let (text, params) = build_squashed(&sql!("SELECT {}", list([1, 2])));
    assert_eq!(text, "SELECT ? , ?");
    assert_eq!(params, vec![Value::Int4(1), Value::Int4(2)]);
}

#[test]
fn list_empty() {
    let (text, params) = build_squashed(&sql!("SELECT {}", list(Vec::<i32>::new())));
    assert_eq!(text, "SELECT");
    assert!(params.is_empty());
}

#[test]
fn list_options() {
    let opts = ListOptions::new().prefix("WHERE").join("AND").suffix("ORDER BY");
    let (text, params) = build_squashed(&sql!("SELECT {}", list_with([1, 2], opts)));
    assert_eq!(text, "SELECT WHERE ? AND ? ORDER BY");
    assert_eq!(params, vec![Value::Int4(1), Value::Int4(2)]);
}

#[test]
fn list_empty_with_prefix() {
    let opts = ListOptions::new().prefix("WHERE").join("AND").suffix("ORDER BY");
    let (text, params) = build_squashed(&sql!("SELECT {}", list_with(Vec::<i32>::new(), opts)));
    assert_eq!(text, "SELECT");
    assert!(params.is_empty());
}

#[test]
fn list_of_mixed_fragments() {
    let cols = list([identifier("a"), literal("b"), value(3)]);
    let (text, params) = build_squashed(&sql!("SELECT {cols}"));
    assert_eq!(text, "SELECT ?? , b , ?");
    assert_eq!(params, vec![Value::from("a"), Value::Int4(3)]);
}

#[test]
fn list_of_statements() {
    let clauses = list_with(
        [sql!("a = {}", 1), sql!("b = {}", 2)],
        ListOptions::new().join("OR").prefix("WHERE"),
    );
    let (text, params) = build_squashed(&sql!("SELECT * FROM t {clauses}"));
    assert_eq!(text, "SELECT * FROM t WHERE a = ? OR b = ?");
    assert_eq!(params, vec![Value::Int4(1), Value::Int4(2)]);
}

// ==================== Keyed ====================

#[test]
fn keyed_defaults() {
    let (text, params) = build_squashed(&sql!("SELECT {}", keyed([("foo", 1), ("bar", 2)])));
    assert_eq!(text, "SELECT ?? = ? , ?? = ?");
    assert_eq!(
        params,
        vec![Value::from("foo"), Value::Int4(1), Value::from("bar"), Value::Int4(2)]
    );
}

#[test]
fn keyed_empty() {
    let (text, params) = build_squashed(&sql!("SELECT {}", keyed(Vec::<(&str, i32)>::new())));
    assert_eq!(text, "SELECT");
    assert!(params.is_empty());
}

#[test]
fn keyed_absent_matches_empty() {
    let absent = build(&sql!("SELECT {}", keyed([("undef", None::<i32>)]))).unwrap();
    let empty = build(&sql!("SELECT {}", keyed(Vec::<(&str, i32)>::new()))).unwrap();
    assert_eq!(absent, empty);
    assert_eq!(squash(&absent.text), "SELECT");
}

#[test]
fn keyed_options() {
    let opts = KeyedOptions::new()
        .prefix("WHERE")
        .join("AND")
        .suffix("ORDER BY")
        .sep("==");
    let (text, params) = build_squashed(&sql!("SELECT {}", keyed_with([("foo", 1), ("bar", 2)], opts)));
    assert_eq!(text, "SELECT WHERE ?? == ? AND ?? == ? ORDER BY");
    assert_eq!(
        params,
        vec![Value::from("foo"), Value::Int4(1), Value::from("bar"), Value::Int4(2)]
    );
}

#[test]
fn keyed_empty_with_prefix() {
    let opts = KeyedOptions::new().prefix("WHERE").join("AND").suffix("ORDER BY").sep("==");
    let stmt = sql!("SELECT {}", keyed_with(Vec::<(&str, i32)>::new(), opts));
    let (text, params) = build_squashed(&stmt);
    assert_eq!(text, "SELECT");
    assert!(params.is_empty());
}

#[test]
fn keyed_values_go_through_the_binder() {
    let set = keyed([
        ("name", Some(value("bob"))),
        ("updated_at", Some(literal("now()"))),
        ("nick", None),
    ]);
    let (text, params) = build_squashed(&sql!("UPDATE users SET {set}"));
    assert_eq!(text, "UPDATE users SET ?? = ? , ?? = now()");
    assert_eq!(params, texts(&["name", "bob", "updated_at"]));
}

// ==================== Personalities ====================

#[test]
fn postgres_basics() {
    let built = build_with(&sql!("SELECT {}", value("foo")), &Postgres::new()).unwrap();
    assert_eq!(squash(&built.text), "SELECT $1");
    assert_eq!(built.params, texts(&["foo"]));
}

#[test]
fn postgres_keyed() {
    let stmt = sql!("SELECT {}", keyed([("foo", 1), ("SELECT", 2), (";", 3)]));
    let built = build_with(&stmt, &Postgres::new()).unwrap();
    assert_eq!(
        squash(&built.text),
        r#"SELECT "foo" = $1 , "SELECT" = $2 , ";" = $3"#
    );
    assert_eq!(built.params, vec![Value::Int4(1), Value::Int4(2), Value::Int4(3)]);
}

#[test]
fn same_statement_under_every_personality() {
    let stmt = sql!(
        "SELECT * FROM {} WHERE a = {} AND b IN ( {} )",
        identifier("t"),
        1,
        list([2, 3])
    );
    let values = vec![Value::Int4(1), Value::Int4(2), Value::Int4(3)];

    let cases: [(&dyn Personality, &str); 4] = [
        (&Positional, "SELECT * FROM ?? WHERE a = ? AND b IN ( ? , ? )"),
        (&Postgres::new(), r#"SELECT * FROM "t" WHERE a = $1 AND b IN ( $2 , $3 )"#),
        (&MySql::new(), "SELECT * FROM `t` WHERE a = ? AND b IN ( ? , ? )"),
        (&Sqlite::new(), r#"SELECT * FROM "t" WHERE a = ?1 AND b IN ( ?2 , ?3 )"#),
    ];
    for (personality, expected) in cases {
        let built = build_with(&stmt, personality).unwrap();
        assert_eq!(squash(&built.text), expected, "{}", personality.name());
        let bound: Vec<&Value> = built.params.iter().filter(|p| p.as_str().is_none()).collect();
        assert_eq!(bound, values.iter().collect::<Vec<_>>(), "{}", personality.name());
    }
}

#[test]
fn personality_error_propagates_unchanged() {
    let stmt = sql!("SELECT {} FROM {}", 1, identifier(42));
    let err = build_with(&stmt, &Postgres::new()).unwrap_err();
    assert_eq!(
        err,
        SqlError::InvalidIdent("expected a text identifier, got int4".into())
    );
}

#[test]
fn custom_personality_error_aborts_build() {
    struct NoValues;

    impl Personality for NoValues {
        fn ident(&self, ident: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
            ctx.push_param(ident.clone());
            Ok("??".into())
        }

        fn value(&self, _value: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
            Err(SqlError::personality("values are not allowed"))
        }
    }

    let ok = build_with(&sql!("SELECT {}", identifier("a")), &NoValues).unwrap();
    assert_eq!(ok.params, texts(&["a"]));

    let err = build_with(&sql!("SELECT {}, {}", identifier("a"), 1), &NoValues).unwrap_err();
    assert_eq!(err, SqlError::Personality("values are not allowed".into()));
}

#[test]
fn inline_personality_may_skip_params() {
    struct Inline;

    impl Personality for Inline {
        fn ident(&self, ident: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
            Ok(ident.as_str().unwrap_or_default().to_string())
        }

        fn value(&self, value: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
            Ok(match value {
                Value::Int4(n) => n.to_string(),
                other => format!("'{}'", other.as_str().unwrap_or_default().replace('\'', "''")),
            })
        }
    }

    let built = build_with(&sql!("SELECT {} WHERE {}", identifier("a"), keyed([("b", "o'k")])), &Inline)
        .unwrap();
    assert_eq!(squash(&built.text), "SELECT a WHERE b = 'o''k'");
    assert!(built.params.is_empty());
}

// ==================== Embedding ====================

#[test]
fn simple_embedding() {
    let (text, params) = build_squashed(&sql!("SELECT {} table", sql!("* FROM")));
    assert_eq!(text, "SELECT * FROM table");
    assert!(params.is_empty());
}

#[test]
fn parameter_embedding() {
    let inner = sql!("* FROM {}", identifier("foo"));
    let (text, params) = build_squashed(&sql!("SELECT {inner} WHERE {}", "bar"));
    assert_eq!(text, "SELECT * FROM ?? WHERE ?");
    assert_eq!(params, texts(&["foo", "bar"]));
}

#[test]
fn nested_embedding_flattens() {
    let x = 7;
    let (text, params) = build_squashed(&sql!("A {} C", sql!("B {x}")));
    assert_eq!(text, "A B ? C");
    assert_eq!(params, vec![Value::Int4(7)]);
}

#[test]
fn postgres_numbers_across_nesting() {
    let deep = sql!("c = {}", 3);
    let mid = sql!("b = {} AND {deep}", 2);
    let stmt = sql!("WHERE a = {} AND {mid} AND d = {}", 1, 4);
    let built = stmt.build_with(&Postgres::new()).unwrap();
    assert_eq!(
        squash(&built.text),
        "WHERE a = $1 AND b = $2 AND c = $3 AND d = $4"
    );
    assert_eq!(
        built.params,
        vec![Value::Int4(1), Value::Int4(2), Value::Int4(3), Value::Int4(4)]
    );
}

#[test]
fn statement_is_reusable() {
    let filter = sql!("id = {}", 5_i64);
    let a = sql!("SELECT * FROM a WHERE {}", &filter);
    let b = sql!("DELETE FROM b WHERE {}", &filter);

    let first = a.build().unwrap();
    let second = a.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(b.build().unwrap().params, vec![Value::Int8(5)]);
    assert_eq!(filter.build_with(&Postgres::new()).unwrap().params, vec![Value::Int8(5)]);
}

// ==================== Runtime templates ====================

#[test]
fn runtime_template_matches_macro() {
    let runtime = crate::sql(["SELECT ", " WHERE a = ", ""], [identifier("t"), value(1)]);
    let expanded = sql!("SELECT {} WHERE a = {}", identifier("t"), value(1));
    assert_eq!(runtime, expanded);
}

#[test]
fn runtime_template_is_permissive() {
    // Surplus expressions are dropped.
    let stmt = Statement::from_template(["a ", " b"], [1, 2, 3]);
    let (text, params) = build_squashed(&stmt);
    assert_eq!(text, "a ? b ?");
    assert_eq!(params, vec![Value::Int4(1), Value::Int4(2)]);

    // Missing expressions leave segments adjacent.
    let stmt = Statement::from_template(["a", "b", "c"], [1]);
    assert_eq!(build_squashed(&stmt).0, "a ? b c");
}

// ==================== Output ====================

#[test]
fn params_ref_matches_params() {
    let built = build(&sql!("SELECT {}, {}", 1, "x")).unwrap();
    assert_eq!(built.params_ref().len(), 2);

    let (text, params) = built.into_parts();
    assert!(text.starts_with("SELECT"));
    assert_eq!(params.len(), 2);
}

#[test]
fn built_serializes() {
    let built = build(&sql!("SELECT {}", 1)).unwrap();
    let json = serde_json::to_value(&built).unwrap();
    assert_eq!(json["params"], serde_json::json!([1]));
}
