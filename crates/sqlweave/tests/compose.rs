//! End-to-end composition tests.

use sqlweave::{Fragment, SqlArg, ToSql, Value, sql};

/// Segments joined with a `{}` marker at each parameter position, for
/// readable assertions. Real placeholder rendering belongs to executors.
fn preview(fragment: &Fragment) -> String {
    fragment.segments().join("{}")
}

#[test]
fn test_select_with_bound_id() {
    let id = 42i64;
    let query = sql!("SELECT * FROM t WHERE id = ", id, "").unwrap();

    insta::assert_snapshot!(preview(&query), @"SELECT * FROM t WHERE id = {}");
    assert_eq!(query.params(), [Value::I64(42)]);
}

#[test]
fn test_literal_only_query() {
    let query = sql!("SELECT COUNT(*) FROM users").unwrap();
    assert_eq!(query.segments(), ["SELECT COUNT(*) FROM users"]);
    assert!(query.params().is_empty());
}

#[test]
fn test_filters_joined_then_embedded() {
    let filters = vec![
        sql!("status = ", "active", "").unwrap(),
        sql!("age >= ", 21i64, "").unwrap(),
        sql!("deleted_at IS NULL").unwrap(),
    ];
    let clause = Fragment::join(filters, " AND ");
    let query = sql!("SELECT * FROM users WHERE ", clause, " LIMIT 10").unwrap();

    insta::assert_snapshot!(
        preview(&query),
        @"SELECT * FROM users WHERE status = {} AND age >= {} AND deleted_at IS NULL LIMIT 10"
    );
    assert_eq!(
        query.params(),
        [Value::String("active".into()), Value::I64(21)]
    );
}

#[test]
fn test_fragment_reuse_leaves_original_intact() {
    let clause = sql!("id = ", 1i64, "").unwrap();

    let by_id = sql!("SELECT * FROM a WHERE ", clause.clone(), "").unwrap();
    let deleted = sql!("DELETE FROM a WHERE ", clause.clone(), "").unwrap();

    assert_eq!(preview(&by_id), "SELECT * FROM a WHERE id = {}");
    assert_eq!(preview(&deleted), "DELETE FROM a WHERE id = {}");
    assert_eq!(clause.segments(), ["id = ", ""]);
    assert_eq!(clause.params(), [Value::I64(1)]);
}

struct DateRange {
    from: i64,
    to: i64,
}

impl ToSql for DateRange {
    fn to_sql(&self) -> SqlArg {
        sql!("created_at BETWEEN ", self.from, " AND ", self.to, "")
            .expect("scalar-only fragment")
            .into()
    }
}

#[test]
fn test_domain_type_describes_itself() {
    let range = DateRange { from: 10, to: 20 };
    let query = sql!(
        "SELECT id FROM events WHERE ",
        SqlArg::defer(range),
        " ORDER BY id"
    )
    .unwrap();

    insta::assert_snapshot!(
        preview(&query),
        @"SELECT id FROM events WHERE created_at BETWEEN {} AND {} ORDER BY id"
    );
    assert_eq!(query.params(), [Value::I64(10), Value::I64(20)]);
}

struct UserId(i64);

impl ToSql for UserId {
    fn to_sql(&self) -> SqlArg {
        SqlArg::Value(Value::I64(self.0))
    }
}

#[test]
fn test_conversion_may_end_in_a_scalar() {
    let query = sql!("WHERE owner = ", SqlArg::defer(UserId(9)), "").unwrap();
    assert_eq!(query.segments(), ["WHERE owner = ", ""]);
    assert_eq!(query.params(), [Value::I64(9)]);
}

#[test]
fn test_optional_filter() {
    let email: Option<String> = None;
    let query = sql!("UPDATE users SET email = ", email, " WHERE id = ", 3i64, "").unwrap();

    assert_eq!(query.params(), [Value::Null, Value::I64(3)]);
}

#[test]
fn test_bytes_bind_as_one_parameter() {
    let digest = vec![0xde, 0xad, 0xbe, 0xef];
    let query = sql!("WHERE checksum = ", digest, "").unwrap();

    assert_eq!(query.params(), [Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef])]);
}

#[test]
fn test_untrusted_payload_is_rejected() {
    let payload: serde_json::Value = serde_json::from_str(r#"{"admin": true}"#).unwrap();
    let err = sql!("UPDATE users SET prefs = ", payload, "").unwrap_err();

    assert!(matches!(
        err,
        sqlweave::Error::UnsupportedInterpolation { kind: "object" }
    ));
}

#[test]
fn test_untrusted_scalar_binds() {
    let payload: serde_json::Value = serde_json::from_str(r#""alice""#).unwrap();
    let query = sql!("WHERE name = ", payload, "").unwrap();

    assert_eq!(query.params(), [Value::String("alice".into())]);
}

#[test]
fn test_deep_nesting_stays_flat() {
    let innermost = sql!("c = ", 3i64, "").unwrap();
    let inner = sql!("b = ", 2i64, " AND ", innermost, "").unwrap();
    let query = sql!("SELECT * FROM t WHERE a = ", 1i64, " AND ", inner, "").unwrap();

    insta::assert_snapshot!(
        preview(&query),
        @"SELECT * FROM t WHERE a = {} AND b = {} AND c = {}"
    );
    assert_eq!(
        query.params(),
        [Value::I64(1), Value::I64(2), Value::I64(3)]
    );
    assert_eq!(query.segments().len(), query.params().len() + 1);
}
