use mockall::predicate::{eq, ne};
use predicates::ord::EqPredicate;
use redimock::cmd::{Get, Hget, Hset, Keys, Lpush, Lrange, Ltrim, Rpush, Set};
use redimock::{CommandError, DataType, MockSharedStoreBase};
use rstest::rstest;
use std::collections::HashMap;

fn hash_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn list_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Get Execute Command
///
/// The raw slot read decides the outcome: absent is no value, a string
/// comes back, anything else is a type mismatch.
#[rstest]
#[case(None, Ok(None))]
#[case(Some(DataType::String("x".to_string())), Ok(Some("x".to_string())))]
#[case(
    Some(DataType::List(vec![])),
    Err(CommandError::TypeMismatch("key is not a string".to_string()))
)]
fn test_get_execute(
    #[case] stored: Option<DataType>,
    #[case] expected: Result<Option<String>, CommandError>,
) {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(move |_| stored.clone());

    let result = Get::new("k".to_string()).execute(&mock_store);
    assert_eq!(result, expected);
}

/// Set Execute Command
///
/// One unconditional raw write, no prior read.
#[rstest]
// Equal to
#[case(eq(DataType::String("v".to_string())))]
// NOT Equal to
#[case(ne(DataType::String("something else".to_string())))]
fn test_set_execute(#[case] expected_write: EqPredicate<DataType>) {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_set()
        .with(eq("k".to_string()), expected_write)
        .times(1)
        .returning(|_, _| ());

    Set::new("k".to_string(), "v".to_string()).execute(&mock_store);
}

/// Hget Execute Command
///
/// Only a hash with the field present yields a value; every other
/// shape is silently "no value".
#[rstest]
#[case(None, None)]
#[case(Some(DataType::String("x".to_string())), None)]
#[case(Some(DataType::List(vec!["f".to_string()])), None)]
#[case(Some(DataType::Hash(HashMap::new())), None)]
#[case(
    Some(DataType::Hash([("f".to_string(), "v".to_string())].into())),
    Some("v".to_string())
)]
fn test_hget_execute(#[case] stored: Option<DataType>, #[case] expected: Option<String>) {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(move |_| stored.clone());

    let result = Hget::new("k".to_string(), "f".to_string()).execute(&mock_store);
    assert_eq!(result, expected);
}

/// Hset Execute Command: lazily creates the hash on an absent key
#[rstest]
fn test_hset_execute_creates_hash() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| None);
    mock_store
        .expect_set()
        .with(
            eq("k".to_string()),
            eq(DataType::Hash(hash_of(&[("f", "v")]))),
        )
        .times(1)
        .returning(|_, _| ());

    let result = Hset::new("k".to_string(), "f".to_string(), "v".to_string()).execute(&mock_store);
    assert!(result.is_ok());
}

/// Hset Execute Command: other fields survive the write
#[rstest]
fn test_hset_execute_keeps_other_fields() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| Some(DataType::Hash(hash_of(&[("other", "kept")]))));
    mock_store
        .expect_set()
        .with(
            eq("k".to_string()),
            eq(DataType::Hash(hash_of(&[("other", "kept"), ("f", "v")]))),
        )
        .times(1)
        .returning(|_, _| ());

    let result = Hset::new("k".to_string(), "f".to_string(), "v".to_string()).execute(&mock_store);
    assert!(result.is_ok());
}

/// Hset Execute Command: a type mismatch never reaches the raw write
#[rstest]
fn test_hset_execute_no_write_on_mismatch() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| Some(DataType::String("x".to_string())));
    mock_store.expect_set().times(0);

    let result = Hset::new("k".to_string(), "f".to_string(), "v".to_string()).execute(&mock_store);
    assert!(matches!(result, Err(CommandError::TypeMismatch(_))));
}

/// Lpush Execute Command: the pushed block lands ahead of the old tail
#[rstest]
fn test_lpush_execute_prepends_block() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| Some(DataType::List(list_of(&["old"]))));
    mock_store
        .expect_set()
        .with(
            eq("k".to_string()),
            eq(DataType::List(list_of(&["a", "b", "old"]))),
        )
        .times(1)
        .returning(|_, _| ());

    let result = Lpush::new("k".to_string(), list_of(&["a", "b"])).execute(&mock_store);
    assert!(result.is_ok());
}

/// Lpush Execute Command: an empty push still materializes the list
#[rstest]
fn test_lpush_execute_empty_push_materializes() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| None);
    mock_store
        .expect_set()
        .with(eq("k".to_string()), eq(DataType::List(vec![])))
        .times(1)
        .returning(|_, _| ());

    let result = Lpush::new("k".to_string(), vec![]).execute(&mock_store);
    assert!(result.is_ok());
}

/// Rpush Execute Command: appends after the old contents
#[rstest]
fn test_rpush_execute_appends_block() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| Some(DataType::List(list_of(&["old"]))));
    mock_store
        .expect_set()
        .with(
            eq("k".to_string()),
            eq(DataType::List(list_of(&["old", "a", "b"]))),
        )
        .times(1)
        .returning(|_, _| ());

    let result = Rpush::new("k".to_string(), list_of(&["a", "b"])).execute(&mock_store);
    assert!(result.is_ok());
}

/// Push Execute Commands: a type mismatch never reaches the raw write
#[rstest]
fn test_push_execute_no_write_on_mismatch() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(2)
        .returning(|_| Some(DataType::String("x".to_string())));
    mock_store.expect_set().times(0);

    let lpush = Lpush::new("k".to_string(), list_of(&["a"])).execute(&mock_store);
    let rpush = Rpush::new("k".to_string(), list_of(&["a"])).execute(&mock_store);
    assert!(matches!(lpush, Err(CommandError::TypeMismatch(_))));
    assert!(matches!(rpush, Err(CommandError::TypeMismatch(_))));
}

/// Lrange Execute Command: reads only, never writes back
#[rstest]
fn test_lrange_execute_is_read_only() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| Some(DataType::List(list_of(&["a", "b", "c"]))));
    mock_store.expect_set().times(0);

    let result = Lrange::new("k".to_string(), 1, -1).execute(&mock_store);
    assert_eq!(result, Ok(list_of(&["b", "c"])));
}

/// Ltrim Execute Command: writes the trimmed window back, even for an
/// absent key
#[rstest]
fn test_ltrim_execute_writes_back() {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_get()
        .with(eq("k".to_string()))
        .times(1)
        .returning(|_| None);
    mock_store
        .expect_set()
        .with(eq("k".to_string()), eq(DataType::List(vec![])))
        .times(1)
        .returning(|_, _| ());

    let result = Ltrim::new("k".to_string(), 0, 3).execute(&mock_store);
    assert!(result.is_ok());
}

/// Keys Execute Command: filters the enumerated names through the glob
#[rstest]
#[case("foo*", vec!["foo1", "foo2"])]
#[case("*", vec!["bar", "foo1", "foo2"])]
#[case("?ar", vec!["bar"])]
#[case("none*", vec![])]
fn test_keys_execute(#[case] pattern: &str, #[case] expected: Vec<&str>) {
    let mut mock_store = MockSharedStoreBase::new();

    mock_store
        .expect_key_names()
        .times(1)
        .returning(|| list_of(&["foo1", "bar", "foo2"]));

    let mut result = Keys::new(pattern.to_string()).execute(&mock_store);
    result.sort();
    assert_eq!(result, list_of(&expected));
}
