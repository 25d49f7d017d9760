use postoa_core::collection;

const USERS: &str = include_str!("fixtures/users.postman_collection.json");

#[test]
fn parse_users_collection() {
    let collection = collection::from_json(USERS).expect("should parse users collection");
    assert_eq!(collection.info.name, "Users API");
    assert_eq!(collection.info.description, "Manage users and their posts");
    assert_eq!(
        collection.info.postman_id.as_deref(),
        Some("5f0c1a7e-8d3b-4f7a-9c51-2b6f0e4d9a11")
    );
    assert_eq!(collection.items.len(), 5);

    let users = &collection.items[0];
    assert_eq!(users.name, "Users");
    assert!(users.request.is_none());
    assert_eq!(users.items.len(), 4);

    let list = users.items[0].request.as_ref().expect("should have request");
    assert_eq!(list.method, "GET");
    assert_eq!(list.url.path, vec!["users"]);
    assert_eq!(list.url.query.len(), 1);
    assert_eq!(list.url.query[0].description, "max rows");
}

#[test]
fn parse_string_url() {
    let collection = collection::from_json(USERS).unwrap();
    let delete = collection.items[0].items[3].request.as_ref().unwrap();
    assert_eq!(delete.url.raw, "{{baseUrl}}/users/{{userId}}");
    assert_eq!(delete.url.host, vec!["{{baseUrl}}"]);
    assert_eq!(delete.url.path, vec!["users", "{{userId}}"]);
}

#[test]
fn parse_rich_description() {
    let collection = collection::from_json(USERS).unwrap();
    let posts = collection.items[1].items[0].request.as_ref().unwrap();
    assert_eq!(posts.description, "Posts written by a user");
    assert!(posts.url.query[0].disabled);
}

#[test]
fn parse_from_bytes() {
    let collection = collection::from_slice(USERS.as_bytes()).unwrap();
    assert_eq!(collection.items.len(), 5);
}

#[test]
fn parse_malformed_json() {
    assert!(collection::from_json("{ not json").is_err());
    assert!(collection::from_slice(b"\x00\x01").is_err());
}

#[test]
fn parse_missing_item_array() {
    let result = collection::from_json(r#"{"info": {"name": "x"}}"#);
    assert!(result.is_err());
}

#[test]
fn parse_wrong_shape() {
    let result = collection::from_json(r#"{"info": {"name": "x"}, "item": {"name": "y"}}"#);
    assert!(result.is_err());
}
