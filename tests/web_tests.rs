//! Web integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::{redirect::Policy, Client, Response, StatusCode};

const BASE_URL: &str = "http://localhost:3000";

/// Client that does not follow redirects, so 302 + Location are observable
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

async fn get(client: &Client, path: &str) -> Response {
    client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
}

async fn post_form(client: &Client, path: &str, fields: &[(&str, &str)]) -> Response {
    client
        .post(format!("{}{}", BASE_URL, path))
        .form(fields)
        .send()
        .await
        .expect("Failed to send request")
}

/// Extract the Location header of a redirect response
fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .expect("Invalid Location header")
        .to_string()
}

/// Create an author, a book, and return the book's detail path
async fn seed_book(client: &Client) -> String {
    let response = post_form(
        client,
        "/catalog/author/create",
        &[
            ("first_name", "Mary"),
            ("family_name", "Shelley"),
            ("date_of_birth", "1797-08-30"),
            ("date_of_death", "1851-02-01"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let author_url = location(&response);
    let author_id = author_url.rsplit('/').next().expect("No author id");

    let response = post_form(
        client,
        "/catalog/book/create",
        &[
            ("title", "Frankenstein"),
            ("author", author_id),
            ("summary", "A scientist builds a creature."),
            ("isbn", "9780141439471"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    location(&response)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn home_page_renders_counts() {
    let client = client();

    let response = get(&client, "/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Copies available"));
}

#[tokio::test]
#[ignore]
async fn root_redirects_to_catalog() {
    let client = client();

    let response = get(&client, "/").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog");
}

#[tokio::test]
#[ignore]
async fn list_pages_render() {
    let client = client();

    for path in [
        "/catalog/books",
        "/catalog/authors",
        "/catalog/genres",
        "/catalog/bookinstances",
    ] {
        let response = get(&client, path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
    }
}

#[tokio::test]
#[ignore]
async fn missing_book_copy_yields_404() {
    let client = client();

    let response = get(&client, "/catalog/bookinstance/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Book copy not found"));
}

#[tokio::test]
#[ignore]
async fn missing_author_yields_404() {
    let client = client();

    let response = get(&client, "/catalog/author/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Author not found"));
}

#[tokio::test]
#[ignore]
async fn create_copy_with_blank_imprint_rerenders_form() {
    let client = client();
    let book_url = seed_book(&client).await;
    let book_id = book_url.rsplit('/').next().expect("No book id").to_string();

    let before = get(&client, "/catalog/bookinstances")
        .await
        .text()
        .await
        .expect("Failed to read body")
        .matches("/catalog/bookinstance/")
        .count();

    let response = post_form(
        &client,
        "/catalog/bookinstance/create",
        &[
            ("book", book_id.as_str()),
            ("imprint", "   "),
            ("status", "Available"),
            ("due_back", ""),
        ],
    )
    .await;

    // Form view, not a redirect, and nothing persisted
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Imprint must be specified"));

    let after = get(&client, "/catalog/bookinstances")
        .await
        .text()
        .await
        .expect("Failed to read body")
        .matches("/catalog/bookinstance/")
        .count();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore]
async fn copy_lifecycle_create_update_delete() {
    let client = client();
    let book_url = seed_book(&client).await;
    let book_id = book_url.rsplit('/').next().expect("No book id").to_string();

    // Create
    let response = post_form(
        &client,
        "/catalog/bookinstance/create",
        &[
            ("book", book_id.as_str()),
            ("imprint", "Penguin Classics, 2003"),
            ("status", "Available"),
            ("due_back", "2024-01-01"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let copy_url = location(&response);
    assert!(copy_url.starts_with("/catalog/bookinstance/"));
    let copy_id = copy_url.rsplit('/').next().expect("No copy id").to_string();

    // Detail shows the resolved book and the submitted fields
    let response = get(&client, &copy_url).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Frankenstein"));
    assert!(body.contains("Penguin Classics, 2003"));
    assert!(body.contains("Available"));

    // Update replaces the fields and redirects back to the same record
    let response = post_form(
        &client,
        &format!("{}/update", copy_url),
        &[
            ("book", book_id.as_str()),
            ("imprint", "Vintage, 1994"),
            ("status", "Loaned"),
            ("due_back", "2024-06-15"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), copy_url);

    let body = get(&client, &copy_url)
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Vintage, 1994"));
    assert!(body.contains("Loaned"));
    assert!(body.contains("Jun 15, 2024"));

    // Delete, submitting the id in the body
    let response = post_form(
        &client,
        &format!("{}/delete", copy_url),
        &[("bookinstanceid", copy_id.as_str())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog/bookinstances");

    // Gone from the list and from detail
    let body = get(&client, "/catalog/bookinstances")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(!body.contains(&format!("{}\"", copy_url)));

    let response = get(&client, &copy_url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is a harmless no-op
    let response = post_form(
        &client,
        &format!("{}/delete", copy_url),
        &[("bookinstanceid", copy_id.as_str())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
#[ignore]
async fn genre_name_length_is_enforced() {
    let client = client();

    let response = post_form(&client, "/catalog/genre/create", &[("name", "ab")]).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Genre name must contain at least 3 characters"));
}

#[tokio::test]
#[ignore]
async fn deleting_book_leaves_dangling_copy_as_not_found() {
    let client = client();
    let book_url = seed_book(&client).await;
    let book_id = book_url.rsplit('/').next().expect("No book id").to_string();

    let response = post_form(
        &client,
        "/catalog/bookinstance/create",
        &[("book", book_id.as_str()), ("imprint", "Orphan imprint")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let copy_url = location(&response);

    let response = post_form(
        &client,
        &format!("{}/delete", book_url),
        &[("bookid", book_id.as_str())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    // The copy's book reference now dangles; dereferencing it reads as missing
    let response = get(&client, &copy_url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Book copy not found"));

    // But the copy still lists, without a title
    let body = get(&client, "/catalog/bookinstances")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Orphan imprint"));
}
