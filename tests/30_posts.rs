mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_post_snapshots_the_author() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;

    let post = app.create_post(&alice, "hello").await?;
    assert_eq!(post["text"], "hello");
    assert_eq!(post["user"], alice.id.to_string());
    assert_eq!(post["name"], "alice");
    assert_eq!(post["avatar"], "https://avatars.example.com/alice.png");
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comments"], json!([]));
    assert!(post["date"].is_string());
    Ok(())
}

#[tokio::test]
async fn create_with_empty_text_is_a_validation_error() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;

    for body in [json!({ "text": "" }), json!({}), json!({ "text": null }), json!({ "text": 123 })] {
        let res = app.post(&alice, "/posts").json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = common::json(res).await?;
        assert_eq!(body["errors"][0]["param"], "text");
        assert_eq!(body["errors"][0]["msg"], "Text is required");
    }

    assert_eq!(app.store.post_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;

    let res = app
        .post(&alice, "/posts")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.post_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;

    let empty = common::json(app.get(&alice, "/posts").send().await?).await?;
    assert_eq!(empty, json!([]));

    for text in ["first", "second", "third"] {
        app.create_post(&alice, text).await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let posts = common::json(app.get(&alice, "/posts").send().await?).await?;
    let texts: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
    Ok(())
}

#[tokio::test]
async fn get_by_id_and_not_found() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let post = app.create_post(&alice, "hello").await?;
    let id = common::id_of(&post);

    let res = app.get(&alice, &format!("/posts/{}", id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::json(res).await?["text"], "hello");

    for missing in [Uuid::new_v4().to_string(), "not-a-valid-id".to_string()] {
        let res = app.get(&alice, &format!("/posts/{}", missing)).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(common::json(res).await?["msg"], "Post not found");
    }
    Ok(())
}

#[tokio::test]
async fn only_the_owner_can_delete() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let bob = app.user("bob").await?;
    let id = common::id_of(&app.create_post(&alice, "mine").await?);
    let path = format!("/posts/{}", id);

    let res = app.delete(&bob, &path).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::json(res).await?["msg"], "User not authorized");
    assert_eq!(app.get(&bob, &path).send().await?.status(), StatusCode::OK);

    let res = app.delete(&alice, &path).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::json(res).await?["msg"], "Post removed");
    assert_eq!(app.get(&alice, &path).send().await?.status(), StatusCode::NOT_FOUND);

    // deleting again is a plain not-found, not a server error
    assert_eq!(app.delete(&alice, &path).send().await?.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn post_routes_are_served_at_the_root() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);

    let res = app.get(&alice, "/posts").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.put(&alice, &format!("/posts/like/{}", id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get(&alice, "/api/posts").send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
