mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn comment(app: &common::TestApp, user: &common::TestUser, post_id: &str, text: &str) -> Result<Value> {
    let res = app
        .post(user, &format!("/posts/comment/{}", post_id))
        .json(&json!({ "text": text }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "comment failed: {}", res.status());
    common::json(res).await
}

#[tokio::test]
async fn comments_are_prepended_with_author_snapshot() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let bob = app.user("bob").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);

    comment(&app, &bob, &id, "first").await?;
    let comments = comment(&app, &alice, &id, "second").await?;

    assert_eq!(comments.as_array().unwrap().len(), 2);
    assert_eq!(comments[0]["text"], "second");
    assert_eq!(comments[0]["user"], alice.id.to_string());
    assert_eq!(comments[1]["name"], "bob");
    assert_eq!(comments[1]["avatar"], "https://avatars.example.com/bob.png");
    Ok(())
}

#[tokio::test]
async fn empty_comment_is_a_validation_error() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);

    let res = app
        .post(&alice, &format!("/posts/comment/{}", id))
        .json(&json!({ "text": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::json(res).await?["errors"][0]["param"], "text");
    Ok(())
}

#[tokio::test]
async fn deleting_a_comment_removes_exactly_that_comment() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let bob = app.user("bob").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);

    // bob writes two comments; deleting the older one must keep the newer one
    comment(&app, &bob, &id, "older").await?;
    let comments = comment(&app, &bob, &id, "newer").await?;
    let older_id = comments[1]["id"].as_str().unwrap().to_string();

    let res = app
        .delete(&bob, &format!("/posts/comment/{}/{}", id, older_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let remaining = common::json(res).await?;
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["text"], "newer");
    Ok(())
}

#[tokio::test]
async fn only_the_author_can_delete_a_comment() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let bob = app.user("bob").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);
    let comments = comment(&app, &bob, &id, "bob's").await?;
    let comment_id = comments[0]["id"].as_str().unwrap().to_string();

    // the post owner is not the comment author
    let res = app
        .delete(&alice, &format!("/posts/comment/{}/{}", id, comment_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::json(res).await?["msg"], "User not authorized");

    let post = common::json(app.get(&alice, &format!("/posts/{}", id)).send().await?).await?;
    assert_eq!(post["comments"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_comment_is_not_found() -> Result<()> {
    let app = common::spawn_app().await?;
    let alice = app.user("alice").await?;
    let id = common::id_of(&app.create_post(&alice, "hello").await?);

    let res = app
        .delete(&alice, &format!("/posts/comment/{}/{}", id, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(common::json(res).await?["msg"], "Comment does not exist");
    Ok(())
}
