mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn missing_token_is_rejected() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.client.get(app.url("/posts")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::json(res).await?["msg"], "No token, authorization denied");
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .client
        .get(app.url("/posts"))
        .header("x-auth-token", "not.a.jwt")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::json(res).await?["msg"], "Token is not valid");
    Ok(())
}

#[tokio::test]
async fn bearer_header_is_accepted() -> Result<()> {
    let app = common::spawn_app().await?;
    let user = app.user("alice").await?;

    let res = app
        .client
        .get(app.url("/posts"))
        .bearer_auth(&user.token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
