use crate::helpers::TestContext;
use auth_tokens::domain::RefreshedToken;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_new_access_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_user().await;

    let response = app.refresh_token(&tokens.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let refreshed = response
        .json::<RefreshedToken>()
        .await
        .expect("Could not deserialize refresh body");
    let response = app.user_profile(Some(&refreshed.access_token)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_access_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_user().await;

    let response = app.refresh_token(&tokens.access_token).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_superseded_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (email, first) = app.signed_in_user().await;

    let response = app.sign_in(&email, crate::helpers::PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.refresh_token(&first.refresh_token).await;
    assert_eq!(response.status().as_u16(), 401);
}
