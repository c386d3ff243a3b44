use crate::helpers::TestContext;
use auth_tokens::errors::ErrorResponse;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_204_and_revoke_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_user().await;

    let response = app.sign_out(Some(&tokens.access_token)).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.user_profile(Some(&tokens.access_token)).await;
    assert_eq!(response.status().as_u16(), 401);
    let body = response
        .json::<ErrorResponse>()
        .await
        .expect("Could not deserialize error body");
    assert_eq!(body.message, "invalid authorization token");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_bearer_token(ctx: &mut TestContext) {
    let response = ctx.test_app.sign_out(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn refresh_still_works_after_sign_out(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_user().await;

    let response = app.sign_out(Some(&tokens.access_token)).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.refresh_token(&tokens.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
}
