use crate::helpers::{get_random_email, TestContext, PASSWORD};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_token_pair(ctx: &mut TestContext) {
    let (_, tokens) = ctx.test_app.signed_in_user().await;

    assert_eq!(tokens.access_token.split('.').count(), 3);
    assert_eq!(tokens.refresh_token.split('.').count(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_wrong_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    app.sign_up(&email, PASSWORD).await;

    let response = app.sign_in(&email, "Wrong-password1").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_unknown_email(ctx: &mut TestContext) {
    let response = ctx.test_app.sign_in(&get_random_email(), PASSWORD).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_for_malformed_input(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.sign_in("nope", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 422);

    let response = app.sign_in(&get_random_email(), "").await;
    assert_eq!(response.status().as_u16(), 422);
}
