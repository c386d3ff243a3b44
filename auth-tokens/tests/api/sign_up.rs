use crate::helpers::{get_random_email, TestContext, PASSWORD};
use auth_tokens::domain::UserProfile;
use auth_tokens::errors::ErrorResponse;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_malformed_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.sign_up("", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 422, "Invalid email");

    let response = app.sign_up("not-an-email", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 422, "Invalid email");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_password_too_short(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.sign_up(&get_random_email(), "short").await;
    assert_eq!(response.status().as_u16(), 422, "Password is too short");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_201_with_profile(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app.sign_up(&email, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 201);

    let profile = response
        .json::<UserProfile>()
        .await
        .expect("Could not deserialize response body to UserProfile");
    assert_eq!(profile.email, email);
    assert_eq!(profile.first_name, "Lads");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_409_if_email_already_exists(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app.sign_up(&email, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.sign_up(&email, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 409);

    let body = response
        .json::<ErrorResponse>()
        .await
        .expect("Could not deserialize error body");
    assert_eq!(body.message, "email address is already in use");
}
