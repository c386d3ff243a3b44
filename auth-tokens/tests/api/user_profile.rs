use crate::helpers::TestContext;
use auth_tokens::domain::UserProfile;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_profile_for_signed_in_user(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (email, tokens) = app.signed_in_user().await;

    let response = app.user_profile(Some(&tokens.access_token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let profile = response
        .json::<UserProfile>()
        .await
        .expect("Could not deserialize profile body");
    assert_eq!(profile.email, email);
    assert_eq!(profile.last_name, "Tester");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_garbage_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.user_profile(Some("abc.def.ghi")).await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.user_profile(None).await;
    assert_eq!(response.status().as_u16(), 401);
}
