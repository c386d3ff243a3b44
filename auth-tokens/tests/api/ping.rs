use crate::helpers::TestContext;
use auth_tokens::domain::MessageResponse;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn ping_returns_pong(ctx: &mut TestContext) {
    let response = ctx.test_app.ping().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<MessageResponse>()
        .await
        .expect("Could not deserialize ping body");
    assert_eq!(body.message, "pong");
}
