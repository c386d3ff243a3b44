use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use test_context::AsyncTestContext;
use tokio::spawn;
use uuid::Uuid;

use auth_tokens::app_state::AppState;
use auth_tokens::domain::{IssuedTokens, SignInRequest, SignUpRequest};
use auth_tokens::services::{
    Argon2Hasher, AuthService, HashmapRefreshStore, HashmapRevocationStore, HashmapUserStore,
    TokenService,
};
use auth_tokens::utils::{Clock, Config, SystemClock};
use auth_tokens::Application;

pub const PASSWORD: &str = "Ilads123!";

#[derive(Serialize)]
pub struct RefreshBody {
    pub refresh_token: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(Config::new(
            "access-secret-for-api-tests",
            "refresh-secret-for-api-tests",
        ));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let user_store = Arc::new(HashmapUserStore::new());
        let token_service = TokenService::new(
            &config,
            clock.clone(),
            Arc::new(HashmapRefreshStore::new()),
            Arc::new(HashmapRevocationStore::new(clock.clone())),
            user_store.clone(),
        );
        let auth_service = AuthService::new(
            &config,
            clock,
            user_store,
            Arc::new(Argon2Hasher),
            token_service,
        );
        let app_state = AppState::new(Arc::new(auth_service), config);

        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", &self.address, path)
    }

    pub async fn ping(&self) -> Response {
        self.http_client
            .get(&format!("{}/ping", &self.address))
            .send()
            .await
            .expect("Failed to execute ping request.")
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Response {
        let body = SignUpRequest {
            first_name: "Lads".to_owned(),
            last_name: "Tester".to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post_json("/sign-up", &body).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Response {
        let body = SignInRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post_json("/sign-in", &body).await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Response {
        let body = RefreshBody {
            refresh_token: refresh_token.to_owned(),
        };
        self.post_json("/refresh-token", &body).await
    }

    pub async fn user_profile(&self, access_token: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url("/user-profile"));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request
            .send()
            .await
            .expect("Failed to execute user profile request.")
    }

    pub async fn sign_out(&self, access_token: Option<&str>) -> Response {
        let mut request = self.http_client.post(self.url("/sign-out"));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request
            .send()
            .await
            .expect("Failed to execute sign out request.")
    }

    /// Registers a fresh user and signs them in.
    pub async fn signed_in_user(&self) -> (String, IssuedTokens) {
        let email = get_random_email();
        let response = self.sign_up(&email, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self.sign_in(&email, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200);
        let tokens = response
            .json::<IssuedTokens>()
            .await
            .expect("Could not deserialize sign-in body");
        (email, tokens)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Response {
        self.http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }

    async fn teardown(self) {}
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
