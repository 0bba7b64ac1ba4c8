use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use classdesk::config::jwt::JwtConfig;
use classdesk::middleware::role::UserRole;
use classdesk::modules;
use classdesk::modules::users::model::User;
use classdesk::modules::users::service::UserService;
use classdesk::router::init_router;
use classdesk::state::AppState;
use classdesk::utils::jwt::create_access_token;
use classdesk::utils::password::hash_password;
use http_body_util::BodyExt;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        issuer: "classdesk-tests".to_string(),
        audience: "classdesk-clients".to_string(),
        expiry_minutes: 60,
    }
}

/// Bootstrap the schema and build a router around the test pool.
pub async fn setup_test_app(pool: PgPool) -> Router {
    modules::ensure_schema(&pool).await.unwrap();

    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
    };
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Seed a user with the given role and return it with a valid bearer token.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, role: UserRole) -> (User, String) {
    let email = generate_unique_email();
    let hashed = hash_password("testpass123").unwrap();

    let user = UserService::create(pool, "Test User", &email, &hashed, role)
        .await
        .unwrap();

    let (token, _) = create_access_token(&user, &test_jwt_config()).unwrap();

    (user, token)
}

#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
