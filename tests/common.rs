use partypass_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_contact_repo::SqliteContactRepo,
        sqlite_event_repo::SqliteEventRepo,
        sqlite_guest_repo::SqliteGuestRepo,
        sqlite_token_repo::SqliteTokenRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use tera::Tera;
use tower::ServiceExt;
use serde_json::{json, Value};

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "invitation_sms.txt",
            "Cześć {{ first_name }}! Zapraszamy na {{ event_title }}. Potwierdź: {{ rsvp_url }}",
        ).unwrap();
        let templates = Arc::new(tera);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            public_base_url: "https://partypass.test".to_string(),
        };

        let state = Arc::new(AppState {
            config,
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            token_repo: Arc::new(SqliteTokenRepo::new(pool.clone())),
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn create_event(&self, user_id: &str, title: &str) -> Value {
        let response = self.request(
            "POST",
            &format!("/api/v1/{}/events", user_id),
            Some(json!({
                "title": title,
                "date": "2026-10-17T18:00:00Z",
                "location": "Kraków",
                "max_guests": 100
            })),
        ).await;
        assert!(response.status().is_success(), "event creation failed: {}", response.status());
        parse_body(response).await
    }

    pub async fn create_contact(&self, user_id: &str, first_name: &str, last_name: &str) -> Value {
        let response = self.request(
            "POST",
            &format!("/api/v1/{}/contacts", user_id),
            Some(json!({
                "first_name": first_name,
                "last_name": last_name,
                "email": format!("{}@example.com", first_name.to_lowercase())
            })),
        ).await;
        assert!(response.status().is_success(), "contact creation failed: {}", response.status());
        parse_body(response).await
    }

    pub async fn get_event(&self, user_id: &str, event_id: &str) -> Value {
        let response = self.request("GET", &format!("/api/v1/{}/events/{}", user_id, event_id), None).await;
        assert!(response.status().is_success());
        parse_body(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
