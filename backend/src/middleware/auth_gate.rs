//! Bearer-token authentication gate applied in front of the API routes.
//!
//! Each request is classified against a public-path allow-list first; every
//! other path must carry `Authorization: Bearer <token>`. The gate then runs
//! a fixed sequence of checks (token format, signature/expiry, subject
//! extraction, live-session lookup, user resolution) and either attaches the
//! resolved [`Principal`] to the request or terminates it with the service's
//! JSON envelope. The ordering matters: each check assumes the previous ones
//! succeeded. Denied requests never reach a handler.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::error;

use crate::domain::ports::{SessionStore, TokenVerifier, UserDirectory};
use crate::domain::{Error, User};
use crate::inbound::http::response::ApiResponse;

/// Paths reachable without a token: auth endpoints, login/register views,
/// uploaded photos, and static assets.
const PUBLIC_PREFIXES: &[&str] = &["/api/auth", "/auth", "/uploads", "/css", "/js", "/images"];

fn is_public_path(path: &str) -> bool {
    path == "/error" || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// A missing header, a non-Bearer scheme, and an empty token after the
/// prefix are all treated the same way: no token.
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let raw = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_owned())
    }
}

/// The resolved, authenticated user attached to an allowed request.
///
/// Carried in request extensions and read back through [`FromRequest`], so
/// handlers receive the current user as an explicit argument instead of
/// consulting shared mutable state.
#[derive(Debug, Clone)]
pub struct Principal(User);

impl Principal {
    /// The authenticated user.
    pub fn user(&self) -> &User {
        &self.0
    }

    /// Consume the extractor and take the user.
    pub fn into_user(self) -> User {
        self.0
    }
}

impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Self>()
                .cloned()
                .ok_or_else(|| Error::unauthorized("authentication required")),
        )
    }
}

/// Middleware factory for the authentication gate.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn TokenVerifier>,
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserDirectory>,
}

impl AuthGate {
    /// Build the gate from its three capabilities.
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            verifier,
            sessions,
            users,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
            sessions: Arc::clone(&self.sessions),
            users: Arc::clone(&self.users),
        }))
    }
}

/// Service wrapper produced by [`AuthGate`].
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn TokenVerifier>,
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserDirectory>,
}

fn deny<B>(
    req: ServiceRequest,
    status: StatusCode,
    body: ApiResponse<()>,
) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::build(status).json(body);
    req.into_response(response).map_into_right_body()
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);
        let sessions = Arc::clone(&self.sessions);
        let users = Arc::clone(&self.users);

        Box::pin(async move {
            if is_public_path(req.path()) {
                return service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body);
            }

            let Some(token) = bearer_token(&req) else {
                return Ok(deny(
                    req,
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::fail("authentication token not found"),
                ));
            };

            if !verifier.validate(&token, true) {
                return Ok(deny(
                    req,
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::fail("authentication token is invalid"),
                ));
            }

            let Some(subject_id) = verifier.subject_id(&token) else {
                return Ok(deny(
                    req,
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::fail("authentication token is malformed"),
                ));
            };

            // A valid signature is not enough: logout deletes the session
            // record, killing the token immediately.
            let session = match sessions.find_active_token(subject_id, &token).await {
                Ok(session) => session,
                Err(err) => {
                    error!(error = %err, "session lookup failed");
                    return Ok(deny(
                        req,
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiResponse::error("session lookup failed"),
                    ));
                }
            };
            if session.is_none() {
                return Ok(deny(
                    req,
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::fail("authentication token has expired"),
                ));
            }

            let user = match users.find_by_id(subject_id).await {
                Ok(user) => user,
                Err(err) => {
                    error!(error = %err, "user lookup failed");
                    return Ok(deny(
                        req,
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiResponse::error("user lookup failed"),
                    ));
                }
            };
            let Some(user) = user else {
                return Ok(deny(
                    req,
                    StatusCode::NOT_FOUND,
                    ApiResponse::fail("user not found"),
                ));
            };

            req.extensions_mut().insert(Principal(user));
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::domain::ports::{
        MockSessionStore, MockTokenVerifier, MockUserDirectory, SessionStoreError,
    };
    use crate::domain::AuthToken;

    fn user(id: Uuid) -> User {
        User {
            id,
            name: "Admin".into(),
            email: "admin@example.com".into(),
        }
    }

    fn gate(
        verifier: MockTokenVerifier,
        sessions: MockSessionStore,
        users: MockUserDirectory,
    ) -> AuthGate {
        AuthGate::new(Arc::new(verifier), Arc::new(sessions), Arc::new(users))
    }

    async fn call(
        gate: AuthGate,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse<EitherBody<actix_web::body::BoxBody>> {
        let app = test::init_service(
            App::new()
                .wrap(gate)
                .route(
                    "/api/barang",
                    web::get().to(|principal: Principal| async move {
                        HttpResponse::Ok().body(principal.user().id.to_string())
                    }),
                )
                .route(
                    "/uploads/x.png",
                    web::get().to(|| async { HttpResponse::Ok().body("img") }),
                ),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    async fn assert_denied(
        gate: AuthGate,
        req: test::TestRequest,
        status: StatusCode,
        message: &str,
    ) {
        let res = call(gate, req).await;
        assert_eq!(res.status(), status);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("fail"));
        assert_eq!(body.get("message").and_then(Value::as_str), Some(message));
        assert_eq!(body.get("data"), Some(&Value::Null));
    }

    #[actix_web::test]
    async fn public_prefix_bypasses_every_check() {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_validate().never();
        let mut sessions = MockSessionStore::new();
        sessions.expect_find_active_token().never();
        let mut users = MockUserDirectory::new();
        users.expect_find_by_id().never();

        let res = call(
            gate(verifier, sessions, users),
            test::TestRequest::get().uri("/uploads/x.png"),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_header_is_denied() {
        let gate = gate(
            MockTokenVerifier::new(),
            MockSessionStore::new(),
            MockUserDirectory::new(),
        );
        assert_denied(
            gate,
            test::TestRequest::get().uri("/api/barang"),
            StatusCode::UNAUTHORIZED,
            "authentication token not found",
        )
        .await;
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_denied() {
        let gate = gate(
            MockTokenVerifier::new(),
            MockSessionStore::new(),
            MockUserDirectory::new(),
        );
        assert_denied(
            gate,
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Basic YWRtaW4=")),
            StatusCode::UNAUTHORIZED,
            "authentication token not found",
        )
        .await;
    }

    #[actix_web::test]
    async fn empty_token_after_prefix_is_denied() {
        let gate = gate(
            MockTokenVerifier::new(),
            MockSessionStore::new(),
            MockUserDirectory::new(),
        );
        assert_denied(
            gate,
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer ")),
            StatusCode::UNAUTHORIZED,
            "authentication token not found",
        )
        .await;
    }

    #[actix_web::test]
    async fn invalid_signature_is_denied() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_validate()
            .withf(|token, require| token == "bad" && *require)
            .times(1)
            .return_const(false);
        verifier.expect_subject_id().never();

        assert_denied(
            gate(verifier, MockSessionStore::new(), MockUserDirectory::new()),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer bad")),
            StatusCode::UNAUTHORIZED,
            "authentication token is invalid",
        )
        .await;
    }

    #[actix_web::test]
    async fn missing_subject_is_denied() {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_validate().times(1).return_const(true);
        verifier.expect_subject_id().times(1).return_const(None);

        assert_denied(
            gate(verifier, MockSessionStore::new(), MockUserDirectory::new()),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer odd")),
            StatusCode::UNAUTHORIZED,
            "authentication token is malformed",
        )
        .await;
    }

    #[actix_web::test]
    async fn logged_out_session_is_denied() {
        let subject = Uuid::new_v4();
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_validate().times(1).return_const(true);
        verifier
            .expect_subject_id()
            .times(1)
            .return_const(Some(subject));
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_find_active_token()
            .withf(move |user_id, token| *user_id == subject && token == "tok")
            .times(1)
            .returning(|_, _| Ok(None));
        let mut users = MockUserDirectory::new();
        users.expect_find_by_id().never();

        assert_denied(
            gate(verifier, sessions, users),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer tok")),
            StatusCode::UNAUTHORIZED,
            "authentication token has expired",
        )
        .await;
    }

    #[actix_web::test]
    async fn unknown_user_is_denied_with_404() {
        let subject = Uuid::new_v4();
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_validate().times(1).return_const(true);
        verifier
            .expect_subject_id()
            .times(1)
            .return_const(Some(subject));
        let mut sessions = MockSessionStore::new();
        sessions.expect_find_active_token().times(1).returning(
            move |user_id, token| {
                Ok(Some(AuthToken {
                    user_id,
                    token: token.to_owned(),
                    created_at: Utc::now(),
                }))
            },
        );
        let mut users = MockUserDirectory::new();
        users
            .expect_find_by_id()
            .withf(move |id| *id == subject)
            .times(1)
            .returning(|_| Ok(None));

        assert_denied(
            gate(verifier, sessions, users),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer tok")),
            StatusCode::NOT_FOUND,
            "user not found",
        )
        .await;
    }

    #[actix_web::test]
    async fn session_store_failure_maps_to_error_envelope() {
        let subject = Uuid::new_v4();
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_validate().times(1).return_const(true);
        verifier
            .expect_subject_id()
            .times(1)
            .return_const(Some(subject));
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_find_active_token()
            .times(1)
            .returning(|_, _| Err(SessionStoreError::query("connection reset")));

        let res = call(
            gate(verifier, sessions, MockUserDirectory::new()),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer tok")),
        )
        .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("error"));
    }

    #[actix_web::test]
    async fn valid_token_attaches_the_principal() {
        let subject = Uuid::new_v4();
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_validate()
            .withf(|token, require| token == "tok" && *require)
            .times(1)
            .return_const(true);
        verifier
            .expect_subject_id()
            .times(1)
            .return_const(Some(subject));
        let mut sessions = MockSessionStore::new();
        sessions.expect_find_active_token().times(1).returning(
            move |user_id, token| {
                Ok(Some(AuthToken {
                    user_id,
                    token: token.to_owned(),
                    created_at: Utc::now(),
                }))
            },
        );
        let mut users = MockUserDirectory::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |id| Ok(Some(user(id))));

        let res = call(
            gate(verifier, sessions, users),
            test::TestRequest::get()
                .uri("/api/barang")
                .insert_header((header::AUTHORIZATION, "Bearer tok")),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, subject.to_string().as_bytes());
    }
}
