use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

impl Claims {
    fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

fn deny(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .ok_or("missing_authorization")?;
    let value = raw.to_str().map_err(|_| "bad_authorization")?;
    value.strip_prefix("Bearer ").ok_or("unsupported_scheme")
}

/// Gate for the authoring surface. Everything else on the portal is public,
/// so "admin" is the only role this service knows about.
pub async fn require_admin(mut req: Request, next: Next) -> Response {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token,
        Err(code) => return deny(StatusCode::UNAUTHORIZED, code),
    };

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let Ok(data) = decode::<Claims>(token, &key, &validation) else {
        return deny(StatusCode::UNAUTHORIZED, "invalid_token");
    };

    if !data.claims.is_admin() {
        return deny(StatusCode::FORBIDDEN, "forbidden");
    }
    req.extensions_mut().insert(data.claims);
    next.run(req).await
}
