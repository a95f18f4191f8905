use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use ironlog_auth::{IdentityStore, PgAuthStore, create_access_token};
use ironlog_config::JwtConfig;
use ironlog_core::{AppError, hash_password, verify_password};
use ironlog_models::UserId;

use crate::metrics::{track_user_created, track_user_login_failure, track_user_login_success};
use crate::modules::auth::model::{LoginRequest, LoginResponse, SignupRequest};
use crate::modules::users::service::UserService;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Creates a `user` account. The email is stored trimmed and lowercased.
    #[instrument(skip(db, dto))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<UserId, AppError> {
        let email = dto.email.trim().to_lowercase();
        let hashed_password = hash_password(&dto.password)?;

        let user_id = sqlx::query_scalar::<_, UserId>(
            "INSERT INTO users (email, password)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING
             RETURNING id",
        )
        .bind(&email)
        .bind(&hashed_password)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow!("User already exists")))?;

        track_user_created();
        tracing::info!(%user_id, "User signed up");

        Ok(user_id)
    }

    /// Checks the credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords get the same 401.
    #[instrument(skip(db, store, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        store: &PgAuthStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(identity) = store.find_by_email(dto.email.trim()).await? else {
            track_user_login_failure("unknown_email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &identity.password_hash)? {
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = create_access_token(identity.id, &identity.email, identity.role, jwt_config)?;
        let user = UserService::get_user(db, UserId::from(identity.id)).await?;

        track_user_login_success(identity.role.as_str());
        tracing::info!(user_id = %identity.id, "User logged in");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            expires_in: jwt_config.access_token_expiry,
            user,
        })
    }
}
