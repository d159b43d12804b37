use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, Set};

use models::domains::users;
use models::params::user::{CreateUserParams, LoginUserParams};

use crate::config::Config;
use crate::error::UserError;

/// Registers a new account. `params` must already be validated.
pub async fn create_user(
    db: &DbConn,
    config: &Config,
    params: CreateUserParams,
) -> Result<users::Model, UserError> {
    if config.require_email && params.email.is_none() {
        return Err(UserError::Validation("Email is required.".to_string()));
    }

    let existing_username = users::Entity::find()
        .filter(users::Column::Username.eq(params.username.as_str()))
        .one(db)
        .await?;
    if existing_username.is_some() {
        return Err(UserError::UsernameTaken);
    }

    if let Some(email) = params.email.as_deref() {
        let existing_email = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await?;
        if existing_email.is_some() {
            return Err(UserError::EmailTaken);
        }
    }

    let pass_hash = bcrypt::hash(params.password, config.bcrypt_cost)?;

    let user = users::ActiveModel {
        username: Set(params.username),
        email: Set(params.email),
        passhash: Set(pass_hash),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "registered new user");
    Ok(user)
}

pub async fn get_user(db: &DbConn, id: i32) -> Result<Option<users::Model>, UserError> {
    Ok(users::Entity::find_by_id(id).one(db).await?)
}

/// Checks a username/password pair.
///
/// Unknown usernames and wrong passwords both yield
/// [`UserError::InvalidCredentials`]. The username is trimmed like it is at
/// registration.
pub async fn login_user(
    db: &DbConn,
    LoginUserParams {
        username, password, ..
    }: &LoginUserParams,
) -> Result<users::Model, UserError> {
    let username = username.trim();
    let user = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?;

    let Some(user) = user else {
        tracing::info!(%username, "login attempt for unknown user");
        return Err(UserError::InvalidCredentials);
    };

    match bcrypt::verify(password, &user.passhash) {
        Ok(true) => Ok(user),
        Ok(false) => {
            tracing::info!(user_id = user.id, "login attempt with wrong password");
            Err(UserError::InvalidCredentials)
        }
        Err(e) => {
            tracing::warn!(user_id = user.id, "stored password hash is unreadable: {}", e);
            Err(UserError::InvalidCredentials)
        }
    }
}
