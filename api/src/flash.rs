use tower_sessions::Session;

use models::schemas::flash::{FlashLevel, FlashMessage};

use crate::error::ApiError;

pub const FLASH_SESSION_KEY: &str = "flash_messages_v1";

/// Queues a message for the next rendered page.
pub async fn push(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), ApiError> {
    let mut flashes = session
        .get::<Vec<FlashMessage>>(FLASH_SESSION_KEY)
        .await?
        .unwrap_or_default();
    flashes.push(FlashMessage::new(level, message));
    session.insert(FLASH_SESSION_KEY, flashes).await?;
    Ok(())
}

/// Removes and returns every queued message.
pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, ApiError> {
    Ok(session
        .remove::<Vec<FlashMessage>>(FLASH_SESSION_KEY)
        .await?
        .unwrap_or_default())
}
