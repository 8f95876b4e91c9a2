use crate::core::providers::sanitize_api_error;
use crate::error::EnhanceError;
use futures_util::StreamExt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::enhancer::Enhancer;
use super::field::EnhanceableField;

fn lock_field(field: &Mutex<EnhanceableField>) -> MutexGuard<'_, EnhanceableField> {
    field.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run one enhancement round trip for `field`.
///
/// The field is locked only to start and to settle the request; the stream
/// is consumed without holding the lock. `on_chunk` observes each chunk as it
/// arrives, but the field only changes once the stream has ended cleanly.
/// Returns the committed text.
pub async fn run_enhancement<F>(
    field: &Mutex<EnhanceableField>,
    enhancer: &dyn Enhancer,
    mut on_chunk: F,
) -> Result<String, EnhanceError>
where
    F: FnMut(&str) + Send,
{
    let ticket = lock_field(field).begin_enhance()?;
    tracing::debug!(ticket = ticket.id(), "enhancement started");

    let mut stream = match enhancer.enhance(ticket.text(), ticket.context()).await {
        Ok(stream) => stream,
        Err(error) => {
            let _ = lock_field(field).fail(&ticket);
            tracing::warn!(ticket = ticket.id(), %error, "enhancement request failed");
            return Err(EnhanceError::Upstream(sanitize_api_error(&error.to_string())));
        }
    };

    let mut assembled = String::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(text) => {
                on_chunk(&text);
                assembled.push_str(&text);
            }
            Err(error) => {
                let _ = lock_field(field).fail(&ticket);
                tracing::warn!(ticket = ticket.id(), %error, "enhancement stream failed");
                return Err(EnhanceError::Upstream(sanitize_api_error(&error.to_string())));
            }
        }
    }

    lock_field(field).complete(&ticket, assembled.clone())?;
    tracing::debug!(ticket = ticket.id(), chars = assembled.chars().count(), "enhancement committed");
    Ok(assembled)
}
