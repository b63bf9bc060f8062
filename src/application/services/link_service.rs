//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, StoreError};
use crate::utils::code_generator::ShortCodeGenerator;
use crate::utils::url_validator::validate_url;

/// Number of insert attempts before a shorten request gives up.
pub const MAX_INSERT_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// Validation happens before any code is drawn, so a rejected URL never
/// reaches the store.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    generator: Arc<ShortCodeGenerator>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, generator: Arc<ShortCodeGenerator>) -> Self {
        Self {
            link_repository,
            generator,
        }
    }

    /// Validates `long_url` and stores it under a fresh short code.
    ///
    /// Submitting the same URL twice creates two records with distinct codes.
    ///
    /// # Code Generation
    ///
    /// Each attempt draws a new code and inserts it. A unique-constraint
    /// collision triggers another attempt, up to [`MAX_INSERT_ATTEMPTS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL fails validation.
    /// Returns [`AppError::Storage`] on database errors other than collisions.
    /// Returns [`AppError::Internal`] when every attempt collided.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        validate_url(&long_url)?;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let new_link = NewLink::now(self.generator.generate(), long_url.clone());
            let short_code = new_link.short_code.clone();

            match self.link_repository.insert(new_link).await {
                Ok(link) => {
                    tracing::debug!(short_code = %link.short_code, attempt, "Link created");
                    return Ok(link);
                }
                Err(StoreError::UniqueViolation) => {
                    tracing::warn!(%short_code, attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(format!(
            "no free short code after {MAX_INSERT_ATTEMPTS} attempts"
        )))
    }

    /// Retrieves the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_link_by_code(&self, short_code: &str) -> Result<Link, AppError> {
        Ok(self.link_repository.find_by_code(short_code).await?)
    }

    /// Constructs the displayable short URL from an origin and a code.
    pub fn get_short_url(&self, origin: &str, short_code: &str) -> String {
        format!("{}/r/{}", origin.trim_end_matches('/'), short_code)
    }

    /// Releases the underlying store.
    pub async fn shutdown(&self) {
        self.link_repository.close().await;
    }
}
