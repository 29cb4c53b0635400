//! Contract of the brand backend.
//!
//! The page only talks to the backend through [`BrandService`], so the same
//! controller and editor logic runs against `gloo-net` in the browser and
//! against an in-memory double in tests.

use crate::error::ServiceResult;
use crate::model::brand::{BrandFields, BrandId, BrandRecord};
use crate::model::page::BrandPage;
use crate::model::query::QueryParams;

/// Four pass-through calls on the `brand` resource. No retries, no timeouts
/// beyond what the transport does by itself.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single event loop.
#[allow(async_fn_in_trait)]
pub trait BrandService {
    /// File handle carried by create and update.
    type Attachment;

    async fn list(&self, query: &QueryParams) -> ServiceResult<BrandPage>;

    async fn create(
        &self,
        fields: &BrandFields,
        attachment: Option<&Self::Attachment>,
    ) -> ServiceResult<BrandRecord>;

    async fn update(
        &self,
        id: BrandId,
        fields: &BrandFields,
        attachment: Option<&Self::Attachment>,
    ) -> ServiceResult<BrandRecord>;

    async fn delete(&self, id: BrandId) -> ServiceResult<()>;
}

/// Source of the bearer token attached to backend calls.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;

    /// Value of the `Authorization` header, if a token is available.
    fn authorization(&self) -> Option<String> {
        self.bearer_token()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }
}

/// Provider for tests and for backends that need no credentials.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(pub Option<String>);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
