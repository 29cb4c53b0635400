//! Async glue between the page state and a [`BrandService`].
//!
//! Each function performs exactly one backend call. The page spawns them on
//! the event loop and routes the result back into the controller or editor.

use crate::controller::{ListResponse, ListTicket};
use crate::error::ServiceResult;
use crate::model::brand::{BrandId, BrandRecord};
use crate::requests::{SubmitRequest, SubmitTarget};
use crate::service::BrandService;

pub async fn fetch_page<S: BrandService>(service: &S, ticket: ListTicket) -> ListResponse {
    ListResponse {
        seq: ticket.seq,
        result: service.list(&ticket.params).await,
    }
}

/// Sends a submitted form as a create or an update.
pub async fn save<S: BrandService>(
    service: &S,
    request: SubmitRequest<S::Attachment>,
) -> ServiceResult<BrandRecord> {
    let attachment = request.attachment.as_ref();
    match request.target {
        SubmitTarget::Create => service.create(&request.fields, attachment).await,
        SubmitTarget::Update(id) => service.update(id, &request.fields, attachment).await,
    }
}

pub async fn remove<S: BrandService>(service: &S, id: BrandId) -> ServiceResult<()> {
    service.delete(id).await
}
