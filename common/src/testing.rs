//! In-memory backend used by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{ServiceError, ServiceResult};
use crate::model::brand::{BrandFields, BrandId, BrandRecord};
use crate::model::page::BrandPage;
use crate::model::query::QueryParams;
use crate::service::BrandService;

pub fn brand(id: BrandId, name: &str) -> BrandRecord {
    BrandRecord {
        id,
        name: name.to_string(),
        description: format!("{} products", name),
        category_id: 1,
        attachment: None,
    }
}

pub fn page(records: Vec<BrandRecord>, total: u64) -> BrandPage {
    BrandPage { records, total }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List(QueryParams),
    Create(BrandFields, Option<String>),
    Update(BrandId, BrandFields, Option<String>),
    Delete(BrandId),
}

/// Records every call and answers from scripted queues. An empty queue
/// answers with a generic success.
#[derive(Default)]
pub struct RecordingService {
    pub calls: RefCell<Vec<Call>>,
    pub list_results: RefCell<VecDeque<ServiceResult<BrandPage>>>,
    pub save_results: RefCell<VecDeque<ServiceResult<BrandRecord>>>,
    pub delete_results: RefCell<VecDeque<ServiceResult<()>>>,
}

impl RecordingService {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::List(_)))
            .count()
    }

    pub fn fail_next_save(&self, err: ServiceError) {
        self.save_results.borrow_mut().push_back(Err(err));
    }

    pub fn fail_next_delete(&self, err: ServiceError) {
        self.delete_results.borrow_mut().push_back(Err(err));
    }

    fn saved(&self, id: BrandId, fields: &BrandFields) -> ServiceResult<BrandRecord> {
        self.save_results.borrow_mut().pop_front().unwrap_or_else(|| {
            Ok(BrandRecord {
                id,
                name: fields.name.clone(),
                description: fields.description.clone(),
                category_id: fields.category_id,
                attachment: None,
            })
        })
    }
}

impl BrandService for RecordingService {
    type Attachment = String;

    async fn list(&self, query: &QueryParams) -> ServiceResult<BrandPage> {
        self.calls.borrow_mut().push(Call::List(query.clone()));
        self.list_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(BrandPage::default()))
    }

    async fn create(
        &self,
        fields: &BrandFields,
        attachment: Option<&String>,
    ) -> ServiceResult<BrandRecord> {
        self.calls
            .borrow_mut()
            .push(Call::Create(fields.clone(), attachment.cloned()));
        self.saved(100, fields)
    }

    async fn update(
        &self,
        id: BrandId,
        fields: &BrandFields,
        attachment: Option<&String>,
    ) -> ServiceResult<BrandRecord> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id, fields.clone(), attachment.cloned()));
        self.saved(id, fields)
    }

    async fn delete(&self, id: BrandId) -> ServiceResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.delete_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}
