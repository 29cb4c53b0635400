//! Add/edit modal of the brand page.
//!
//! `RecordEditor` is generic over the attachment type so the browser can hold
//! a `web_sys::File` while tests use plain strings.

use log::{debug, warn};
use thiserror::Error;

use crate::error::ServiceResult;
use crate::model::brand::{BrandFields, BrandId, BrandRecord};
use crate::requests::{SubmitRequest, SubmitTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Create,
    Edit { id: BrandId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    CategoryId,
}

/// Raw text of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandForm {
    pub name: String,
    pub description: String,
    pub category_id: String,
}

impl BrandForm {
    fn from_record(record: &BrandRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            category_id: record.category_id.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::CategoryId => &self.category_id,
        }
    }

    /// Checks the required fields and parses the category reference.
    pub fn validate(&self) -> Result<BrandFields, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Please input the brand name!");
        }
        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some("Please input the description!");
        }
        let category_id = self.category_id.trim();
        let parsed = if category_id.is_empty() {
            errors.category_id = Some("Please input the category ID!");
            None
        } else {
            match category_id.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.category_id = Some("Category ID must be a number!");
                    None
                }
            }
        };

        match parsed {
            Some(category_id) if errors.is_empty() => Ok(BrandFields {
                name: name.to_string(),
                description: description.to_string(),
                category_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("the brand form has invalid fields")]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub category_id: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.category_id.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::CategoryId => self.category_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the editor is closed")]
    Closed,
    #[error("a save is already in progress")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FormErrors),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The modal closed; the list must be refetched.
    Saved { created: bool },
    /// The modal stays open with the form untouched.
    Failed(String),
}

pub struct RecordEditor<A> {
    mode: EditorMode,
    form: BrandForm,
    errors: FormErrors,
    attachment: Option<A>,
    busy: bool,
}

impl<A> RecordEditor<A> {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Closed,
            form: BrandForm::default(),
            errors: FormErrors::default(),
            attachment: None,
            busy: false,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn form(&self) -> &BrandForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn attachment(&self) -> Option<&A> {
        self.attachment.as_ref()
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Edit { .. } => "Edit Brand",
            _ => "Add Brand",
        }
    }

    /// Ignored while a save is in flight: the pending result belongs to the
    /// form that is still open.
    pub fn open_create(&mut self) {
        if self.busy {
            return;
        }
        self.reset();
        self.mode = EditorMode::Create;
    }

    /// Opens the modal on an existing row; the form mirrors the record.
    pub fn open_edit(&mut self, record: &BrandRecord) {
        if self.busy {
            return;
        }
        self.reset();
        self.form = BrandForm::from_record(record);
        self.mode = EditorMode::Edit { id: record.id };
    }

    /// Closes without contacting the backend. A no-op while a save is in
    /// flight; the modal closes when that save succeeds.
    pub fn cancel(&mut self) {
        if self.busy {
            debug!("keeping the brand form open until the save returns");
            return;
        }
        self.reset();
    }

    /// Ignored while a save is in flight.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.busy {
            return;
        }
        match field {
            Field::Name => self.form.name = value,
            Field::Description => self.form.description = value,
            Field::CategoryId => self.form.category_id = value,
        }
        match field {
            Field::Name => self.errors.name = None,
            Field::Description => self.errors.description = None,
            Field::CategoryId => self.errors.category_id = None,
        }
    }

    /// Holds a file until the next submit. Replaces any earlier selection.
    pub fn attach(&mut self, file: A) {
        self.attachment = Some(file);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    /// Validates the form and builds the call to make. The pending attachment
    /// moves into the request, so it is gone whatever the call returns.
    pub fn submit(&mut self) -> Result<SubmitRequest<A>, SubmitError> {
        let target = match self.mode {
            EditorMode::Closed => return Err(SubmitError::Closed),
            EditorMode::Create => SubmitTarget::Create,
            EditorMode::Edit { id } => SubmitTarget::Update(id),
        };
        if self.busy {
            return Err(SubmitError::InFlight);
        }

        let fields = match self.form.validate() {
            Ok(fields) => fields,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };
        self.errors = FormErrors::default();
        self.busy = true;
        debug!("submitting brand form as {:?}", target);

        Ok(SubmitRequest {
            target,
            fields,
            attachment: self.attachment.take(),
        })
    }

    pub fn on_submitted(&mut self, result: ServiceResult<BrandRecord>) -> SubmitOutcome {
        self.busy = false;
        match result {
            Ok(_) => {
                let created = self.mode == EditorMode::Create;
                self.reset();
                SubmitOutcome::Saved { created }
            }
            Err(err) => {
                warn!("Error while adding/updating brand: {}", err);
                SubmitOutcome::Failed("Failed to save brand. Try again.".to_string())
            }
        }
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Closed;
        self.form = BrandForm::default();
        self.errors = FormErrors::default();
        self.attachment = None;
        self.busy = false;
    }
}

impl<A> Default for RecordEditor<A> {
    fn default() -> Self {
        Self::new()
    }
}
