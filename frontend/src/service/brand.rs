//! `gloo-net` implementation of the brand backend contract.
//!
//! Every call attaches the `Authorization` header when the credential
//! provider has a token. Create and update are sent as `multipart/form-data`;
//! the browser fills in the boundary, so no `Content-Type` is set by hand.

use common::endpoints::{create_url, delete_url, search_url, update_url};
use common::error::{ServiceError, ServiceResult};
use common::model::brand::{BrandFields, BrandId, BrandRecord, FILE_PART};
use common::model::page::{BrandPage, ListEnvelope, RecordEnvelope};
use common::model::query::QueryParams;
use common::service::{BrandService, CredentialProvider};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::from_str;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

pub struct HttpBrandService<C> {
    base_url: String,
    credentials: C,
}

impl<C: CredentialProvider> HttpBrandService<C> {
    pub fn new(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credentials.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send_form(
        &self,
        builder: RequestBuilder,
        fields: &BrandFields,
        attachment: Option<&File>,
    ) -> ServiceResult<BrandRecord> {
        let form = multipart(fields, attachment)?;
        let request = self.authorized(builder).body(form).map_err(network)?;
        let response = request.send().await.map_err(network)?;
        let envelope: RecordEnvelope = read_json(response).await?;
        Ok(envelope.into())
    }
}

impl<C: CredentialProvider> BrandService for HttpBrandService<C> {
    type Attachment = File;

    async fn list(&self, query: &QueryParams) -> ServiceResult<BrandPage> {
        let url = search_url(&self.base_url, query);
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        let envelope: ListEnvelope = read_json(response).await?;
        Ok(envelope.into())
    }

    async fn create(
        &self,
        fields: &BrandFields,
        attachment: Option<&File>,
    ) -> ServiceResult<BrandRecord> {
        let url = create_url(&self.base_url);
        self.send_form(Request::post(&url), fields, attachment).await
    }

    async fn update(
        &self,
        id: BrandId,
        fields: &BrandFields,
        attachment: Option<&File>,
    ) -> ServiceResult<BrandRecord> {
        let url = update_url(&self.base_url, id);
        self.send_form(Request::patch(&url), fields, attachment).await
    }

    async fn delete(&self, id: BrandId) -> ServiceResult<()> {
        let url = delete_url(&self.base_url, id);
        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        check_status(response).await.map(|_| ())
    }
}

fn multipart(fields: &BrandFields, attachment: Option<&File>) -> ServiceResult<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in fields.form_parts() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    if let Some(file) = attachment {
        form.append_with_blob_and_filename(FILE_PART, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

/// Turns any non-2xx answer into the matching [`ServiceError`].
async fn check_status(response: Response) -> ServiceResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::from_status(status, body))
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> ServiceResult<T> {
    let response = check_status(response).await?;
    let text = response.text().await.map_err(network)?;
    from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
}

fn network(err: gloo_net::Error) -> ServiceError {
    ServiceError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ServiceError {
    ServiceError::Network(format!("{:?}", err))
}
