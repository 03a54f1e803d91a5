use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use shared::constants::{API_ADD_NOTE, API_CREATE_ACCOUNT, API_DELETE_NOTE, API_GET_NOTES, API_WHO_AM_I, HEADER_PASSKEY, STATUS_OK};
use shared::types::{AddNoteRequest, CreateAccountRequest, CreateAccountResponse, DeleteNoteRequest, Note, NoteId, WhoAmIResponse};
use shared::utils::api_url;

use crate::api::NotesApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

const METHOD_GET: &str = "GET";
const METHOD_POST: &str = "POST";

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

fn decode(err: JsValue) -> ApiError {
    ApiError::Decode(format!("{:?}", err))
}

/// `NotesApi` over the browser `fetch`.
pub struct FetchApi {
    api_root: String,
}

impl FetchApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_root: config.api_root.clone(),
        }
    }

    async fn send(&self, method: &str, url: &str, passkey: Option<&str>, body: Option<String>) -> Result<Response, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::SameOrigin);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&api_url(&self.api_root, url), &opts).map_err(transport)?;
        request.headers().set("Content-Type", "application/json").map_err(transport)?;
        if let Some(passkey) = passkey {
            request.headers().set(HEADER_PASSKEY, passkey).map_err(transport)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(transport)?;
        let resp: Response = resp_value.dyn_into().map_err(transport)?;

        if resp.status() != STATUS_OK {
            log::warn!("{method} {url}: status {}", resp.status());
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    async fn send_json<T: Serialize>(&self, url: &str, passkey: Option<&str>, data: &T) -> Result<Response, ApiError> {
        let body = serde_json::to_string(data).map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(METHOD_POST, url, passkey, Some(body)).await
    }

    async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
        let json = JsFuture::from(resp.json().map_err(decode)?).await.map_err(decode)?;
        serde_wasm_bindgen::from_value::<R>(json).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl NotesApi for FetchApi {
    async fn create_account(&self, name: &str) -> Result<CreateAccountResponse, ApiError> {
        let data = CreateAccountRequest { name: name.to_string() };
        let resp = self.send_json(API_CREATE_ACCOUNT, None, &data).await?;
        Self::read_json(resp).await
    }

    async fn who_am_i(&self, passkey: &str) -> Result<WhoAmIResponse, ApiError> {
        let resp = self.send(METHOD_GET, API_WHO_AM_I, Some(passkey), None).await?;
        Self::read_json(resp).await
    }

    async fn list_notes(&self, passkey: &str) -> Result<Vec<Note>, ApiError> {
        let resp = self.send(METHOD_GET, API_GET_NOTES, Some(passkey), None).await?;
        Self::read_json(resp).await
    }

    async fn add_note(&self, passkey: &str, text: &str) -> Result<Note, ApiError> {
        let data = AddNoteRequest { note: text.to_string() };
        let resp = self.send_json(API_ADD_NOTE, Some(passkey), &data).await?;
        Self::read_json(resp).await
    }

    async fn delete_note(&self, passkey: &str, id: NoteId) -> Result<(), ApiError> {
        self.send_json(API_DELETE_NOTE, Some(passkey), &DeleteNoteRequest { id }).await?;
        Ok(())
    }
}
