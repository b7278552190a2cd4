use crate::account::Account;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use url::Url;

use super::error::Error;
use super::response::{Envelope, ImagePage, ImageRecord, ListResult};
use super::source;
use super::util::{content_type, file_name};

pub const API_BASE: &'static str = "https://api.cloudflare.com/client/v4/";

fn api_path(base: &Url, account: &Account, path: &str) -> Result<Url, Error> {
    let path = format!("accounts/{}/images/{}", account.id, path);
    Ok(base.join(&path)?)
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Serialize)]
struct ListImages<'a> {
    per_page: u32,
    sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    continuation_token: Option<&'a str>,
}

pub struct Api {
    client: Client,
    base: Url,
}

impl Default for Api {
    fn default() -> Self {
        Api::new()
    }
}

impl Api {
    pub fn new() -> Self {
        Api {
            client: Client::new(),
            base: Url::parse(API_BASE).expect("API_BASE is a valid url"),
        }
    }

    /// Points the client at another API root, e.g. a proxy.
    pub fn with_base(base: &str) -> Result<Self, Error> {
        Ok(Api::with_client(Client::new(), Url::parse(base)?))
    }

    pub fn with_client(client: Client, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Api { client, base }
    }

    pub async fn upload_image_file(&self, uri: &str, account: &Account) -> Result<ImageRecord, Error> {
        let url = api_path(&self.base, account, "v1")?;
        let filename = file_name(uri).to_owned();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(&content_type(&filename))?);

        let bytes = source::load(&self.client, uri).await?;
        let length = bytes.len() as u64;
        let part = Part::stream_with_length(bytes, length)
            .file_name(filename)
            .headers(headers);
        let form = Form::new().part("file", part);

        debug!("Uploading {} to account {}", uri, account.id);
        let response = self.client
            .post(url)
            .header(AUTHORIZATION, HeaderValue::from_str(&account.bearer())?)
            .multipart(form)
            .send()
            .await?;
        let result = response
            .json::<Envelope<ImageRecord>>().await?
            .into_result()?;
        Ok(result)
    }

    pub async fn list_images(&self, per_page: u32, sort_order: SortOrder, continuation_token: Option<&str>, account: &Account) -> Result<Vec<ImageRecord>, Error> {
        let page = self.list_images_page(per_page, sort_order, continuation_token, account)
            .await?;
        Ok(page.images)
    }

    pub async fn list_images_page(&self, per_page: u32, sort_order: SortOrder, continuation_token: Option<&str>, account: &Account) -> Result<ImagePage, Error> {
        let url = api_path(&self.base, account, "v2")?;
        let params = ListImages {
            per_page,
            sort_order,
            continuation_token: continuation_token.filter(|token| !token.is_empty()),
        };
        debug!("Listing images of account {}", account.id);
        let response = self.client
            .get(url)
            .header(AUTHORIZATION, HeaderValue::from_str(&account.bearer())?)
            .query(&params)
            .send()
            .await?;
        let result = response
            .json::<Envelope<ListResult>>().await?
            .into_result()?;
        trace!("Received {} images", result.images.len());
        Ok(result.into_page())
    }
}
