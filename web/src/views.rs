// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use superlists_core::{Error, ListId, Superlists};

use crate::error::WebError;
use crate::templates::{EMPTY_ITEM_ERROR, Page};

/// Body of the forms that submit a to-do item.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ItemForm {
    /// A missing field is treated like an empty one.
    #[serde(default)]
    pub item_text: String,
}

/// `GET /` and `POST /`: the entry form for a new list.
///
/// Submissions are not processed here, the form itself posts to `/lists/new`.
#[tracing::instrument]
pub async fn home_page() -> Page {
    Page::home()
}

/// `GET /lists/{id}/`: a list with all its items.
#[tracing::instrument(skip(app))]
pub async fn view_list(
    State(app): State<Superlists>,
    Path(id): Path<String>,
) -> Result<Page, WebError> {
    let id = parse_list_id(&id)?;
    let list = app.get_list(id).await?;
    let items = app.items_of(id).await?;
    Ok(Page::list(list, items))
}

/// `POST /lists/new`: starts a list from the submitted item.
#[tracing::instrument(skip(app))]
pub async fn new_list(
    State(app): State<Superlists>,
    Form(form): Form<ItemForm>,
) -> Result<Response, WebError> {
    match app.new_list(&form.item_text).await {
        Ok((list, _)) => Ok(redirect(&list.url())),
        Err(Error::EmptyItemText) => Ok(Page::home()
            .with_error(EMPTY_ITEM_ERROR)
            .with_status(StatusCode::BAD_REQUEST)
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// `POST /lists/{id}/add_item`: appends the submitted item to an existing list.
#[tracing::instrument(skip(app))]
pub async fn add_item(
    State(app): State<Superlists>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Response, WebError> {
    let id = parse_list_id(&id)?;
    match app.add_item(id, &form.item_text).await {
        Ok(item) => Ok(redirect(&item.list_id().url())),
        Err(Error::EmptyItemText) => {
            let list = app.get_list(id).await?;
            let items = app.items_of(id).await?;
            Ok(Page::list(list, items)
                .with_error(EMPTY_ITEM_ERROR)
                .with_status(StatusCode::BAD_REQUEST)
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Fallback for paths no route matches.
pub async fn not_found() -> WebError {
    WebError::NotFound
}

/// Path segments that are not list ids name no page at all.
fn parse_list_id(raw: &str) -> Result<ListId, WebError> {
    raw.parse().map_err(|_| WebError::NotFound)
}

/// `302 Found` to `location`.
fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
