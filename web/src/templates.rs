// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTML pages served by the application.
//!
//! A [`Page`] pairs a [`Template`] with the [`Context`] it is rendered from, so
//! callers and tests can inspect which template answered a request and with
//! which data before it is turned into a response.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use superlists_core::{Item, List};

/// Message shown when the submitted item text is blank.
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

/// The templates known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Entry form for starting a new list.
    Home,

    /// A single list with its items and a form to add more.
    List,
}

impl Template {
    pub const fn name(self) -> &'static str {
        match self {
            Template::Home => "home.html",
            Template::List => "list.html",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data a template is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub list: Option<List>,
    pub items: Vec<Item>,
    pub error: Option<String>,
}

/// A rendered-on-demand HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    template: Template,
    context: Context,
    status: StatusCode,
}

impl Page {
    pub fn home() -> Self {
        Self {
            template: Template::Home,
            context: Context::default(),
            status: StatusCode::OK,
        }
    }

    pub fn list(list: List, items: Vec<Item>) -> Self {
        Self {
            template: Template::List,
            context: Context {
                list: Some(list),
                items,
                error: None,
            },
            status: StatusCode::OK,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.context.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Renders the page to an HTML document.
    pub fn render(&self) -> String {
        match self.template {
            Template::Home => layout(
                "Start a new To-Do list",
                &item_form("/lists/new", self.context.error.as_deref()),
            ),
            Template::List => {
                let action = self
                    .context
                    .list
                    .as_ref()
                    .map(|list| format!("{}add_item", list.url()))
                    .unwrap_or_default();

                let mut body = item_form(&action, self.context.error.as_deref());
                body += "    <table id=\"id_list_table\">\n";
                for (i, item) in self.context.items.iter().enumerate() {
                    body += &format!(
                        "      <tr><td>{}: {}</td></tr>\n",
                        i + 1,
                        escape(item.text())
                    );
                }
                body += "    </table>\n";
                layout("Your To-Do list", &body)
            }
        }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (self.status, Html(self.render())).into_response()
    }
}

fn layout(heading: &str, body: &str) -> String {
    format!(
        "\
<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\">
    <title>To-Do lists</title>
  </head>
  <body>
    <h1>{heading}</h1>
{body}  </body>
</html>
"
    )
}

fn item_form(action: &str, error: Option<&str>) -> String {
    let mut form = format!(
        "    <form method=\"POST\" action=\"{}\">\n      \
         <input name=\"item_text\" id=\"id_new_item\" placeholder=\"Enter a to-do item\" />\n",
        escape(action)
    );
    if let Some(error) = error {
        form += &format!("      <div class=\"error\">{}</div>\n", escape(error));
    }
    form += "    </form>\n";
    form
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
