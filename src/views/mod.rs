use axum::response::Html;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};

/// A page to render: template name, page title and the data handed to it.
#[derive(Debug, Clone)]
pub struct View {
    pub template: &'static str,
    pub title: String,
    pub context: Value,
}

impl View {
    pub fn new(template: &'static str, title: impl Into<String>) -> Self {
        Self {
            template,
            title: title.into(),
            context: Value::Object(Default::default()),
        }
    }

    pub fn with<T: Serialize>(mut self, key: &str, value: T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| {
            tracing::error!("Failed to serialize view context {}: {:?}", key, e);
            AppError::InternalError
        })?;

        if let Value::Object(ref mut map) = self.context {
            map.insert(key.to_string(), value);
        }
        Ok(self)
    }
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, view: &View) -> Result<Html<String>>;
}

/// Renders a bare HTML document that carries the view context as JSON for the
/// client-side app, which owns the actual markup and the chat socket.
#[derive(Debug, Default, Clone)]
pub struct ShellRenderer;

impl TemplateRenderer for ShellRenderer {
    fn render(&self, view: &View) -> Result<Html<String>> {
        let context = serde_json::to_string(&view.context).map_err(|_| AppError::InternalError)?;

        Ok(Html(format!(
            "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body data-template=\"{template}\">\n<script type=\"application/json\" id=\"view-context\">{context}</script>\n</body>\n</html>\n",
            title = escape_text(&view.title),
            template = view.template,
            context = escape_script_json(&context),
        )))
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// `<` inside a script element could close it early.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_title_and_context() {
        let view = View::new("chat.html", "Chat General")
            .with("current_username", "Ana")
            .unwrap();
        let Html(page) = ShellRenderer.render(&view).unwrap();

        assert!(page.contains("<title>Chat General</title>"));
        assert!(page.contains("data-template=\"chat.html\""));
        assert!(page.contains(r#"{"current_username":"Ana"}"#));
    }

    #[test]
    fn test_context_cannot_close_script() {
        let view = View::new("chat.html", "<b>x</b>")
            .with("current_username", "</script><script>alert(1)")
            .unwrap();
        let Html(page) = ShellRenderer.render(&view).unwrap();

        assert!(page.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert_eq!(page.matches("</script>").count(), 1);
    }
}
