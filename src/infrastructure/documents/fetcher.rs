//! HTTP document fetcher against a plain-text export endpoint

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::domain::DomainError;
use crate::domain::document::DocumentFetcher;
use crate::infrastructure::http_client::HttpClientTrait;

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector"));

/// Fetches document text from a Google-Docs-style export endpoint
///
/// The store is expected to serve plain text at
/// `{base_url}/{id}/export?format=txt`; when it answers with an HTML
/// page instead (interstitials, permission pages that still return
/// 200), the markup is stripped and the visible text kept.
#[derive(Debug)]
pub struct HttpDocumentFetcher<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> HttpDocumentFetcher<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn export_url(&self, document_id: &str) -> String {
        format!("{}/{}/export?format=txt", self.base_url, document_id)
    }
}

#[async_trait]
impl<C: HttpClientTrait> DocumentFetcher for HttpDocumentFetcher<C> {
    async fn fetch(&self, document_id: &str) -> Result<String, DomainError> {
        let url = self.export_url(document_id);

        let body = self
            .client
            .get_text(&url)
            .await
            .map_err(|e| DomainError::fetch(document_id, e.to_string()))?;

        if looks_like_html(&body) {
            Ok(html_to_text(&body))
        } else {
            Ok(body)
        }
    }
}

fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start().to_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let texts: Vec<&str> = match document.select(&BODY_SELECTOR).next() {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    };

    texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::infrastructure::http_client::HttpClient;

    #[tokio::test]
    async fn test_fetches_plain_text_export() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc-1/export"))
            .and(query_param("format", "txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1. Find a niche\n"))
            .mount(&server)
            .await;

        let fetcher = HttpDocumentFetcher::new(HttpClient::new(), server.uri());
        let text = fetcher.fetch("doc-1").await.unwrap();

        assert_eq!(text, "1. Find a niche\n");
    }

    #[tokio::test]
    async fn test_strips_html_when_store_answers_with_markup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc-2/export"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<!DOCTYPE html><html><body><h1>Budgeting</h1><p>Track every expense.</p></body></html>",
            ))
            .mount(&server)
            .await;

        let fetcher = HttpDocumentFetcher::new(HttpClient::new(), server.uri());
        let text = fetcher.fetch("doc-2").await.unwrap();

        assert!(text.contains("Budgeting"));
        assert!(text.contains("Track every expense."));
        assert!(!text.contains("<p>"));
    }

    #[tokio::test]
    async fn test_http_error_is_a_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc-3/export"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let fetcher = HttpDocumentFetcher::new(HttpClient::new(), server.uri());
        let err = fetcher.fetch("doc-3").await.unwrap_err();

        assert!(matches!(err, DomainError::Fetch { .. }));
        assert!(err.to_string().contains("doc-3"));
    }

    #[test]
    fn test_export_url_construction() {
        let fetcher = HttpDocumentFetcher::new(
            HttpClient::new(),
            "https://docs.example.com/document/d/",
        );

        assert_eq!(
            fetcher.export_url("abc123"),
            "https://docs.example.com/document/d/abc123/export?format=txt"
        );
    }
}
