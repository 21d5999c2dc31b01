/// Greenhouse Job Board API client.
///
/// Talks to the public, unauthenticated boards endpoint:
/// `GET {base}/{board_token}/jobs?content=true`
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::boards::{FetchError, JobBoard};
use crate::models::posting::Posting;
use crate::models::source::Source;

pub const DEFAULT_API_URL: &str = "https://boards-api.greenhouse.io/v1/boards";
/// Format tag stamped on every posting from this board.
pub const BOARD_TAG: &str = "greenhouse";
pub const UNSPECIFIED_LOCATION: &str = "Not specified";

#[derive(Debug, Deserialize)]
struct JobsResponse {
    #[serde(default)]
    jobs: Option<Vec<Value>>,
}

/// One feed entry. Fields stay loosely typed so a single odd entry only loses
/// the fields it got wrong, not the whole board.
#[derive(Debug, Default, Deserialize)]
struct GreenhouseJob {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    location: Value,
    #[serde(default)]
    absolute_url: Value,
    #[serde(default)]
    content: Value,
}

impl GreenhouseJob {
    fn from_entry(entry: Value) -> Self {
        serde_json::from_value(entry).unwrap_or_default()
    }

    fn into_posting(self, company: &str) -> Posting {
        let location = self
            .location
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNSPECIFIED_LOCATION)
            .to_string();

        Posting {
            title: text_or_empty(&self.title),
            location,
            url: text_or_empty(&self.absolute_url),
            description: text_or_empty(&self.content),
            company_slug: company.to_string(),
            board: BOARD_TAG.to_string(),
        }
    }
}

fn text_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

#[derive(Clone)]
pub struct GreenhouseClient {
    client: Client,
    base_url: String,
}

impl GreenhouseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn feed_url(&self, board_token: &str) -> String {
        format!("{}/{}/jobs?content=true", self.base_url, board_token)
    }
}

#[async_trait]
impl JobBoard for GreenhouseClient {
    async fn fetch_postings(&self, source: &Source) -> Result<Vec<Posting>, FetchError> {
        let url = self.feed_url(&source.board_token);
        info!("Fetching from: {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Greenhouse returned {} for {}", status, source.name);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: JobsResponse = serde_json::from_slice(&body)?;
        let jobs = parsed.jobs.unwrap_or_default();

        info!("Found {} jobs at {}", jobs.len(), source.name);

        Ok(jobs
            .into_iter()
            .map(|entry| GreenhouseJob::from_entry(entry).into_posting(&source.name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn zipline() -> Source {
        Source::new("Zipline", "zipline")
    }

    #[test]
    fn test_feed_url_requests_full_content() {
        let client = GreenhouseClient::new("https://boards.example.com/v1/boards/");
        assert_eq!(
            client.feed_url("zipline"),
            "https://boards.example.com/v1/boards/zipline/jobs?content=true"
        );
    }

    #[test]
    fn test_missing_location_uses_sentinel() {
        let job: GreenhouseJob = serde_json::from_value(json!({
            "title": "Flight Test Engineer",
            "absolute_url": "https://example.com/1"
        }))
        .unwrap();
        let posting = job.into_posting("Zipline");
        assert_eq!(posting.location, UNSPECIFIED_LOCATION);
        assert_eq!(posting.description, "");
    }

    #[test]
    fn test_empty_location_name_uses_sentinel() {
        let job: GreenhouseJob = serde_json::from_value(json!({
            "title": "Flight Test Engineer",
            "location": {"name": ""},
            "absolute_url": "https://example.com/1",
            "content": null
        }))
        .unwrap();
        let posting = job.into_posting("Zipline");
        assert_eq!(posting.location, UNSPECIFIED_LOCATION);
        assert_eq!(posting.description, "");
    }

    #[test]
    fn test_mistyped_fields_fall_back_individually() {
        let job = GreenhouseJob::from_entry(json!({
            "title": 42,
            "location": "Remote",
            "absolute_url": "https://example.com/7",
            "content": {"html": "<p>hi</p>"}
        }));
        let posting = job.into_posting("Zipline");
        assert_eq!(posting.title, "");
        assert_eq!(posting.location, UNSPECIFIED_LOCATION);
        assert_eq!(posting.url, "https://example.com/7");
        assert_eq!(posting.description, "");
    }

    #[test]
    fn test_non_object_entry_becomes_blank_posting() {
        let posting = GreenhouseJob::from_entry(json!("not a job")).into_posting("Zipline");
        assert_eq!(posting.title, "");
        assert_eq!(posting.location, UNSPECIFIED_LOCATION);
        assert_eq!(posting.company_slug, "Zipline");
    }

    #[tokio::test]
    async fn test_odd_entry_does_not_drop_its_neighbours() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobs": [
                    {"title": "Firmware Engineer", "location": {"name": "Montreal"}},
                    {"title": "Drone Pilot", "location": "Remote"}
                ]
            })))
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let postings = client.fetch_postings(&zipline()).await.unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Firmware Engineer");
        assert_eq!(postings[0].location, "Montreal");
        assert_eq!(postings[1].title, "Drone Pilot");
        assert_eq!(postings[1].location, UNSPECIFIED_LOCATION);
    }

    #[tokio::test]
    async fn test_fetch_maps_jobs_to_postings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .and(query_param("content", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobs": [
                    {
                        "id": 1,
                        "title": "Firmware Engineer",
                        "location": {"name": "Montreal, QC"},
                        "absolute_url": "https://boards.greenhouse.io/zipline/jobs/1",
                        "content": "&lt;p&gt;Embedded work&lt;/p&gt;"
                    },
                    {
                        "id": 2,
                        "title": "Recruiter",
                        "absolute_url": "https://boards.greenhouse.io/zipline/jobs/2"
                    }
                ],
                "meta": {"total": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let postings = client.fetch_postings(&zipline()).await.unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(
            postings[0],
            Posting {
                title: "Firmware Engineer".to_string(),
                location: "Montreal, QC".to_string(),
                url: "https://boards.greenhouse.io/zipline/jobs/1".to_string(),
                description: "&lt;p&gt;Embedded work&lt;/p&gt;".to_string(),
                company_slug: "Zipline".to_string(),
                board: "greenhouse".to_string(),
            }
        );
        assert_eq!(postings[1].location, UNSPECIFIED_LOCATION);
        assert_eq!(postings[1].description, "");
    }

    #[tokio::test]
    async fn test_fetch_empty_jobs_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": []})))
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let postings = client.fetch_postings(&zipline()).await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_missing_jobs_key_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}})))
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let postings = client.fetch_postings(&zipline()).await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let err = client.fetch_postings(&zipline()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/zipline/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = GreenhouseClient::new(server.uri());
        let err = client.fetch_postings(&zipline()).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_http_error() {
        // Bind then release a port so nothing is listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = GreenhouseClient::new(format!("http://127.0.0.1:{port}"));
        let err = client.fetch_postings(&zipline()).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
