use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracker::ItemState;
use yare::parameterized;

fn client(api_url: &str) -> GithubClient {
    GithubClient::new(GithubClientConfig {
        api_url: api_url.to_string(),
        token: Some("secret-token".to_string()),
    })
    .unwrap()
}

/// Serves exactly one canned HTTP response and hands back the raw request head.
async fn serve_once(
    status_line: &'static str,
    extra_headers: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n{extra_headers}Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (base, handle)
}

#[test]
fn endpoint_appends_segments_to_api_root() {
    let url = client("https://api.github.com")
        .endpoint(&["repos", "acme", "widgets", "issues"])
        .unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/repos/acme/widgets/issues");
}

#[test]
fn endpoint_keeps_enterprise_path_prefix() {
    let url = client("https://ghe.example.com/api/v3/")
        .endpoint(&["search", "issues"])
        .unwrap();
    assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/search/issues");
}

#[test]
fn endpoint_encodes_segments() {
    let url = client("https://api.github.com")
        .endpoint(&["orgs", "we ird", "repos"])
        .unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/orgs/we%20ird/repos");
}

#[test]
fn invalid_api_url_is_rejected() {
    let result = GithubClient::new(GithubClientConfig {
        api_url: "not a url".to_string(),
        token: None,
    });
    assert!(matches!(result, Err(IssueTrackerError::InvalidRequest { .. })));
}

#[parameterized(
    next_and_last = {
        r#"<https://api.github.com/repositories/1/issues?labels=x&page=2>; rel="next", <https://api.github.com/repositories/1/issues?labels=x&page=5>; rel="last""#,
        Some(2)
    },
    next_after_prev = {
        r#"<https://api.github.com/x?page=1>; rel="prev", <https://api.github.com/x?per_page=100&page=3>; rel="next""#,
        Some(3)
    },
    last_page = {
        r#"<https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=4>; rel="prev""#,
        None
    },
    empty = { "", None },
    malformed = { "garbage; rel=\"next\"", None },
)]
fn next_page_is_read_from_link_header(link: &str, expected: Option<u32>) {
    assert_eq!(parse_next_page(link), expected);
}

#[test]
fn api_error_prefers_github_message() {
    let err = api_error(422, Some("Unprocessable Entity"), r#"{"message":"Validation Failed"}"#);
    assert_eq!(
        err,
        IssueTrackerError::Api {
            status: 422,
            message: "Validation Failed".to_string(),
        }
    );
}

#[test]
fn api_error_falls_back_to_reason_phrase() {
    let err = api_error(502, Some("Bad Gateway"), "<html>upstream</html>");
    assert_eq!(
        err,
        IssueTrackerError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
    );
}

#[tokio::test]
async fn list_issues_page_sends_label_filter_and_reads_next_page() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        "Link: <http://127.0.0.1/repos/acme/widgets/issues?page=2>; rel=\"next\"\r\n",
        r#"[{"number": 9, "state": "closed", "assignees": [{"login": "bob"}]}]"#,
    )
    .await;

    let page = client(&base)
        .list_issues_page(
            &RepositoryId::parse("acme/widgets").unwrap(),
            &Label::new("tracked").unwrap(),
            PageRequest::first(),
        )
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].number, IssueNumber::new(9));
    assert_eq!(page.items[0].state, ItemState::Closed);

    let request_line = request.lines().next().unwrap();
    assert!(request_line.starts_with("GET /repos/acme/widgets/issues?"));
    assert!(request_line.contains("labels=tracked"));
    assert!(request_line.contains("state=all"));
    assert!(request_line.contains("per_page=100"));
    assert!(request_line.contains("page=1"));
    let lower = request.to_ascii_lowercase();
    assert!(lower.contains("authorization: bearer secret-token"));
    assert!(lower.contains("x-github-api-version: 2022-11-28"));
}

#[tokio::test]
async fn error_status_is_mapped_to_api_error() {
    let (base, server) = serve_once(
        "HTTP/1.1 404 Not Found",
        "",
        r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#,
    )
    .await;

    let result = client(&base)
        .list_repositories_page(&OwnerName::new("ghost").unwrap(), PageRequest::first())
        .await;
    server.await.unwrap();

    assert_eq!(
        result,
        Err(IssueTrackerError::Api {
            status: 404,
            message: "Not Found".to_string(),
        })
    );
}
