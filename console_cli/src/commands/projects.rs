use anyhow::{bail, Result};
use console_lib::types::Project;
use console_lib::{Client, ConsoleStores, Notification};

use crate::output::{print_json, print_notifications, print_projects_table, OutputFormat};

/// Fetches projects along with any notifications raised by the request.
/// `None` means the request failed and an interceptor recovered it.
pub async fn load(
    client: &Client,
    stores: &ConsoleStores,
) -> Result<(Option<Vec<Project>>, Vec<Notification>)> {
    let projects = client.get_projects().await?;
    Ok((projects, stores.notification.drain()))
}

pub async fn run(client: &Client, stores: &ConsoleStores, format: &OutputFormat) -> Result<()> {
    let (projects, notifications) = load(client, stores).await?;
    print_notifications(&notifications);
    let Some(projects) = projects else {
        bail!("failed to load projects");
    };
    match format {
        OutputFormat::Table => print_projects_table(&projects),
        OutputFormat::Json => print_json(&projects),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use console_lib::{connect, BuildMode, ConsoleConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(base_url: String) -> ConsoleConfig {
        ConsoleConfig {
            base_url,
            mode: BuildMode::release(),
            timeout: Duration::from_millis(300),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_server_message_is_returned_with_no_projects() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/project"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database is locked"})),
            )
            .mount(&mock_server)
            .await;

        let (client, stores) = connect(&config(mock_server.uri())).unwrap();
        let (projects, notifications) = load(&client, &stores).await.unwrap();

        assert!(projects.is_none());
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "database is locked");
        assert!(stores.notification.is_empty());

        let err = run(&client, &stores, &OutputFormat::Table).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load projects");
    }

    #[tokio::test]
    async fn test_timeout_is_returned_as_notification() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/project"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let (client, stores) = connect(&config(mock_server.uri())).unwrap();
        let (projects, notifications) = load(&client, &stores).await.unwrap();

        assert!(projects.is_none());
        assert_eq!(
            notifications[0].title,
            "Connecting server timeout. Make sure the server is running."
        );
    }

    #[tokio::test]
    async fn test_projects_load_without_notifications() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 101, "name": "Shop", "key": "SHOP"}
            ])))
            .mount(&mock_server)
            .await;

        let (client, stores) = connect(&config(mock_server.uri())).unwrap();
        let (projects, notifications) = load(&client, &stores).await.unwrap();

        assert_eq!(projects.unwrap()[0].key, "SHOP");
        assert!(notifications.is_empty());
    }
}
