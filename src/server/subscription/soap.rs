use async_trait::async_trait;

use super::{NotificationDispatcher, SubscriptionError, SubscriptionOracle, SubscriptionReply};

const SERVICE_NAMESPACE: &str = "http://service.bondflix.com/";

/// SOAP 1.1 client for the subscription service.
///
/// Every call POSTs an envelope to the configured endpoint with the `X-API-KEY` header and
/// reads the text of the reply's `<return>` elements.
#[derive(Clone)]
pub struct SoapClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SoapClient {
    pub fn new(http: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }

    async fn call(
        &self,
        operation: &str,
        args: &[(&str, String)],
    ) -> Result<Vec<String>, SubscriptionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", operation)
            .header("X-API-KEY", &self.api_key)
            .body(envelope(operation, args))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubscriptionError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(return_values(&body))
    }
}

#[async_trait]
impl SubscriptionOracle for SoapClient {
    async fn is_subscribed(
        &self,
        subscriber_id: i32,
        creator_id: i32,
    ) -> Result<SubscriptionReply, SubscriptionError> {
        let values = self
            .call(
                "checkSubscription",
                &[
                    ("creatorId", creator_id.to_string()),
                    ("subscriberId", subscriber_id.to_string()),
                ],
            )
            .await?;

        values
            .into_iter()
            .next()
            .map(SubscriptionReply::Text)
            .ok_or_else(|| {
                SubscriptionError::MalformedReply("checkSubscription has no return".to_string())
            })
    }
}

#[async_trait]
impl NotificationDispatcher for SoapClient {
    async fn notify_on_create(&self, creator_id: i32) -> Result<(), SubscriptionError> {
        self.call("notifyOnCreate", &[("creatorId", creator_id.to_string())])
            .await?;
        Ok(())
    }

    async fn list_subscriber_ids(&self, creator_id: i32) -> Result<Vec<i32>, SubscriptionError> {
        let values = self
            .call(
                "getAllSubscriberFromCreator",
                &[("creatorId", creator_id.to_string())],
            )
            .await?;

        Ok(parse_ids(&values))
    }
}

/// Builds a SOAP 1.1 request envelope for `operation` with escaped arguments.
fn envelope(operation: &str, args: &[(&str, String)]) -> String {
    let params: String = args
        .iter()
        .map(|(name, value)| format!("<{name}>{}</{name}>", escape(value)))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\" \
         xmlns:ser=\"{SERVICE_NAMESPACE}\">\
         <soapenv:Header/>\
         <soapenv:Body><ser:{operation}>{params}</ser:{operation}></soapenv:Body>\
         </soapenv:Envelope>"
    )
}

/// Text of every `<return>` element in document order, with or without a namespace prefix.
fn return_values(xml: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = xml;

    while let Some(open) = rest.find('<') {
        rest = &rest[open + 1..];
        let Some(end) = rest.find('>') else {
            break;
        };
        let tag = &rest[..end];
        rest = &rest[end + 1..];

        if tag.starts_with('/') || tag.starts_with('?') || tag.ends_with('/') {
            continue;
        }

        let name = tag.split_whitespace().next().unwrap_or(tag);
        let local = name.rsplit(':').next().unwrap_or(name);
        if local != "return" {
            continue;
        }

        let close = format!("</{}>", name);
        if let Some(close_at) = rest.find(&close) {
            values.push(unescape(rest[..close_at].trim()));
            rest = &rest[close_at + close.len()..];
        }
    }

    values
}

/// Subscriber ids from `<return>` values; a value may itself be a comma-separated list.
fn parse_ids(values: &[String]) -> Vec<i32> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter_map(|value| match value.parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Ignoring non-numeric subscriber id {:?}", value);
                None
            }
        })
        .collect()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
