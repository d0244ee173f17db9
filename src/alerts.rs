//! Alert fetching and the mapping pipeline from API records to driver calls.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::api::{AlertAttributes, ApiRequest, Envelope, Resource};
use crate::drivers::{AlertDriver, AlertItem};
use crate::fetch::{HttpClient, fetch_json};

/// Formats an alert creation time as `MM-DD-YYYY hh:mm AM/PM`, in the
/// timestamp's own UTC offset.
pub fn format_created_at(created_at: &DateTime<FixedOffset>) -> String {
    created_at.format("%m-%d-%Y %I:%M %p").to_string()
}

/// Projects one raw API record into a renderable [`AlertItem`].
///
/// `short_header` and `header` are trusted to be non-empty per the upstream
/// contract. Absent `description` and `effect` map to empty strings so no
/// null literal can leak into output. Categories are unused by the upstream
/// API today and always come out empty.
pub fn map_alert(record: &Resource<AlertAttributes>) -> AlertItem {
    let attributes = &record.attributes;

    let description = attributes.description.clone().unwrap_or_default();
    let effect = attributes
        .effect
        .as_ref()
        .map(|effect| format!("Effect: {effect}"))
        .unwrap_or_default();

    AlertItem {
        header: attributes.short_header.clone(),
        long_header: attributes.header.clone(),
        description,
        effect,
        date: format_created_at(&attributes.created_at),
        categories: Vec::new(),
        guid: record.id.clone(),
    }
}

/// Renders a full feed for the given records: preamble, one item per record
/// in input order (no resorting, no deduplication), postamble.
pub fn render(
    driver: &dyn AlertDriver,
    out: &mut dyn Write,
    records: &[Resource<AlertAttributes>],
) -> Result<()> {
    driver.start(out)?;
    for record in records {
        driver.item(out, &map_alert(record))?;
    }
    driver.end(out)?;
    Ok(())
}

/// Fetches alerts matching the optional route and time filters and renders
/// them with the given driver.
///
/// The query keeps the original tool's parameter order: `filter[datetime]`,
/// then `api_key`, then `filter[route]`, each only when present.
pub async fn run<C: HttpClient>(
    client: &C,
    driver: &dyn AlertDriver,
    out: &mut dyn Write,
    route: Option<&str>,
    time: Option<&str>,
    api_key: Option<&str>,
) -> Result<()> {
    let req = ApiRequest::new("alerts")
        .maybe_param("filter[datetime]", time)
        .maybe_param("api_key", api_key)
        .maybe_param("filter[route]", route);

    let envelope: Envelope<AlertAttributes> = fetch_json(client, &req.url()).await?;
    debug!(alert_count = envelope.data.len(), "Alerts fetched");

    render(driver, out, &envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{FeedMeta, MarkdownDriver, RssDriver};

    fn alert_record(json: &str) -> Resource<AlertAttributes> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_format_created_at_twelve_hour_clock() {
        let created_at = DateTime::parse_from_rfc3339("2021-03-05T14:30:00-05:00").unwrap();
        assert_eq!(format_created_at(&created_at), "03-05-2021 02:30 PM");
    }

    #[test]
    fn test_format_created_at_morning_is_zero_padded() {
        let created_at = DateTime::parse_from_rfc3339("2021-11-23T09:05:00-05:00").unwrap();
        assert_eq!(format_created_at(&created_at), "11-23-2021 09:05 AM");
    }

    #[test]
    fn test_map_alert_defaults_missing_fields_to_empty() {
        let record = alert_record(
            r#"{
                "id": "alert-1",
                "attributes": {
                    "short_header": "Delays",
                    "header": "Delays of up to 20 minutes",
                    "description": null,
                    "effect": null,
                    "created_at": "2021-03-05T14:30:00-05:00"
                }
            }"#,
        );
        let item = map_alert(&record);

        assert_eq!(item.description, "");
        assert_eq!(item.effect, "");
        assert_eq!(item.guid, "alert-1");
        assert!(item.categories.is_empty());
    }

    #[test]
    fn test_map_alert_prefixes_effect() {
        let record = alert_record(
            r#"{
                "id": "alert-2",
                "attributes": {
                    "short_header": "Shuttle",
                    "header": "Shuttle buses replacing service",
                    "description": "Use shuttle buses",
                    "effect": "SHUTTLE",
                    "created_at": "2021-03-05T14:30:00-05:00"
                }
            }"#,
        );
        let item = map_alert(&record);

        assert_eq!(item.effect, "Effect: SHUTTLE");
        assert_eq!(item.description, "Use shuttle buses");
        assert_eq!(item.header, "Shuttle");
        assert_eq!(item.long_header, "Shuttle buses replacing service");
    }

    #[test]
    fn test_render_markdown_feed_layout() {
        let envelope: Envelope<AlertAttributes> = serde_json::from_str(
            r#"{"data": [{
                "id": "alert-3",
                "attributes": {
                    "short_header": "Red Line delays",
                    "header": "Red Line experiencing delays of up to 15 minutes",
                    "description": "Signal problem at Park Street",
                    "effect": "DELAY",
                    "created_at": "2021-03-05T14:30:00-05:00"
                }
            }]}"#,
        )
        .unwrap();

        let driver = MarkdownDriver::new(FeedMeta::default());
        let mut out = Vec::new();
        render(&driver, &mut out, &envelope.data).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("## Red Line delays (added 03-05-2021 02:30 PM)\n"));
        assert!(rendered.contains(
            "Red Line experiencing delays of up to 15 minutes\n\nSignal problem at Park Street"
        ));
    }

    #[test]
    fn test_render_rss_feed_absorbs_null_effect() {
        let envelope: Envelope<AlertAttributes> = serde_json::from_str(
            r#"{"data": [{
                "id": "alert-4",
                "attributes": {
                    "short_header": "Elevator out",
                    "header": "Elevator out of service at Back Bay",
                    "created_at": "2021-07-01T08:00:00-04:00"
                }
            }]}"#,
        )
        .unwrap();

        let driver = RssDriver::new(FeedMeta::default());
        let mut out = Vec::new();
        render(&driver, &mut out, &envelope.data).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("<guid>alert-4</guid>"));
        assert!(!rendered.contains("Effect:"));
        assert!(!rendered.contains("None"));
    }
}
