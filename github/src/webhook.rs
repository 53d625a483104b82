use crate::events::{Event, EventTypes};
use log::debug;
use serde::Deserialize;
use serde_json::value::RawValue;

/// The GitHub header key used to pass the event type
///
/// Github API docs: https://docs.github.com/en/developers/webhooks-and-events/webhooks/webhook-events-and-payloads#delivery-headers
pub const EVENT_TYPE_HEADER: &str = "X-GitHub-Event";

/// The GitHub header key used to pass the unique ID for the webhook event
pub const DELIVERY_ID_HEADER: &str = "X-GitHub-Delivery";

/// A single webhook delivery: its event type, delivery id and raw payload
#[derive(Clone, Debug, PartialEq)]
pub struct Webhook {
    pub event_type: EventTypes,
    pub delivery_id: String,
    pub body: Vec<u8>,
}

/// A delivery as stored by a webhook relay, with the headers lowercased next to the payload
#[derive(Deserialize)]
struct RelayRecord<'a> {
    #[serde(rename = "x-github-event")]
    event_type: EventTypes,
    #[serde(rename = "x-github-delivery")]
    delivery_id: String,
    #[serde(borrow, rename = "body")]
    body: &'a RawValue,
}

impl Webhook {
    pub fn new(event_type: EventTypes, delivery_id: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            event_type,
            delivery_id: delivery_id.into(),
            body,
        }
    }

    /// Parse a relay record of the form
    /// `{"x-github-event": .., "x-github-delivery": .., "body": {..}}`
    pub fn from_record(record: &[u8]) -> Result<Self, serde_json::Error> {
        let record: RelayRecord = serde_json::from_slice(record)?;
        debug!(
            "relay record: {} delivery {}",
            record.event_type, record.delivery_id
        );

        Ok(Self {
            event_type: record.event_type,
            delivery_id: record.delivery_id,
            body: record.body.get().as_bytes().to_vec(),
        })
    }

    pub fn to_event(&self) -> Result<Event, serde_json::Error> {
        Event::from_json(self.event_type, &self.body)
    }
}
