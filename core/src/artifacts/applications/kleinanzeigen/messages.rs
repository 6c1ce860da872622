use super::{
    error::KleinanzeigenError,
    preferences::{read_json, source_path},
};
use crate::{
    artifacts::{outcome::ArtifactOutcome, registry::KLEINANZEIGEN_MESSAGES},
    decoder::{
        field::FieldReader,
        rules::{decode_value, Rule},
    },
};
use chrono::FixedOffset;
use common::report::ArtifactTable;
use log::{error, info, warn};
use serde_json::Value;

/// Cached conversations written by the app
pub(crate) const CONVERSATION_CACHE: &str = "conversation_cache";

const HEADERS: [&str; 11] = [
    "Advertisement",
    "Ad-ID",
    "Sent",
    "From_Name",
    "From_ID",
    "To_Name",
    "To_ID",
    "Message",
    "Attachment",
    "Message_ID",
    "AD-Status",
];

/// Both sides of a conversation
struct Participants {
    me: (String, String),
    counter_party: (String, String),
}

impl Participants {
    /// Order the parties as (from, to)
    fn direction(&self, sent_by_me: bool) -> (&(String, String), &(String, String)) {
        if sent_by_me {
            (&self.me, &self.counter_party)
        } else {
            (&self.counter_party, &self.me)
        }
    }
}

/// Parse the cached Kleinanzeigen conversations
pub(crate) fn grab_messages(
    candidates: &[String],
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, KleinanzeigenError> {
    let path = source_path(candidates, CONVERSATION_CACHE)?;
    let cache = read_json(&path)?;

    let conversations = match cache.get("data").and_then(Value::as_array) {
        Some(result) => result,
        None => {
            error!("[kleinanzeigen] Conversation cache {path} has no data array");
            return Err(KleinanzeigenError::BadStructure);
        }
    };

    let mut table =
        ArtifactTable::new(KLEINANZEIGEN_MESSAGES, &HEADERS, &path).with_time_column(Some(2));
    for conversation in conversations {
        for row in conversation_rows(conversation, timezone) {
            if let Err(err) = table.push_row(row) {
                error!("[kleinanzeigen] Could not add message row: {err:?}");
                return Err(KleinanzeigenError::Arity);
            }
        }
    }

    if table.is_empty() {
        info!("[kleinanzeigen] No cached messages found");
    }
    Ok(ArtifactOutcome::Table(table))
}

/// Rows for one conversation. Conversations without messages fall back to the cached preview
fn conversation_rows(conversation: &Value, timezone: &FixedOffset) -> Vec<Vec<String>> {
    let ad_name = conversation.display("ad.displayTitle");
    let ad_id = conversation.display("ad.identifier");
    let ad_status = conversation
        .text("clientData.adStatus")
        .unwrap_or_else(|| String::from("UNKNOWN"));

    let me = if conversation.text("clientData.role").as_deref() == Some("Seller") {
        (
            conversation.display("clientData.sellerName"),
            conversation.display("clientData.userIdSeller"),
        )
    } else {
        (
            conversation.display("clientData.buyerName"),
            conversation.display("clientData.userIdBuyer"),
        )
    };
    let participants = Participants {
        me,
        counter_party: (
            conversation.display("counterParty.name"),
            conversation.display("counterParty.identifier"),
        ),
    };

    let build_row = |sent: String, by_me: bool, text: String, attachment: String, id: String| {
        let (from, to) = participants.direction(by_me);
        vec![
            ad_name.clone(),
            ad_id.clone(),
            sent,
            from.0.clone(),
            from.1.clone(),
            to.0.clone(),
            to.1.clone(),
            text,
            attachment,
            id,
            ad_status.clone(),
        ]
    };

    let messages = conversation
        .get("messages")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if messages.is_empty() {
        return match preview_row(conversation, timezone) {
            Some((sent, by_me, text)) => vec![build_row(
                sent,
                by_me,
                text,
                String::from("none"),
                String::new(),
            )],
            None => {
                warn!("[kleinanzeigen] Conversation for ad {ad_id} has no messages or preview");
                Vec::new()
            }
        };
    }

    let mut rows = Vec::new();
    for message in messages {
        let sent = decode_value(&message.field("sentDate"), &Rule::Timestamp, timezone);
        let by_me = message.integer("sender") == Some(0);
        rows.push(build_row(
            sent,
            by_me,
            message.display("text"),
            attachments(message),
            message.display("messageId"),
        ));
    }
    rows
}

/// Preview text, received time and direction cached for a conversation. All three keys must exist, null values render empty
fn preview_row(conversation: &Value, timezone: &FixedOffset) -> Option<(String, bool, String)> {
    let text = conversation.required("clientData.textShortTrimmed").ok()?;
    let received = conversation.required("clientData.receivedDate").ok()?;
    let boundness = conversation.required("clientData.boundness").ok()?;

    Some((
        decode_value(&received, &Rule::Timestamp, timezone),
        boundness.to_display() == "OUTBOUND",
        text.to_display(),
    ))
}

/// Image URLs of a message joined by `, `. Messages without attachments render `none`
fn attachments(message: &Value) -> String {
    let mut urls = Vec::new();
    if let Some(entries) = message.get("attachments").and_then(Value::as_array) {
        for entry in entries {
            if let Some(url) = entry.text("imageURL") {
                urls.push(url);
            }
        }
    }

    if urls.is_empty() {
        return String::from("none");
    }
    urls.join(", ")
}
