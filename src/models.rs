use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user or customer stub as embedded in conversation and thread
/// payloads. The API omits fields freely depending on context, so
/// everything decodes to its zero value when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub first: String,
    pub last: String,
    pub photo_url: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub via: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentLinks {
    #[serde(rename = "self")]
    pub own: Link,
    pub data: Link,
    pub web: Link,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    pub id: u64,
    pub filename: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub size: u64,
    #[serde(rename = "_links")]
    pub links: AttachmentLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadEmbedded {
    pub attachments: Vec<Attachment>,
}

/// One message in a conversation's thread, as returned by
/// `GET /conversations/{id}/threads`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thread {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub state: String,
    pub action: ThreadAction,
    pub body: String,
    pub source: SourceInfo,
    pub customer: Person,
    pub created_by: Person,
    pub assigned_to: Person,
    pub saved_reply_id: u64,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(rename = "_embedded")]
    pub embedded: ThreadEmbedded,
}

/// A top-level conversation from the paginated collection endpoint.
/// The upstream `threads` field is only a count; the fetched messages
/// are attached under `threads_data` so the count survives export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conversation {
    pub id: u64,
    pub number: u64,
    #[serde(rename = "threads")]
    pub threads_count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub folder_id: u64,
    pub status: String,
    pub state: String,
    pub subject: String,
    pub preview: String,
    pub mailbox_id: u64,
    pub created_by: Person,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_by_user: Person,
    pub user_updated_at: Option<DateTime<Utc>>,
    pub source: SourceInfo,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub primary_customer: Person,
    #[serde(rename = "threads_data")]
    pub threads: Vec<Thread>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    pub next: Link,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConversationList {
    pub conversations: Vec<Conversation>,
}

/// Response envelope of `GET /conversations`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConversationPage {
    #[serde(rename = "_embedded")]
    pub embedded: ConversationList,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

/// Response envelope of `GET /conversations/{id}/threads`. The
/// endpoint is consumed as single-page, but `_links` still decodes so
/// a symmetric walker would have what it needs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThreadPage {
    #[serde(rename = "_embedded")]
    pub embedded: ThreadEmbeddedList,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThreadEmbeddedList {
    pub threads: Vec<Thread>,
}
