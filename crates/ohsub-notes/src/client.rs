//! AnkiConnect JSON-RPC over HTTP (API version 6)

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const API_VERSION: u32 = 6;

/// One card in the shape `addNote` expects
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnkiNote {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoteFields {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

impl AnkiNote {
    pub fn new(deck: &str, model: &str, front: String, back: String) -> Self {
        Self {
            deck_name: deck.to_string(),
            model_name: model.to_string(),
            fields: NoteFields { front, back },
            options: NoteOptions {
                allow_duplicate: false,
            },
            tags: vec!["ohsub".to_string()],
        }
    }
}

#[derive(Clone)]
pub struct AnkiConnectClient {
    url: String,
    http: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(url: String, http: reqwest::Client) -> Self {
        Self { url, http }
    }

    /// API version reported by AnkiConnect; doubles as a liveness probe
    pub async fn version(&self) -> Result<u32> {
        self.call("version", NoParams {}).await
    }

    /// Add a card, returning its note id
    pub async fn add_note(&self, note: &AnkiNote) -> Result<u64> {
        self.call("addNote", AddNote { note }).await
    }

    async fn call<P, T>(&self, action: &str, params: P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = Request {
            action,
            version: API_VERSION,
            params,
        };

        let reply: Reply<T> = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("AnkiConnect unreachable at {}", self.url))?
            .error_for_status()
            .context("AnkiConnect rejected the request")?
            .json()
            .await
            .with_context(|| format!("Malformed AnkiConnect reply to {action}"))?;

        reply.into_result()
    }
}

#[derive(Serialize)]
struct Request<'a, P> {
    action: &'a str,
    version: u32,
    params: P,
}

#[derive(Serialize)]
struct NoParams {}

#[derive(Serialize)]
struct AddNote<'a> {
    note: &'a AnkiNote,
}

#[derive(Deserialize)]
struct Reply<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T> {
        match (self.error, self.result) {
            (Some(error), _) => bail!("AnkiConnect error: {error}"),
            (None, Some(result)) => Ok(result),
            (None, None) => bail!("AnkiConnect returned null result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_to_add_note_params() {
        let note = AnkiNote::new("Subtitles", "Basic", "apple".into(), "n. 苹果".into());
        let value = serde_json::to_value(AddNote { note: &note }).unwrap();

        assert_eq!(value["note"]["deckName"], "Subtitles");
        assert_eq!(value["note"]["modelName"], "Basic");
        assert_eq!(value["note"]["fields"]["Front"], "apple");
        assert_eq!(value["note"]["fields"]["Back"], "n. 苹果");
        assert_eq!(value["note"]["options"]["allowDuplicate"], false);
        assert_eq!(value["note"]["tags"][0], "ohsub");
    }

    #[test]
    fn request_envelope() {
        let request = Request {
            action: "version",
            version: API_VERSION,
            params: NoParams {},
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"action":"version","version":6,"params":{}}"#
        );
    }

    #[test]
    fn error_field_wins() {
        let reply: Reply<u64> = serde_json::from_str(
            r#"{"result":null,"error":"cannot create note because it is a duplicate"}"#,
        )
        .unwrap();
        let err = reply.into_result().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn result_is_returned() {
        let reply: Reply<u64> =
            serde_json::from_str(r#"{"result":1496198395707,"error":null}"#).unwrap();
        assert_eq!(reply.into_result().unwrap(), 1496198395707);
    }

    #[test]
    fn empty_reply_is_an_error() {
        let reply: Reply<u64> = serde_json::from_str(r#"{"result":null,"error":null}"#).unwrap();
        assert!(reply.into_result().is_err());
    }
}
