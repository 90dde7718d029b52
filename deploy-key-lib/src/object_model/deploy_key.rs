use serde::{Deserialize, Serialize};

/// A deploy key as returned by the GitHub REST API
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeployKey {
    #[serde(rename = "id")]
    pub id: u64,

    #[serde(rename = "key")]
    pub key: String,

    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "title")]
    pub title: String,

    #[serde(rename = "verified")]
    pub verified: bool,

    #[serde(rename = "created_at")]
    pub created_at: String,

    #[serde(rename = "read_only")]
    pub read_only: bool,
}

impl DeployKey {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Request body for creating a deploy key: server-assigned fields are never sent
#[derive(Debug, Serialize)]
pub(crate) struct NewDeployKey<'a> {
    #[serde(rename = "title")]
    pub(crate) title: &'a str,

    #[serde(rename = "key")]
    pub(crate) key: &'a str,

    #[serde(rename = "read_only")]
    pub(crate) read_only: bool,
}

#[cfg(test)]
mod tests {
    use super::{DeployKey, NewDeployKey};
    use serde_json::json;

    #[test]
    fn partial_record_decodes_with_defaults() {
        let key = serde_json::from_str::<DeployKey>(r#"{"id":42,"title":"testKeyTitle"}"#)
            .expect("must decode");
        assert_eq!(
            DeployKey {
                id: 42,
                title: String::from("testKeyTitle"),
                ..Default::default()
            },
            key
        );
        assert!(!key.is_empty());
        assert!(DeployKey::default().is_empty());
    }

    #[test]
    fn full_record_round_trips() {
        let key = DeployKey {
            id: 7,
            key: String::from("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIHn8"),
            url: String::from("https://api.github.com/repos/octocat/hello/keys/7"),
            title: String::from("ci"),
            verified: true,
            created_at: String::from("2014-12-10T15:53:42Z"),
            read_only: true,
        };
        let s = serde_json::to_string(&key).expect("must encode");
        assert_eq!(key, serde_json::from_str::<DeployKey>(&s).expect("must decode"));
    }

    #[test]
    fn wire_field_names() {
        let value = serde_json::to_value(DeployKey::default()).expect("must encode");
        assert_eq!(
            json!({
                "id": 0,
                "key": "",
                "url": "",
                "title": "",
                "verified": false,
                "created_at": "",
                "read_only": false,
            }),
            value
        );
    }

    #[test]
    fn new_key_omits_server_assigned_fields() {
        let value = serde_json::to_value(NewDeployKey {
            title: "ci",
            key: "ssh-ed25519 AAAA",
            read_only: true,
        })
        .expect("must encode");
        assert_eq!(
            json!({"title": "ci", "key": "ssh-ed25519 AAAA", "read_only": true}),
            value
        );
    }
}
