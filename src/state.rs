use serde::{Deserialize, Serialize};

/// A message as the backend returns it. The `id` is assigned server-side
/// and is the only handle the client ever uses to address a message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub id: u32,
    pub username: String,
    pub content: String,
}

/// Body of a create request; a draft never carries an id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewMessage {
    pub username: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_decodes_in_order() {
        let body = r#"[
            {"id": 1, "username": "Alice", "content": "Hi"},
            {"id": 2, "username": "Bob", "content": "Hello"}
        ]"#;
        let messages: Vec<Message> = serde_json::from_str(body).expect("list body");
        assert_eq!(
            messages,
            vec![
                Message {
                    id: 1,
                    username: "Alice".to_string(),
                    content: "Hi".to_string(),
                },
                Message {
                    id: 2,
                    username: "Bob".to_string(),
                    content: "Hello".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_list_decodes() {
        let messages: Vec<Message> = serde_json::from_str("[]").expect("empty body");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_draft_encodes() {
        let draft = NewMessage {
            username: "Carl".to_string(),
            content: "Yo".to_string(),
        };
        let body = serde_json::to_string(&draft).expect("draft body");
        assert_eq!(body, r#"{"username":"Carl","content":"Yo"}"#);
    }
}
