use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Friend {
    pub id: i32,
    pub name: String,
    pub nick: Option<String>, // NULL, never ""
}

/// Id handed back by `INSERT ... RETURNING id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct GeneratedId {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriend {
    pub name: String,
    pub nick: Option<String>,
}

impl NewFriend {
    pub fn new(name: impl Into<String>, nick: Option<&str>) -> Self {
        Self {
            name: name.into(),
            nick: nick.map(str::to_string),
        }
    }

    /// Combines the caller's values with the id the store assigned
    pub fn into_friend(self, generated: GeneratedId) -> Friend {
        Friend {
            id: generated.id,
            name: self.name,
            nick: self.nick,
        }
    }
}

impl Friend {
    pub fn display_nick(&self) -> &str {
        self.nick.as_deref().unwrap_or("(No nick)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_nick_serializes_as_null() {
        let friend = Friend {
            id: 4,
            name: "Lisa".to_string(),
            nick: None,
        };
        let json = serde_json::to_value(&friend).unwrap();
        assert_eq!(json["nick"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_nick_is_not_absent() {
        let friend = NewFriend::new("Pelle", Some("")).into_friend(GeneratedId { id: 2 });
        assert_eq!(friend.nick.as_deref(), Some(""));
        assert_eq!(friend.display_nick(), "");
    }

    #[test]
    fn test_into_friend_keeps_caller_values() {
        let friend = NewFriend::new("Tomas", Some("Tom")).into_friend(GeneratedId { id: 7 });
        assert_eq!(
            friend,
            Friend {
                id: 7,
                name: "Tomas".to_string(),
                nick: Some("Tom".to_string()),
            }
        );
        assert_eq!(friend.display_nick(), "Tom");
    }

    #[test]
    fn test_display_nick_placeholder() {
        let friend = NewFriend::new("Lisa", None).into_friend(GeneratedId { id: 5 });
        assert_eq!(friend.display_nick(), "(No nick)");
    }
}
