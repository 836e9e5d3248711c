use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

#[derive(From, Serialize, Deserialize, Display, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl From<&str> for RequestId {
    fn from(x: &str) -> Self {
        String::from(x).into()
    }
}

#[derive(From, Serialize, Deserialize, Display, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(x: &str) -> Self {
        String::from(x).into()
    }
}

/// Request scoped metadata appended to every line logged on behalf of a request.
///
/// The default value carries neither id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: Option<RequestId>,
    pub user_id: Option<UserId>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id<T: Into<RequestId>>(mut self, id: T) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_user_id<T: Into<UserId>>(mut self, id: T) -> Self {
        self.user_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = RequestContext::new()
            .with_request_id("12345")
            .with_user_id(String::from("67890"));
        assert_eq!(ctx.request_id, Some(RequestId::from("12345")));
        assert_eq!(ctx.user_id.map(|id| id.to_string()), Some(String::from("67890")));
    }

    #[test]
    fn test_parse_partial() {
        let ctx: RequestContext = serde_json::from_str(r#"{"user_id": "user123"}"#).unwrap();
        assert_eq!(ctx.request_id, None);
        assert_eq!(ctx.user_id, Some(UserId::from("user123")));
    }
}
