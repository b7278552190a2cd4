use std::fmt;

/// Credentials for one account, handed to every remote call.
#[derive(Clone)]
pub struct Account {
    pub id: String,
    token: String,
}

impl Account {
    pub fn new(id: &str, token: &str) -> Self {
        Account {
            id: id.into(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_value() {
        let account = Account::new("acc", "secret");
        assert_eq!(account.bearer(), "Bearer secret");
        assert_eq!(account.token(), "secret");
    }

    #[test]
    fn debug_hides_token() {
        let account = Account::new("acc", "secret");
        let shown = format!("{:?}", account);
        assert!(shown.contains("acc"));
        assert!(!shown.contains("secret"));
    }
}
