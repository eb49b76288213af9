use crate::repository::Authenticator;

/// Email of the single built-in account.
pub const DEMO_EMAIL: &str = "tem@emaple.com";
/// Password of the single built-in account.
pub const DEMO_PASSWORD: &str = "Password@1234";

/// Authenticator backed by one fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
