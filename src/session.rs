//! Read-only access to the signed-in user.
//!
//! The uploader never signs anyone in. It asks a provider for the current
//! user's email right before each submission; a missing or blank value means
//! nobody is signed in.

pub const USER_EMAIL_ENV: &str = "MEDIA_UPLOADER_USER_EMAIL";

pub trait SessionProvider: Send + Sync {
    fn user_email(&self) -> Option<String>;
}

/// A session fixed at startup, usually taken from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    email: Option<String>,
}

impl StaticSession {
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }
}

impl SessionProvider for StaticSession {
    fn user_email(&self) -> Option<String> {
        non_blank(self.email.clone())
    }
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the email from a variable on every call, so an external launcher
/// can change who is signed in while the app runs.
pub struct EnvSession {
    var: String,
    lookup: Lookup,
}

impl EnvSession {
    pub fn new(var: impl Into<String>) -> Self {
        Self::with_lookup(var, |name| std::env::var(name).ok())
    }

    /// Resolves the variable through `lookup` instead of the process
    /// environment.
    pub fn with_lookup(
        var: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            var: var.into(),
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvSession {
    fn default() -> Self {
        Self::new(USER_EMAIL_ENV)
    }
}

impl SessionProvider for EnvSession {
    fn user_email(&self) -> Option<String> {
        non_blank((self.lookup)(&self.var))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[test]
    fn blank_email_counts_as_signed_out() {
        assert_eq!(StaticSession::new(Some("   ".to_string())).user_email(), None);
        assert_eq!(StaticSession::default().user_email(), None);
        assert_eq!(
            StaticSession::new(Some(" ada@example.com ".to_string())).user_email(),
            Some("ada@example.com".to_string())
        );
    }

    #[test]
    fn env_session_reads_on_each_call() {
        let vars: Arc<Mutex<HashMap<String, String>>> = Arc::default();
        let source = Arc::clone(&vars);
        let session = EnvSession::with_lookup(USER_EMAIL_ENV, move |name| {
            source.lock().unwrap().get(name).cloned()
        });
        assert_eq!(session.user_email(), None);

        vars.lock()
            .unwrap()
            .insert(USER_EMAIL_ENV.to_string(), "grace@example.com".to_string());
        assert_eq!(session.user_email(), Some("grace@example.com".to_string()));

        vars.lock()
            .unwrap()
            .insert(USER_EMAIL_ENV.to_string(), "  ".to_string());
        assert_eq!(session.user_email(), None);
    }

    #[test]
    fn env_session_only_looks_up_its_own_variable() {
        let session = EnvSession::with_lookup("OTHER_EMAIL", |name| {
            (name == "OTHER_EMAIL").then(|| "ada@example.com".to_string())
        });
        assert_eq!(session.user_email(), Some("ada@example.com".to_string()));
    }
}
