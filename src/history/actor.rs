/// Actor recorded when nobody is signed in, e.g. a scheduled sync
pub const BACKGROUND_ACTOR: &str = "Background Process";

/// Source of the identity that triggered the current operation
pub trait IdentityProvider {
    /// Display name of the acting user, if one is attached
    fn current_user(&self) -> Option<String>;
}

/// No identity attached: scheduled jobs and startup imports
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentity;

impl IdentityProvider for NoIdentity {
    fn current_user(&self) -> Option<String> {
        None
    }
}

/// Identity fixed by the host for the lifetime of the recorder
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<F> IdentityProvider for F
where
    F: Fn() -> Option<String>,
{
    fn current_user(&self) -> Option<String> {
        self()
    }
}

/// Name to record for the current operation.
///
/// The display name is kept as given; an empty or all-whitespace name counts
/// as no identity.
pub fn resolve_actor(provider: &dyn IdentityProvider) -> String {
    provider
        .current_user()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| BACKGROUND_ACTOR.to_string())
}
