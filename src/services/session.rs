use crate::forms::login::LoginForm;
use crate::repository::{Authenticator, DurableStorage, LOGGED_IN_KEY, Navigator};
use crate::services::wishlist::WishlistStore;
use crate::services::{ServiceError, ServiceResult};
use crate::{HOME_PATH, LOGIN_PATH};

/// Stored value of the login flag.
const LOGGED_IN_VALUE: &str = "true";

/// Login gating for the storefront: a persisted flag plus redirects.
pub struct SessionGate<S, N, A> {
    storage: S,
    navigator: N,
    authenticator: A,
}

impl<S, N, A> SessionGate<S, N, A>
where
    S: DurableStorage,
    N: Navigator,
    A: Authenticator,
{
    pub fn new(storage: S, navigator: N, authenticator: A) -> Self {
        Self {
            storage,
            navigator,
            authenticator,
        }
    }

    /// Whether the persisted login flag is set. Unreadable storage counts as logged out.
    pub fn is_logged_in(&self) -> bool {
        match self.storage.get(LOGGED_IN_KEY) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN_VALUE),
            Err(err) => {
                log::error!("Failed to read login flag: {err}");
                false
            }
        }
    }

    /// Redirect the entry page to the homepage or the login page.
    pub fn resolve_entry(&self) -> ServiceResult<&'static str> {
        let target = if self.is_logged_in() {
            HOME_PATH
        } else {
            LOGIN_PATH
        };
        self.navigator.navigate(target)?;
        Ok(target)
    }

    /// Check the submitted credentials, set the login flag and go to the homepage.
    pub fn login(&self, form: LoginForm) -> ServiceResult<()> {
        let credentials = form
            .into_credentials()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        if !self
            .authenticator
            .authenticate(&credentials.email, &credentials.password)
        {
            log::info!("Rejected login attempt for {}", credentials.email);
            return Err(ServiceError::InvalidCredentials);
        }

        self.storage.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        log::info!("User {} logged in", credentials.email);

        self.navigate_with_fallback(HOME_PATH)
    }

    /// Clear the wishlist and then the login flag, then go back to the login page.
    ///
    /// The flag stays set when the wishlist cannot be cleared, so a failed
    /// logout never leaves a logged-out session holding the previous wishlist.
    pub fn logout<W>(&self, wishlist: &mut WishlistStore<W>) -> ServiceResult<()>
    where
        W: DurableStorage,
    {
        wishlist.teardown()?;
        self.storage.remove(LOGGED_IN_KEY)?;
        log::info!("User logged out");

        self.navigate_with_fallback(LOGIN_PATH)
    }

    fn navigate_with_fallback(&self, path: &str) -> ServiceResult<()> {
        if let Err(err) = self.navigator.navigate(path) {
            log::error!("Navigation error: {err}");
            self.navigator.navigate(path)?;
        }
        Ok(())
    }
}
