use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use crate::user::models::EmailAddress;
use crate::user::models::PersonName;
use crate::user::models::PlainPassword;
use crate::user::models::User;
use crate::user::models::UserId;

/// Authenticated identity bound to a single request.
///
/// Built fresh on every login and on every successful token check, never
/// persisted. Two principals are the same entity when their ids match,
/// whatever the other fields say.
#[derive(Clone)]
pub struct Principal {
    id: UserId,
    username: String,
    first_name: String,
    last_name: String,
    admin: bool,
    password_hash: String,
}

impl Principal {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        admin: bool,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            admin,
            password_hash: password_hash.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Stored hash, for credential verification only.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(
            user.id,
            user.email.as_str(),
            user.first_name.as_str(),
            user.last_name.as_str(),
            user.admin,
            user.password_hash.as_str(),
        )
    }
}

impl PartialEq for Principal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Principal {}

impl Hash for Principal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

/// Capability granted to an authenticated principal.
///
/// No capabilities are handed out today; the set stays empty and the
/// administrator flag lives on the principal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Authority(pub String);

/// A principal together with the capabilities it was granted.
#[derive(Debug, Clone, PartialEq)]
pub struct Authentication {
    principal: Principal,
    authorities: BTreeSet<Authority>,
}

impl Authentication {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            authorities: BTreeSet::new(),
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Name used by authorization checks (the username).
    pub fn name(&self) -> &str {
        self.principal.username()
    }

    pub fn authorities(&self) -> &BTreeSet<Authority> {
        &self.authorities
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a.0 == authority)
    }
}

/// Per-request holder of at most one authentication.
///
/// Lives in the request's extensions, so it is created with the request and
/// dropped with it; nothing is shared between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityContext {
    authentication: Option<Authentication>,
}

impl SecurityContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
        }
    }

    pub fn set_authentication(&mut self, authentication: Authentication) {
        self.authentication = Some(authentication);
    }

    pub fn clear(&mut self) {
        self.authentication = None;
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.authentication.as_ref().map(Authentication::principal)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }
}

/// Login attempt as submitted.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password: PlainPassword,
}

/// Successful login: the issued token and who it was issued to.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub principal: Principal,
}
