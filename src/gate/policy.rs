use super::identity::{Identity, Role};

/// ProtectedArea
///
/// The two path prefixes the gate guards. Each belongs to exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedArea {
    Profile,
    Dashboard,
}

impl ProtectedArea {
    pub fn prefix(&self) -> &'static str {
        match self {
            ProtectedArea::Profile => "/profile",
            ProtectedArea::Dashboard => "/dashboard",
        }
    }

    /// The role allowed into this area.
    pub fn owner(&self) -> Role {
        match self {
            ProtectedArea::Profile => Role::User,
            ProtectedArea::Dashboard => Role::Admin,
        }
    }

    /// Matches the prefix itself or any sub-path of it. `/profiles` is not `/profile`.
    pub fn for_path(path: &str) -> Option<Self> {
        [ProtectedArea::Profile, ProtectedArea::Dashboard]
            .into_iter()
            .find(|area| {
                path.strip_prefix(area.prefix())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }
}

/// RedirectTarget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
    Profile,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Dashboard => "/dashboard",
            RedirectTarget::Profile => "/profile",
        }
    }

    /// Where a signed-in caller with `role` belongs.
    pub fn home_of(role: Role) -> Self {
        match role {
            Role::Admin => RedirectTarget::Dashboard,
            Role::User => RedirectTarget::Profile,
        }
    }
}

/// GateDecision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    Redirect(RedirectTarget),
}

/// evaluate
///
/// The routing table of the access gate:
///
/// | Path prefix  | No identity | user        | admin        |
/// |--------------|-------------|-------------|--------------|
/// | `/profile`   | `/login`    | allow       | `/dashboard` |
/// | `/dashboard` | `/login`    | `/profile`  | allow        |
/// | other        | allow       | allow       | allow        |
pub fn evaluate(path: &str, identity: &Identity) -> GateDecision {
    let Some(area) = ProtectedArea::for_path(path) else {
        return GateDecision::Continue;
    };

    match identity.role() {
        None => GateDecision::Redirect(RedirectTarget::Login),
        Some(role) if role == area.owner() => GateDecision::Continue,
        Some(role) => GateDecision::Redirect(RedirectTarget::home_of(role)),
    }
}
