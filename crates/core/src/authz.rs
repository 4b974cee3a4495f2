//! Role-based authorization policy.
//!
//! The entire policy is one table: [`PermissionTier::allowed_roles`] maps
//! each tier to its fixed set of permitted roles. [`authorize`] and every
//! role predicate derive from that single table so the role sets cannot
//! drift apart between call sites.
//!
//! This module has zero external dependencies (no DB, no async, no I/O)
//! and is invoked from the api crate's extractors on every protected
//! request.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// A user's role. Closed enumeration; string forms match the seed data in
/// the `roles` table migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    CollegeAdmin,
    HospitalAdmin,
    DeptHead,
    AssetManager,
    User,
}

impl Role {
    /// Return the role name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::CollegeAdmin => "college_admin",
            Self::HospitalAdmin => "hospital_admin",
            Self::DeptHead => "dept_head",
            Self::AssetManager => "asset_manager",
            Self::User => "user",
        }
    }

    /// Parse a role name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(Self::SuperAdmin),
            "college_admin" => Some(Self::CollegeAdmin),
            "hospital_admin" => Some(Self::HospitalAdmin),
            "dept_head" => Some(Self::DeptHead),
            "asset_manager" => Some(Self::AssetManager),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// All valid role names.
    pub const ALL: &'static [&'static str] = &[
        "super_admin",
        "college_admin",
        "hospital_admin",
        "dept_head",
        "asset_manager",
        "user",
    ];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Permission tiers
// ---------------------------------------------------------------------------

/// A named authorization requirement. Each tier maps to an explicit set of
/// permitted roles; membership is checked by set, never by rank comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionTier {
    /// Any authenticated identity. There is no anonymous tier.
    Any,
    /// Asset CRUD, imports, maintenance scheduling.
    AssetManagement,
    /// User management, department administration.
    AdminAction,
    /// Organization-structure changes.
    SuperAdminOnly,
}

impl PermissionTier {
    /// The canonical tier -> role-set table. `Any` admits every role, so its
    /// slice lists all of them; [`authorize`] short-circuits it anyway.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Any => &[
                Role::SuperAdmin,
                Role::CollegeAdmin,
                Role::HospitalAdmin,
                Role::DeptHead,
                Role::AssetManager,
                Role::User,
            ],
            Self::AssetManagement => &[
                Role::SuperAdmin,
                Role::CollegeAdmin,
                Role::HospitalAdmin,
                Role::DeptHead,
                Role::AssetManager,
            ],
            Self::AdminAction => &[Role::SuperAdmin, Role::CollegeAdmin, Role::HospitalAdmin],
            Self::SuperAdminOnly => &[Role::SuperAdmin],
        }
    }
}

// ---------------------------------------------------------------------------
// Caller identity
// ---------------------------------------------------------------------------

/// Organizational-unit references attached to a caller, used by the
/// persistence layer for row-level scoping (e.g. restricting asset lists
/// to the caller's own department). Not consulted by [`authorize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitRefs {
    pub department_id: Option<DbId>,
    pub college_id: Option<DbId>,
    pub hospital_id: Option<DbId>,
}

/// The authenticated caller, as resolved by the session/token layer.
/// Immutable per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub id: DbId,
    pub role: Role,
    pub org_units: OrgUnitRefs,
}

impl CallerIdentity {
    pub fn is_super_admin(&self) -> bool {
        role_in(self.role, PermissionTier::SuperAdminOnly)
    }

    /// True for the roles permitted administrative actions
    /// (super admin, college admin, hospital admin).
    pub fn is_administrator(&self) -> bool {
        role_in(self.role, PermissionTier::AdminAction)
    }

    /// True for the roles permitted asset management
    /// (administrators plus department heads and asset managers).
    pub fn can_manage_assets(&self) -> bool {
        role_in(self.role, PermissionTier::AssetManagement)
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome of a policy evaluation. The api layer maps
/// `DeniedUnauthenticated` to 401 and `DeniedForbidden` to 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed(CallerIdentity),
    DeniedUnauthenticated,
    DeniedForbidden,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Evaluate the policy for a possibly-absent caller against a required tier.
///
/// An absent identity is denied for every tier, including `Any`: each
/// protected operation requires some authenticated caller. A present
/// identity passes `Any` unconditionally and otherwise must hold a role in
/// the tier's allowed set. Pure function; cannot fail.
pub fn authorize(identity: Option<&CallerIdentity>, tier: PermissionTier) -> Decision {
    let Some(identity) = identity else {
        return Decision::DeniedUnauthenticated;
    };

    match tier {
        PermissionTier::Any => Decision::Allowed(identity.clone()),
        _ if role_in(identity.role, tier) => Decision::Allowed(identity.clone()),
        _ => Decision::DeniedForbidden,
    }
}

/// Membership test against the canonical tier table.
fn role_in(role: Role, tier: PermissionTier) -> bool {
    tier.allowed_roles().contains(&role)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
