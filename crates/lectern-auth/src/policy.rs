//! Access policy table.
//!
//! Each operation the API exposes maps to exactly one [`AccessRule`]. The
//! table is built once at startup from a declarative list, never mutated
//! afterwards, and shared read-only across every concurrent call. No
//! locking is needed because no writer ever runs.

use std::collections::HashMap;

use crate::claims::Role;

/// Access requirement for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// No credential required.
    Public,
    /// Any valid, unexpired credential; no specific role.
    AuthenticatedOnly,
    /// A valid credential whose role claim equals the given role.
    RoleRestricted(Role),
}

/// Immutable mapping from method key to [`AccessRule`].
///
/// Method keys are the stable operation identifiers the access layer
/// resolves per call: `"<HTTP-METHOD> <route-template>"`, for example
/// `"POST /api/courses"` or `"GET /api/courses/{id}"`.
///
/// [`lookup`](PolicyTable::lookup) is total: a method not present in the
/// table resolves to [`AccessRule::AuthenticatedOnly`]. An unlisted method
/// is never public.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    rules: HashMap<String, AccessRule>,
}

impl PolicyTable {
    /// Builds a table from a list of `(method key, rule)` pairs.
    pub fn from_rules<K, I>(rules: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AccessRule)>,
    {
        Self {
            rules: rules.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }

    /// Resolves the rule for a method. Unknown methods require
    /// authentication: deny-by-default, never public.
    pub fn lookup(&self, method: &str) -> AccessRule {
        self.rules
            .get(method)
            .copied()
            .unwrap_or(AccessRule::AuthenticatedOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PolicyTable {
        PolicyTable::from_rules([
            ("POST /api/students/login", AccessRule::Public),
            (
                "POST /api/courses",
                AccessRule::RoleRestricted(Role::Instructor),
            ),
            (
                "POST /api/enrollments",
                AccessRule::RoleRestricted(Role::Student),
            ),
        ])
    }

    #[test]
    fn test_lookup_public() {
        let table = sample_table();
        assert_eq!(
            table.lookup("POST /api/students/login"),
            AccessRule::Public
        );
    }

    #[test]
    fn test_lookup_role_restricted() {
        let table = sample_table();
        assert_eq!(
            table.lookup("POST /api/courses"),
            AccessRule::RoleRestricted(Role::Instructor)
        );
        assert_eq!(
            table.lookup("POST /api/enrollments"),
            AccessRule::RoleRestricted(Role::Student)
        );
    }

    #[test]
    fn test_unknown_method_requires_authentication() {
        let table = sample_table();
        assert_eq!(
            table.lookup("GET /api/does-not-exist"),
            AccessRule::AuthenticatedOnly
        );
    }

    #[test]
    fn test_empty_table_denies_by_default() {
        let table = PolicyTable::default();
        assert_eq!(
            table.lookup("GET /api/anything"),
            AccessRule::AuthenticatedOnly
        );
    }
}
