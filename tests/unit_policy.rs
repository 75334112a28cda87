use lectern::router::access_policy;
use lectern_auth::{AccessRule, PolicyTable, Role};

#[test]
fn test_lookup_is_total() {
    let table = PolicyTable::default();
    // No rule anywhere, yet lookup still answers.
    assert_eq!(
        table.lookup("GET /api/whatever"),
        AccessRule::AuthenticatedOnly
    );
}

#[test]
fn test_explicit_rules_win_over_default() {
    let table = PolicyTable::from_rules([
        ("GET /api/open", AccessRule::Public),
        (
            "DELETE /api/locked",
            AccessRule::RoleRestricted(Role::Instructor),
        ),
    ]);

    assert_eq!(table.lookup("GET /api/open"), AccessRule::Public);
    assert_eq!(
        table.lookup("DELETE /api/locked"),
        AccessRule::RoleRestricted(Role::Instructor)
    );
    assert_eq!(
        table.lookup("GET /api/other"),
        AccessRule::AuthenticatedOnly
    );
}

#[test]
fn test_production_policy_has_no_public_mutations() {
    // Every public entry in the real table is a registration, a login, or a
    // GET; nothing state-changing is reachable without a credential except
    // the two account-creation endpoints.
    let table = access_policy();

    for method in [
        "POST /api/courses",
        "PUT /api/courses/{id}",
        "DELETE /api/courses/{id}",
        "POST /api/lectures",
        "PUT /api/lectures/{id}",
        "DELETE /api/lectures/{id}",
        "POST /api/enrollments",
        "DELETE /api/enrollments/{student_id}/{course_id}",
        "POST /api/reviews",
        "PUT /api/students/{id}",
        "PUT /api/instructors/{id}",
    ] {
        assert_ne!(table.lookup(method), AccessRule::Public, "{}", method);
    }
}

#[test]
fn test_production_policy_role_split() {
    let table = access_policy();

    assert_eq!(
        table.lookup("POST /api/courses"),
        AccessRule::RoleRestricted(Role::Instructor)
    );
    assert_eq!(
        table.lookup("POST /api/enrollments"),
        AccessRule::RoleRestricted(Role::Student)
    );
    assert_eq!(table.lookup("GET /api/courses"), AccessRule::Public);
    assert_eq!(
        table.lookup("GET /api/lectures/{id}"),
        AccessRule::AuthenticatedOnly
    );
}
