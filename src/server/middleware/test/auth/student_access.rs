use super::*;

fn user(role: Role, student_id: Option<i32>) -> User {
    User {
        id: 1,
        name: "Usuario".to_string(),
        email: "usuario@test.cl".to_string(),
        role,
        student_id,
    }
}

/// Tests that a family account may only read its linked student.
///
/// Expected: Ok for the linked student, Err(AccessDenied) for any other
#[test]
fn family_limited_to_linked_student() {
    let family = user(Role::Familia, Some(7));

    assert!(require_student_access(&family, 7).is_ok());
    assert!(matches!(
        require_student_access(&family, 8),
        Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
    ));
}

/// Tests that staff may read any student.
///
/// Expected: Ok
#[test]
fn staff_read_any_student() {
    assert!(require_student_access(&user(Role::Docente, None), 8).is_ok());
    assert!(require_student_access(&user(Role::Admin, None), 8).is_ok());
}

/// Tests resolving the student filter of a listing.
///
/// Verifies that a family with no filter is pinned to its linked student and that staff
/// keep the requested filter.
///
/// Expected: Some(7) for the family, the requested value for staff
#[test]
fn scope_pins_family_to_linked_student() {
    let family = user(Role::Familia, Some(7));

    assert_eq!(student_scope(&family, None).unwrap(), Some(7));
    assert_eq!(student_scope(&family, Some(7)).unwrap(), Some(7));
    assert!(student_scope(&family, Some(3)).is_err());

    let teacher = user(Role::Docente, None);
    assert_eq!(student_scope(&teacher, None).unwrap(), None);
    assert_eq!(student_scope(&teacher, Some(3)).unwrap(), Some(3));
}

/// Tests a family account with no linked student.
///
/// Expected: Err(AccessDenied)
#[test]
fn scope_refuses_unlinked_family() {
    assert!(matches!(
        student_scope(&user(Role::Familia, None), None),
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}
