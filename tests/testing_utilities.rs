//! Tests and examples for the assertion macros
//!
//! This suite shows the patterns for testing code that returns outcomes.

use tideway::prelude::*;
use tideway::{assert_fail, assert_fail_eq, assert_ok};

// Example domain types for testing
#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: u8,
}

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    BadEmail(String),
    TooYoung(u8),
    Taken(String),
}

struct Directory {
    users: Vec<User>,
}

impl Directory {
    fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    fn is_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }
}

fn check_email(email: &str) -> Outcome<String, SignupError> {
    if email.contains('@') && email.contains('.') {
        ok(email.to_string())
    } else {
        fail(SignupError::BadEmail(email.to_string()))
    }
}

fn check_age(age: u8) -> Outcome<u8, SignupError> {
    if age >= 18 {
        ok(age)
    } else {
        fail(SignupError::TooYoung(age))
    }
}

fn signup(directory: &Directory, email: &str, age: u8) -> Outcome<User, SignupError> {
    check_email(email)
        .flat_map(|email| {
            if directory.is_taken(&email) {
                fail(SignupError::Taken(email))
            } else {
                ok(email)
            }
        })
        .zip_with(check_age(age), |email, age| User { email, age })
}

fn signup_async(email: &'static str, age: u8) -> AsyncOutcome<User, SignupError> {
    check_email(email).flat_map_future(move |email| async move {
        tokio::task::yield_now().await;
        Result::<_, SignupError>::Ok(email)
    })
    .flat_map(move |email| check_age(age).map(|age| User { email, age }))
}

#[test]
fn test_signup_success() {
    let directory = Directory::with_users(vec![]);
    assert_ok!(signup(&directory, "ada@example.com", 36));
    assert_ok!(
        signup(&directory, "ada@example.com", 36),
        User {
            email: "ada@example.com".to_string(),
            age: 36
        }
    );
}

#[test]
fn test_signup_bad_email() {
    let directory = Directory::with_users(vec![]);
    assert_fail!(signup(&directory, "not-an-email", 36));
    assert_fail_eq!(
        signup(&directory, "not-an-email", 36),
        SignupError::BadEmail("not-an-email".to_string())
    );
}

#[test]
fn test_signup_reports_first_failure_only() {
    let directory = Directory::with_users(vec![]);
    assert_fail_eq!(
        signup(&directory, "nope", 12),
        SignupError::BadEmail("nope".to_string())
    );
}

#[test]
fn test_signup_taken() {
    let directory = Directory::with_users(vec![User {
        email: "ada@example.com".to_string(),
        age: 36,
    }]);
    assert_fail_eq!(
        signup(&directory, "ada@example.com", 40),
        SignupError::Taken("ada@example.com".to_string())
    );
}

#[tokio::test]
async fn test_macros_work_on_awaited_values() {
    assert_ok!(signup_async("grace@example.com", 45).await);
    assert_fail_eq!(
        signup_async("grace@example.com", 9).await,
        SignupError::TooYoung(9)
    );
}

#[test]
#[should_panic(expected = "Expected Ok, got Fail: TooYoung(3)")]
fn test_assert_ok_reports_error_payload() {
    assert_ok!(check_age(3));
}

#[test]
#[should_panic(expected = "Expected Fail, got Ok: 30")]
fn test_assert_fail_reports_ok_payload() {
    assert_fail!(check_age(30));
}
