use axum::extract::rejection::JsonRejection;

use super::problem::Problem;
use crate::domain::error::DomainError;

const TYPE_BASE: &str = "https://errors.accounts.local/";

/// Map a domain error to a Problem for the given request path.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let (problem, code) = match e {
        DomainError::NotFound { id } => (
            Problem::not_found(format!("Account with id '{id}' was not found")),
            "ACCOUNT_NOT_FOUND",
        ),
        DomainError::AlreadyExists { id } => (
            Problem::conflict(format!("Account with id '{id}' already exists")),
            "ACCOUNT_ALREADY_EXISTS",
        ),
        DomainError::Validation { .. } => {
            (Problem::unprocessable(e.to_string()), "ACCOUNT_VALIDATION")
        }
        DomainError::Database { .. } => {
            // Details stay in the log.
            tracing::error!(error = ?e, "Database error occurred");
            (
                Problem::internal("An internal database error occurred"),
                "ACCOUNT_DATABASE",
            )
        }
    };

    finish(problem, code, instance)
}

/// Map a request body the `Json` extractor refused to a Problem, keeping the
/// extractor's status (415, 400 or 422).
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    let status = rejection.status();
    let title = status.canonical_reason().unwrap_or("Bad Request");
    let problem = Problem::new(status, title, rejection.body_text());
    finish(problem, "ACCOUNT_INVALID_BODY", instance)
}

fn finish(problem: Problem, code: &str, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    problem
        .with_type(format!("{TYPE_BASE}{}", code.to_lowercase()))
        .with_code(code)
        .with_instance(instance)
        .with_trace_id(trace_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn status_per_variant() {
        let cases = [
            (DomainError::not_found("a1"), StatusCode::NOT_FOUND),
            (DomainError::already_exists("a1"), StatusCode::CONFLICT),
            (
                DomainError::validation("tags", "not a list"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::database("disk I/O"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let p = domain_error_to_problem(&err, "/account/a1");
            assert_eq!(p.status, status, "{err}");
            assert_eq!(p.instance, "/account/a1");
        }
    }

    #[test]
    fn database_details_are_not_exposed() {
        let p = domain_error_to_problem(&DomainError::database("secret path"), "/account");
        assert!(!p.detail.contains("secret"));
        assert_eq!(p.code, "ACCOUNT_DATABASE");
    }
}
