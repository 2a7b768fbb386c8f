#![cfg(feature = "sequence")]
//! Tests for the do_! macro (do-notation style syntax for containers).
//!
//! The do_! macro provides a convenient syntax for chaining container
//! operations, similar to Haskell's do-notation or Scala's for-comprehension.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind operation
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression (must be a container)

use monars::container::{Maybe, Result};
use monars::do_;

// =============================================================================
// Maybe Tests
// =============================================================================

mod maybe_tests {
    use super::*;

    #[test]
    fn maybe_basic_bind_chain() {
        let result = do_! {
            x <= Maybe::some(5);
            y <= Maybe::some(10);
            Maybe::some(x + y)
        };
        assert_eq!(result, Maybe::some(15));
    }

    #[test]
    fn maybe_with_let_binding() {
        let result = do_! {
            x <= Maybe::some(5);
            y <= Maybe::some(10);
            let z = x + y;
            Maybe::some(z * 2)
        };
        assert_eq!(result, Maybe::some(30));
    }

    #[test]
    fn maybe_short_circuit_on_none() {
        let result: Maybe<i32> = do_! {
            x <= Maybe::some(5);
            y <= Maybe::<i32>::none();
            Maybe::some(x + y)
        };
        assert_eq!(result, Maybe::none());
    }

    #[test]
    fn maybe_short_circuit_early() {
        let result: Maybe<i32> = do_! {
            x <= Maybe::<i32>::none();
            y <= Maybe::some(10);
            Maybe::some(x + y)
        };
        assert_eq!(result, Maybe::none());
    }

    #[test]
    fn maybe_single_bind() {
        let result = do_! {
            x <= Maybe::some(42);
            Maybe::some(x)
        };
        assert_eq!(result, Maybe::some(42));
    }

    #[test]
    fn maybe_multiple_let_bindings() {
        let result = do_! {
            x <= Maybe::some(2);
            let a = x * 3;
            let b = a + 1;
            y <= Maybe::some(10);
            let c = b * y;
            Maybe::some(c)
        };
        // x = 2, a = 6, b = 7, y = 10, c = 70
        assert_eq!(result, Maybe::some(70));
    }

    #[test]
    fn maybe_tuple_pattern() {
        let result = do_! {
            (a, b) <= Maybe::some((1, 2));
            Maybe::some(a + b)
        };
        assert_eq!(result, Maybe::some(3));
    }

    #[test]
    fn maybe_conditional_computation() {
        let result = do_! {
            x <= Maybe::some(5);
            y <= if x > 3 { Maybe::some(x * 2) } else { Maybe::none() };
            Maybe::some(y)
        };
        assert_eq!(result, Maybe::some(10));
    }

    #[test]
    fn maybe_conditional_fails() {
        let result: Maybe<i32> = do_! {
            x <= Maybe::some(2);
            y <= if x > 3 { Maybe::some(x * 2) } else { Maybe::none() };
            Maybe::some(y)
        };
        assert_eq!(result, Maybe::none());
    }
}

// =============================================================================
// Result Tests
// =============================================================================

mod result_tests {
    use super::*;

    #[test]
    fn result_basic_bind_chain() {
        let result: Result<i32, &str> = do_! {
            x <= Result::success(5);
            y <= Result::success(10);
            Result::success(x + y)
        };
        assert_eq!(result, Result::success(15));
    }

    #[test]
    fn result_with_failure() {
        let result: Result<i32, &str> = do_! {
            x <= Result::success(5);
            y <= Result::<i32, _>::failure("failure occurred");
            Result::success(x + y)
        };
        assert_eq!(result, Result::failure("failure occurred"));
    }

    #[test]
    fn result_early_failure() {
        let result: Result<i32, &str> = do_! {
            x <= Result::<i32, _>::failure("early failure");
            y <= Result::success(10);
            Result::success(x + y)
        };
        assert_eq!(result, Result::failure("early failure"));
    }

    #[test]
    fn result_with_validation() {
        fn validate_positive(n: i32) -> Result<i32, &'static str> {
            if n > 0 {
                Result::success(n)
            } else {
                Result::failure("must be positive")
            }
        }

        let result: Result<i32, &str> = do_! {
            x <= validate_positive(5);
            y <= validate_positive(10);
            Result::success(x + y)
        };
        assert_eq!(result, Result::success(15));
    }

    #[test]
    fn result_validation_fails() {
        fn validate_positive(n: i32) -> Result<i32, &'static str> {
            if n > 0 {
                Result::success(n)
            } else {
                Result::failure("must be positive")
            }
        }

        let result: Result<i32, &str> = do_! {
            x <= validate_positive(5);
            y <= validate_positive(-3);
            Result::success(x + y)
        };
        assert_eq!(result, Result::failure("must be positive"));
    }
}

// =============================================================================
// Complex Composition Tests
// =============================================================================

mod complex_tests {
    use super::*;

    #[test]
    fn maybe_nested_structure() {
        let outer = Maybe::some((1, Maybe::some(2)));
        let result = do_! {
            (a, inner) <= outer;
            b <= inner;
            Maybe::some(a + b)
        };
        assert_eq!(result, Maybe::some(3));
    }

    #[test]
    fn maybe_with_closures() {
        let double = |x: i32| Maybe::some(x * 2);
        let add_one = |x: i32| Maybe::some(x + 1);

        let result = do_! {
            x <= Maybe::some(5);
            y <= double(x);
            z <= add_one(y);
            Maybe::some(z)
        };
        assert_eq!(result, Maybe::some(11)); // 5 -> 10 -> 11
    }

    #[test]
    fn result_parse_then_validate() {
        fn parse_int(s: &str) -> Result<i32, String> {
            s.parse::<i32>().map_err(|e| e.to_string()).into()
        }

        fn validate_range(n: i32) -> Result<i32, String> {
            if (0..=100).contains(&n) {
                Result::success(n)
            } else {
                Result::failure("out of range".to_string())
            }
        }

        let result: Result<i32, String> = do_! {
            x <= parse_int("42");
            y <= validate_range(x);
            Result::success(y * 2)
        };
        assert_eq!(result, Result::success(84));
    }

    #[test]
    fn user_registration_pipeline() {
        #[derive(Debug, PartialEq)]
        struct User {
            name: String,
            email: String,
        }

        fn validate_name(name: &str) -> Result<String, String> {
            if name.is_empty() {
                Result::failure("name must not be empty".to_string())
            } else {
                Result::success(name.to_string())
            }
        }

        fn validate_email(email: &str) -> Result<String, String> {
            if email.contains('@') {
                Result::success(email.to_string())
            } else {
                Result::failure(format!("invalid email: {}", email))
            }
        }

        fn save_user(name: String, email: String) -> Result<User, String> {
            Result::success(User { name, email })
        }

        let saved = do_! {
            name <= validate_name("ada");
            email <= validate_email("ada@example.com");
            save_user(name, email)
        };
        assert_eq!(
            saved,
            Result::success(User {
                name: "ada".to_string(),
                email: "ada@example.com".to_string(),
            })
        );

        let rejected = do_! {
            name <= validate_name("ada");
            email <= validate_email("not-an-email");
            save_user(name, email)
        };
        assert_eq!(
            rejected,
            Result::failure("invalid email: not-an-email".to_string())
        );
    }

    #[test]
    fn deeply_nested_computation() {
        let result = do_! {
            a <= Maybe::some(1);
            b <= Maybe::some(2);
            c <= Maybe::some(3);
            d <= Maybe::some(4);
            e <= Maybe::some(5);
            let sum = a + b + c + d + e;
            Maybe::some(sum)
        };
        assert_eq!(result, Maybe::some(15));
    }

    #[test]
    fn mixed_operations() {
        let result = do_! {
            x <= Maybe::some(10);
            let doubled = x * 2;
            y <= Maybe::some(doubled);
            let tripled = y * 3;
            z <= Maybe::some(tripled);
            Maybe::some(z)
        };
        // x = 10, doubled = 20, y = 20, tripled = 60, z = 60
        assert_eq!(result, Maybe::some(60));
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn single_expression_only() {
        let result = do_! {
            Maybe::some(42)
        };
        assert_eq!(result, Maybe::some(42));
    }

    #[test]
    fn wildcard_pattern() {
        let result = do_! {
            _ <= Maybe::some(5);
            Maybe::some(42)
        };
        assert_eq!(result, Maybe::some(42));
    }

    #[test]
    fn unit_payload_handling() {
        let result: Maybe<()> = do_! {
            x <= Maybe::some(5);
            _ <= Maybe::some(x + 1);
            Maybe::some(())
        };
        assert_eq!(result, Maybe::some(()));
    }

    #[test]
    fn string_payloads() {
        let result = do_! {
            s <= Maybe::some("hello".to_string());
            Maybe::some(format!("{} world", s))
        };
        assert_eq!(result, Maybe::some("hello world".to_string()));
    }
}
