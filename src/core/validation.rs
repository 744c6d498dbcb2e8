//! # Validation
//!
//! Pure decision functions for the login and registration forms. Given the
//! current field contents they either hand back a navigation intent or a
//! rejection message. Nothing here touches the terminal or schedules work.
//!
//! Both rule sets are the storefront demo's placeholder checks, kept
//! deliberately naive. See the warnings on [`validate_login`] and
//! [`validate_registration`] before reading anything more into them.

use crate::core::screen::ScreenId;

pub const INVALID_CREDENTIALS: &str = "invalid credentials";
pub const INVALID_EMAIL: &str = "invalid email";
pub const INVALID_CPF: &str = "invalid CPF";

/// Digits in a Brazilian CPF number.
const CPF_DIGITS: usize = 11;

/// Outcome of a submit: either a destination to navigate to, or a message
/// for the error line. Produced fresh on every submit, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accepted { destination: ScreenId },
    Rejected { message: &'static str },
}

/// Format a raw digit sequence as `DDD.DDD.DDD-DD`.
///
/// Non-digit characters are stripped before counting. With exactly 11
/// digits the masked form is returned; anything else comes back unchanged.
/// Idempotent: masking an already-masked CPF is a no-op.
pub fn mask_cpf(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == CPF_DIGITS {
        format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )
    } else {
        input.to_string()
    }
}

/// Sign-in rule: accept iff username and password are byte-for-byte equal.
///
/// WARNING: placeholder demo logic, not authentication. The storefront has
/// no account backend; this check only exists to exercise the error path.
/// Two empty fields are equal and therefore sign in successfully.
pub fn validate_login(username: &str, password: &str) -> Validation {
    if username == password {
        Validation::Accepted {
            destination: ScreenId::Main,
        }
    } else {
        Validation::Rejected {
            message: INVALID_CREDENTIALS,
        }
    }
}

/// Registration rule: the email must contain `@` and the CPF must carry
/// exactly 11 digits (so that masking produced a full `DDD.DDD.DDD-DD`).
///
/// WARNING: placeholder demo logic. No checksum, no MX lookup: a lone `@`
/// and the right digit count pass. When both checks fail the email message
/// wins; the CPF complaint only shows once the email is in shape.
pub fn validate_registration(email: &str, cpf: &str) -> Validation {
    if !email.contains('@') {
        return Validation::Rejected {
            message: INVALID_EMAIL,
        };
    }
    let digit_count = cpf.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count != CPF_DIGITS {
        return Validation::Rejected {
            message: INVALID_CPF,
        };
    }
    Validation::Accepted {
        destination: ScreenId::Login,
    }
}
