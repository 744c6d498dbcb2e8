//! # Actions
//!
//! Everything that can happen in Vestenet becomes an `Action`.
//! User types in a field? That's `Action::Edit`. The error timer fires?
//! That's `Action::DismissError`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing what the surface must do
//! next. No I/O here; timers and terminal work happen in the `tui` layer.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive `update()` with a scripted
//! sequence of actions and assert on the state after each step.

use crate::core::form::Field;
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::core::validation::{self, Validation};

/// Input events delivered by the rendering surface (or its timers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A field-edit event: replace the named field's value.
    Edit(Field, String),
    /// Submit-button activation on the active screen.
    Submit,
    /// Explicit navigation: sign-up link, back, log off.
    GoTo(ScreenId),
    /// Buy request for the catalog item at this index.
    Buy(usize),
    /// The dismissal timer for the error shown at `generation` elapsed.
    DismissError { generation: u64 },
    Quit,
}

/// Follow-up work `update()` asks the surface to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule a delayed `Action::DismissError { generation }` after the
    /// configured error timeout.
    ScheduleErrorDismiss { generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Edit(field, value) => {
            app.form.set(field, value);
            Effect::None
        }
        Action::Submit => submit(app),
        Action::GoTo(destination) => {
            app.navigate(destination);
            Effect::None
        }
        Action::Buy(index) => {
            // The demo has no checkout; the buy button only talks back.
            if let Some(product) = app.catalog.get(index) {
                app.status_message = format!("{}: checkout not available in the demo", product.name);
            }
            Effect::None
        }
        Action::DismissError { generation } => {
            // A timer may arrive long after its error was replaced or
            // cleared. Only the one matching the current generation may
            // touch the slot; everything older is a no-op.
            if generation == app.error_generation {
                app.error = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Run the active screen's rule set against the current field values.
fn submit(app: &mut App) -> Effect {
    let verdict = match app.screen {
        ScreenId::Login => validation::validate_login(
            app.form.get(Field::Username),
            app.form.get(Field::Password),
        ),
        ScreenId::Registration => validation::validate_registration(
            app.form.get(Field::Email),
            app.form.get(Field::Cpf),
        ),
        // The storefront has no form to submit.
        ScreenId::Main => return Effect::None,
    };

    match verdict {
        Validation::Accepted { destination } => {
            let came_from = app.screen;
            app.navigate(destination);
            if came_from == ScreenId::Registration {
                app.status_message = "Account created, sign in to continue".to_string();
            }
            Effect::None
        }
        Validation::Rejected { message } => {
            app.error = Some(message);
            app.error_generation += 1;
            Effect::ScheduleErrorDismiss {
                generation: app.error_generation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{INVALID_CREDENTIALS, INVALID_EMAIL};
    use crate::test_support::test_app;

    fn edit(app: &mut App, field: Field, value: &str) {
        assert_eq!(
            update(app, Action::Edit(field, value.to_string())),
            Effect::None
        );
    }

    #[test]
    fn test_edit_stores_field_value() {
        let mut app = test_app();
        edit(&mut app, Field::Username, "ana");
        assert_eq!(app.form.get(Field::Username), "ana");
    }

    #[test]
    fn test_edit_cpf_echoes_masked_value() {
        let mut app = test_app();
        edit(&mut app, Field::Cpf, "12345678901");
        assert_eq!(app.form.get(Field::Cpf), "123.456.789-01");
    }

    #[test]
    fn test_login_submit_accepted_navigates_to_main() {
        let mut app = test_app();
        edit(&mut app, Field::Username, "ana");
        edit(&mut app, Field::Password, "ana");

        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.screen, ScreenId::Main);
        assert!(app.error.is_none());
        // The login fields did not survive the navigation.
        assert_eq!(app.form.get(Field::Username), "");
    }

    #[test]
    fn test_login_submit_rejected_sets_error_and_schedules_dismiss() {
        let mut app = test_app();
        edit(&mut app, Field::Username, "ana");
        edit(&mut app, Field::Password, "bob");

        let effect = update(&mut app, Action::Submit);
        assert_eq!(
            effect,
            Effect::ScheduleErrorDismiss {
                generation: app.error_generation
            }
        );
        assert_eq!(app.screen, ScreenId::Login);
        assert_eq!(app.error, Some(INVALID_CREDENTIALS));
    }

    #[test]
    fn test_registration_submit_rejects_bad_email_despite_valid_cpf() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(ScreenId::Registration));
        edit(&mut app, Field::Email, "a.b.com");
        edit(&mut app, Field::Cpf, "12345678901");

        update(&mut app, Action::Submit);
        assert_eq!(app.error, Some(INVALID_EMAIL));
        assert_eq!(app.screen, ScreenId::Registration);
    }

    #[test]
    fn test_registration_submit_accepted_returns_to_login() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(ScreenId::Registration));
        edit(&mut app, Field::Username, "ana");
        edit(&mut app, Field::Email, "ana@example.com");
        edit(&mut app, Field::Password, "secret");
        edit(&mut app, Field::Cpf, "12345678901");

        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.screen, ScreenId::Login);
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "Account created, sign in to continue");
    }

    #[test]
    fn test_dismiss_with_current_generation_clears_error() {
        let mut app = test_app();
        edit(&mut app, Field::Password, "nope");
        let effect = update(&mut app, Action::Submit);
        let Effect::ScheduleErrorDismiss { generation } = effect else {
            panic!("expected a scheduled dismissal, got {effect:?}");
        };

        update(&mut app, Action::DismissError { generation });
        assert!(app.error.is_none());
    }

    #[test]
    fn test_stale_dismiss_must_not_erase_newer_error() {
        let mut app = test_app();

        // First rejection schedules a dismissal for generation N.
        edit(&mut app, Field::Password, "nope");
        let Effect::ScheduleErrorDismiss { generation: stale } =
            update(&mut app, Action::Submit)
        else {
            panic!("expected a scheduled dismissal");
        };

        // A second rejection lands before the first timer fires.
        update(&mut app, Action::Submit);
        assert_eq!(app.error, Some(INVALID_CREDENTIALS));

        // The first timer arrives late: it targets an older generation and
        // must leave the newer message alone.
        update(&mut app, Action::DismissError { generation: stale });
        assert_eq!(app.error, Some(INVALID_CREDENTIALS));

        // The second timer is the live one.
        let live = app.error_generation;
        update(
            &mut app,
            Action::DismissError {
                generation: live,
            },
        );
        assert!(app.error.is_none());
    }

    #[test]
    fn test_navigation_makes_pending_dismiss_stale() {
        let mut app = test_app();
        edit(&mut app, Field::Password, "nope");
        let Effect::ScheduleErrorDismiss { generation } = update(&mut app, Action::Submit) else {
            panic!("expected a scheduled dismissal");
        };

        // Unmount via navigation, then let the orphaned timer fire.
        update(&mut app, Action::GoTo(ScreenId::Registration));
        update(&mut app, Action::DismissError { generation });

        assert!(app.error.is_none());
        assert_eq!(app.screen, ScreenId::Registration);
    }

    #[test]
    fn test_submit_on_main_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(ScreenId::Main));
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.screen, ScreenId::Main);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_buy_sets_status_message() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(ScreenId::Main));
        update(&mut app, Action::Buy(0));
        assert!(app.status_message.contains("Camisa Polo"));
    }

    #[test]
    fn test_buy_out_of_range_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(ScreenId::Main));
        let status_before = app.status_message.clone();
        update(&mut app, Action::Buy(99));
        assert_eq!(app.status_message, status_before);
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
