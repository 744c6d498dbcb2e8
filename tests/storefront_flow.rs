//! End-to-end reducer flows across the three screens, plus the error
//! dismissal timer task.

use std::sync::mpsc;

use vestenet::core::action::{Action, Effect, update};
use vestenet::core::catalog::default_catalog;
use vestenet::core::config::{DEFAULT_ERROR_TIMEOUT_MS, ResolvedConfig};
use vestenet::core::form::Field;
use vestenet::core::screen::ScreenId;
use vestenet::core::state::App;
use vestenet::tui::spawn_error_dismiss;

// ============================================================================
// Helper Functions
// ============================================================================

fn demo_app() -> App {
    App::from_config(&ResolvedConfig {
        store_name: "Vestenet".to_string(),
        start_screen: ScreenId::Login,
        error_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
        products: default_catalog(),
    })
}

fn edit(app: &mut App, field: Field, value: &str) {
    update(app, Action::Edit(field, value.to_string()));
}

// ============================================================================
// Screen Flow Tests
// ============================================================================

#[test]
fn test_full_signup_then_login_then_logoff() {
    let mut app = demo_app();
    assert_eq!(app.screen, ScreenId::Login);

    // Jump to registration and fill out the form.
    update(&mut app, Action::GoTo(ScreenId::Registration));
    edit(&mut app, Field::Username, "ana");
    edit(&mut app, Field::Email, "ana@example.com");
    edit(&mut app, Field::Password, "segredo");
    edit(&mut app, Field::Cpf, "123-456-789-01");

    // Interspersed punctuation was stripped and the digits masked.
    assert_eq!(app.form.get(Field::Cpf), "123.456.789-01");

    assert_eq!(update(&mut app, Action::Submit), Effect::None);
    assert_eq!(app.screen, ScreenId::Login);
    assert_eq!(app.status_message, "Account created, sign in to continue");

    // Registration fields were discarded with the screen.
    assert_eq!(app.form.get(Field::Email), "");

    // Sign in with matching credentials.
    edit(&mut app, Field::Username, "ana");
    edit(&mut app, Field::Password, "ana");
    assert_eq!(update(&mut app, Action::Submit), Effect::None);
    assert_eq!(app.screen, ScreenId::Main);

    // Browse and "buy".
    update(&mut app, Action::Buy(2));
    assert!(app.status_message.contains("Jaqueta Verde"));

    // Log off.
    update(&mut app, Action::GoTo(ScreenId::Login));
    assert_eq!(app.screen, ScreenId::Login);
    assert!(app.error.is_none());
}

#[test]
fn test_rejection_then_recovery() {
    let mut app = demo_app();

    edit(&mut app, Field::Username, "ana");
    edit(&mut app, Field::Password, "wrong");
    let effect = update(&mut app, Action::Submit);
    assert_eq!(
        effect,
        Effect::ScheduleErrorDismiss {
            generation: app.error_generation
        }
    );
    assert_eq!(app.error, Some("invalid credentials"));
    assert_eq!(app.screen, ScreenId::Login);

    // Fields survive a rejected submit; only navigation resets them.
    assert_eq!(app.form.get(Field::Username), "ana");

    // Fixing the password and resubmitting clears the error and signs in.
    edit(&mut app, Field::Password, "ana");
    assert_eq!(update(&mut app, Action::Submit), Effect::None);
    assert_eq!(app.screen, ScreenId::Main);
    assert!(app.error.is_none());
}

#[test]
fn test_registration_error_priority_across_submits() {
    let mut app = demo_app();
    update(&mut app, Action::GoTo(ScreenId::Registration));

    // Bad email and bad CPF: the email message wins.
    edit(&mut app, Field::Email, "a.b.com");
    edit(&mut app, Field::Cpf, "12");
    update(&mut app, Action::Submit);
    assert_eq!(app.error, Some("invalid email"));

    // Email fixed, CPF still short: the CPF message shows.
    edit(&mut app, Field::Email, "a@b.com");
    update(&mut app, Action::Submit);
    assert_eq!(app.error, Some("invalid CPF"));

    // Both fixed: accepted, back at login.
    edit(&mut app, Field::Cpf, "12345678901");
    update(&mut app, Action::Submit);
    assert_eq!(app.screen, ScreenId::Login);
    assert!(app.error.is_none());
}

#[test]
fn test_stale_timer_across_two_rejections() {
    let mut app = demo_app();

    edit(&mut app, Field::Password, "wrong");
    let Effect::ScheduleErrorDismiss { generation: first } = update(&mut app, Action::Submit)
    else {
        panic!("expected a scheduled dismissal");
    };

    // Second rejection before the first timer fires.
    let Effect::ScheduleErrorDismiss { generation: second } = update(&mut app, Action::Submit)
    else {
        panic!("expected a scheduled dismissal");
    };
    assert!(second > first);

    // The first timer lands late and must not erase the newer message.
    update(&mut app, Action::DismissError { generation: first });
    assert_eq!(app.error, Some("invalid credentials"));

    // The second timer clears it.
    update(&mut app, Action::DismissError { generation: second });
    assert!(app.error.is_none());
}

// ============================================================================
// Dismissal Timer Tests (paused tokio clock)
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_dismiss_timer_delivers_action_after_timeout() {
    let (tx, rx) = mpsc::channel();

    let handle = spawn_error_dismiss(7, 3000, tx);
    // Nothing lands before the sleep elapses.
    assert!(rx.try_recv().is_err());

    handle.await.unwrap();
    assert_eq!(rx.try_recv(), Ok(Action::DismissError { generation: 7 }));
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_timer_clears_error_through_reducer() {
    let mut app = demo_app();
    let (tx, rx) = mpsc::channel();

    edit(&mut app, Field::Password, "wrong");
    let Effect::ScheduleErrorDismiss { generation } = update(&mut app, Action::Submit) else {
        panic!("expected a scheduled dismissal");
    };

    spawn_error_dismiss(generation, app.error_timeout_ms, tx)
        .await
        .unwrap();

    // Drain the channel the way the event loop does.
    while let Ok(action) = rx.try_recv() {
        update(&mut app, action);
    }
    assert!(app.error.is_none());
}
