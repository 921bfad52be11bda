//! End-to-end flows through FormState
//!
//! Drives the form the way the desktop view does: field events, submit, and
//! the banner timer on a paused tokio clock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use signform_core::{
    City, Field, FormState, Mode, PickedFile, SubmitOutcome, ValidationError, ViewCommand,
    SUCCESS_BANNER_DURATION,
};
use tokio::task::JoinHandle;

fn clock_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Fill a sign-up form with values that pass every rule
fn fill_valid_sign_up(form: &mut FormState) {
    form.change(Field::Name, "Ann").unwrap();
    form.change(Field::Email, "a@b.com").unwrap();
    form.change(Field::Password, "secret1").unwrap();
    form.change(Field::ConfirmPassword, "secret1").unwrap();
    form.pick_file(Some(PickedFile::from_path("/home/ann/passport.jpg")));
    form.change(Field::Checkbox, true).unwrap();
    form.change(Field::City, "Miami").unwrap();
}

#[test]
fn test_valid_sign_up_succeeds_and_resets() {
    let mut form = FormState::new(Mode::SignUp);
    fill_valid_sign_up(&mut form);

    let outcome = form.submit(Instant::now());
    let SubmitOutcome::Accepted(accepted) = outcome else {
        panic!("valid sign-up was rejected");
    };

    assert_eq!(accepted.submitted.name, "Ann");
    assert!(accepted.commands.contains(&ViewCommand::ClearFileInput));
    assert_eq!(form.success_message(), Some("Form submitted successfully!"));
    assert_eq!(form.values().name, "");
    assert_eq!(form.values().email, "");
    assert!(form.values().file.is_none());
    assert!(!form.values().checkbox);
    assert!(form.values().city.is_none());
}

#[test]
fn test_single_bad_field_blocks_sign_up() {
    type Spoil = fn(&mut FormState);
    let cases: [(Field, ValidationError, Spoil); 7] = [
        (Field::Name, ValidationError::NameRequired, |f: &mut FormState| {
            f.change(Field::Name, "").unwrap()
        }),
        (Field::Email, ValidationError::InvalidEmail, |f: &mut FormState| {
            f.change(Field::Email, "ann.example.com").unwrap()
        }),
        (Field::Password, ValidationError::PasswordTooShort, |f: &mut FormState| {
            f.change(Field::Password, "abc").unwrap();
            f.change(Field::ConfirmPassword, "abc").unwrap();
        }),
        (Field::ConfirmPassword, ValidationError::PasswordsMismatch, |f: &mut FormState| {
            f.change(Field::ConfirmPassword, "secret2").unwrap()
        }),
        (Field::File, ValidationError::FileRequired, |f: &mut FormState| {
            f.change(Field::File, None::<PickedFile>).unwrap()
        }),
        (Field::Checkbox, ValidationError::TermsNotAccepted, |f: &mut FormState| {
            f.change(Field::Checkbox, false).unwrap()
        }),
        (Field::City, ValidationError::CityRequired, |f: &mut FormState| {
            f.change(Field::City, "").unwrap()
        }),
    ];

    for (field, expected, spoil) in cases {
        let mut form = FormState::new(Mode::SignUp);
        fill_valid_sign_up(&mut form);
        spoil(&mut form);

        let outcome = form.submit(Instant::now());
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("submit with bad {field} was accepted");
        };
        assert_eq!(errors.len(), 1, "only {field} should fail");
        assert_eq!(form.visible_error(field), Some(expected));
        assert!(!form.show_success());
    }
}

#[test]
fn test_login_needs_only_email_and_password() {
    let mut form = FormState::new(Mode::Login);
    form.change(Field::Email, "a@b.com").unwrap();
    form.change(Field::Password, "x").unwrap();

    assert!(form.is_valid());
    assert!(form.submit(Instant::now()).is_accepted());
    assert_eq!(form.success_message(), Some("Login Successfully"));
}

#[test]
fn test_login_with_bad_email_is_blocked() {
    let mut form = FormState::new(Mode::Login);
    form.change(Field::Email, "bad-email").unwrap();
    form.change(Field::Password, "x").unwrap();

    assert!(!form.submit(Instant::now()).is_accepted());
    assert_eq!(
        form.visible_error(Field::Email).map(|e| e.to_string()),
        Some("Invalid email".to_string())
    );
    assert_eq!(form.visible_error(Field::Password), None);
    // Values survive a rejected submit
    assert_eq!(form.values().email, "bad-email");
}

#[test]
fn test_toggle_resets_to_mode_defaults() {
    for start in [Mode::Login, Mode::SignUp] {
        let mut form = FormState::new(start);
        form.change(Field::Email, "half@typed").unwrap();
        form.change(Field::Password, "pw").unwrap();
        let _ = form.submit(Instant::now());

        form.toggle_mode();

        assert_eq!(form.mode(), start.toggled());
        assert_eq!(form, FormState::new(start.toggled()));
        assert!(form.errors().is_empty());
        assert_eq!(form.touched().count(), 0);
    }
}

#[test]
fn test_city_outside_list_is_treated_as_empty() {
    let mut form = FormState::new(Mode::SignUp);
    fill_valid_sign_up(&mut form);
    form.change(Field::City, "Springfield").unwrap();

    assert_eq!(form.values().city, None);
    assert_eq!(form.visible_error(Field::City), Some(ValidationError::CityRequired));

    for city in City::ALL {
        form.change(Field::City, city.name()).unwrap();
        assert_eq!(form.values().city, Some(city));
        assert_eq!(form.visible_error(Field::City), None);
    }
}

/// Sleep for whatever the form says is left on the banner, then expire it,
/// as the desktop view's timer task does
fn schedule_reset(form: &Arc<Mutex<FormState>>) -> JoinHandle<bool> {
    let (ticket, delay) = form
        .lock()
        .pending_banner(clock_now())
        .expect("banner should be showing");
    let timer_form = Arc::clone(form);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        timer_form.lock().expire_banner(ticket, clock_now())
    })
}

#[tokio::test(start_paused = true)]
async fn test_banner_hides_after_five_seconds() {
    let form = Arc::new(Mutex::new(FormState::new(Mode::SignUp)));
    {
        let mut guard = form.lock();
        fill_valid_sign_up(&mut guard);
        if let SubmitOutcome::Rejected(errors) = guard.submit(clock_now()) {
            panic!("rejected: {errors:?}");
        }
    }
    let timer = schedule_reset(&form);

    tokio::time::advance(Duration::from_secs(4)).await;
    assert!(form.lock().show_success());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(timer.await.unwrap());
    assert!(!form.lock().show_success());
    assert_eq!(form.lock().pending_banner(clock_now()), None);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_replaces_pending_timer() {
    let form = Arc::new(Mutex::new(FormState::new(Mode::Login)));

    let submit = |form: &Arc<Mutex<FormState>>| {
        let mut guard = form.lock();
        guard.change(Field::Email, "a@b.com").unwrap();
        guard.change(Field::Password, "x").unwrap();
        assert!(guard.submit(clock_now()).is_accepted());
    };

    submit(&form);
    let first = schedule_reset(&form);
    tokio::time::advance(Duration::from_secs(3)).await;
    submit(&form);
    let second = schedule_reset(&form);

    // The first timer fires at t = 5s while the second showing runs until 8s
    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(!first.await.unwrap());
    assert!(form.lock().show_success());

    tokio::time::advance(Duration::from_secs(3)).await;
    assert!(second.await.unwrap());
    assert!(!form.lock().show_success());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_leaves_banner_for_replacement() {
    let form = Arc::new(Mutex::new(FormState::new(Mode::Login)));
    {
        let mut guard = form.lock();
        guard.change(Field::Email, "a@b.com").unwrap();
        guard.change(Field::Password, "x").unwrap();
        assert!(guard.submit(clock_now()).is_accepted());
    }
    let first = schedule_reset(&form);
    first.abort();
    assert!(first.await.unwrap_err().is_cancelled());

    let second = schedule_reset(&form);
    tokio::time::advance(SUCCESS_BANNER_DURATION).await;
    assert!(second.await.unwrap());
    assert!(!form.lock().show_success());
}
