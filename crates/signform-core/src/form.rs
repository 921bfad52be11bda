//! The form state machine.
//!
//! [`FormState`] owns everything the login/sign-up form knows: the active
//! [`Mode`], the field values, derived errors, the touched set and the
//! success banner. Every user event maps to one method here; the view layer
//! only renders what this type reports.
//!
//! ## Lifecycle
//!
//! ```text
//!   new(mode) ──► change / blur / pick_file ──► submit ──┬─► Rejected (all fields touched)
//!       ▲                                               └─► Accepted (values reset, banner shown)
//!       └──────────────── toggle_mode ◄──────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::banner::{BannerTicket, SuccessBanner};
use crate::error::FormResult;
use crate::types::{Field, Mode, PickedFile};
use crate::validation::{validate, FieldErrors, ValidationError};
use crate::values::{FieldValue, FormValues};

/// One-shot instruction for widgets whose display state lives outside
/// [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Clear the file picker's displayed selection
    ClearFileInput,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    /// Mode the values were submitted in
    pub mode: Mode,
    /// Values as they were at submit time (the form itself is already reset)
    pub submitted: FormValues,
    /// Commands the view must carry out
    pub commands: Vec<ViewCommand>,
}

/// Result of [`FormState::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// At least one rule failed; every active field is now touched
    Rejected(FieldErrors),
    /// All rules passed
    Accepted(Accepted),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// State of the login/sign-up form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: Mode,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_count: u32,
    banner: SuccessBanner,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl FormState {
    /// Fresh form in `mode` with initial values and nothing validated yet
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            values: FormValues::initial(mode),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
            banner: SuccessBanner::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the last validation run, including untouched fields
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.touched.iter().copied()
    }

    /// Submit attempts since the form was last reinitialised by a toggle
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn show_success(&self) -> bool {
        self.banner.is_visible()
    }

    /// Banner text for the current mode, while the banner is up
    pub fn success_message(&self) -> Option<&'static str> {
        self.show_success().then(|| self.mode.success_message())
    }

    /// Whether the active ruleset passes for the current values
    pub fn is_valid(&self) -> bool {
        validate(self.mode, &self.values).is_empty()
    }

    /// Error to display under `field`: only when the field is part of the
    /// active mode, touched, and invalid.
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if !self.mode.has_field(field) || !self.is_touched(field) {
            return None;
        }
        self.errors.get(field)
    }

    /// Switch between login and sign-up, discarding values, errors and the
    /// touched set. The success banner is left as it is.
    pub fn toggle_mode(&mut self) {
        let mode = self.mode.toggled();
        tracing::info!(from = %self.mode, to = %mode, "Toggling form mode");
        self.mode = mode;
        self.reset_fields();
        self.submit_count = 0;
    }

    /// Store a new value for `field`, mark it touched and revalidate
    pub fn change(&mut self, field: Field, value: impl Into<FieldValue>) -> FormResult<()> {
        self.values.set(field, value.into())?;
        self.touch(field);
        Ok(())
    }

    /// The user left `field`
    pub fn blur(&mut self, field: Field) {
        self.touch(field);
    }

    /// Record the outcome of the file picker. A cancelled pick (`None`)
    /// leaves the current file in place.
    pub fn pick_file(&mut self, file: Option<PickedFile>) {
        if let Some(file) = file {
            tracing::debug!(name = %file.name, "File selected");
            self.values.file = Some(file);
        }
        self.touch(Field::File);
    }

    /// Validate and, if everything passes, reset the form and show the
    /// success banner from `now`.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        self.submit_count += 1;
        self.errors = validate(self.mode, &self.values);

        if !self.errors.is_empty() {
            self.touched.extend(self.mode.fields().iter().copied());
            tracing::debug!(
                mode = %self.mode,
                failing = ?self.errors.fields().collect::<Vec<_>>(),
                "Submit rejected"
            );
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let submitted = std::mem::replace(&mut self.values, FormValues::initial(self.mode));
        self.errors = FieldErrors::new();
        self.touched.clear();

        self.banner.show(now);

        match serde_json::to_string(&submitted) {
            Ok(json) => tracing::info!(mode = %self.mode, values = %json, "Form submitted"),
            Err(e) => tracing::warn!("Failed to serialize submitted values: {}", e),
        }

        SubmitOutcome::Accepted(Accepted {
            mode: self.mode,
            submitted,
            commands: vec![ViewCommand::ClearFileInput],
        })
    }

    /// Hide the banner if `ticket` is still current and its time is up.
    /// Returns whether the banner was hidden.
    pub fn expire_banner(&mut self, ticket: BannerTicket, now: Instant) -> bool {
        let hidden = self.banner.expire(ticket, now);
        if hidden {
            tracing::debug!("Success banner expired");
        }
        hidden
    }

    /// Ticket of the current showing and how long until it may be hidden.
    /// The view sleeps for the returned delay, then calls
    /// [`FormState::expire_banner`] with the ticket.
    pub fn pending_banner(&self, now: Instant) -> Option<(BannerTicket, Duration)> {
        let ticket = self.banner.ticket()?;
        let delay = self.banner.remaining(now)?;
        Some((ticket, delay))
    }

    fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.errors = validate(self.mode, &self.values);
    }

    fn reset_fields(&mut self) {
        self.values = FormValues::initial(self.mode);
        self.errors = FieldErrors::new();
        self.touched.clear();
    }
}
