//! Global CSS styles for SignForm.
//!
//! Blue full-window backdrop, a white centred card, red inline errors and a
//! green success banner.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --page-blue: #3b82f6;
  --card-white: #ffffff;
  --card-shadow: #020617;

  /* TEXT */
  --text-primary: #000000;
  --text-muted: #4b5563;

  /* FIELDS */
  --field-border: #e5e7eb;
  --field-focus: #93c5fd;

  /* SEMANTIC */
  --success: #22c55e;
  --danger: #ef4444;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  color: var(--text-primary);
  background: var(--page-blue);
}

/* === Layout === */
.page {
  width: 100vw;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  background: var(--page-blue);
}

.form-column {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.form-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 380px;
  background: var(--card-white);
  border-radius: 0.375rem;
  box-shadow: 0 4px 6px -1px var(--card-shadow);
}

.form-title {
  margin-top: 2rem;
  margin-bottom: 0.5rem;
  font-size: var(--text-2xl);
  font-weight: 600;
}

.form-divider {
  width: 20rem;
  margin-bottom: 0.5rem;
  border: 1px solid var(--text-primary);
}

.form-body {
  margin-top: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Fields === */
.form-field {
  width: 18rem;
  margin-bottom: 1rem;
}

.input-field {
  display: block;
  width: 100%;
  height: 2.5rem;
  padding: 0.5rem;
  border: 2px solid var(--field-border);
  border-radius: 0.375rem;
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--field-focus);
}

.input-field--invalid {
  border-color: var(--danger);
}

.select-field {
  width: 9rem;
  padding: 0.25rem 0.5rem;
  border: 1px solid var(--text-primary);
  font-size: var(--text-sm);
}

.file-picker {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.file-picker-btn {
  padding: 0.125rem 0.5rem;
  font-size: var(--text-sm);
  cursor: pointer;
}

.file-picker-name {
  color: var(--text-muted);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.form-field--checkbox {
  color: var(--text-muted);
}

.checkbox {
  margin-right: 0.25rem;
}

.checkbox-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.field-error {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

/* === Buttons === */
.btn-primary {
  width: 330px;
  margin-top: 1rem;
  padding: 0.5rem;
  border: none;
  border-radius: 0.375rem;
  background: var(--page-blue);
  color: var(--card-white);
  font-size: var(--text-base);
  cursor: pointer;
}

.file-picker-btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-link {
  margin-top: 0.75rem;
  margin-bottom: 1.5rem;
  border: none;
  background: none;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
}

/* === Success Banner === */
.notice {
  margin-top: 2.5rem;
  margin-bottom: 1rem;
  padding: 0.5rem 1rem;
  border-radius: 0.25rem;
  background: var(--success);
  color: var(--card-white);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors::PALETTE;

    #[test]
    fn stylesheet_declares_palette() {
        for (name, value) in PALETTE {
            let declaration = format!("{}: {};", name, value);
            assert!(
                GLOBAL_STYLES.contains(&declaration),
                "missing {}",
                declaration
            );
        }
    }

    #[test]
    fn stylesheet_covers_widget_classes() {
        for class in [
            ".page",
            ".form-card",
            ".input-field--invalid",
            ".field-error",
            ".btn-primary",
            ".btn-link",
            ".notice",
        ] {
            assert!(GLOBAL_STYLES.contains(class), "missing {}", class);
        }
    }
}
