//! Generator service.
//!
//! Owns the single ID generator form and serializes every operation on it.
//! Each call takes the lock for exactly one operation, mirroring one UI event.

use metrics::{counter, gauge};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::FormConfig;
use crate::domain::{ActionForm, ConfigUpdate, FormAction, FormSnapshot, IdGeneratorForm};
use crate::error::Result;

/// Service wrapping the in-memory ID generator form.
pub struct GeneratorService {
    form: Mutex<IdGeneratorForm>,
}

impl GeneratorService {
    /// Create a service with a fresh form built from `config`.
    #[must_use]
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: Mutex::new(IdGeneratorForm::new(config)),
        }
    }

    /// Current state and derived status.
    pub fn snapshot(&self) -> FormSnapshot {
        self.form.lock().snapshot()
    }

    /// Snapshot plus the full log, taken under one lock.
    pub fn view(&self) -> (FormSnapshot, Vec<String>) {
        let form = self.form.lock();
        (form.snapshot(), form.log().to_vec())
    }

    /// All generated identifiers, oldest first.
    pub fn ids(&self) -> Vec<String> {
        self.form.lock().log().to_vec()
    }

    /// Generate one sequential identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter cannot advance.
    pub fn generate_single(&self) -> Result<String> {
        generate_single(&mut self.form.lock())
    }

    /// Generate a batch of the configured size.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter cannot advance by the batch size.
    pub fn generate_batch(&self) -> Result<Vec<String>> {
        generate_batch(&mut self.form.lock())
    }

    /// Generate the identifier for `number_text`, leaving the counter alone.
    ///
    /// Returns `None` when the text does not parse.
    pub fn generate_specific(&self, number_text: &str) -> Option<String> {
        generate_specific(&mut self.form.lock(), number_text)
    }

    /// Move the counter back to the start number.
    pub fn reset_counter(&self) -> FormSnapshot {
        let mut form = self.form.lock();
        reset_counter(&mut form);
        form.snapshot()
    }

    /// Empty the log.
    pub fn clear_log(&self) -> FormSnapshot {
        let mut form = self.form.lock();
        clear_log(&mut form);
        form.snapshot()
    }

    /// Apply configuration edits. Invalid numeric values are ignored.
    pub fn update_config(&self, update: &ConfigUpdate) -> FormSnapshot {
        let mut form = self.form.lock();
        apply_update(&mut form, update);
        form.snapshot()
    }

    /// Apply a full browser form submission under one lock.
    ///
    /// The page posts every field with each button, so the fields are applied
    /// first: configuration fields that differ from what is shown, then the
    /// specific-number text. The pressed button's action runs last.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot advance the counter. Field edits
    /// made before the action stay applied.
    pub fn submit_action(&self, submission: ActionForm) -> Result<()> {
        let mut form = self.form.lock();

        let changed = submission.config_update().changed_from(&form.snapshot());
        if !changed.is_empty() {
            apply_update(&mut form, &changed);
        }
        form.set_specific_input(submission.specific_number.as_str());

        match submission.action {
            FormAction::Apply => {}
            FormAction::Single => {
                generate_single(&mut form)?;
            }
            FormAction::Batch => {
                generate_batch(&mut form)?;
            }
            FormAction::Specific => {
                if generate_specific(&mut form, &submission.specific_number).is_none() {
                    debug!(input = %submission.specific_number, "Specific number ignored");
                }
            }
            FormAction::Reset => reset_counter(&mut form),
            FormAction::Clear => clear_log(&mut form),
        }

        Ok(())
    }

    /// Whether the form lock is free right now.
    pub fn is_ready(&self) -> bool {
        self.form.try_lock().is_some()
    }
}

fn generate_single(form: &mut IdGeneratorForm) -> Result<String> {
    let id = form.generate_single()?;

    info!(id = %id, next = form.current_number(), "Generated identifier");
    record_generated("single", 1, form.total_generated());
    Ok(id)
}

fn generate_batch(form: &mut IdGeneratorForm) -> Result<Vec<String>> {
    let ids = form.generate_configured_batch()?;

    info!(
        count = ids.len(),
        next = form.current_number(),
        "Generated identifier batch"
    );
    record_generated("batch", ids.len(), form.total_generated());
    Ok(ids)
}

fn generate_specific(form: &mut IdGeneratorForm, number_text: &str) -> Option<String> {
    let id = form.generate_specific(number_text)?;

    info!(id = %id, "Generated specific identifier");
    record_generated("specific", 1, form.total_generated());
    Some(id)
}

fn reset_counter(form: &mut IdGeneratorForm) {
    form.reset_counter();

    info!(current = form.current_number(), "Counter reset");
    counter!("idgen_counter_resets_total").increment(1);
}

fn clear_log(form: &mut IdGeneratorForm) {
    let cleared = form.total_generated();
    form.clear_log();

    info!(cleared, "Log cleared");
    counter!("idgen_log_clears_total").increment(1);
    gauge!("idgen_log_length").set(0.0);
}

fn apply_update(form: &mut IdGeneratorForm, update: &ConfigUpdate) {
    let rejected = form.apply(update);
    if !rejected.is_empty() {
        debug!(fields = ?rejected, "Ignored invalid configuration values");
    }

    info!(
        prefix = form.prefix(),
        digit_width = form.digit_width(),
        start_number = form.start_number(),
        batch_size = form.batch_size(),
        current = form.current_number(),
        "Configuration updated"
    );
}

#[allow(clippy::cast_precision_loss)]
fn record_generated(mode: &'static str, count: usize, log_len: usize) {
    counter!("idgen_ids_generated_total", "mode" => mode).increment(count as u64);
    gauge!("idgen_log_length").set(log_len as f64);
}
