//! The ID generator form state.
//!
//! Holds the editable configuration, the sequential counter and the log of
//! everything generated so far. Invalid numeric edits are ignored and the
//! previous value stays in place.

use tracing::debug;

use super::dto::{ConfigUpdate, FormSnapshot};
use super::identifier::IdFormat;
use super::input::{parse_integer, parse_positive};
use crate::config::FormConfig;
use crate::error::{AppError, Result};

/// In-memory state of one ID generator form.
#[derive(Debug, Clone)]
pub struct IdGeneratorForm {
    /// Prefix and digit width.
    format: IdFormat,
    /// Number the counter restarts from.
    start_number: i64,
    /// Number the next sequential identifier uses.
    current_number: i64,
    /// Identifiers per batch.
    batch_size: u32,
    /// Raw text of the specific-number field.
    specific_input: String,
    /// Generated identifiers, oldest first.
    log: Vec<String>,
    /// Largest digit width an edit may set.
    max_digit_width: usize,
    /// Largest batch size an edit may set.
    max_batch_size: u32,
}

impl IdGeneratorForm {
    /// Create a form with the configured initial values.
    #[must_use]
    pub fn new(config: &FormConfig) -> Self {
        Self {
            format: IdFormat::new(config.prefix.clone(), config.digit_width),
            start_number: config.start_number,
            current_number: config.start_number,
            batch_size: config.batch_size,
            specific_input: String::new(),
            log: Vec::new(),
            max_digit_width: config.max_digit_width,
            max_batch_size: config.max_batch_size,
        }
    }

    /// Generate the identifier for the current number and advance the counter by one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CounterExhausted`] if the counter would overflow; state is
    /// left unchanged in that case.
    pub fn generate_single(&mut self) -> Result<String> {
        let next = self.advance(1)?;
        let id = self.format.format(self.current_number);
        self.log.push(id.clone());
        self.current_number = next;
        Ok(id)
    }

    /// Generate `batch_size` consecutive identifiers starting at the current number.
    ///
    /// A non-positive `batch_size` generates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CounterExhausted`] if the counter would overflow; state is
    /// left unchanged in that case.
    pub fn generate_batch(&mut self, batch_size: i64) -> Result<Vec<String>> {
        if batch_size <= 0 {
            return Ok(Vec::new());
        }

        let end = self.advance(batch_size)?;
        let ids: Vec<String> = (self.current_number..end)
            .map(|n| self.format.format(n))
            .collect();

        self.log.extend(ids.iter().cloned());
        self.current_number = end;
        Ok(ids)
    }

    /// Generate a batch of the stored batch size.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_batch`].
    pub fn generate_configured_batch(&mut self) -> Result<Vec<String>> {
        self.generate_batch(i64::from(self.batch_size))
    }

    /// Generate the identifier for a user-supplied number.
    ///
    /// Empty or unparseable text is ignored and returns `None`. The counter is never
    /// touched. On success the specific-number field is cleared.
    pub fn generate_specific(&mut self, number_text: &str) -> Option<String> {
        let Some(number) = parse_integer(number_text) else {
            debug!(input = number_text, "Ignoring unparseable specific number");
            return None;
        };

        let id = self.format.format(number);
        self.log.push(id.clone());
        self.specific_input.clear();
        Some(id)
    }

    /// Move the counter back to the start number. The log is kept.
    pub const fn reset_counter(&mut self) {
        self.current_number = self.start_number;
    }

    /// Empty the log. The counter is kept.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.format.prefix = prefix.into();
    }

    /// Set the digit width from raw text. Returns whether the value was accepted.
    pub fn set_digit_width(&mut self, raw: &str) -> bool {
        let accepted = parse_positive(raw)
            .and_then(|v| usize::try_from(v).ok())
            .filter(|v| *v <= self.max_digit_width);

        match accepted {
            Some(width) => {
                self.format.digit_width = width;
                true
            }
            None => {
                debug!(input = raw, "Ignoring invalid digit width");
                false
            }
        }
    }

    /// Set the start number from raw text and move the counter to it.
    /// Returns whether the value was accepted.
    pub fn set_start_number(&mut self, raw: &str) -> bool {
        match parse_positive(raw) {
            Some(start) => {
                self.start_number = start;
                self.current_number = start;
                true
            }
            None => {
                debug!(input = raw, "Ignoring invalid start number");
                false
            }
        }
    }

    /// Set the batch size from raw text. Returns whether the value was accepted.
    pub fn set_batch_size(&mut self, raw: &str) -> bool {
        let accepted = parse_positive(raw)
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v <= self.max_batch_size);

        match accepted {
            Some(size) => {
                self.batch_size = size;
                true
            }
            None => {
                debug!(input = raw, "Ignoring invalid batch size");
                false
            }
        }
    }

    /// Store the specific-number field text as typed.
    pub fn set_specific_input(&mut self, text: impl Into<String>) {
        self.specific_input = text.into();
    }

    /// Apply every field present in `update`, in field order.
    ///
    /// Returns the names of the fields whose values were rejected.
    pub fn apply(&mut self, update: &ConfigUpdate) -> Vec<&'static str> {
        let mut rejected = Vec::new();

        if let Some(prefix) = &update.prefix {
            self.set_prefix(prefix.clone());
        }
        if let Some(raw) = &update.digit_width {
            if !self.set_digit_width(raw) {
                rejected.push("digit_width");
            }
        }
        if let Some(raw) = &update.start_number {
            if !self.set_start_number(raw) {
                rejected.push("start_number");
            }
        }
        if let Some(raw) = &update.batch_size {
            if !self.set_batch_size(raw) {
                rejected.push("batch_size");
            }
        }

        rejected
    }

    /// Identifier the next single generation will produce.
    #[must_use]
    pub fn next_identifier(&self) -> String {
        self.format.format(self.current_number)
    }

    /// Number of identifiers in the log.
    #[must_use]
    pub fn total_generated(&self) -> usize {
        self.log.len()
    }

    /// Generated identifiers, oldest first.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Current prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.format.prefix
    }

    /// Current digit width.
    #[must_use]
    pub const fn digit_width(&self) -> usize {
        self.format.digit_width
    }

    /// Number the counter restarts from.
    #[must_use]
    pub const fn start_number(&self) -> i64 {
        self.start_number
    }

    /// Number the next sequential identifier uses.
    #[must_use]
    pub const fn current_number(&self) -> i64 {
        self.current_number
    }

    /// Identifiers per batch.
    #[must_use]
    pub const fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Raw text of the specific-number field.
    #[must_use]
    pub fn specific_input(&self) -> &str {
        &self.specific_input
    }

    /// Copy of the state with the derived status values.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            prefix: self.format.prefix.clone(),
            digit_width: self.format.digit_width,
            start_number: self.start_number,
            current_number: self.current_number,
            batch_size: self.batch_size,
            specific_input: self.specific_input.clone(),
            next_id: self.next_identifier(),
            total_generated: self.log.len(),
        }
    }

    /// Counter value after advancing by `amount`.
    fn advance(&self, amount: i64) -> Result<i64> {
        self.current_number
            .checked_add(amount)
            .ok_or(AppError::CounterExhausted {
                current: self.current_number,
                amount,
            })
    }
}

impl Default for IdGeneratorForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form = IdGeneratorForm::default();
        assert_eq!(form.prefix(), "GIET");
        assert_eq!(form.digit_width(), 6);
        assert_eq!(form.current_number(), 1);
        assert_eq!(form.batch_size(), 5);
        assert_eq!(form.next_identifier(), "GIET000001");
        assert_eq!(form.total_generated(), 0);
    }

    #[test]
    fn test_single_then_batch() {
        let mut form = IdGeneratorForm::default();

        assert_eq!(form.generate_single().unwrap(), "GIET000001");

        let batch = form.generate_batch(3).unwrap();
        assert_eq!(batch, vec!["GIET000002", "GIET000003", "GIET000004"]);
        assert_eq!(form.current_number(), 5);
        assert_eq!(
            form.log(),
            ["GIET000001", "GIET000002", "GIET000003", "GIET000004"]
        );
    }

    #[test]
    fn test_single_k_times_is_sequential() {
        let mut form = IdGeneratorForm::default();
        assert!(form.set_start_number("37"));

        let ids: Vec<String> = (0..10).map(|_| form.generate_single().unwrap()).collect();
        let expected: Vec<String> = (37..47).map(|n| format!("GIET{n:06}")).collect();
        assert_eq!(ids, expected);
        assert_eq!(form.current_number(), 47);
    }

    #[test]
    fn test_batch_equals_repeated_single() {
        let mut batched = IdGeneratorForm::default();
        let mut singles = IdGeneratorForm::default();

        batched.generate_batch(7).unwrap();
        for _ in 0..7 {
            singles.generate_single().unwrap();
        }

        assert_eq!(batched.log(), singles.log());
        assert_eq!(batched.current_number(), singles.current_number());
    }

    #[test]
    fn test_batch_non_positive_is_noop() {
        let mut form = IdGeneratorForm::default();
        assert!(form.generate_batch(0).unwrap().is_empty());
        assert!(form.generate_batch(-3).unwrap().is_empty());
        assert_eq!(form.current_number(), 1);
        assert_eq!(form.total_generated(), 0);
    }

    #[test]
    fn test_configured_batch_uses_stored_size() {
        let mut form = IdGeneratorForm::default();
        let ids = form.generate_configured_batch().unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(form.current_number(), 6);
    }

    #[test]
    fn test_set_start_number_moves_counter() {
        let mut form = IdGeneratorForm::default();
        form.generate_single().unwrap();

        assert!(form.set_start_number("100"));
        assert_eq!(form.generate_single().unwrap(), "GIET000100");
    }

    #[test]
    fn test_specific_does_not_touch_counter() {
        let mut form = IdGeneratorForm::default();
        form.generate_single().unwrap();
        form.set_specific_input("42");

        assert_eq!(form.generate_specific("42").as_deref(), Some("GIET000042"));
        assert_eq!(form.current_number(), 2);
        assert_eq!(form.specific_input(), "");
        assert_eq!(form.log(), ["GIET000001", "GIET000042"]);
    }

    #[test]
    fn test_specific_ignores_bad_input() {
        let mut form = IdGeneratorForm::default();
        form.set_specific_input("abc");

        assert_eq!(form.generate_specific(""), None);
        assert_eq!(form.generate_specific("abc"), None);
        assert_eq!(form.total_generated(), 0);
        assert_eq!(form.specific_input(), "abc");
    }

    #[test]
    fn test_specific_may_duplicate() {
        let mut form = IdGeneratorForm::default();
        form.generate_specific("1");
        form.generate_single().unwrap();
        assert_eq!(form.log(), ["GIET000001", "GIET000001"]);
    }

    #[test]
    fn test_specific_negative_pads_or_overflows() {
        let mut form = IdGeneratorForm::default();
        assert_eq!(form.generate_specific("-5").as_deref(), Some("GIET0000-5"));
    }

    #[test]
    fn test_reset_counter_keeps_log() {
        let mut form = IdGeneratorForm::default();
        form.generate_batch(3).unwrap();

        form.reset_counter();
        assert_eq!(form.current_number(), 1);
        assert_eq!(form.total_generated(), 3);
        assert_eq!(form.generate_single().unwrap(), "GIET000001");
    }

    #[test]
    fn test_clear_log_keeps_counter() {
        let mut form = IdGeneratorForm::default();
        form.generate_batch(3).unwrap();

        form.clear_log();
        assert_eq!(form.total_generated(), 0);
        assert_eq!(form.current_number(), 4);
        assert_eq!(form.generate_single().unwrap(), "GIET000004");
    }

    #[test]
    fn test_numeric_setters_ignore_invalid() {
        let mut form = IdGeneratorForm::default();

        assert!(!form.set_digit_width("0"));
        assert!(!form.set_digit_width("abc"));
        assert!(!form.set_digit_width("1000"));
        assert_eq!(form.digit_width(), 6);

        assert!(!form.set_start_number("-4"));
        assert!(!form.set_start_number(""));
        assert_eq!(form.start_number(), 1);

        assert!(!form.set_batch_size("0"));
        assert!(!form.set_batch_size("99999999"));
        assert_eq!(form.batch_size(), 5);

        assert!(form.set_batch_size("12"));
        assert_eq!(form.batch_size(), 12);
    }

    #[test]
    fn test_edit_limits_are_inclusive() {
        let mut form = IdGeneratorForm::default();

        assert!(form.set_digit_width("64"));
        assert_eq!(form.digit_width(), 64);
        assert!(!form.set_digit_width("65"));
        assert_eq!(form.digit_width(), 64);

        assert!(form.set_batch_size("10000"));
        assert_eq!(form.batch_size(), 10_000);
        assert!(!form.set_batch_size("10001"));
        assert_eq!(form.batch_size(), 10_000);
    }

    #[test]
    fn test_narrow_width_overflows_without_truncation() {
        let mut form = IdGeneratorForm::default();
        assert!(form.set_start_number("12345"));
        assert!(form.set_digit_width("2"));
        assert_eq!(form.generate_single().unwrap(), "GIET12345");
    }

    #[test]
    fn test_apply_reports_rejected_fields() {
        let mut form = IdGeneratorForm::default();
        let update = ConfigUpdate {
            prefix: Some("EMP".to_string()),
            digit_width: Some("x".to_string()),
            start_number: Some("50".to_string()),
            batch_size: Some("-1".to_string()),
        };

        let rejected = form.apply(&update);
        assert_eq!(rejected, vec!["digit_width", "batch_size"]);
        assert_eq!(form.next_identifier(), "EMP000050");
    }

    #[test]
    fn test_counter_overflow_leaves_state() {
        let mut form = IdGeneratorForm::default();
        assert!(form.set_start_number(&i64::MAX.to_string()));

        assert!(matches!(
            form.generate_single(),
            Err(AppError::CounterExhausted { .. })
        ));
        assert!(form.generate_batch(2).is_err());
        assert_eq!(form.total_generated(), 0);
        assert_eq!(form.current_number(), i64::MAX);
    }

    #[test]
    fn test_snapshot() {
        let mut form = IdGeneratorForm::default();
        form.generate_single().unwrap();

        let snapshot = form.snapshot();
        assert_eq!(snapshot.current_number, 2);
        assert_eq!(snapshot.next_id, "GIET000002");
        assert_eq!(snapshot.total_generated, 1);
    }
}
