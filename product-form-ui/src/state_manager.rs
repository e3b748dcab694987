use product_form::forms::Submitter;
use product_form::submission::{SubmissionStatus, SubmitResult};

use crate::platform::{self, ResultSlot};

/// Owns one submitter and bridges its in-flight request back to the UI thread.
pub struct SubmitterState<S> {
    submitter: S,
    label: &'static str,

    // Set while a request is in flight; filled by the spawned task
    result_slot: Option<ResultSlot<SubmitResult>>,
}

impl<S: Submitter> SubmitterState<S> {
    pub fn new(submitter: S, label: &'static str) -> Self {
        Self {
            submitter,
            label,
            result_slot: None,
        }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn submitter_mut(&mut self) -> &mut S {
        &mut self.submitter
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.submitter.status()
    }

    pub fn is_in_flight(&self) -> bool {
        self.result_slot.is_some()
    }

    /// Submit event from the UI. The network call runs on the executor; the
    /// result is picked up by [`Self::update_from_async`].
    pub fn submit(&mut self) {
        if self.result_slot.is_some() {
            log::warn!("⚠️ [STATE] {} submit while a request is in flight - ignoring", self.label);
            return;
        }

        let Some(pending) = self.submitter.begin_submit() else {
            return;
        };

        log::info!("📡 [STATE] {} sending product {:?}", self.label, pending.payload().name);

        let slot = ResultSlot::new();
        self.result_slot = Some(slot.clone());

        let label = self.label;
        platform::spawn_async(async move {
            if !slot.fill(pending.send().await) {
                log::error!("❌ [STATE] {} result dropped: slot lock poisoned", label);
            }
        });
    }

    /// Call once per frame.
    pub fn update_from_async(&mut self) {
        let Some(result) = self.result_slot.as_ref().and_then(ResultSlot::take) else {
            return;
        };

        log::info!("🎉 [STATE] {} submission finished: {:?}", self.label, result);
        self.submitter.complete_submit(result);
        self.result_slot = None;
    }
}
