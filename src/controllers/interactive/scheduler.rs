use crate::controllers::interactive::data::render_request::RenderRequest;

/// Decides when a desired render request actually reaches the controller.
///
/// While a drag is active and a render is in flight, newer requests are
/// coalesced (only the newest is kept pending), so the worker always picks
/// up the freshest viewport instead of grinding through a backlog.
pub struct RenderScheduler {
    pending_request: Option<RenderRequest>,
    in_flight_generation: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending_request: None,
            in_flight_generation: None,
        }
    }

    pub fn update(
        &mut self,
        desired: RenderRequest,
        drag_active: bool,
        last_completed_gen: u64,
        submit: impl FnOnce(RenderRequest) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);
        self.pending_request = Some(desired);

        if self.in_flight_generation.is_none() || !drag_active {
            return self.submit_pending(submit);
        }

        SchedulerAction::Coalesced
    }

    pub fn reset(&mut self) {
        self.pending_request = None;
        self.in_flight_generation = None;
    }

    pub fn observe_completion(&mut self, last_completed_gen: u64) {
        self.mark_completed(last_completed_gen);
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    #[must_use]
    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight_generation
    }

    fn mark_completed(&mut self, last_completed_gen: u64) {
        if self
            .in_flight_generation
            .is_some_and(|generation| last_completed_gen >= generation)
        {
            self.in_flight_generation = None;
        }
    }

    fn submit_pending(
        &mut self,
        submit: impl FnOnce(RenderRequest) -> u64,
    ) -> SchedulerAction {
        let Some(request) = self.pending_request.take() else {
            return SchedulerAction::NothingToDo;
        };

        let generation = submit(request);
        self.in_flight_generation = Some(generation);

        SchedulerAction::Submitted { generation }
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
