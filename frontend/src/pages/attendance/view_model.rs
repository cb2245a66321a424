use std::rc::Rc;

use leptos::*;

use super::{
    repository,
    utils::{CaptureStatus, ClockAction, SessionDisplay},
};
use crate::api::{ApiClient, ApiError, ClockResponse};

#[derive(Clone, Copy)]
pub struct CaptureViewModel {
    pub employee_id_input: RwSignal<String>,
    pub status: RwSignal<CaptureStatus>,
    pub message: RwSignal<Option<String>>,
    /// Survives failed requests untouched; only successful responses
    /// replace (clock-in) or merge into (clock-out) it.
    pub session: RwSignal<Option<SessionDisplay>>,
    pub clock_action: Action<(ClockAction, String), (ClockAction, Result<ClockResponse, ApiError>)>,
}

pub fn use_capture_view_model() -> CaptureViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let api = Rc::new(api);

    let employee_id_input = create_rw_signal(String::new());
    let status = create_rw_signal(CaptureStatus::default());
    let message = create_rw_signal(None::<String>);
    let session = create_rw_signal(None::<SessionDisplay>);

    let api_for_clock = api.clone();
    let clock_action = create_action(move |input: &(ClockAction, String)| {
        let api = api_for_clock.clone();
        let (action, employee_id) = input.clone();
        async move {
            let result = match action {
                ClockAction::In => repository::submit_clock_in(&api, employee_id).await,
                ClockAction::Out => repository::submit_clock_out(&api, employee_id).await,
            };
            (action, result)
        }
    });

    create_effect(move |_| {
        if let Some((action, result)) = clock_action.value().get() {
            match result {
                Ok(response) => {
                    status.set(CaptureStatus::Success);
                    message.set(Some(
                        response
                            .message
                            .clone()
                            .filter(|text| !text.trim().is_empty())
                            .unwrap_or_else(|| action.success_fallback().to_string()),
                    ));
                    match action {
                        ClockAction::In => {
                            session.set(Some(SessionDisplay::from_clock_in(&response.data)));
                        }
                        ClockAction::Out => {
                            session.update(|current| {
                                let previous = current.take().unwrap_or_default();
                                *current = Some(previous.merged_clock_out(&response.data));
                            });
                        }
                    }
                    employee_id_input.set(String::new());
                }
                Err(err) => {
                    log::error!("Gagal memproses absen: {}", err);
                    status.set(CaptureStatus::Error);
                    let text = if err.error.trim().is_empty() {
                        action.failure_fallback().to_string()
                    } else {
                        err.error
                    };
                    message.set(Some(text));
                }
            }
        }
    });

    CaptureViewModel {
        employee_id_input,
        status,
        message,
        session,
        clock_action,
    }
}

impl CaptureViewModel {
    /// No-op on an empty identifier or while a request is in flight.
    pub fn dispatch(&self, action: ClockAction) {
        let employee_id = self.employee_id_input.get_untracked();
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return;
        }
        if self.status.get_untracked().is_pending() {
            return;
        }
        self.status.set(CaptureStatus::Pending(action));
        self.clock_action
            .dispatch((action, employee_id.to_string()));
    }
}
