use std::rc::Rc;

use leptos::*;

use super::{
    repository,
    utils::{LogFilterState, LogsQuery},
};
use crate::api::{ApiClient, AttendanceRecord, Department};

#[derive(Clone, Copy)]
pub struct LogsViewModel {
    pub date_input: RwSignal<String>,
    pub department_input: RwSignal<Option<i64>>,
    pub query: RwSignal<LogsQuery>,
    /// Failed loads resolve to an empty set; the table view stays
    /// silent beyond its empty state.
    pub logs_resource: Resource<LogsQuery, Vec<AttendanceRecord>>,
    pub departments_resource: Resource<(), Result<Vec<Department>, String>>,
}

pub fn use_logs_view_model() -> LogsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let api = Rc::new(api);

    let filters = LogFilterState::for_today();
    let (initial_date, initial_department) = filters.to_query();
    let date_input = create_rw_signal(filters.date);
    let department_input = create_rw_signal(filters.department);
    let query = create_rw_signal(LogsQuery::new(initial_date, initial_department));

    let api_for_logs = api.clone();
    let logs_resource = create_resource(
        move || query.get(),
        move |q| {
            let api = api_for_logs.clone();
            async move {
                match repository::fetch_logs(&api, q.date, q.department).await {
                    Ok(records) => records,
                    Err(err) => {
                        log::error!("Gagal memuat data kehadiran: {}", err);
                        Vec::new()
                    }
                }
            }
        },
    );

    let api_for_departments = api.clone();
    let departments_resource = create_resource(
        || (),
        move |_| {
            let api = api_for_departments.clone();
            async move {
                repository::fetch_departments(&api).await.map_err(|err| {
                    log::error!("Gagal memuat department: {}", err);
                    err.error
                })
            }
        },
    );

    LogsViewModel {
        date_input,
        department_input,
        query,
        logs_resource,
        departments_resource,
    }
}

impl LogsViewModel {
    /// Re-issues the load with whatever the filter form holds now.
    pub fn apply_filters(&self) {
        let filters = LogFilterState {
            date: self.date_input.get_untracked(),
            department: self.department_input.get_untracked(),
        };
        let (date, department) = filters.to_query();
        self.query
            .update(|query| *query = query.with_filters(date, department));
    }

    /// The empty state's "Coba Lagi" button: same filters, fresh fetch.
    pub fn retry(&self) {
        self.query.update(|query| *query = query.refresh());
    }
}
