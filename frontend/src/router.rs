use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        attendance::CapturePage, attendance_logs::LogsPage, departments::DepartmentsPage,
        employees::EmployeesPage, home::HomePage,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/employees",
    "/departments",
    "/attendance",
    "/attendance/logs",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/departments" view=DepartmentsPage/>
                <Route path="/attendance" view=CapturePage/>
                <Route path="/attendance/logs" view=LogsPage/>
            </Routes>
        </Router>
    }
}
