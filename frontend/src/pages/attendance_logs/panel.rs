use leptos::*;

use super::{
    components::{summary::SummaryCards, table::LogsTable},
    utils::{parse_department_option, LogSummary},
    view_model::use_logs_view_model,
};
use crate::{
    api::Department,
    components::{empty_state::EmptyState, layout::Layout},
};

#[component]
pub fn LogsPage() -> impl IntoView {
    view! { <Layout><LogsPanel /></Layout> }
}

#[component]
pub fn LogsPanel() -> impl IntoView {
    let vm = use_logs_view_model();

    let records = Signal::derive(move || vm.logs_resource.get().unwrap_or_default());
    let summary = Signal::derive(move || LogSummary::from_records(&records.get()));
    let loading = vm.logs_resource.loading();
    let departments = Signal::derive(move || {
        vm.departments_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let has_records = Signal::derive(move || !records.get().is_empty());

    view! {
        <div class="space-y-6">
            <div class="text-center space-y-2">
                <h1 class="text-3xl font-bold text-gray-900">"Data Kehadiran"</h1>
                <p class="text-gray-600">"Pantau kehadiran karyawan secara real-time"</p>
            </div>

            <div class="bg-white shadow rounded-lg border border-gray-200 p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">"Filter Data"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="space-y-2">
                        <label for="filter_date" class="block text-sm font-medium text-gray-700">
                            "Tanggal"
                        </label>
                        <input
                            id="filter_date"
                            type="date"
                            class="block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                            prop:value=move || vm.date_input.get()
                            on:input=move |ev| vm.date_input.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="filter_department" class="block text-sm font-medium text-gray-700">
                            "Department"
                        </label>
                        <select
                            id="filter_department"
                            class="block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                            on:change=move |ev| {
                                vm.department_input.set(parse_department_option(&event_target_value(&ev)))
                            }
                        >
                            <option
                                value="all"
                                selected=move || vm.department_input.get().is_none()
                            >
                                "Semua Department"
                            </option>
                            <For
                                each=move || departments.get()
                                key=|department| department.id
                                children=move |department: Department| {
                                    let id = department.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || vm.department_input.get() == Some(id)
                                        >
                                            {department.department_name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="flex items-end">
                        <button
                            class="w-full inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                            disabled=move || loading.get()
                            on:click=move |_| vm.apply_filters()
                        >
                            {move || if loading.get() { "Memuat..." } else { "Terapkan Filter" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || has_records.get()>
                <SummaryCards summary=summary />
            </Show>

            <div class="bg-white shadow rounded-lg border border-gray-200 p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900">"Data Kehadiran"</h2>
                    <span class="rounded-full border border-gray-300 px-3 py-1 text-sm text-gray-600">
                        {move || format!("{} data", summary.get().total)}
                    </span>
                </div>

                <Show
                    when=move || has_records.get()
                    fallback=move || {
                        view! {
                            <EmptyState
                                title="Tidak ada data kehadiran"
                                description="Coba ubah filter atau pilih tanggal lain"
                                action=view! {
                                    <button
                                        class="inline-flex items-center justify-center rounded-md border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100"
                                        on:click=move |_| vm.retry()
                                    >
                                        "Coba Lagi"
                                    </button>
                                }.into_view()
                            />
                        }
                    }
                >
                    <LogsTable records=records />
                </Show>
            </div>
        </div>
    }
}
