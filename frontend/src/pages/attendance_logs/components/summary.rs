use leptos::*;

use crate::pages::attendance_logs::utils::LogSummary;

#[component]
fn StatCard(
    value: Signal<usize>,
    label: &'static str,
    card_class: &'static str,
    value_class: &'static str,
    label_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border p-4 text-center {}", card_class)>
            <div class=format!("text-2xl font-bold {}", value_class)>
                {move || value.get()}
            </div>
            <p class=format!("text-sm {}", label_class)>{label}</p>
        </div>
    }
}

#[component]
pub fn SummaryCards(summary: Signal<LogSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                value=Signal::derive(move || summary.get().total)
                label="Total Kehadiran"
                card_class="bg-blue-50 border-blue-200"
                value_class="text-blue-600"
                label_class="text-blue-800"
            />
            <StatCard
                value=Signal::derive(move || summary.get().completed)
                label="Selesai Bekerja"
                card_class="bg-green-50 border-green-200"
                value_class="text-green-600"
                label_class="text-green-800"
            />
            <StatCard
                value=Signal::derive(move || summary.get().in_progress)
                label="Sedang Bekerja"
                card_class="bg-orange-50 border-orange-200"
                value_class="text-orange-600"
                label_class="text-orange-800"
            />
            <StatCard
                value=Signal::derive(move || summary.get().unique_employees)
                label="Karyawan Hadir"
                card_class="bg-purple-50 border-purple-200"
                value_class="text-purple-600"
                label_class="text-purple-800"
            />
        </div>
    }
}
