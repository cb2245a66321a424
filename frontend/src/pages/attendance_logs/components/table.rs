use leptos::*;

use crate::{
    api::AttendanceRecord,
    pages::attendance_logs::utils::record_status_label,
    utils::time::format_timestamp,
};

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-semibold text-gray-600 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700";

#[component]
pub fn LogsTable(records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="rounded-md border border-gray-200 overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=TH_CLASS>"Karyawan"</th>
                        <th class=TH_CLASS>"Department"</th>
                        <th class=TH_CLASS>"Absen Masuk"</th>
                        <th class=TH_CLASS>"Absen Keluar"</th>
                        <th class="px-6 py-3 text-center text-xs font-semibold text-gray-600 uppercase tracking-wider">
                            "Status"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || records.get()
                        key=|record| record.id
                        children=move |record: AttendanceRecord| {
                            let status = record_status_label(&record);
                            let badge_class = if record.clock_out.is_some() {
                                "bg-green-100 text-green-800 border border-green-200"
                            } else {
                                "bg-blue-100 text-blue-800"
                            };
                            let clock_in = record
                                .clock_in
                                .as_ref()
                                .map(format_timestamp)
                                .unwrap_or_else(|| "-".to_string());
                            let clock_out = record
                                .clock_out
                                .as_ref()
                                .map(format_timestamp)
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <div class="flex flex-col">
                                            <span class="text-sm font-medium text-gray-900">
                                                {record.employee_id.clone()}
                                            </span>
                                            <span class="text-sm text-gray-600">
                                                {record.name.clone().unwrap_or_else(|| "-".to_string())}
                                            </span>
                                        </div>
                                    </td>
                                    <td class=TD_CLASS>
                                        {record.department.clone().unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class=TD_CLASS>{clock_in}</td>
                                    <td class=TD_CLASS>{clock_out}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-center">
                                        <span class=format!(
                                            "inline-flex rounded-full px-3 py-1 text-xs font-medium {}",
                                            badge_class,
                                        )>
                                            {status}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};

    #[test]
    fn renders_one_row_per_record_with_status_badges() {
        let html = render_to_string(|| {
            let records = Signal::derive(|| {
                vec![
                    fixtures::record(1, "E1", Some("2024-01-01T17:45:00Z")),
                    fixtures::record(2, "E2", None),
                ]
            });
            view! { <LogsTable records=records /> }
        });
        assert!(html.contains("E1"));
        assert!(html.contains("E2"));
        assert!(html.contains("Selesai"));
        assert!(html.contains("Bekerja"));
        assert!(html.contains("01/01/2024 08:45:00"));
    }

    #[test]
    fn in_progress_rows_show_a_dash_for_clock_out() {
        let html = render_to_string(|| {
            let records = Signal::derive(|| vec![fixtures::record(2, "E2", None)]);
            view! { <LogsTable records=records /> }
        });
        assert!(html.contains("-"));
        assert!(!html.contains("Selesai"));
    }
}
