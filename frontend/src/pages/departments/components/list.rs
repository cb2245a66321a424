use leptos::*;

use crate::{api::Department, components::layout::LoadingSpinner};

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn DepartmentTable(
    departments: Signal<Vec<Department>>,
    loading: Signal<bool>,
    on_edit: Callback<Department>,
    on_delete: Callback<Department>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-md border border-gray-200 overflow-x-auto">
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=TH_CLASS>"Nama Departemen"</th>
                        <th class=TH_CLASS>"Batas Absen Masuk"</th>
                        <th class=TH_CLASS>"Batas Absen Keluar"</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                            "Aksi"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || departments.get()
                        key=|department| department.id
                        children=move |department: Department| {
                            let edit_target = department.clone();
                            let delete_target = department.clone();
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                        {department.department_name.clone()}
                                    </td>
                                    <td class=TD_CLASS>{department.max_clock_in_time.clone()}</td>
                                    <td class=TD_CLASS>{department.max_clock_out_time.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-right">
                                        <div class="flex justify-end gap-2">
                                            <button
                                                class="inline-flex items-center rounded-md border border-gray-300 px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-100"
                                                on:click=move |_| on_edit.call(edit_target.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="inline-flex items-center rounded-md bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700"
                                                on:click=move |_| on_delete.call(delete_target.clone())
                                            >
                                                "Hapus"
                                            </button>
                                        </div>
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
    fn renders_policy_times_per_row() {
        let html = render_to_string(|| {
            let departments = Signal::derive(|| vec![fixtures::engineering()]);
            view! {
                <DepartmentTable
                    departments=departments
                    loading=Signal::derive(|| false)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Engineering"));
        assert!(html.contains("09:00"));
        assert!(html.contains("18:00"));
    }
}
