use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Department;
use crate::pages::employees::utils::EmployeeFormState;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const INPUT_CLASS: &str =
    "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none";

#[component]
pub fn EmployeeFormDialog(
    open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] submit_label: MaybeSignal<String>,
    form: RwSignal<EmployeeFormState>,
    departments: Signal<Vec<Department>>,
    saving: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel_on_backdrop = on_cancel;
    let cancel_on_button = on_cancel;

    let title_text = Signal::derive(move || title.get());
    let submit_label_text = Signal::derive(move || submit_label.get());

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Tutup"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| cancel_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-md rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-gray-900">{move || title_text.get()}</h2>
                    <form
                        class="space-y-4"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            on_submit.call(());
                        }
                    >
                        <div class="space-y-2">
                            <label for="employee_id" class=LABEL_CLASS>"ID Karyawan"</label>
                            <input
                                id="employee_id"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.employee_id.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.employee_id = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="department_id" class=LABEL_CLASS>"Department"</label>
                            <select
                                id="department_id"
                                class=INPUT_CLASS
                                required
                                on:change=move |ev| {
                                    form.update(|state| state.department_id = event_target_value(&ev))
                                }
                            >
                                <option
                                    value=""
                                    selected=move || form.with(|state| state.department_id.is_empty())
                                >
                                    "Pilih department"
                                </option>
                                <For
                                    each=move || departments.get()
                                    key=|department| department.id
                                    children=move |department: Department| {
                                        let value = department.id.to_string();
                                        let selected_value = value.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || {
                                                    form.with(|state| state.department_id == selected_value)
                                                }
                                            >
                                                {department.department_name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="space-y-2">
                            <label for="name" class=LABEL_CLASS>"Nama"</label>
                            <input
                                id="name"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.name.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.name = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="address" class=LABEL_CLASS>"Alamat"</label>
                            <input
                                id="address"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.address.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.address = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="flex justify-end gap-2">
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-900 hover:bg-gray-200"
                                on:click=move |_| cancel_on_button.call(())
                            >
                                "Batal"
                            </button>
                            <button
                                type="submit"
                                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                                disabled=move || saving.get()
                            >
                                {move || submit_label_text.get()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
