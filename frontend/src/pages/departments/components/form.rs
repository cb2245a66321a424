use leptos::ev::SubmitEvent;
use leptos::*;

use crate::pages::departments::utils::DepartmentFormState;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const INPUT_CLASS: &str =
    "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none";

#[component]
pub fn DepartmentFormDialog(
    open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] submit_label: MaybeSignal<String>,
    form: RwSignal<DepartmentFormState>,
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
                            <label for="department_name" class=LABEL_CLASS>"Nama Departemen"</label>
                            <input
                                id="department_name"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.department_name.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.department_name = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="max_clock_in_time" class=LABEL_CLASS>"Batas Absen Masuk"</label>
                            <input
                                id="max_clock_in_time"
                                type="time"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.max_clock_in_time.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.max_clock_in_time = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="max_clock_out_time" class=LABEL_CLASS>"Batas Absen Keluar"</label>
                            <input
                                id="max_clock_out_time"
                                type="time"
                                class=INPUT_CLASS
                                required
                                prop:value=move || form.with(|state| state.max_clock_out_time.clone())
                                on:input=move |ev| {
                                    form.update(|state| state.max_clock_out_time = event_target_value(&ev))
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_time_inputs_for_policy_fields() {
        let html = render_to_string(|| {
            let form = create_rw_signal(DepartmentFormState::default());
            view! {
                <DepartmentFormDialog
                    open=Signal::derive(|| true)
                    title={"Tambah Departemen Baru".to_string()}
                    submit_label={"Simpan".to_string()}
                    form=form
                    saving=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Batas Absen Masuk"));
        assert!(html.contains("Batas Absen Keluar"));
        assert_eq!(html.matches("type=\"time\"").count(), 2);
    }
}
