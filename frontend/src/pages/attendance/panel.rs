use leptos::*;

use super::{
    utils::{CaptureStatus, ClockAction, SessionDisplay},
    view_model::use_capture_view_model,
};
use crate::components::layout::Layout;

#[component]
pub fn CapturePage() -> impl IntoView {
    view! { <Layout><CapturePanel /></Layout> }
}

fn message_classes(status: CaptureStatus) -> &'static str {
    match status {
        CaptureStatus::Success => "text-green-600 bg-green-50",
        CaptureStatus::Error => "text-red-600 bg-red-50",
        CaptureStatus::Pending(_) => "text-blue-600 bg-blue-50",
        CaptureStatus::Idle => "text-gray-600 bg-gray-50",
    }
}

fn button_label(status: CaptureStatus, action: ClockAction) -> &'static str {
    if status == CaptureStatus::Pending(action) {
        "Memproses..."
    } else {
        action.label()
    }
}

#[component]
pub fn CapturePanel() -> impl IntoView {
    let vm = use_capture_view_model();

    let pending = Signal::derive(move || vm.status.get().is_pending());
    let session = Signal::derive(move || vm.session.get());

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div class="bg-white shadow rounded-lg border border-gray-200 p-6 space-y-4">
                <h2 class="text-lg font-semibold text-center text-gray-900">"KEHADIRAN"</h2>
                <div class="space-y-2">
                    <label for="employee_id" class="block text-sm font-medium text-gray-700">
                        "Karyawan ID"
                    </label>
                    <input
                        id="employee_id"
                        class="block w-full rounded-md border border-gray-300 px-3 py-2 text-sm text-center focus:border-blue-500 focus:outline-none"
                        placeholder="Masukkan ID karyawan"
                        prop:value=move || vm.employee_id_input.get()
                        on:input=move |ev| vm.employee_id_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex space-x-2">
                    <button
                        class="flex-1 inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.dispatch(ClockAction::In)
                    >
                        {move || button_label(vm.status.get(), ClockAction::In)}
                    </button>
                    <button
                        class="flex-1 inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-blue-600 text-blue-600 hover:bg-blue-50 disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.dispatch(ClockAction::Out)
                    >
                        {move || button_label(vm.status.get(), ClockAction::Out)}
                    </button>
                </div>
                <Show when=move || vm.message.get().is_some()>
                    <div class=move || {
                        format!(
                            "p-3 rounded-lg text-center font-medium {}",
                            message_classes(vm.status.get()),
                        )
                    }>
                        <p>{move || vm.message.get().unwrap_or_default()}</p>
                    </div>
                </Show>
            </div>

            <Show when=move || session.get().is_some()>
                <SessionCard session=Signal::derive(move || session.get().unwrap_or_default()) />
            </Show>

            <div class="bg-white shadow rounded-lg border border-gray-200 p-6 space-y-2">
                <h3 class="text-base font-semibold text-center text-gray-900">"Informasi"</h3>
                <div class="text-sm text-gray-600 space-y-2">
                    <p>"• Pastikan ID karyawan benar sebelum melakukan absen masuk atau keluar"</p>
                    <p>"• Absen masuk hanya bisa dilakukan sekali per hari"</p>
                    <p>"• Absen keluar hanya bisa dilakukan setelah absen masuk"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SessionCard(session: Signal<SessionDisplay>) -> impl IntoView {
    let clock_in = move || {
        session
            .get()
            .clock_in
            .unwrap_or_else(|| "Belum Absen Masuk".to_string())
    };
    let clock_out = move || {
        session
            .get()
            .clock_out
            .unwrap_or_else(|| "Belum Absen Keluar".to_string())
    };
    let clock_in_class = move || {
        if session.get().clock_in.is_some() {
            "text-green-600"
        } else {
            "text-gray-400"
        }
    };
    let clock_out_class = move || {
        if session.get().clock_out.is_some() {
            "text-blue-600"
        } else {
            "text-gray-400"
        }
    };
    let lateness_class = move || {
        if session.get().is_late == Some(true) {
            "text-red-600 font-bold"
        } else {
            "text-green-600 font-bold"
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg border border-gray-200 p-6 space-y-3">
            <h3 class="text-base font-semibold text-center text-gray-900">"Status Kehadiran"</h3>
            <div class="grid grid-cols-2 gap-4 text-sm">
                <div class="font-medium text-gray-700">"ID Karyawan:"</div>
                <div>{move || session.get().employee_id}</div>

                <Show when=move || session.get().name.is_some()>
                    <div class="font-medium text-gray-700">"Nama:"</div>
                    <div>{move || session.get().name.unwrap_or_default()}</div>
                </Show>

                <Show when=move || session.get().department.is_some()>
                    <div class="font-medium text-gray-700">"Department:"</div>
                    <div>{move || session.get().department.unwrap_or_default()}</div>
                </Show>

                <div class="font-medium text-gray-700">"Absen Masuk:"</div>
                <div class=clock_in_class>{clock_in}</div>

                <div class="font-medium text-gray-700">"Absen Keluar:"</div>
                <div class=clock_out_class>{clock_out}</div>

                <Show when=move || session.get().lateness_label().is_some()>
                    <div class="font-medium text-gray-700">"Status:"</div>
                    <div class=lateness_class>
                        {move || session.get().lateness_label().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
