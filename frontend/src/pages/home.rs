use leptos::*;

use crate::components::layout::Layout;

#[component]
fn NavCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg border border-gray-200 p-6 space-y-4">
            <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            <p class="text-sm text-gray-600">{description}</p>
            <a
                href=href
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
            >
                {label}
            </a>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-8">
                <h1 class="text-3xl font-bold text-center text-gray-900">
                    "Sistem Absen Karyawan"
                </h1>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    <NavCard
                        title="Karyawan"
                        description="Kelola data karyawan Anda dengan mudah."
                        href="/employees"
                        label="Kelola Karyawan"
                    />
                    <NavCard
                        title="Departemen"
                        description="Kelola departemen dan batas jam absen."
                        href="/departments"
                        label="Kelola Departemen"
                    />
                    <NavCard
                        title="Kehadiran"
                        description="Absen masuk dan keluar karyawan."
                        href="/attendance"
                        label="Kehadiran In/Out"
                    />
                    <NavCard
                        title="History"
                        description="Lihat history kehadiran."
                        href="/attendance/logs"
                        label="Lihat History"
                    />
                </div>
            </div>
        </Layout>
    }
}
