use leptos::*;

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Like `with_runtime`, with resource loading suppressed so view models
/// can be constructed without issuing requests.
pub fn with_suppressed_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_suppressed_runtime(|| view().into_view().render_to_string().to_string())
}
