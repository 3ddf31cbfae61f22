/// Search helpers shared by the list screens
use contracts::domain::common::normalize_text;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Minimum filter length before a list is narrowed
pub const MIN_FILTER_LEN: usize = 3;

/// Rows that can be narrowed by a free-text filter
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

fn filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Keeps the rows matching `filter`; short filters keep everything
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Byte ranges of `filter` inside `text`, ignoring case
///
/// Accent folding is left to `matches_filter`; highlighting stays literal so
/// the ranges always fall on char boundaries.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if !filter_active(filter) || needle.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    // to_lowercase may change byte lengths outside ASCII
    if haystack.len() != text.len() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Highlights matches of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span class="search-highlight">{text[start..end].to_string()}</span> }
                .into_any(),
        );
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Accent-insensitive containment used by the `Searchable` impls
pub fn contains_normalized(field: &str, filter: &str) -> bool {
    normalize_text(field).contains(&normalize_text(filter))
}

/// Search box with a 300ms debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar (mín. 3 caracteres)...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(id) => debounce_timeout.set_value(Some(id)),
            Err(_) => log::warn!("setTimeout failed, search filter not applied"),
        }
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || filter_active(&value.get())
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_normalized(self.0, filter)
        }
    }

    #[test]
    fn test_short_filter_keeps_everything() {
        let rows = vec![Row("Cardiología"), Row("Pediatría")];
        assert_eq!(filter_list(rows, "ca").len(), 2);
    }

    #[test]
    fn test_filter_is_accent_insensitive() {
        let rows = vec![Row("Cardiología"), Row("Pediatría")];
        let kept = filter_list(rows, "CARDIOLOGIA");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "Cardiología");
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Cama 101 - cama B", "cama"), vec![(0, 4), (11, 15)]);
        assert!(match_ranges("Cama", "ca").is_empty());
    }
}
