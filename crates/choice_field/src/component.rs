//! Leptos components for the choice field.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::decoration::{
    dropdown_choices, grouped_choices, ChoiceDecoration, DecoratedChoice, DROPDOWN_ICON_STYLE,
};
use crate::icon::{ChoiceIcon, IconSize};
use crate::options::{resolve_selection, selected_key, ChoiceItem, ChoiceOption, DerivedChoices};
use crate::render_state::{FormFactor, RenderState, DROPDOWN_PLACEHOLDER, MASK_PLACEHOLDER};
use crate::{bool_token, merge_layout_class};

static NEXT_GROUP_ID: AtomicUsize = AtomicUsize::new(1);

fn next_group_name() -> String {
    format!("choice-group-{}", NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed))
}

/// Reports the item selected under `key` to the host; unknown or empty keys report `None`.
pub(crate) fn emit_selection(items: &[ChoiceItem], key: &str, on_change: Callback<Option<i32>>) {
    on_change.call(resolve_selection(items, key));
}

// The menu survives a focus move only when focus lands inside the dropdown.
fn menu_open_after_focus_out(open: bool, focus_inside: bool) -> bool {
    open && focus_inside
}

/// Memoizes parsing and item building against the options and configuration only.
///
/// Reading any other signal (value, mask, form factor) never re-runs the derivation. A
/// rejected configuration is logged once per configuration change.
pub fn use_derived_choices(
    options: MaybeSignal<Vec<ChoiceOption>>,
    configuration: MaybeSignal<Option<String>>,
) -> Memo<DerivedChoices> {
    create_memo(move |_| {
        let derived = options.with(|options| {
            configuration.with(|configuration| {
                DerivedChoices::derive(options, configuration.as_deref())
            })
        });
        if let Some(err) = derived.error.as_ref() {
            logging::warn!("choice field configuration rejected ({}): {err}", err.kind());
        }
        derived
    })
}

#[component]
/// Choice-field picker with optional per-option icons.
///
/// Renders exactly one of: the configuration error, the mask placeholder, a grouped set of
/// option cards (`FormFactor::Large`) or a dropdown (`FormFactor::Small`).
pub fn ChoiceFieldWithIcon(
    /// Visible and accessible label.
    #[prop(into)]
    label: MaybeSignal<String>,
    /// Selected option value.
    #[prop(optional, into)]
    value: MaybeSignal<Option<i32>>,
    /// Available options, in display order.
    #[prop(into)]
    options: MaybeSignal<Vec<ChoiceOption>>,
    /// JSON object mapping option values to Fluent icon names.
    #[prop(optional, into)]
    configuration: MaybeSignal<Option<String>>,
    /// Receives the newly selected value, or `None` when the selection is cleared.
    #[prop(into)]
    on_change: Callback<Option<i32>>,
    /// Disables interaction.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Hides the control behind a fixed placeholder.
    #[prop(optional, into)]
    masked: MaybeSignal<bool>,
    /// Selects cards or dropdown.
    #[prop(optional, into)]
    form_factor: MaybeSignal<FormFactor>,
    /// Grouped-control decoration; defaults to [`ChoiceDecoration::default`].
    #[prop(optional)]
    decoration: Option<ChoiceDecoration>,
    /// Layout-only class hook for host placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let derived = use_derived_choices(options, configuration);
    let label = Signal::derive(move || label.get());
    let value = Signal::derive(move || value.get());
    let disabled = Signal::derive(move || disabled.get());
    let masked = Signal::derive(move || masked.get());
    let form_factor = Signal::derive(move || form_factor.get());
    let decoration = store_value(decoration.unwrap_or_default());

    let items = Signal::derive(move || derived.with(|derived| derived.items.clone()));
    let render_state = create_memo(move |_| {
        derived.with(|derived| {
            RenderState::resolve(derived.error.as_ref(), masked.get(), form_factor.get())
        })
    });

    view! {
        <div
            class=merge_layout_class("ui-choice-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="choice-field"
            data-ui-form-factor=move || form_factor.get().token()
        >
            {move || match render_state.get() {
                RenderState::Error(message) => {
                    view! { <span role="alert" data-ui-kind="choice-error">{message}</span> }
                        .into_view()
                }
                RenderState::Masked => {
                    view! { <span data-ui-kind="choice-mask">{MASK_PLACEHOLDER}</span> }.into_view()
                }
                RenderState::Large => {
                    view! {
                        <ChoiceGroup
                            label=label
                            items=items
                            value=value
                            disabled=disabled
                            decoration=decoration
                            on_change=on_change
                        />
                    }
                        .into_view()
                }
                RenderState::Small => {
                    view! {
                        <ChoiceDropdown
                            label=label
                            items=items
                            value=value
                            disabled=disabled
                            on_change=on_change
                        />
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ChoiceGroup(
    label: Signal<String>,
    items: Signal<Rc<[ChoiceItem]>>,
    value: Signal<Option<i32>>,
    disabled: Signal<bool>,
    decoration: StoredValue<ChoiceDecoration>,
    on_change: Callback<Option<i32>>,
) -> impl IntoView {
    let group_name = next_group_name();
    let selected = Signal::derive(move || selected_key(value.get()));

    view! {
        <fieldset
            class="ui-choice-group"
            role="radiogroup"
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="choice-group"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <legend
                data-ui-slot="label"
                style=move || decoration.with_value(ChoiceDecoration::label_style)
            >
                {move || label.get()}
            </legend>
            <div
                data-ui-slot="options"
                style=move || decoration.with_value(ChoiceDecoration::options_style)
            >
                {move || {
                    let cards = decoration
                        .with_value(|decoration| grouped_choices(&items.get(), decoration));
                    let group_name = group_name.clone();
                    cards
                        .into_iter()
                        .map(|card| {
                            choice_card(card, group_name.clone(), selected, disabled, items, on_change)
                        })
                        .collect_view()
                }}
            </div>
        </fieldset>
    }
}

fn choice_card(
    card: DecoratedChoice,
    group_name: String,
    selected: Signal<Option<String>>,
    disabled: Signal<bool>,
    items: Signal<Rc<[ChoiceItem]>>,
    on_change: Callback<Option<i32>>,
) -> View {
    let key = card.key.clone();
    let checked = Signal::derive(move || selected.get().as_deref() == Some(key.as_str()));

    view! {
        <label
            class="ui-choice-option"
            style=card.style
            data-ui-kind="choice-option"
            data-ui-selected=move || bool_token(checked.get())
        >
            <input
                type="radio"
                name=group_name
                value=card.key
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let key = event_target_value(&ev);
                    items.with_untracked(|items| emit_selection(items, &key, on_change));
                }
            />
            {card.icon.map(|icon| view! { <ChoiceIcon name=icon size=IconSize::Md /> })}
            <span data-ui-slot="text">{card.text}</span>
        </label>
    }
    .into_view()
}

#[component]
fn ChoiceDropdown(
    label: Signal<String>,
    items: Signal<Rc<[ChoiceItem]>>,
    value: Signal<Option<i32>>,
    disabled: Signal<bool>,
    on_change: Callback<Option<i32>>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let root = create_node_ref::<html::Div>();
    let rows = Signal::derive(move || dropdown_choices(&items.get()));
    let title = move || {
        let key = selected_key(value.get());
        rows.with(|rows| {
            rows.iter()
                .find(|row| Some(&row.key) == key.as_ref())
                .map(render_choice_row)
        })
        .unwrap_or_else(|| {
            view! { <span data-ui-slot="placeholder">{DROPDOWN_PLACEHOLDER}</span> }.into_view()
        })
    };

    view! {
        <div
            class="ui-choice-dropdown"
            _ref=root
            data-ui-primitive="true"
            data-ui-kind="choice-dropdown"
            data-ui-open=move || bool_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    open.set(false);
                }
            }
            on:focusout=move |ev: FocusEvent| {
                let focus_inside = root.get_untracked().is_some_and(|root| {
                    ev.related_target()
                        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                        .is_some_and(|next| root.contains(Some(&next)))
                });
                open.update(|open| *open = menu_open_after_focus_out(*open, focus_inside));
            }
        >
            <span data-ui-slot="label">{move || label.get()}</span>
            <button
                type="button"
                data-ui-slot="title"
                aria-haspopup="listbox"
                aria-label=move || label.get()
                aria-expanded=move || bool_token(open.get())
                disabled=move || disabled.get()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                {title}
            </button>
            <Show when=move || open.get() && !disabled.get() fallback=|| ()>
                <div role="listbox" aria-label=move || label.get() data-ui-slot="menu">
                    {move || {
                        let current = selected_key(value.get());
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let is_selected = current.as_ref() == Some(&row.key);
                                let key = row.key.clone();
                                view! {
                                    <div
                                        role="option"
                                        tabindex="-1"
                                        aria-selected=bool_token(is_selected)
                                        data-ui-kind="choice-dropdown-row"
                                        data-ui-selected=bool_token(is_selected)
                                        on:click=move |_| {
                                            items.with_untracked(|items| {
                                                emit_selection(items, &key, on_change)
                                            });
                                            open.set(false);
                                        }
                                    >
                                        {render_choice_row(&row)}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

// Shared by the dropdown title and its menu rows.
fn render_choice_row(choice: &DecoratedChoice) -> View {
    let icon = choice.icon.clone();
    let text = choice.text.clone();
    view! {
        <div data-ui-slot="choice-row">
            {icon.map(|icon| view! { <ChoiceIcon name=icon style=DROPDOWN_ICON_STYLE /> })}
            <span>{text}</span>
        </div>
    }
    .into_view()
}
