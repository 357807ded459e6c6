//! Browser host for the choice-field picker.
//!
//! Stands in for the form-rendering shell: it deserializes the property bag a host would
//! pass, keeps the bound value in a signal and mounts the picker in both form factors so
//! configuration, mask and disabled changes can be checked side by side.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use choice_field::prelude::*;
use leptos::*;
use serde::Deserialize;

/// Property bag shipped with the demo, in the host's wire shape.
pub const SAMPLE_PROPERTIES: &str = r#"{
    "label": "Preferred contact",
    "value": 1,
    "options": [
        {"Value": 1, "Label": "Email"},
        {"Value": 2, "Label": "Call"},
        {"Value": 3, "Label": "Chat"},
        {"Value": 4, "Label": "Visit"}
    ],
    "configuration": "{\"1\":\"Mail\",\"2\":\"Phone\",\"3\":\"Chat\"}",
    "disabled": false,
    "masked": false,
    "formFactor": "large"
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Input properties as delivered by the host.
pub struct HostProperties {
    /// Field label.
    pub label: String,
    /// Bound option value.
    #[serde(default)]
    pub value: Option<i32>,
    /// Option-set metadata.
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// Icon configuration text.
    #[serde(default)]
    pub configuration: Option<String>,
    /// Whether the field is read-only.
    #[serde(default)]
    pub disabled: bool,
    /// Whether the field is masked for the current user.
    #[serde(default)]
    pub masked: bool,
    /// Raw form factor token.
    #[serde(default)]
    pub form_factor: Option<String>,
}

impl HostProperties {
    /// Parses a host property bag.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the bag is not valid JSON of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Resolved form factor; unknown tokens fall back to [`FormFactor::Large`].
    pub fn form_factor(&self) -> FormFactor {
        match self.form_factor.as_deref().map(str::parse::<FormFactor>) {
            Some(Ok(form_factor)) => form_factor,
            Some(Err(err)) => {
                logging::warn!("host form factor ignored: {err}");
                FormFactor::default()
            }
            None => FormFactor::default(),
        }
    }
}

#[component]
/// Demo page hosting a large and a small picker bound to the same value.
pub fn DemoApp(
    /// Initial host properties.
    properties: HostProperties,
) -> impl IntoView {
    let primary_form_factor = properties.form_factor();
    let secondary_form_factor = match primary_form_factor {
        FormFactor::Large => FormFactor::Small,
        FormFactor::Small => FormFactor::Large,
    };

    let value = create_rw_signal(properties.value);
    let options = create_rw_signal(properties.options);
    let configuration = create_rw_signal(properties.configuration);
    let disabled = create_rw_signal(properties.disabled);
    let masked = create_rw_signal(properties.masked);
    let plain = create_rw_signal(false);
    let label = properties.label;

    let on_change = Callback::new(move |next: Option<i32>| value.set(next));

    view! {
        <main class="choice-demo">
            <section data-ui-slot="controls">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || masked.get()
                        on:change=move |ev| masked.set(event_target_checked(&ev))
                    />
                    "Masked"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || disabled.get()
                        on:change=move |ev| disabled.set(event_target_checked(&ev))
                    />
                    "Disabled"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || plain.get()
                        on:change=move |ev| plain.set(event_target_checked(&ev))
                    />
                    "Plain decoration"
                </label>
                <label>
                    "Icon configuration"
                    <textarea
                        prop:value=move || configuration.get().unwrap_or_default()
                        on:change=move |ev| {
                            let text = event_target_value(&ev);
                            configuration.set((!text.is_empty()).then_some(text));
                        }
                    />
                </label>
                <p data-ui-slot="value">
                    {move || match value.get() {
                        Some(value) => format!("Bound value: {value}"),
                        None => "Bound value: none".to_string(),
                    }}
                </p>
            </section>
            {move || {
                let decoration = if plain.get() {
                    ChoiceDecoration::plain()
                } else {
                    ChoiceDecoration::default()
                };
                [primary_form_factor, secondary_form_factor]
                    .into_iter()
                    .map(|form_factor| {
                        view! {
                            <ChoiceFieldWithIcon
                                label=label.clone()
                                value=value
                                options=options
                                configuration=configuration
                                on_change=on_change
                                disabled=disabled
                                masked=masked
                                form_factor=form_factor
                                decoration=decoration.clone()
                            />
                        }
                    })
                    .collect_view()
            }}
        </main>
    }
}

/// Mounts the demo with [`SAMPLE_PROPERTIES`].
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    match HostProperties::from_json(SAMPLE_PROPERTIES) {
        Ok(properties) => leptos::mount_to_body(move || view! { <DemoApp properties /> }),
        Err(err) => logging::error!("demo properties rejected: {err}"),
    }
}
