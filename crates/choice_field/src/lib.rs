//! Icon-decorated choice-field picker for form-rendering hosts.
//!
//! The crate turns a host's option-set metadata and a small JSON icon configuration into
//! either a grouped set of option cards or a dropdown. Parsing, item building and branch
//! selection are plain functions; the Leptos components in [`component`] only wire them to
//! signals and the `data-ui-*` DOM contract consumed by host CSS.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod component;
pub mod config;
pub mod decoration;
pub mod icon;
pub mod options;
pub mod render_state;

pub use component::{use_derived_choices, ChoiceFieldWithIcon};
pub use config::{parse_icon_configuration, ConfigError, ConfigErrorKind, IconMapping};
pub use decoration::{
    dropdown_choices, grouped_choices, ChoiceDecoration, ChoicePalette, DecoratedChoice,
};
pub use icon::{ChoiceIcon, IconName, IconSize};
pub use options::{
    build_choice_items, resolve_selection, selected_key, ChoiceItem, ChoiceOption,
    DerivedChoices,
};
pub use render_state::{
    FormFactor, RenderState, UnknownFormFactor, DROPDOWN_PLACEHOLDER, MASK_PLACEHOLDER,
};

/// Convenience imports for host crates.
pub mod prelude {
    pub use crate::{
        ChoiceDecoration, ChoiceFieldWithIcon, ChoiceOption, ChoicePalette, FormFactor,
    };
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
