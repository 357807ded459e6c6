//! Fluent icon catalog for option decorations.
//!
//! Hosts name icons with Fluent UI identifiers (`Mail`, `Phone`, ...). Known names render
//! an inline 24px SVG; unknown names render an empty glyph slot that still carries the
//! name, so a typo in the configuration never breaks the control.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons with a bundled SVG body.
pub enum IconName {
    /// `Mail`.
    Mail,
    /// `Phone`.
    Phone,
    /// `Chat`.
    Chat,
    /// `Calendar`.
    Calendar,
    /// `Contact`.
    Contact,
    /// `Home`.
    Home,
    /// `Globe`.
    Globe,
    /// `Info`.
    Info,
    /// `Warning`.
    Warning,
    /// `Heart`.
    Heart,
    /// `FavoriteStar`.
    FavoriteStar,
    /// `CheckMark`.
    CheckMark,
    /// `Cancel`.
    Cancel,
}

impl IconName {
    const ALL: [Self; 13] = [
        Self::Mail,
        Self::Phone,
        Self::Chat,
        Self::Calendar,
        Self::Contact,
        Self::Home,
        Self::Globe,
        Self::Info,
        Self::Warning,
        Self::Heart,
        Self::FavoriteStar,
        Self::CheckMark,
        Self::Cancel,
    ];

    /// Looks up a Fluent icon name, ignoring ASCII case.
    pub fn from_fluent_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.fluent_name().eq_ignore_ascii_case(name))
    }

    /// Canonical Fluent UI name.
    pub const fn fluent_name(self) -> &'static str {
        match self {
            Self::Mail => "Mail",
            Self::Phone => "Phone",
            Self::Chat => "Chat",
            Self::Calendar => "Calendar",
            Self::Contact => "Contact",
            Self::Home => "Home",
            Self::Globe => "Globe",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Heart => "Heart",
            Self::FavoriteStar => "FavoriteStar",
            Self::CheckMark => "CheckMark",
            Self::Cancel => "Cancel",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Mail => {
                r#"<path d="M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v.35L12 12.1l8.5-4.75V7a.5.5 0 0 0-.5-.5H4Zm16.5 2.57-8.13 4.55a.75.75 0 0 1-.74 0L3.5 9.07V17c0 .28.22.5.5.5h16a.5.5 0 0 0 .5-.5V9.07Z"/>"#
            }
            Self::Phone => {
                r#"<path d="M6.6 2.5c.5-.2 1.1 0 1.4.5l1.9 3.3c.3.5.2 1.1-.2 1.5l-1.4 1.3a11.3 11.3 0 0 0 6.6 6.6l1.3-1.4c.4-.4 1-.5 1.5-.2l3.3 1.9c.5.3.7.9.5 1.4l-.8 2.1c-.3.8-1.1 1.3-2 1.2C10.3 19.9 4.1 13.7 3.3 5.3c-.1-.9.4-1.7 1.2-2l2.1-.8Z"/>"#
            }
            Self::Chat => {
                r#"<path d="M12 3a9 9 0 1 1-4.2 16.96L3.9 21a.75.75 0 0 1-.9-.9l1.04-3.9A9 9 0 0 1 12 3Zm0 1.5a7.5 7.5 0 0 0-6.48 11.28.75.75 0 0 1 .08.57l-.74 2.8 2.8-.75a.75.75 0 0 1 .56.08A7.5 7.5 0 1 0 12 4.5Z"/>"#
            }
            Self::Calendar => {
                r#"<path d="M7 2.75a.75.75 0 0 1 1.5 0V4h7V2.75a.75.75 0 0 1 1.5 0V4h.75A3.25 3.25 0 0 1 21 7.25v10.5A3.25 3.25 0 0 1 17.75 21H6.25A3.25 3.25 0 0 1 3 17.75V7.25A3.25 3.25 0 0 1 6.25 4H7V2.75ZM4.5 9.5v8.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V9.5h-15Z"/>"#
            }
            Self::Contact => {
                r#"<path d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM5.25 14h13.5A2.25 2.25 0 0 1 21 16.25v.75c0 2.9-3.58 5-9 5s-9-2.1-9-5v-.75A2.25 2.25 0 0 1 5.25 14Zm0 1.5a.75.75 0 0 0-.75.75v.75c0 1.7 2.6 3.5 7.5 3.5s7.5-1.8 7.5-3.5v-.75a.75.75 0 0 0-.75-.75H5.25Z"/>"#
            }
            Self::Home => {
                r#"<path d="M10.6 2.53a2.25 2.25 0 0 1 2.8 0l6.75 5.35c.54.43.85 1.08.85 1.76v9.61A1.75 1.75 0 0 1 19.25 21H15.5a1.75 1.75 0 0 1-1.75-1.75V15h-3.5v4.25A1.75 1.75 0 0 1 8.5 21H4.75A1.75 1.75 0 0 1 3 19.25V9.64c0-.68.31-1.33.85-1.76l6.75-5.35Z"/>"#
            }
            Self::Globe => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17ZM3.75 11.25h16.5v1.5H3.75v-1.5Zm7.5-7.5h1.5v16.5h-1.5V3.75Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 6.75c.41 0 .75.34.75.75v5.5a.75.75 0 0 1-1.5 0V11c0-.41.34-.75.75-.75ZM12 7a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M10.9 3.6a1.25 1.25 0 0 1 2.2 0l8.2 15.05A1.25 1.25 0 0 1 20.2 20.5H3.8a1.25 1.25 0 0 1-1.1-1.85L10.9 3.6ZM12 9a.75.75 0 0 0-.75.75v4.5a.75.75 0 0 0 1.5 0v-4.5A.75.75 0 0 0 12 9Zm0 7.5a1 1 0 1 0 0 2 1 1 0 0 0 0-2Z"/>"#
            }
            Self::Heart => {
                r#"<path d="M12 20.5c-.2 0-.4-.08-.53-.22l-7.4-7.5a5.25 5.25 0 0 1 7.43-7.42l.5.5.5-.5a5.25 5.25 0 0 1 7.43 7.42l-7.4 7.5a.75.75 0 0 1-.53.22Z"/>"#
            }
            Self::FavoriteStar => {
                r#"<path d="M11.1 2.9c.37-.75 1.43-.75 1.8 0l2.35 4.76 5.26.77c.82.12 1.15 1.13.55 1.71l-3.8 3.71.9 5.24c.14.82-.72 1.44-1.45 1.06L12 17.68l-4.7 2.47c-.74.38-1.6-.24-1.46-1.06l.9-5.24-3.8-3.7c-.6-.59-.27-1.6.55-1.72l5.26-.77L11.1 2.9Z"/>"#
            }
            Self::CheckMark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Cancel => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon sizes used by the picker.
pub enum IconSize {
    /// 16px, dropdown rows and title.
    #[default]
    Sm,
    /// 20px, option cards.
    Md,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Renders the icon configured for an option.
pub fn ChoiceIcon(
    /// Fluent icon name from the configuration.
    #[prop(into)]
    name: String,
    /// Size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Inline style for the glyph wrapper.
    #[prop(optional)]
    style: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let glyph = IconName::from_fluent_name(&name).map(|icon| {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                width=size_px.clone()
                height=size_px
                fill="currentColor"
                focusable="false"
                inner_html=icon.svg_body()
            />
        }
    });

    view! {
        <span
            class="ui-icon"
            data-icon=name.clone()
            data-size=size.token()
            data-icon-known=glyph.is_some().then_some("true")
            title=name
            style=style
            aria-hidden="true"
        >
            {glyph}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fluent_names_resolve_case_insensitively() {
        assert_eq!(IconName::from_fluent_name("Mail"), Some(IconName::Mail));
        assert_eq!(IconName::from_fluent_name("phone"), Some(IconName::Phone));
        assert_eq!(
            IconName::from_fluent_name("FAVORITESTAR"),
            Some(IconName::FavoriteStar)
        );
        assert_eq!(IconName::from_fluent_name("Unicorn"), None);
    }

    #[test]
    fn every_catalog_icon_round_trips_and_has_a_path() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_fluent_name(icon.fluent_name()), Some(icon));
            assert!(icon.svg_body().starts_with("<path d=\""));
        }
    }
}
