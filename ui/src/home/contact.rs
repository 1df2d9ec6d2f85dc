use dioxus::prelude::*;

use crate::components::{IconBadge, NamedIcon};
use crate::content::{
    model::{ContactData, ContactInfo, ContactSuggestion, SocialMedia},
    Translations,
};
use crate::core::{clipboard::copy_text, icon::Icon, lang::Lang, platform::Outbound};
use crate::t;

/// Which contact value was copied last, and whether the copy went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CopyStatus {
    pub channel: Channel,
    pub copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
    Email,
    Phone,
    Website,
}

impl Channel {
    const ALL: [Channel; 3] = [Channel::Email, Channel::Phone, Channel::Website];

    fn icon(self) -> Icon {
        match self {
            Channel::Email => Icon::Mail,
            Channel::Phone => Icon::Phone,
            Channel::Website => Icon::Globe,
        }
    }

    fn value(self, info: &ContactInfo) -> &str {
        match self {
            Channel::Email => &info.email,
            Channel::Phone => &info.phone,
            Channel::Website => &info.website,
        }
    }

    fn action(self, info: &ContactInfo) -> Outbound {
        match self {
            Channel::Email => Outbound::Mail {
                to: info.email.clone(),
                subject: None,
            },
            Channel::Phone => Outbound::Call(info.phone.clone()),
            Channel::Website => Outbound::NewTab(info.website.clone()),
        }
    }

    fn labels(self, lang: Lang) -> (String, String, String) {
        match self {
            Channel::Email => (
                t!(lang, "contact-email-title"),
                t!(lang, "contact-email-hint"),
                t!(lang, "contact-email-action"),
            ),
            Channel::Phone => (
                t!(lang, "contact-phone-title"),
                t!(lang, "contact-phone-hint"),
                t!(lang, "contact-phone-action"),
            ),
            Channel::Website => (
                t!(lang, "contact-website-title"),
                t!(lang, "contact-website-hint"),
                t!(lang, "contact-website-action"),
            ),
        }
    }
}

#[component]
pub fn ContactSection(
    lang: Lang,
    translations: Translations,
    contact: Option<ContactData>,
    fallback_email: String,
) -> Element {
    let status = use_signal(|| None::<CopyStatus>);
    let title = translations.text(lang, "contactTitle");
    let subtitle = translations.text(lang, "contactSubtitle");

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            if let Some(contact) = contact {
                div { class: "grid grid--3 contact__cards",
                    for channel in Channel::ALL {
                        {render_channel(lang, channel, &contact.contact_info, status)}
                    }
                }

                if !contact.social_media.is_empty() {
                    div { class: "contact__social",
                        h3 { {t!(lang, "contact-follow")} }
                        div { class: "contact__social-row",
                            for social in contact.social_media.iter() {
                                {render_social(social)}
                            }
                        }
                    }
                }

                if !contact.contact_suggestions.is_empty() {
                    div { class: "contact__suggestions",
                        h3 { {t!(lang, "contact-help")} }
                        div { class: "grid grid--3",
                            for suggestion in contact.contact_suggestions.iter() {
                                {render_suggestion(lang, suggestion)}
                            }
                        }
                    }
                }

                CallToAction {
                    lang,
                    email: contact.contact_info.email.clone(),
                    telegram: contact.telegram().map(|social| social.url.clone()),
                }
            } else {
                CallToAction { lang, email: fallback_email, telegram: None }
            }
        }
    }
}

fn render_channel(
    lang: Lang,
    channel: Channel,
    info: &ContactInfo,
    mut status: Signal<Option<CopyStatus>>,
) -> Element {
    let (title, hint, action_label) = channel.labels(lang);
    let value = channel.value(info).to_string();
    let action = channel.action(info);
    let feedback = status().filter(|s| s.channel == channel).map(|s| {
        if s.copied {
            t!(lang, "copy-success")
        } else {
            t!(lang, "copy-failed")
        }
    });
    let copy_value = value.clone();

    rsx! {
        article { key: "{title}", class: "card card--center contact-card",
            div { class: "card__icon",
                IconBadge { icon: channel.icon() }
            }
            h3 { class: "card__title", "{title}" }
            p { class: "card__text", "{hint}" }

            div { class: "contact-card__value",
                span { dir: "ltr", "{value}" }
                button {
                    r#type: "button",
                    class: "button button--ghost button--icon",
                    title: t!(lang, "copy-action"),
                    onclick: move |_| {
                        let text = copy_value.clone();
                        spawn(async move {
                            let copied = copy_text(text).await;
                            status.set(Some(CopyStatus { channel, copied }));
                        });
                    },
                    IconBadge { icon: Icon::Copy, class: "icon--sm" }
                }
            }
            if let Some(feedback) = feedback {
                p { class: "contact-card__status", role: "status", "{feedback}" }
            }

            button {
                r#type: "button",
                class: "button button--primary button--block",
                onclick: move |_| action.open(),
                "{action_label}"
            }
        }
    }
}

fn render_social(social: &SocialMedia) -> Element {
    let target = Outbound::NewTab(social.url.clone());
    let handle = if social.username.is_empty() {
        social.name.clone()
    } else {
        social.username.clone()
    };

    rsx! {
        button {
            key: "{social.id}",
            r#type: "button",
            class: "button social {social.color} {social.hover_color}",
            title: "{social.name}",
            onclick: move |_| target.open(),
            NamedIcon { name: social.icon.clone(), class: "icon--sm" }
            span { class: "social__handle", "{handle}" }
        }
    }
}

fn render_suggestion(lang: Lang, suggestion: &ContactSuggestion) -> Element {
    let hint = suggestion.suggestion.resolve(lang);

    rsx! {
        article { key: "{suggestion.id}", class: "card suggestion {suggestion.color}",
            div { class: "suggestion__icon {suggestion.icon_color}",
                NamedIcon { name: suggestion.icon.clone() }
            }
            h4 { class: "card__title", "{suggestion.title.resolve(lang)}" }
            p { class: "card__text", "{suggestion.description.resolve(lang)}" }
            if !hint.is_empty() {
                p { class: "suggestion__hint", "{hint}" }
            }
        }
    }
}

#[component]
fn CallToAction(lang: Lang, email: String, telegram: Option<String>) -> Element {
    let mail = Outbound::Mail {
        to: email,
        subject: Some(t!(lang, "contact-mail-subject")),
    };
    let telegram = telegram.map(Outbound::NewTab);

    rsx! {
        div { class: "contact__cta",
            h3 { {t!(lang, "contact-cta-title")} }
            p { {t!(lang, "contact-cta-body")} }
            div { class: "contact__cta-actions",
                button {
                    r#type: "button",
                    class: "button button--inverse",
                    onclick: move |_| mail.open(),
                    IconBadge { icon: Icon::Mail, class: "icon--sm" }
                    {t!(lang, "contact-cta-email")}
                }
                if let Some(telegram) = telegram {
                    button {
                        r#type: "button",
                        class: "button button--outline-inverse",
                        onclick: move |_| telegram.open(),
                        IconBadge { icon: Icon::Send, class: "icon--sm" }
                        {t!(lang, "contact-cta-telegram")}
                    }
                }
            }
        }
    }
}
