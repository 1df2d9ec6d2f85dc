//! Host integration: outbound navigation.
//!
//! On the web the page document opens links itself. Native shells hand the
//! URI to the system handler (browser, mail client, dialer).

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// An external destination the user can be sent to. Nothing comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Open a URL in a new browsing context.
    NewTab(String),
    /// `mailto:` link, optionally with a subject line.
    Mail { to: String, subject: Option<String> },
    /// `tel:` link.
    Call(String),
}

impl Outbound {
    pub fn href(&self) -> String {
        match self {
            Outbound::NewTab(url) => url.clone(),
            Outbound::Mail { to, subject: None } => format!("mailto:{to}"),
            Outbound::Mail {
                to,
                subject: Some(subject),
            } => format!("mailto:{to}?subject={}", encode_header(subject)),
            Outbound::Call(number) => {
                let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
                format!("tel:{digits}")
            }
        }
    }

    /// URI to hand to the host, or `None` when there is nowhere to go.
    pub fn destination(&self) -> Option<String> {
        match self {
            Outbound::NewTab(url) if url.trim().is_empty() => None,
            _ => Some(self.href()),
        }
    }

    #[cfg(any(target_arch = "wasm32", test))]
    fn script(&self) -> Result<String, serde_json::Error> {
        let href = serde_json::to_string(&self.href())?;
        Ok(match self {
            Outbound::NewTab(_) => format!("window.open({href}, \"_blank\", \"noopener\");"),
            Outbound::Mail { .. } | Outbound::Call(_) => format!("window.location.href = {href};"),
        })
    }

    /// Send the user to the destination. Fire and forget.
    pub fn open(&self) {
        let Some(href) = self.destination() else {
            tracing::warn!("ignoring outbound link without a URL");
            return;
        };
        tracing::debug!(%href, platform = ?Platform::current(), "opening outbound link");
        self.launch(&href);
    }

    /// The page document opens tabs and follows `mailto:`/`tel:` itself.
    #[cfg(target_arch = "wasm32")]
    fn launch(&self, _href: &str) {
        match self.script() {
            Ok(script) => {
                let _ = document::eval(&script);
            }
            Err(err) => tracing::error!(%err, "unable to encode outbound link"),
        }
    }

    /// Every scheme goes to the system handler.
    #[cfg(not(target_arch = "wasm32"))]
    fn launch(&self, href: &str) {
        if let Err(err) = webbrowser::open(href) {
            tracing::warn!(%href, %err, "system handler refused outbound link");
        }
    }
}

/// Percent-encode a `mailto:` header value (spaces as `%20`, RFC 6068).
fn encode_header(value: &str) -> String {
    // `form_urlencoded` turns spaces into `+` and escapes a literal `+` as `%2B`.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
