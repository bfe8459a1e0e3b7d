#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const RELAY_PATH: &str = "/admissions-proxy";
pub const UPSTREAM_URL: &str = "https://futureassist.hashfuture.school/api/admissions/demo";
pub const REVIEWS_URL: &str = "https://www.google.com/search?sca_esv=262b8e8005cfc964&biw=1366&bih=646&aic=0&si=AL3DRZEsmMGCryMMFSHJ3StBhOdZ2-6yYkXd_doETEE1OR-qOU-zxeFMVASMyjyDK65iUocHVVh1EBBXSU6qgJFwXPdmTX6yp2uKN2JlBqbhZEGgYclxVXgWke2Ore_qCsRvkInIhfXz&q=%23FUTURE+SCHOOL+Reviews&sa=X&ved=2ahUKEwjRgrac56iSAxWzRmwGHfXNMIAQ0bkNegQIGxAH";

pub fn recaptcha_site_key() -> &'static str {
    option_env!("RECAPTCHA_SITE_KEY").unwrap_or("")
}

pub fn relay_url() -> String {
    format!("{}{}", get_backend_url(), RELAY_PATH)
}

/// What the admission modal shows inside its content box.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalBody {
    InlineForm,
    /// A hosted booking form, rendered in an iframe instead of our own form.
    EmbeddedFrame { src: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    pub auto_open_delay_ms: u32,
    pub body: ModalBody,
}

impl ModalConfig {
    pub fn standard() -> Self {
        Self {
            auto_open_delay_ms: 120_000,
            body: ModalBody::InlineForm,
        }
    }

    pub fn short_delay() -> Self {
        Self {
            auto_open_delay_ms: 60_000,
            ..Self::standard()
        }
    }

    pub fn embedded(src: impl Into<String>) -> Self {
        Self {
            body: ModalBody::EmbeddedFrame { src: src.into() },
            ..Self::standard()
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_only_differ_where_named() {
        assert_eq!(ModalConfig::standard().auto_open_delay_ms, 120_000);
        assert_eq!(ModalConfig::short_delay().auto_open_delay_ms, 60_000);
        assert_eq!(ModalConfig::short_delay().body, ModalBody::InlineForm);

        let embedded = ModalConfig::embedded("https://forms.example.com/demo");
        assert_eq!(embedded.auto_open_delay_ms, 120_000);
        assert_eq!(
            embedded.body,
            ModalBody::EmbeddedFrame { src: "https://forms.example.com/demo".to_string() }
        );
    }

    #[test]
    fn relay_url_ends_with_relay_path() {
        assert!(relay_url().ends_with("/admissions-proxy"));
    }
}
