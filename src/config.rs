//! Site-wide constants. The contact link and video embed are opaque external
//! references; nothing else in the app interprets them.

pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/1XrKFrgM_kE";

const WHATSAPP_NUMBER: &str = "558499536747";
const WHATSAPP_MESSAGE: &str =
    "Olá Marcia, vim através do seu site e gostaria de saber mais sobre seu processo de terapia.";

/// WhatsApp deep link with the pre-filled first message.
pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_targets_deep_link_host() {
        assert!(whatsapp_url().starts_with("https://wa.me/558499536747?text="));
    }

    #[test]
    fn whatsapp_message_is_url_encoded() {
        let url = whatsapp_url();
        let query = url.split("text=").nth(1).unwrap();
        assert!(!query.contains(' '));
        assert!(query.contains("Ol%C3%A1"));
    }
}
