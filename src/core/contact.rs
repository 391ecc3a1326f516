/// Greeting pre-filled into the chat opened by the contact link
pub const GREETING: &str = "Salam! Aap ka match mil gaya hai!";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Build the WhatsApp deep link for a candidate's contact handle
pub fn contact_link(handle: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        handle,
        urlencoding::encode(GREETING)
    )
}
