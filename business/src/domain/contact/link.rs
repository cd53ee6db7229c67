use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::domain::product::model::Product;

use super::errors::ContactError;

const TELEGRAM_BASE_URL: &str = "https://t.me";

/// Characters a browser's `encodeURIComponent` leaves as-is.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Message prefilled in the chat with the seller.
pub fn purchase_message(product: &Product) -> String {
    format!(
        "Hello! I want to buy: {} for {}₽",
        product.display_name(),
        product.price
    )
}

/// Builds `https://t.me/<handle>?text=<message>` for the given product.
///
/// Handles are Telegram usernames: ASCII letters, digits and underscores,
/// optionally written with a leading `@`.
pub fn contact_link(handle: &str, product: &Product) -> Result<String, ContactError> {
    let handle = handle.trim().trim_start_matches('@');
    if handle.is_empty() || !handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ContactError::InvalidHandle);
    }

    let chat = Url::parse(&format!("{}/{}", TELEGRAM_BASE_URL, handle))
        .map_err(|_| ContactError::InvalidHandle)?;
    let message = purchase_message(product);
    let text = utf8_percent_encode(&message, URI_COMPONENT);

    Ok(format!("{}?text={}", chat, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(1, "iPhone 14 Pro Max", 60990, "iPhone", "img")
    }

    #[test]
    fn should_build_telegram_link_with_encoded_message() {
        let link = contact_link("feliks_df", &product()).unwrap();

        assert!(link.starts_with("https://t.me/feliks_df?text="));
        let parsed = Url::parse(&link).unwrap();
        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, "Hello! I want to buy: iPhone 14 Pro Max for 60990₽");
    }

    #[test]
    fn should_not_leave_raw_spaces_in_link() {
        let link = contact_link("@shop", &product()).unwrap();
        assert!(!link.contains(' '));
        assert!(link.starts_with("https://t.me/shop?"));
    }

    #[test]
    fn should_percent_encode_spaces_like_a_browser() {
        let link = contact_link("feliks_df", &product()).unwrap();

        assert_eq!(
            link,
            "https://t.me/feliks_df?text=Hello!%20I%20want%20to%20buy%3A%20iPhone%2014%20Pro%20Max%20for%2060990%E2%82%BD"
        );
        assert!(!link.contains('+'));
    }

    #[test]
    fn should_reject_invalid_handles() {
        assert!(matches!(contact_link("", &product()), Err(ContactError::InvalidHandle)));
        assert!(matches!(
            contact_link("evil/../path", &product()),
            Err(ContactError::InvalidHandle)
        ));
    }

    #[test]
    fn should_use_empty_name_for_nameless_products() {
        let mut nameless = product();
        nameless.name = None;
        assert_eq!(purchase_message(&nameless), "Hello! I want to buy:  for 60990₽");
    }
}
