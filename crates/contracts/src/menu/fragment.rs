use super::tab_id::TabId;

/// Reads a tab out of an address fragment (`location.hash`).
///
/// Accepts the value with or without the leading `#`. The remainder is
/// percent-decoded and must be an exact tab token; everything else,
/// including an empty fragment, yields `None`.
pub fn parse_fragment(raw: &str) -> Option<TabId> {
    let bare = raw.strip_prefix('#').unwrap_or(raw);
    if bare.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(bare).ok()?;
    match decoded.parse::<TabId>() {
        Ok(tab) => Some(tab),
        Err(e) => {
            log::debug!("fragment ignored: {}", e);
            None
        }
    }
}
