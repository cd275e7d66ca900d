/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC timestamp as an RFC 3339 string (stored in `data_cadastro` /
/// `data_atualizacao`)
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Generate a timestamp-derived string ID for locally minted entities.
///
/// Layout: `<millis since epoch>-<3 hex digits of randomness>`. Remote-assigned
/// identifiers (UUIDs from the relational backend) replace these once an entity
/// round-trips through a sync push.
pub fn entity_id() -> String {
    use rand::Rng;
    let suffix: u16 = rand::thread_rng().gen_range(0..0x1000);
    format!("{}-{:03x}", now_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_is_timestamp_prefixed() {
        let before = now_millis();
        let id = entity_id();
        let after = now_millis();

        let (ts, suffix) = id.split_once('-').expect("id has a dash separator");
        let ts: i64 = ts.parse().unwrap();
        assert!(ts >= before && ts <= after);
        assert_eq!(suffix.len(), 3);
    }

    #[test]
    fn now_iso_parses_back() {
        let iso = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&iso).is_ok());
    }
}
