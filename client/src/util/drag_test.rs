use super::*;

fn payload() -> DragPayload {
    DragPayload { source_path: "static/assets/nose/03.png".into(), alt_text: "Nose feature: 03".into() }
}

#[test]
fn encode_then_decode_json_slot() {
    let json = encode_payload(&payload());
    assert_eq!(decode_payload(Some(&json), None), Some(payload()));
}

#[test]
fn json_slot_wins_over_plain() {
    let json = encode_payload(&payload());
    assert_eq!(decode_payload(Some(&json), Some("other.png")), Some(payload()));
}

#[test]
fn plain_slot_is_fallback_without_alt() {
    let decoded = decode_payload(None, Some(" static/assets/hair/01.png ")).unwrap();
    assert_eq!(decoded.source_path, "static/assets/hair/01.png");
    assert!(decoded.alt_text.is_empty());
}

#[test]
fn malformed_json_falls_back_to_plain() {
    let decoded = decode_payload(Some("{oops"), Some("a.png")).unwrap();
    assert_eq!(decoded.source_path, "a.png");
}

#[test]
fn empty_slots_decode_to_none() {
    assert_eq!(decode_payload(None, None), None);
    assert_eq!(decode_payload(Some(""), Some("")), None);
    assert_eq!(decode_payload(Some(""), Some("   ")), None);
}
