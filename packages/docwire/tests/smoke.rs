use docwire::{decode_document, encode_fields, fields, wire, Value};

#[test]
fn codec_works_through_reexports() {
    let data = fields! {
        "name" => "Ada",
        "score" => 95i64,
        "tags" => vec!["algebra", "geometry"],
    };

    let encoded = encode_fields(data);
    let json = serde_json::to_value(&encoded).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": {"stringValue": "Ada"},
            "score": {"integerValue": "95"},
            "tags": {"arrayValue": {"values": [
                {"stringValue": "algebra"},
                {"stringValue": "geometry"}
            ]}}
        })
    );

    let doc = decode_document(wire::WireDocument {
        name: "projects/p/databases/(default)/documents/students/s1".to_string(),
        fields: Some(encoded),
    });
    assert_eq!(doc.id, "s1");
    assert_eq!(doc.get("name"), Some(&Value::from("Ada")));
    assert_eq!(doc.get("score"), Some(&Value::Integer(95)));
}
