//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        gid: GlyphId,
        point: Point<i32>,
    }

    let my_instance = MyTypes {
        gid: GlyphId::new(69),
        point: Point::new(-12, 700),
    };

    let json = serde_json::to_string(&my_instance).unwrap();
    assert_eq!(json, r#"{"gid":69,"point":{"x":-12,"y":700}}"#);
    let deserialized: MyTypes = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, my_instance);
}

#[test]
fn tag_serializes_to_string() {
    let json = serde_json::to_string(&Tag::new(b"glyf")).unwrap();
    assert_eq!(json, r#""glyf""#);
}
