use nomen::{ArrayName, ArrayNameValue, MutableName, Name, StringName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Route {
    from: ArrayName,
    to: StringName,
    via: Vec<ArrayNameValue>,
}

#[test]
fn names_serialize_as_data_strings() {
    let from = ArrayName::new(["oss", "cs.fau", "de"], '.').unwrap();
    let json = serde_json::to_string(&from).unwrap();
    assert_eq!(json, r#""oss.cs\\.fau.de""#);

    let back: ArrayName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, from);
}

#[test]
fn nested_names_round_trip() {
    let mut to = StringName::new("a/b", '/').unwrap();
    to.append("c").unwrap();
    let route = Route {
        from: ArrayName::new(["x"], '.').unwrap(),
        to,
        via: vec![ArrayNameValue::new(["m", "n"], '.').unwrap()],
    };

    let json = serde_json::to_string(&route).unwrap();
    let back: Route = serde_json::from_str(&json).unwrap();

    assert_eq!(back.from, route.from);
    assert_eq!(back.to, route.to);
    assert_eq!(back.to.delimiter(), '.');
    assert_eq!(back.via[0].components(), vec!["m", "n"]);
}
