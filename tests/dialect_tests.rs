//! Behavior of the notation itself: promotion, whitespace handling, the `=`
//! separator, and the edge cases that distinguish it from JSON.

use iot_record::{parse, record, Value};

#[test]
fn test_duplicate_keys_last_wins() {
    let v = parse("{a=1, a=2}").unwrap();
    let map = v.as_dict().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some(&Value::Int(2)));
}

#[test]
fn test_embedded_whitespace_in_keys_and_values() {
    let v = parse("{label with spaces=3.14}").unwrap();
    let map = v.as_dict().unwrap();
    assert_eq!(map.get("label with spaces"), Some(&Value::Float(3.14)));

    let v = parse("{another label=this is some string with spaces but without quotes}").unwrap();
    let map = v.as_dict().unwrap();
    assert_eq!(
        map.get("another label").and_then(|v| v.as_str()),
        Some("this is some string with spaces but without quotes")
    );
}

#[test]
fn test_leading_zero_stays_string() {
    let v = parse("{x=007}").unwrap();
    assert_eq!(
        v.as_dict().unwrap().get("x"),
        Some(&Value::String("007".to_string()))
    );
}

#[test]
fn test_escaped_quote_preserved_literally() {
    let v = parse(r#"{bob="And Bob is \" my uncle"}"#).unwrap();
    assert_eq!(
        v.as_dict().unwrap().get("bob").and_then(|v| v.as_str()),
        Some(r#"And Bob is \" my uncle"#)
    );
}

#[test]
fn test_quoted_strings_never_promoted() {
    let v = parse(r#"{n="42", f="3.14", b="true", z="null"}"#).unwrap();
    let map = v.as_dict().unwrap();
    assert_eq!(map.get("n"), Some(&Value::String("42".to_string())));
    assert_eq!(map.get("f"), Some(&Value::String("3.14".to_string())));
    assert_eq!(map.get("b"), Some(&Value::String("true".to_string())));
    assert_eq!(map.get("z"), Some(&Value::String("null".to_string())));
}

#[test]
fn test_json_separator_rejected() {
    // The "tricky" JSON-style input: must fail, never silently parse
    assert!(parse(r#"{"key": 1}"#).is_err());
    assert!(parse(r#"{"key": ["item0", "item1", 3.14], "key2": true}"#).is_err());
    assert!(parse("{tricky label: \"bob\", label2: tricky value}").is_err());
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse("{}").unwrap(), record!({}));
    assert_eq!(parse("[]").unwrap(), record!([]));
}

#[test]
fn test_nested_structures() {
    let v =
        parse("{dict={this=thing, hello=world, one=2.0}, listicle=[my, list, of, craps, 1.2, 3]}")
            .unwrap();
    let expected = record!({
        "dict" = {
            "this" = "thing",
            "hello" = "world",
            "one" = 2.0
        },
        "listicle" = ["my", "list", "of", "craps", 1.2, 3]
    });
    assert_eq!(v, expected);
}

#[test]
fn test_full_kitchen_sink_record() {
    let text = r#"{cepid=CEP010, dict={this=thing, hello=world, one=2.0}, listicle=[my, list, of, craps, 1.2, 3], bob="And Bob is \" my uncle", filename=orcatech_data/json/home_2001/2022-03-11_2022-03-12/nyce-w-6975_26288.json, filecount=58, label with spaces=3.14, another label=this is some string with spaces but without quotes, bool_thing=false, happy_little null=null, loaddate=2022-03-12T04:32:30.124Z, not actually true=true dat}"#;
    let v = parse(text).unwrap();
    let map = v.as_dict().unwrap();

    assert_eq!(map.len(), 12);
    assert_eq!(map.get("cepid").and_then(|v| v.as_str()), Some("CEP010"));
    assert_eq!(map.get("filecount"), Some(&Value::Int(58)));
    assert_eq!(map.get("label with spaces"), Some(&Value::Float(3.14)));
    assert_eq!(map.get("bool_thing"), Some(&Value::Bool(false)));
    assert_eq!(map.get("happy_little null"), Some(&Value::Null));
    assert_eq!(
        map.get("not actually true"),
        Some(&Value::String("true dat".to_string()))
    );
    assert_eq!(
        map.get("loaddate").and_then(|v| v.as_str()),
        Some("2022-03-12T04:32:30.124Z")
    );
}

#[test]
fn test_device_inventory_record() {
    let text = "{itemid=26288, itemname=nyce-w-6975, serialnumber=ZBW6975, macaddress=000D6F00132B33CB, modelid=120, modelname=NCZ-3041, vendorname=NYCE Controls, typename=Activity Sensors, subtypename=Zigbee / Wall, currenthomeid=null, batterymonths=12, hasbatteries=1}";
    let v = parse(text).unwrap();
    let map = v.as_dict().unwrap();

    assert_eq!(map.get("itemid"), Some(&Value::Int(26288)));
    // Hex-ish MAC has letters, so it stays a string
    assert_eq!(
        map.get("macaddress").and_then(|v| v.as_str()),
        Some("000D6F00132B33CB")
    );
    assert_eq!(
        map.get("vendorname").and_then(|v| v.as_str()),
        Some("NYCE Controls")
    );
    assert_eq!(
        map.get("subtypename").and_then(|v| v.as_str()),
        Some("Zigbee / Wall")
    );
    assert_eq!(map.get("currenthomeid"), Some(&Value::Null));
}

#[test]
fn test_sensor_event_record() {
    let text = "{stamp=1.647039603041E9, event=48, sunday=null, sequencenum=12, areaname=Kitchen 1, alarm1=false, superreports=true}";
    let v = parse(text).unwrap();
    let map = v.as_dict().unwrap();

    assert_eq!(map.get("stamp"), Some(&Value::Float(1.647039603041e9)));
    assert_eq!(map.get("event"), Some(&Value::Int(48)));
    assert_eq!(map.get("sunday"), Some(&Value::Null));
    assert_eq!(map.get("areaname").and_then(|v| v.as_str()), Some("Kitchen 1"));
    assert_eq!(map.get("alarm1"), Some(&Value::Bool(false)));
    assert_eq!(map.get("superreports"), Some(&Value::Bool(true)));
}

#[test]
fn test_negative_numbers() {
    let v = parse("[-1, -0.5, -12e3]").unwrap();
    assert_eq!(
        v,
        Value::List(vec![
            Value::Int(-1),
            Value::Float(-0.5),
            Value::Float(-12e3)
        ])
    );
}

#[test]
fn test_whitespace_around_structure_is_insignificant() {
    let tight = parse("{a=1,b=[2,3]}").unwrap();
    let loose = parse(" {  a = 1 ,\n  b = [ 2 , 3 ] } ").unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn test_render_reparse_roundtrip() {
    let v = parse("{dict={one=2.0}, xs=[my, 1.2, 3], note=\"42\", flag=true, nothing=null}")
        .unwrap();
    let rendered = v.to_string();
    assert_eq!(parse(&rendered).unwrap(), v);
}

#[test]
fn test_deep_nesting_rejected() {
    let deep = "{a=".repeat(200) + "1" + &"}".repeat(200);
    let err = parse(&deep).unwrap_err();
    assert!(err.to_string().contains("nesting depth"));
}

#[test]
fn test_error_reports_position() {
    let err = parse("{a=1,\n b~}").unwrap_err();
    let (line, _col) = err.position().expect("grammar errors carry a position");
    assert_eq!(line, 2);
}
