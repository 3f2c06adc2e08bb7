use dropdown_lib::error::ConfigError;
use dropdown_lib::{DropdownConfig, Length};

#[test]
fn test_defaults() {
    let config = DropdownConfig::default();
    assert_eq!(config.chunk_size, 100);
    assert_eq!(config.item_height, 35.0);
    assert_eq!(config.display_key, "customer");
    assert_eq!(config.key_field, "id");
    assert!(config.multiple_select);
    assert_eq!(config.dropdown_width, Length::Px(350.0));
    assert_eq!(config.max_dropdown_height, 300.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_camel_case_keys() {
    let config = DropdownConfig::from_json(
        r#"{
            "chunkSize": 25,
            "displayKey": "address.city",
            "keyField": "code",
            "multipleSelect": false,
            "inputWidth": "80%",
            "inputHeight": 40,
            "dropdownWidth": "500px",
            "maxDropdownHeight": 450
        }"#,
    )
    .unwrap();

    assert_eq!(config.chunk_size, 25);
    assert_eq!(config.display_key, "address.city");
    assert_eq!(config.key_field, "code");
    assert!(!config.multiple_select);
    assert_eq!(config.input_width, Length::Percent(80.0));
    assert_eq!(config.input_height, Length::Px(40.0));
    assert_eq!(config.dropdown_width, Length::Px(500.0));
    assert_eq!(config.max_dropdown_height, 450.0);
    // untouched keys keep defaults
    assert_eq!(config.item_height, 35.0);
}

#[test]
fn test_length_parsing() {
    assert_eq!("350px".parse::<Length>().unwrap(), Length::Px(350.0));
    assert_eq!(" 12 ".parse::<Length>().unwrap(), Length::Px(12.0));
    assert_eq!("100%".parse::<Length>().unwrap(), Length::Percent(100.0));
    assert!(matches!(
        "wide".parse::<Length>(),
        Err(ConfigError::InvalidLength { .. })
    ));
    assert_eq!(Length::Percent(50.0).resolve(300.0), 150.0);
    assert_eq!(Length::Px(20.0).resolve(300.0), 20.0);
}

#[test]
fn test_invalid_length_in_json() {
    let err = DropdownConfig::from_json(r#"{"dropdownWidth": "huge"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_zero_chunk_size_rejected() {
    let err = DropdownConfig::from_json(r#"{"chunkSize": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroChunkSize));
}

#[test]
fn test_bad_heights_rejected() {
    let config = DropdownConfig::default().with_item_height(0.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidItemHeight(_))
    ));
    let config = DropdownConfig::default().with_max_dropdown_height(-1.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMaxHeight(_))
    ));
}

#[test]
fn test_input_color() {
    let rgb = DropdownConfig::default().input_rgb().unwrap();
    assert_eq!((rgb.red, rgb.green, rgb.blue), (0xcc, 0xcc, 0xcc));

    let config = DropdownConfig {
        input_color: "not-a-color".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidColor { .. })
    ));
}
