use dd_idcard::{
    check_character_for, classify, convert_15_to_18, get_age, get_birth_date, get_birth_date_iso,
    get_region, get_sex, is_legal_past_date, validate_15, validate_18, validate_any,
    validate_hk_card, validate_id_card_10, validate_tw_card, IdCardError, IdCardScheme, Region,
    RegionalCardInfo, Sex, ValidatorConfig,
};

const CURRENT_YEAR: i32 = 2026;

#[test]
fn mainland_number_end_to_end() {
    let id = "11010519491231002X";
    assert!(validate_18(id));
    assert_eq!(get_region(id), Ok(Region::Beijing));
    assert_eq!(get_region(id).unwrap().to_string(), "Beijing");
    // 17th character is 2
    assert_eq!(get_sex(id), Sex::Female);
    assert_eq!(get_birth_date(id).unwrap(), "19491231");
    assert_eq!(get_birth_date_iso(id).unwrap(), "1949-12-31");
    assert_eq!(get_age(id, CURRENT_YEAR), Ok(77));
}

#[test]
fn legacy_number_converts_to_a_valid_number() {
    let legacy = "110105491231002";
    assert!(validate_15(legacy, CURRENT_YEAR));

    let converted = convert_15_to_18(legacy).unwrap();
    assert!(converted.starts_with("1101051949"));
    assert_eq!(&converted[10..17], "1231002");
    assert!(validate_18(&converted));
    assert_eq!(converted, "11010519491231002X");
}

#[test]
fn converted_checksum_is_sensitive_to_the_sequence_number() {
    let tampered = "110105491231003";
    assert!(validate_15(tampered, CURRENT_YEAR));

    let original = convert_15_to_18("110105491231002").unwrap();
    let converted = convert_15_to_18(tampered).unwrap();
    assert!(validate_18(&converted));
    assert_ne!(original.chars().last(), converted.chars().last());
    // the original check character does not fit the tampered body
    let mixed = format!("{}{}", &converted[..17], &original[17..]);
    assert!(!validate_18(&mixed));
}

#[test]
fn every_converted_legacy_number_is_valid() {
    let regions = ["11", "31", "44", "51", "65", "81", "91"];
    for region in regions {
        for (year, month, day) in [(30, 1, 1), (49, 12, 31), (72, 2, 29), (99, 6, 15)] {
            for sequence in [1, 2, 123, 999] {
                let legacy = format!("{region}0101{year:02}{month:02}{day:02}{sequence:03}");
                assert!(validate_15(&legacy, CURRENT_YEAR), "{legacy}");

                let converted = convert_15_to_18(&legacy).unwrap();
                assert!(validate_18(&converted), "{converted}");
                assert_eq!(
                    check_character_for(&converted[..17]).ok(),
                    converted.chars().last()
                );
            }
        }
    }
}

#[test]
fn wrong_lengths_are_rejected_everywhere() {
    for id in ["11010519491231", "11010519491231002X1", ""] {
        assert!(!validate_any(id, CURRENT_YEAR));
        assert!(!validate_18(id));
        assert!(!validate_15(id, CURRENT_YEAR));
        assert!(!validate_tw_card(id));
        assert!(!validate_hk_card(id));
        assert_eq!(validate_id_card_10(id), None);
    }
}

#[test]
fn leap_year_boundaries() {
    assert!(is_legal_past_date(2000, 2, 29, CURRENT_YEAR));
    assert!(!is_legal_past_date(1900, 2, 29, CURRENT_YEAR));
    assert!(is_legal_past_date(2024, 2, 29, CURRENT_YEAR));
    assert!(!is_legal_past_date(1929, 5, 1, CURRENT_YEAR));
}

#[test]
fn regional_cards() {
    assert!(validate_tw_card("A123456789"));
    assert!(validate_hk_card("A123456(3)"));
    assert_eq!(
        validate_id_card_10("A123456789"),
        Some(RegionalCardInfo {
            region: Region::Taiwan,
            sex: Sex::Male,
            valid: true,
        })
    );
    assert_eq!(classify("A123456(3)", CURRENT_YEAR), Some(IdCardScheme::HongKong));
}

#[test]
fn extractors_report_errors_on_malformed_input() {
    assert_eq!(get_birth_date("not a number"), Err(IdCardError::Format));
    assert_eq!(get_region("000105491231002"), Err(IdCardError::Region));
    assert_eq!(get_sex("A123456789"), Sex::Unknown);
}

#[test]
fn configured_validator() {
    let config: ValidatorConfig = serde_json::from_str(
        r#"{"schemes": [{"type": "Mainland18"}, {"type": "Mainland15"}], "reference_year": 2026}"#,
    )
    .unwrap();
    let validator = config.build().unwrap();
    assert!(validator.validate("11010519491231002X"));
    assert!(validator.validate("110105491231002"));
    assert!(!validator.validate("A123456789"));
}
