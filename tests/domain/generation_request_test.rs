use prospectus::domain::{GenerationRequest, GuideType, OutputMode, ValidationError};

#[test]
fn given_output_values_in_any_case_when_parsing_then_accepts_them() {
    assert_eq!("lpv".parse::<OutputMode>(), Ok(OutputMode::Lpv));
    assert_eq!(" Guide ".parse::<OutputMode>(), Ok(OutputMode::Guide));
    assert_eq!("BOTH".parse::<OutputMode>(), Ok(OutputMode::Both));
}

#[test]
fn given_unknown_output_when_parsing_then_returns_invalid_output_mode() {
    assert_eq!(
        "summary".parse::<OutputMode>(),
        Err(ValidationError::InvalidOutputMode("summary".to_string()))
    );
}

#[test]
fn given_output_modes_when_checking_tasks_then_reports_selected_blocks() {
    assert!(OutputMode::Lpv.includes_description());
    assert!(!OutputMode::Lpv.includes_guide());
    assert!(!OutputMode::Guide.includes_description());
    assert!(OutputMode::Guide.includes_guide());
    assert!(OutputMode::Both.includes_description());
    assert!(OutputMode::Both.includes_guide());
}

#[test]
fn given_no_guide_type_when_parsing_request_then_defaults_to_area() {
    let request = GenerationRequest::parse("Marina Heights", "guide", None).unwrap();

    assert_eq!(request.project_name, "Marina Heights");
    assert_eq!(request.output, OutputMode::Guide);
    assert_eq!(request.guide_type, GuideType::Area);
}

#[test]
fn given_building_guide_type_when_parsing_request_then_keeps_it() {
    let request = GenerationRequest::parse("Creek Tower", "both", Some("BUILDING")).unwrap();

    assert_eq!(request.guide_type, GuideType::Building);
}

#[test]
fn given_guide_output_with_unknown_guide_type_when_parsing_then_fails() {
    let result = GenerationRequest::parse("Creek Tower", "guide", Some("villa"));

    assert_eq!(
        result,
        Err(ValidationError::InvalidGuideType("villa".to_string()))
    );
}

#[test]
fn given_lpv_output_with_unknown_guide_type_when_parsing_then_falls_back_to_area() {
    let request = GenerationRequest::parse("Creek Tower", "lpv", Some("villa")).unwrap();

    assert_eq!(request.output, OutputMode::Lpv);
    assert_eq!(request.guide_type, GuideType::Area);
}

#[test]
fn given_unknown_output_when_parsing_request_then_fails_before_guide_type() {
    let result = GenerationRequest::parse("Creek Tower", "video", Some("villa"));

    assert!(matches!(result, Err(ValidationError::InvalidOutputMode(_))));
}

#[test]
fn given_guide_types_when_rendering_then_uses_lowercase_names() {
    assert_eq!(GuideType::Area.to_string(), "area");
    assert_eq!(GuideType::Building.to_string(), "building");
    assert_eq!(OutputMode::Both.to_string(), "both");
}
