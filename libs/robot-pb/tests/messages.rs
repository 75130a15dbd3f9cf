//! Envelope, detection, perception and legacy messages on the wire.

#![allow(clippy::unwrap_used)]

use robot_pb::detection::{BoundingBox, DetectionFrame, DetectionResult};
use robot_pb::interfaces::{
    CreateRequest, CreateResponse, ErrorInfo, HealthCheckRequest, HealthCheckResponse, Params,
    QueryRequest, QueryResponse, ResultStatus, SendRequest, SendResponse, status_is_known,
};
use robot_pb::legacy::{TypedVariant, VariantArray, VariantMap, VariantType, typed_variant};
use robot_pb::perception::{Img, MasksTracks, TrackRow};
use robot_pb::{
    Codec, CodecConfig, Dictionary, Error, LEGACY_MAX_DEPTH, MAX_DEPTH, Status, Timestamp, Variant,
};

fn round_trip<M: robot_pb::Payload>(message: &M) -> M {
    let codec = Codec::default();
    codec.decode(&codec.encode(message)).unwrap()
}

fn payload() -> Dictionary {
    let mut d = Dictionary::new();
    d.insert("name", "arm-1");
    d.insert("speed", 0.75);
    d
}

fn params() -> Params {
    Params {
        timeout: 30,
        correlation_id: "corr-7".into(),
        extra: Some([("retry", true)].into_iter().collect()),
    }
}

#[test]
fn create_round_trip() {
    let request = CreateRequest {
        request_data: Some(payload()),
        params: Some(params()),
    };
    assert_eq!(round_trip(&request), request);

    let response = CreateResponse {
        status: Status::Success as i32,
        message: "created".into(),
        resource_id: "res-42".into(),
        response_data: Some(payload()),
        error: None,
    };
    let back = round_trip(&response);
    assert_eq!(back.status(), Status::Success);
    assert_eq!(back, response);
}

#[test]
fn absent_and_empty_payloads_differ() {
    let absent = round_trip(&CreateRequest::default());
    assert!(absent.request_data.is_none());
    assert!(absent.params.is_none());

    let empty = round_trip(&CreateRequest {
        request_data: Some(Dictionary::new()),
        params: None,
    });
    assert_eq!(empty.request_data, Some(Dictionary::new()));
}

#[test]
fn send_and_query_round_trip() {
    let send = SendRequest {
        message_data: Some(payload()),
        target_id: "gripper".into(),
        params: Some(params()),
    };
    assert_eq!(round_trip(&send), send);

    let sent = SendResponse {
        status: Status::Pending as i32,
        message_id: "m-1".into(),
        ..Default::default()
    };
    assert_eq!(round_trip(&sent).status(), Status::Pending);

    let query = QueryRequest {
        query_id: "q".into(),
        limit: 10,
        offset: 20,
        query_conditions: Some([("kind", "arm")].into_iter().collect()),
        params: None,
    };
    assert_eq!(round_trip(&query), query);

    let results = QueryResponse {
        status: Status::Success as i32,
        results: vec![payload(), Dictionary::new(), payload()],
        total_count: 3,
        error: None,
    };
    let back = round_trip(&results);
    assert_eq!(back.results.len(), 3);
    assert!(back.results[1].is_empty());
}

#[test]
fn failure_carries_error_info() {
    let response = CreateResponse {
        status: Status::Failed as i32,
        error: Some(ErrorInfo::new("E_BUSY", "arm busy").with_details("try later")),
        ..Default::default()
    };
    let back = round_trip(&response);
    let error = back.error.unwrap();
    assert_eq!(error.code, "E_BUSY");
    assert_eq!(error.details, "try later");

    let status = round_trip(&ResultStatus::success(Variant::from(payload())));
    assert_eq!(status.status(), Status::Success);
    assert_eq!(status.output.unwrap().dict_value(), &payload());
}

#[test]
fn unknown_status_is_preserved() {
    let response = HealthCheckResponse {
        status: 42,
        details: None,
    };
    let back = round_trip(&response);
    assert_eq!(back.status, 42);
    assert!(!status_is_known(back.status));
    assert_eq!(back.status(), Status::Unknown);
}

#[test]
fn health_check_round_trip() {
    let request = HealthCheckRequest {
        service: "planner".into(),
        check_params: Some(payload()),
    };
    assert_eq!(round_trip(&request), request);
}

#[test]
fn range_validation_reaches_envelope_payloads() {
    let mut data = Dictionary::new();
    data.insert("when", robot_pb::Date::new(2023, 13, 1));
    let request = CreateRequest {
        request_data: Some(data),
        params: None,
    };
    let strict = Codec::new(CodecConfig {
        validate_ranges: true,
        ..CodecConfig::default()
    });
    let bytes = strict.encode(&request);
    assert!(Codec::default().decode::<CreateRequest>(&bytes).is_ok());
    assert!(matches!(
        strict.decode::<CreateRequest>(&bytes),
        Err(Error::FieldOutOfRange { field: "date_value", .. })
    ));
}

#[test]
fn detection_frame_round_trip() {
    let frame = DetectionFrame {
        timestamp: Some(Timestamp::new(1_705_123_456, 0)),
        results: vec![DetectionResult {
            object_id: "obj-1".into(),
            class_name: "person".into(),
            confidence: 0.9,
            bbox: Some(BoundingBox { x: 1.0, y: 2.0, width: 30.0, height: 40.0 }),
        }],
    };
    let back = round_trip(&frame);
    assert_eq!(back, frame);
    assert_eq!(back.results[0].bbox.unwrap().area(), 1200.0);
}

#[test]
fn perception_round_trip() {
    let mut track = TrackRow {
        x1: 0.0,
        y1: 0.0,
        x2: 10.0,
        y2: 10.0,
        track_id: "t-3".into(),
        conf: 0.8,
        cls: "box".into(),
        mask: Vec::new(),
    };
    track.add_mask(1, 2);
    track.add_mask(3, 4);
    let frame = MasksTracks {
        timestamp: "2024-01-13T05:24:16Z".into(),
        tracks: vec![track],
    };
    let back = round_trip(&frame);
    assert_eq!(back, frame);
    assert_eq!(back.track("t-3").map(|t| t.mask.len()), Some(2));

    let img = Img {
        timestamp: "2024-01-13T05:24:16Z".into(),
        img: vec![0xFF, 0xD8, 0xFF, 0xE0],
        requires_masks: true,
    };
    assert_eq!(round_trip(&img), img);
}

#[test]
fn legacy_typed_variants_round_trip() {
    let array: VariantArray = [1i32, 2, 3].into_iter().collect();
    let map: VariantMap = [
        ("number", TypedVariant::from(999)),
        ("text", TypedVariant::from("Map Value")),
        ("list", TypedVariant::from(array)),
    ]
    .into_iter()
    .collect();

    let back = round_trip(&map);
    assert_eq!(back, map);
    assert_eq!(back.values["text"].value_type(), VariantType::String);
    match &back.values["list"].value {
        Some(typed_variant::Value::ArrayVal(a)) => {
            assert_eq!(a.value.as_ref().map(|v| v.values.len()), Some(3));
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(round_trip(&TypedVariant::from(u64::MAX)), TypedVariant::from(u64::MAX));
}

#[test]
fn legacy_nesting_is_bounded() {
    let mut value = TypedVariant::from(1);
    for _ in 0..5 {
        value = TypedVariant::from(VariantArray { values: vec![value] });
    }
    let codec = Codec::new(CodecConfig {
        max_depth: 4,
        ..CodecConfig::default()
    });
    let bytes = codec.encode(&value);
    assert_eq!(
        codec.decode::<TypedVariant>(&bytes),
        Err(Error::RecursionLimitExceeded { limit: 4 })
    );
}

fn nested_legacy_maps(levels: usize) -> TypedVariant {
    let mut value = TypedVariant::from(1);
    for _ in 0..levels {
        value = TypedVariant::from([("k", value)].into_iter().collect::<VariantMap>());
    }
    value
}

#[test]
fn legacy_maps_decode_up_to_their_ceiling() {
    let codec = Codec::new(CodecConfig {
        max_depth: MAX_DEPTH,
        ..CodecConfig::default()
    });

    let at_ceiling = nested_legacy_maps(LEGACY_MAX_DEPTH);
    let bytes = codec.encode(&at_ceiling);
    assert_eq!(codec.decode::<TypedVariant>(&bytes), Ok(at_ceiling));

    let beyond = codec.encode(&nested_legacy_maps(LEGACY_MAX_DEPTH + 1));
    assert_eq!(
        codec.decode::<TypedVariant>(&beyond),
        Err(Error::RecursionLimitExceeded { limit: LEGACY_MAX_DEPTH })
    );
}
