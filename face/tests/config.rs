/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use doodle_face::*;

#[test]
fn default_config_is_valid() {
    assert!(AvatarConfig::default().validate().is_ok());
}

#[test]
fn default_config_round_trips() {
    let config = AvatarConfig::default();
    let json = config.to_json().unwrap();

    assert!(AvatarConfig::from_json(&json).unwrap() == config);
}

#[test]
fn missing_settings_take_defaults() {
    let config = AvatarConfig::from_json(r#"{ "face_points": 50 }"#).unwrap();

    assert!(config.face_points == 50);
    assert!(config.hair == HairConfig::default());
    assert!(config.mouth_weights == [1.0, 1.0, 1.0]);
}

#[test]
fn partial_hair_settings() {
    let config = AvatarConfig::from_json(r#"{ "hair": { "max_base_count": 20.0 } }"#).unwrap();

    assert!(config.hair.max_base_count == 20.0);
    assert!(config.hair.extra_lines == 10.0);
    assert!(config.face_points == 100);
}

#[test]
fn too_few_face_points() {
    assert!(AvatarConfig::from_json(r#"{ "face_points": 2 }"#) == Err(ConfigError::OutOfRange("face_points")));
}

#[test]
fn bad_probability() {
    let mut config = AvatarConfig::default();
    config.hair.strategies[2].probability = 1.5;

    assert!(config.validate() == Err(ConfigError::OutOfRange("hair.strategies.probability")));
}

#[test]
fn mouth_weights_must_not_all_be_zero() {
    let mut config = AvatarConfig::default();
    config.mouth_weights = [0.0, 0.0, 0.0];

    assert!(config.validate() == Err(ConfigError::OutOfRange("mouth_weights")));

    config.mouth_weights = [1.0, -1.0, 1.0];
    assert!(config.validate().is_err());
}

#[test]
fn malformed_json() {
    match AvatarConfig::from_json("{ face_points: ") {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn line_counts() {
    let config = HairConfig::default();

    assert!(config.strategies[0].line_count(20.0, 10.0) == 30);
    assert!(config.strategies[1].line_count(20.0, 10.0) == 24);
    assert!(config.strategies[2].line_count(0.0, 10.0) == 10);
}
