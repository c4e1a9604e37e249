// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConfigError, TIME_ZONE_ENV, WorkflowConfig};
use chrono_tz::Tz;

#[test]
fn test_default_time_zone_is_utc() {
    assert_eq!(WorkflowConfig::default().time_zone(), Tz::UTC);
}

#[test]
fn test_named_time_zone() {
    let config: WorkflowConfig = WorkflowConfig::new("Europe/Stockholm").unwrap();
    assert_eq!(config.time_zone(), Tz::Europe__Stockholm);
}

#[test]
fn test_unknown_time_zone_is_rejected() {
    assert_eq!(
        WorkflowConfig::new("Mars/Olympus_Mons"),
        Err(ConfigError::InvalidTimeZone {
            source_name: String::from("time_zone"),
            value: String::from("Mars/Olympus_Mons"),
        })
    );
}

#[test]
fn test_blank_setting_falls_back_to_default() {
    assert_eq!(
        WorkflowConfig::from_value(TIME_ZONE_ENV, "  "),
        Ok(WorkflowConfig::default())
    );
}

#[test]
fn test_invalid_setting_names_its_source() {
    let err: ConfigError = WorkflowConfig::from_value(TIME_ZONE_ENV, "Nowhere").unwrap_err();

    assert_eq!(
        err.to_string(),
        "TESSERA_TIME_ZONE is not a valid IANA time zone: Nowhere"
    );
}
