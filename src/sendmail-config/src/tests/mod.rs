/*
 * Sendmail configuration generator
 * Copyright (C) 2022 viridIT SAS
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/

mod nullclient;

use crate::{mc::ostype::Ostype, Config};

#[test]
fn parse() {
    let toml = r#"
version_requirement = ">=1.0.0, <2.0.0"

[sendmail]
ostype = "debian"
mail_hub = "example.com"

[sendmail.msa]
port = "587"
"#;
    pretty_assertions::assert_eq!(
        Config::from_toml(toml).unwrap(),
        Config::builder()
            .with_version_str(">=1.0.0, <2.0.0")
            .unwrap()
            .with_ostype(Ostype::Debian)
            .with_default_host()
            .without_daemons()
            .without_mailers()
            .without_trusted_users()
            .without_tls_support()
            .with_default_msa()
            .with_mail_hub("example.com")
            .validate()
            .unwrap()
    );
}

#[test]
fn minimal_document_equals_default() {
    pretty_assertions::assert_eq!(
        Config::from_toml("version_requirement = \">=1.0.0, <2.0.0\"").unwrap(),
        Config::default()
    );
}

#[test]
fn version_requirement_must_match() {
    let error = Config::from_toml("version_requirement = \">=99.0.0\"")
        .unwrap_err()
        .to_string();
    assert!(error.contains("Version requirement not fulfilled"), "{error}");
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(Config::from_toml(
        r#"
version_requirement = ">=1.0.0, <2.0.0"

[sendmail]
smart_host = "example.com"
"#
    )
    .is_err());
}

#[test]
fn unsupported_ostype_is_rejected() {
    assert!(Config::from_toml(
        r#"
version_requirement = ">=1.0.0, <2.0.0"

[sendmail]
ostype = "solaris8"
"#
    )
    .is_err());
}
