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

use crate::{
    config::field::FieldMsa,
    mc::{
        daemon_options::{DaemonOptions, Family},
        fragment::{order, Fragment, FragmentKind},
    },
    Config,
};

fn config(sendmail: &str) -> Config {
    Config::from_toml(&format!(
        "version_requirement = \">=1.0.0, <2.0.0\"\n{sendmail}"
    ))
    .unwrap()
}

fn find<'a>(fragments: &'a [Fragment], name: &str) -> Option<&'a Fragment> {
    fragments.iter().find(|fragment| fragment.name == name)
}

fn daemon_options<'a>(fragments: &'a [Fragment], title: &str) -> &'a DaemonOptions {
    match &find(fragments, &format!("sendmail_mc-daemon_options-{title}"))
        .unwrap_or_else(|| panic!("missing daemon options '{title}'"))
        .kind
    {
        FragmentKind::DaemonOptions(options) => options,
        other => panic!("'{title}' is not a daemon options fragment: {other:?}"),
    }
}

#[test]
fn mail_hub() {
    let selection = config("[sendmail]\nmail_hub = \"example.com\"").select();
    let fragments = &selection.fragments;

    let no_default_msa = find(fragments, "sendmail_mc-feature-no_default_msa").unwrap();
    assert_eq!(no_default_msa.content, "FEATURE(`no_default_msa')dnl");

    let nullclient = find(fragments, "sendmail_mc-feature-nullclient").unwrap();
    assert_eq!(nullclient.content, "FEATURE(`nullclient', `example.com')dnl");
    match &nullclient.kind {
        FragmentKind::Feature(feature) => {
            assert_eq!(feature.args, vec!["example.com".to_string()]);
        }
        other => panic!("not a feature fragment: {other:?}"),
    }

    pretty_assertions::assert_eq!(
        daemon_options(fragments, "MSA-v4"),
        &DaemonOptions {
            daemon_name: "MSA".to_string(),
            family: Family::Inet,
            addr: "127.0.0.1".to_string(),
            port: "587".to_string(),
            modify: None,
        }
    );
    pretty_assertions::assert_eq!(
        daemon_options(fragments, "MSA-v6"),
        &DaemonOptions {
            daemon_name: "MSA".to_string(),
            family: Family::Inet6,
            addr: "::1".to_string(),
            port: "587".to_string(),
            modify: None,
        }
    );

    assert_eq!(
        find(fragments, "sendmail_mc-daemon_options-MSA-v4")
            .unwrap()
            .content,
        "DAEMON_OPTIONS(`Name=MSA, Family=inet, Addr=127.0.0.1, Port=587')dnl"
    );
}

#[test]
fn without_mail_hub_there_is_no_nullclient_feature() {
    let selection = config("").select();
    assert!(find(&selection.fragments, "sendmail_mc-feature-nullclient").is_none());
    assert!(find(&selection.fragments, "sendmail_mc-feature-no_default_msa").is_some());
}

#[test]
fn ipv4_msa_disabled() {
    let selection = config(
        "[sendmail]\nmail_hub = \"example.com\"\n[sendmail.msa]\nenable_ipv4 = false",
    )
    .select();
    assert!(find(&selection.fragments, "sendmail_mc-daemon_options-MSA-v4").is_none());
    assert!(find(&selection.fragments, "sendmail_mc-daemon_options-MSA-v6").is_some());
}

#[test]
fn ipv6_msa_disabled() {
    let selection = config(
        "[sendmail]\nmail_hub = \"example.com\"\n[sendmail.msa]\nenable_ipv6 = false",
    )
    .select();
    assert!(find(&selection.fragments, "sendmail_mc-daemon_options-MSA-v4").is_some());
    assert!(find(&selection.fragments, "sendmail_mc-daemon_options-MSA-v6").is_none());
}

#[test]
fn msa_disabled_for_both_families_is_rejected() {
    let error = Config::from_toml(
        r#"
version_requirement = ">=1.0.0, <2.0.0"

[sendmail]
mail_hub = "example.com"

[sendmail.msa]
enable_ipv4 = false
enable_ipv6 = false
"#,
    )
    .unwrap_err()
    .to_string();
    assert!(error.contains("enabled for IPv4 or IPv6"), "{error}");
}

#[test]
fn builder_rejects_msa_disabled_for_both_families() {
    let error = Config::builder()
        .with_current_version()
        .without_ostype()
        .with_default_host()
        .without_daemons()
        .without_mailers()
        .without_trusted_users()
        .without_tls_support()
        .with_msa(FieldMsa {
            enable_ipv4: false,
            enable_ipv6: false,
            ..FieldMsa::default()
        })
        .with_mail_hub("example.com")
        .validate()
        .unwrap_err()
        .to_string();
    assert!(error.contains("enabled for IPv4 or IPv6"), "{error}");
}

#[test]
fn custom_port_reaches_both_listeners() {
    let selection =
        config("[sendmail]\nmail_hub = \"example.com\"\n[sendmail.msa]\nport = \"25\"").select();
    assert_eq!(daemon_options(&selection.fragments, "MSA-v4").port, "25");
    assert_eq!(daemon_options(&selection.fragments, "MSA-v6").port, "25");
}

#[test]
fn port_option_modify_reaches_both_listeners() {
    for modify in ["S", "Sa"] {
        let selection = config(&format!(
            "[sendmail]\nmail_hub = \"example.com\"\n[sendmail.msa]\nport_option_modify = \"{modify}\""
        ))
        .select();
        let v4 = daemon_options(&selection.fragments, "MSA-v4");
        let v6 = daemon_options(&selection.fragments, "MSA-v6");
        assert_eq!(v4.modify.as_deref(), Some(modify));
        assert_eq!(v6.modify.as_deref(), Some(modify));

        assert_eq!(
            find(&selection.fragments, "sendmail_mc-daemon_options-MSA-v4")
                .unwrap()
                .content,
            format!("DAEMON_OPTIONS(`Name=MSA, Family=inet, Addr=127.0.0.1, Port=587, Modify={modify}')dnl")
        );
    }
}

#[test]
fn selection_is_deterministic() {
    let config = config(
        "[sendmail]\nostype = \"debian\"\nmail_hub = \"example.com\"\ntrusted_users = [\"root\"]",
    );
    pretty_assertions::assert_eq!(config.select(), config.select());
}

#[test]
fn fragments_are_sorted_by_order_key() {
    let selection = config("[sendmail]\nostype = \"debian\"\nmail_hub = \"example.com\"").select();
    let fragments = &selection.fragments;

    assert!(fragments
        .windows(2)
        .all(|pair| pair[0].order <= pair[1].order));
    assert_eq!(fragments[0].name, "sendmail_mc-ostype-debian");

    // Within the FEATURE tier, enumeration order is kept.
    let features = fragments
        .iter()
        .filter(|fragment| fragment.order == order::FEATURE)
        .map(|fragment| fragment.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        features,
        ["sendmail_mc-feature-no_default_msa", "sendmail_mc-feature-nullclient"]
    );
}

#[test]
fn fragment_names_are_unique() {
    let selection = config("[sendmail]\nostype = \"linux\"\nmail_hub = \"example.com\"").select();
    let mut names = selection
        .fragments
        .iter()
        .map(|fragment| fragment.name.clone())
        .collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), selection.fragments.len());
}

#[test]
fn settings_are_passed_through_verbatim() {
    let selection = config(
        r#"
[sendmail]
domain_name = "smtp.example.com"
max_message_size = "42"
trusted_users = ["root"]
enable_msp_trusted_users = true
mail_hub = "example.com"

[sendmail.tls]
ca_cert_file = "/foo"
ca_cert_path = "/foo"
server_cert_file = "/foo"
server_key_file = "/foo"
client_cert_file = "/foo"
client_key_file = "/foo"
crl_file = "/foo"
dh_params = "/foo"
cipher_list = "/foo"
tls_srv_options = "V"
server_ssl_options = "/foo"
client_ssl_options = "/foo"
"#,
    )
    .select();
    let settings = &selection.settings;

    assert_eq!(settings.domain_name.as_deref(), Some("smtp.example.com"));
    assert_eq!(settings.max_message_size.as_deref(), Some("42"));
    assert_eq!(settings.trusted_users, vec!["root".to_string()]);
    assert!(settings.enable_msp_trusted_users);
    assert_eq!(
        settings.tls.ca_cert_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.server_cert_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.ca_cert_path.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.server_key_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.client_cert_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.client_key_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(
        settings.tls.crl_file.as_deref(),
        Some(std::path::Path::new("/foo"))
    );
    assert_eq!(settings.tls.dh_params.as_deref(), Some("/foo"));
    assert_eq!(settings.tls.cipher_list.as_deref(), Some("/foo"));
    assert_eq!(settings.tls.tls_srv_options.as_deref(), Some("V"));
    assert_eq!(settings.tls.server_ssl_options.as_deref(), Some("/foo"));
    assert_eq!(settings.tls.client_ssl_options.as_deref(), Some("/foo"));
}

#[test]
fn settings_defaults_match_the_nullclient_base() {
    let settings = Config::default().select().settings;

    assert_eq!(settings.domain_name, None);
    assert_eq!(settings.max_message_size, None);
    assert!(settings.dont_probe_interfaces);
    assert!(!settings.enable_ipv4_daemon);
    assert!(!settings.enable_ipv6_daemon);
    assert!(settings.mailers.is_empty());
    assert!(settings.trusted_users.is_empty());
    assert!(!settings.enable_msp_trusted_users);
    assert_eq!(settings.tls, crate::field::FieldTls::default());
}

#[test]
fn builder_passes_host_daemon_and_mailer_settings_through() {
    let settings = Config::builder()
        .with_current_version()
        .without_ostype()
        .with_host_settings(
            Some("smtp.example.com".to_string()),
            Some("42".to_string()),
            false,
        )
        .with_daemons(true, true)
        .with_mailers(&["smtp", "local"])
        .without_trusted_users()
        .without_tls_support()
        .with_default_msa()
        .without_mail_hub()
        .validate()
        .unwrap()
        .select()
        .settings;

    assert_eq!(settings.domain_name.as_deref(), Some("smtp.example.com"));
    assert_eq!(settings.max_message_size.as_deref(), Some("42"));
    assert!(!settings.dont_probe_interfaces);
    assert!(settings.enable_ipv4_daemon);
    assert!(settings.enable_ipv6_daemon);
    assert_eq!(settings.mailers, vec!["smtp".to_string(), "local".to_string()]);
}

#[test]
fn toml_passes_host_daemon_and_mailer_settings_through() {
    let settings = config(
        r#"
[sendmail]
dont_probe_interfaces = false
enable_ipv4_daemon = true
enable_ipv6_daemon = true
mailers = ["smtp", "local"]
"#,
    )
    .select()
    .settings;

    assert!(!settings.dont_probe_interfaces);
    assert!(settings.enable_ipv4_daemon);
    assert!(settings.enable_ipv6_daemon);
    assert_eq!(settings.mailers, vec!["smtp".to_string(), "local".to_string()]);
}
