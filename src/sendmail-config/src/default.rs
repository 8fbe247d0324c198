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
    config::field::{FieldMsa, FieldSendmail, FieldTls},
    Config,
};

impl Default for Config {
    fn default() -> Self {
        Self::ensure(Self {
            version_requirement: semver::VersionReq::parse(">=1.0.0, <2.0.0").unwrap(),
            sendmail: FieldSendmail::default(),
        })
        .unwrap()
    }
}

impl Default for FieldSendmail {
    fn default() -> Self {
        Self {
            ostype: None,
            domain_name: None,
            max_message_size: None,
            dont_probe_interfaces: Self::default_dont_probe_interfaces(),
            enable_ipv4_daemon: false,
            enable_ipv6_daemon: false,
            mailers: vec![],
            trusted_users: vec![],
            enable_msp_trusted_users: false,
            tls: FieldTls::default(),
            msa: FieldMsa::default(),
            mail_hub: None,
        }
    }
}

impl FieldSendmail {
    pub(crate) const fn default_dont_probe_interfaces() -> bool {
        true
    }
}

impl Default for FieldTls {
    fn default() -> Self {
        Self {
            ca_cert_file: None,
            ca_cert_path: None,
            server_cert_file: None,
            server_key_file: None,
            client_cert_file: None,
            client_key_file: None,
            crl_file: None,
            dh_params: None,
            tls_srv_options: None,
            cipher_list: None,
            server_ssl_options: None,
            client_ssl_options: None,
        }
    }
}

impl Default for FieldMsa {
    fn default() -> Self {
        Self {
            enable_ipv4: Self::default_enable_ipv4(),
            enable_ipv6: Self::default_enable_ipv6(),
            port: Self::default_port(),
            port_option_modify: None,
        }
    }
}

impl FieldMsa {
    pub(crate) const fn default_enable_ipv4() -> bool {
        true
    }

    pub(crate) const fn default_enable_ipv6() -> bool {
        true
    }

    pub(crate) fn default_port() -> String {
        "587".to_string()
    }
}
