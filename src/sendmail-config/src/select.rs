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
    config::field::FieldTls,
    mc::{
        daemon_options::{DaemonOptions, Family},
        feature::Feature,
        fragment::Fragment,
    },
    Config,
};

/// The outcome of one selection pass over a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    /// see [`Settings`]
    pub settings: Settings,
    /// The `sendmail.mc` fragments, ascending by
    /// [`order`](crate::mc::fragment::order) key.
    pub fragments: Vec<Fragment>,
}

/// The global settings record, forwarded unmodified to the renderer.
///
/// These are the class-level parameters the renderer expands outside of
/// the fragment concatenation (macro defines, trusted users file, TLS
/// setup). No field is transformed beyond the defaulting already applied
/// when the [`Config`] was built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Local domain name override.
    pub domain_name: Option<String>,
    /// Maximum message size, verbatim.
    pub max_message_size: Option<String>,
    /// Do not probe the local network interfaces at startup.
    pub dont_probe_interfaces: bool,
    /// Main MTA listener on IPv4.
    pub enable_ipv4_daemon: bool,
    /// Main MTA listener on IPv6.
    pub enable_ipv6_daemon: bool,
    /// `MAILER` macros to enable.
    pub mailers: Vec<String>,
    /// Users allowed to send mail as somebody else.
    pub trusted_users: Vec<String>,
    /// Also declare the trusted users for the submission program.
    pub enable_msp_trusted_users: bool,
    /// see [`FieldTls`]
    pub tls: FieldTls,
}

impl Config {
    /// Select the ordered `sendmail.mc` fragments and the settings record
    /// for this configuration.
    ///
    /// Pure and total: a [`Config`] was validated when it was built, so
    /// selection cannot fail, and the same configuration always yields the
    /// same [`Selection`].
    #[must_use]
    pub fn select(&self) -> Selection {
        let params = &self.sendmail;

        let mut fragments = vec![];

        if let Some(ostype) = params.ostype {
            fragments.push(ostype.fragment());
        }

        // An MSA-only setup must not expose the default MTA submission agent.
        fragments.push(Feature::new("no_default_msa").fragment());

        if let Some(mail_hub) = &params.mail_hub {
            fragments.push(Feature::with_args("nullclient", [mail_hub.clone()]).fragment());
        }

        if params.msa.enable_ipv4 {
            fragments.push(
                DaemonOptions {
                    daemon_name: "MSA".to_string(),
                    family: Family::Inet,
                    addr: "127.0.0.1".to_string(),
                    port: params.msa.port.clone(),
                    modify: params.msa.port_option_modify.clone(),
                }
                .fragment("MSA-v4"),
            );
        }

        if params.msa.enable_ipv6 {
            fragments.push(
                DaemonOptions {
                    daemon_name: "MSA".to_string(),
                    family: Family::Inet6,
                    addr: "::1".to_string(),
                    port: params.msa.port.clone(),
                    modify: params.msa.port_option_modify.clone(),
                }
                .fragment("MSA-v6"),
            );
        }

        // Stable: fragments sharing an order key keep enumeration order.
        fragments.sort_by(|a, b| a.order.cmp(&b.order));

        tracing::debug!(count = fragments.len(), "selected sendmail.mc fragments");

        Selection {
            settings: Settings {
                domain_name: params.domain_name.clone(),
                max_message_size: params.max_message_size.clone(),
                dont_probe_interfaces: params.dont_probe_interfaces,
                enable_ipv4_daemon: params.enable_ipv4_daemon,
                enable_ipv6_daemon: params.enable_ipv6_daemon,
                mailers: params.mailers.clone(),
                trusted_users: params.trusted_users.clone(),
                enable_msp_trusted_users: params.enable_msp_trusted_users,
                tls: params.tls.clone(),
            },
            fragments,
        }
    }
}
