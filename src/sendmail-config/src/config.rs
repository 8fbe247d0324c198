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

/// This structure contains all the fields to configure the generator.
///
/// This structure is loaded from a TOML document with
/// [`crate::Config::from_toml`].
///
/// All fields are optional and defaulted if missing.
///
/// You can also use the builder [`Config::builder`](crate::Config::builder)
/// to create an instance programmatically.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `sendmail-config`'s version requirement to parse this configuration file.
    pub version_requirement: semver::VersionReq,
    /// see [`field::FieldSendmail`]
    #[serde(default)]
    pub sendmail: field::FieldSendmail,
}

/// The inner field of the configuration.
#[allow(clippy::module_name_repetitions)]
pub mod field {
    use crate::mc::ostype::Ostype;

    /// The class-level parameters of the mail transport configuration.
    ///
    /// Scalar and collection fields are passed through verbatim to the
    /// settings record returned by [`crate::Config::select`]; only the
    /// `ostype`, `mail_hub` and `msa` fields drive fragment selection.
    #[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(deny_unknown_fields)]
    pub struct FieldSendmail {
        /// OS-specific defaults selector for the `OSTYPE` macro,
        /// supplied by the caller's platform detection.
        pub ostype: Option<Ostype>,
        /// Local domain name override (`Dj`). Unset keeps sendmail's own default.
        pub domain_name: Option<String>,
        /// Maximum message size accepted by the listeners, passed through verbatim.
        pub max_message_size: Option<String>,
        /// Do not insert the local network interfaces into class `w` at startup.
        #[serde(default = "FieldSendmail::default_dont_probe_interfaces")]
        pub dont_probe_interfaces: bool,
        /// Run the main MTA listener on IPv4. Off for a nullclient.
        #[serde(default)]
        pub enable_ipv4_daemon: bool,
        /// Run the main MTA listener on IPv6. Off for a nullclient.
        #[serde(default)]
        pub enable_ipv6_daemon: bool,
        /// Mailers to enable with the `MAILER` macro.
        #[serde(default)]
        pub mailers: Vec<String>,
        /// Users allowed to send mail as somebody else (class `t`).
        #[serde(default)]
        pub trusted_users: Vec<String>,
        /// Also declare the trusted users in the message submission program
        /// configuration.
        #[serde(default)]
        pub enable_msp_trusted_users: bool,
        /// see [`FieldTls`]
        #[serde(default)]
        pub tls: FieldTls,
        /// see [`FieldMsa`]
        #[serde(default)]
        pub msa: FieldMsa,
        /// Relay every outbound message to this smart host
        /// (the `nullclient` feature).
        pub mail_hub: Option<String>,
    }

    /// The TLS material handed over to the mail transport.
    ///
    /// Everything here is a plain passthrough: this crate never opens the
    /// files, it only forwards the paths and option strings.
    #[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(deny_unknown_fields)]
    pub struct FieldTls {
        /// Certificate authority bundle.
        pub ca_cert_file: Option<std::path::PathBuf>,
        /// Directory of certificate authority certificates.
        pub ca_cert_path: Option<std::path::PathBuf>,
        /// Server certificate.
        pub server_cert_file: Option<std::path::PathBuf>,
        /// Server private key.
        pub server_key_file: Option<std::path::PathBuf>,
        /// Client certificate.
        pub client_cert_file: Option<std::path::PathBuf>,
        /// Client private key.
        pub client_key_file: Option<std::path::PathBuf>,
        /// Certificate revocation list.
        pub crl_file: Option<std::path::PathBuf>,
        /// Diffie-Hellman parameters (a file path or a builtin group name).
        pub dh_params: Option<String>,
        /// `TLS_Srv_Options` flags, e.g. `V` to skip client certificate
        /// verification.
        pub tls_srv_options: Option<String>,
        /// OpenSSL cipher list.
        pub cipher_list: Option<String>,
        /// SSL options for the server side.
        pub server_ssl_options: Option<String>,
        /// SSL options for the client side.
        pub client_ssl_options: Option<String>,
    }

    /// The message submission agent listeners.
    #[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(deny_unknown_fields)]
    pub struct FieldMsa {
        /// Listen for submissions on `127.0.0.1`.
        #[serde(default = "FieldMsa::default_enable_ipv4")]
        pub enable_ipv4: bool,
        /// Listen for submissions on `::1`.
        #[serde(default = "FieldMsa::default_enable_ipv6")]
        pub enable_ipv6: bool,
        /// Submission port, shared by both address families.
        #[serde(default = "FieldMsa::default_port")]
        pub port: String,
        /// `Modify=` flags for the submission listeners, passed through
        /// verbatim (e.g. `S`, `Sa`).
        pub port_option_modify: Option<String>,
    }
}
