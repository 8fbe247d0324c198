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
    config::field::{FieldMsa, FieldTls},
    mc::ostype::Ostype,
};

///
pub struct WantsVersion(pub(crate) ());

///
pub struct WantsOstype {
    #[allow(dead_code)]
    pub(crate) parent: WantsVersion,
    pub(crate) version_requirement: semver::VersionReq,
}

///
pub struct WantsHost {
    pub(crate) parent: WantsOstype,
    pub(crate) ostype: Option<Ostype>,
}

///
pub struct WantsDaemons {
    pub(crate) parent: WantsHost,
    pub(crate) domain_name: Option<String>,
    pub(crate) max_message_size: Option<String>,
    pub(crate) dont_probe_interfaces: bool,
}

///
pub struct WantsMailers {
    pub(crate) parent: WantsDaemons,
    pub(crate) enable_ipv4_daemon: bool,
    pub(crate) enable_ipv6_daemon: bool,
}

///
pub struct WantsTrustedUsers {
    pub(crate) parent: WantsMailers,
    pub(crate) mailers: Vec<String>,
}

///
pub struct WantsTls {
    pub(crate) parent: WantsTrustedUsers,
    pub(crate) trusted_users: Vec<String>,
    pub(crate) enable_msp_trusted_users: bool,
}

///
pub struct WantsMsa {
    pub(crate) parent: WantsTls,
    pub(crate) tls: FieldTls,
}

///
pub struct WantsMailHub {
    pub(crate) parent: WantsMsa,
    pub(crate) msa: FieldMsa,
}

///
pub struct WantsValidate {
    pub(crate) parent: WantsMailHub,
    pub(crate) mail_hub: Option<String>,
}
