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

use super::{wants::WantsValidate, with::Builder};
use crate::{config::field::FieldSendmail, Config};

impl Builder<WantsValidate> {
    ///
    ///
    /// # Errors
    ///
    /// * the message submission agent is disabled for both address families
    pub fn validate(self) -> anyhow::Result<Config> {
        let mail_hub = self.state;
        let msa = mail_hub.parent;
        let tls = msa.parent;
        let trusted = tls.parent;
        let mailers = trusted.parent;
        let daemons = mailers.parent;
        let host = daemons.parent;
        let ostype = host.parent;
        let version = ostype.parent;

        Config::ensure(Config {
            version_requirement: version.version_requirement,
            sendmail: FieldSendmail {
                ostype: ostype.ostype,
                domain_name: host.domain_name,
                max_message_size: host.max_message_size,
                dont_probe_interfaces: host.dont_probe_interfaces,
                enable_ipv4_daemon: daemons.enable_ipv4_daemon,
                enable_ipv6_daemon: daemons.enable_ipv6_daemon,
                mailers: mailers.mailers,
                trusted_users: trusted.trusted_users,
                enable_msp_trusted_users: trusted.enable_msp_trusted_users,
                tls: tls.tls,
                msa: msa.msa,
                mail_hub: mail_hub.mail_hub,
            },
        })
    }
}
