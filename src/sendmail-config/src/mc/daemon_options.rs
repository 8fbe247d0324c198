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

use crate::mc::fragment::{order, Fragment, FragmentKind};

/// Address family of one listener.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Family {
    /// IPv4
    Inet,
    /// IPv6
    Inet6,
}

impl serde::Serialize for Family {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> serde::Deserialize<'de> for Family {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Parameters of one `DAEMON_OPTIONS` listener declaration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DaemonOptions {
    /// Listener name (`Name=`).
    pub daemon_name: String,
    /// Address family (`Family=`).
    pub family: Family,
    /// Bind address (`Addr=`).
    pub addr: String,
    /// Listening port (`Port=`).
    pub port: String,
    /// Behavior modifier flags (`Modify=`), verbatim short codes such as
    /// `S` or `Sa`. No constraint is enforced on the flag characters.
    pub modify: Option<String>,
}

impl DaemonOptions {
    /// Build the `DAEMON_OPTIONS` fragment under the given title.
    ///
    /// The title distinguishes several listeners of the same daemon, e.g.
    /// `MSA-v4` and `MSA-v6` both carry `Name=MSA`.
    #[must_use]
    pub fn fragment(&self, title: &str) -> Fragment {
        let mut options = format!(
            "Name={}, Family={}, Addr={}, Port={}",
            self.daemon_name, self.family, self.addr, self.port
        );
        if let Some(modify) = &self.modify {
            options.push_str(&format!(", Modify={modify}"));
        }

        Fragment {
            name: format!("sendmail_mc-daemon_options-{title}"),
            order: order::DAEMON_OPTIONS.to_string(),
            content: format!("DAEMON_OPTIONS(`{options}')dnl"),
            kind: FragmentKind::DaemonOptions(self.clone()),
        }
    }
}
