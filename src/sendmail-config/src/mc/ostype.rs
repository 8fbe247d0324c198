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

/// The operating system identifiers accepted by the `OSTYPE` macro.
///
/// The set is closed: anything else has no `ostype/*.m4` file in the
/// sendmail distribution we target and is rejected at parse time.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Ostype {
    /// Debian and derivatives.
    Debian,
    /// Generic Linux, used by the RedHat family.
    Linux,
    /// FreeBSD 6 and later.
    Freebsd6,
}

impl serde::Serialize for Ostype {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> serde::Deserialize<'de> for Ostype {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Ostype {
    /// Build the `OSTYPE` fragment for this identifier.
    #[must_use]
    pub fn fragment(self) -> Fragment {
        Fragment {
            name: format!("sendmail_mc-ostype-{self}"),
            order: order::OSTYPE.to_string(),
            content: format!("OSTYPE(`{self}')dnl"),
            kind: FragmentKind::Ostype(self),
        }
    }
}
