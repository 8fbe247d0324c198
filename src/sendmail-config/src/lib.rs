//! Sendmail configuration
//!
//! This crate models the declarative parameters of a sendmail nullclient
//! setup (mail hub, TLS material, trusted users, submission listeners,
//! OS type) and computes the `sendmail.mc` fragments that an external
//! renderer concatenates into the final configuration file.
//!
//! All the parameters are optional and have default values.
//!
//! The configuration is read and parsed with [`Config::from_toml`],
//! producing an error if there is an invalid syntax, an unknown field,
//! or an invalid combination of parameters.
//!
//! # Configuration
//!
//! The type [`Config`] exposes two methods :
//! * [`Config::builder`] to create a new configuration builder.
//! * [`Config::from_toml`] to read a configuration from a TOML document.
//!
//! Once built, [`Config::select`] returns the ordered fragment sequence
//! and the global settings record for that configuration.

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

#![doc(html_no_source)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
//
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
//
#![allow(clippy::use_self)] // false positive

#[cfg(test)]
mod tests;

/// The `sendmail.mc` fragment kinds and their formatting rules.
pub mod mc {
    /// `DAEMON_OPTIONS` listener declarations.
    pub mod daemon_options;
    /// `FEATURE` invocations.
    pub mod feature;
    /// The fragment record and its ordering keys.
    pub mod fragment;
    /// The `OSTYPE` selector and its closed identifier set.
    pub mod ostype;
}

/// The configuration builder for programmatically instantiating
pub mod builder {
    mod wants;
    mod with;

    pub(crate) mod validate;
    pub use wants::*;
    pub use with::*;
}

mod config;
mod default;
mod ensure;
mod select;

pub use config::{field, Config};
pub use select::{Selection, Settings};

use builder::{Builder, WantsVersion};

impl Config {
    /// Create an instance of [`Builder`].
    #[must_use]
    pub const fn builder() -> Builder<WantsVersion> {
        Builder {
            state: WantsVersion(()),
        }
    }

    /// Parse a [`Config`] with [TOML] format
    ///
    /// # Errors
    ///
    /// * data is not a valid [TOML]
    /// * one field is unknown
    /// * the version requirement are not fulfilled
    /// * the submission agent is disabled for both IPv4 and IPv6
    ///
    /// [TOML]: https://github.com/toml-lang/toml
    pub fn from_toml(input: &str) -> anyhow::Result<Self> {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct VersionRequirement {
            version_requirement: semver::VersionReq,
        }

        let version_requirement = toml::from_str::<VersionRequirement>(input)?.version_requirement;
        let pkg_version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;

        if !version_requirement.matches(&pkg_version) {
            anyhow::bail!(
                "Version requirement not fulfilled: expected '{version_requirement}' but got '{pkg_version}'"
            );
        }

        toml::from_str::<Self>(input)
            .map(Self::ensure)
            .map_err(anyhow::Error::new)?
    }
}
