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

use super::wants::{
    WantsDaemons, WantsHost, WantsMailHub, WantsMailers, WantsMsa, WantsOstype, WantsTls,
    WantsTrustedUsers, WantsValidate, WantsVersion,
};
use crate::{
    config::field::{FieldMsa, FieldSendmail, FieldTls},
    mc::ostype::Ostype,
};
use anyhow::Context;

///
pub struct Builder<State> {
    pub(crate) state: State,
}

impl Builder<WantsVersion> {
    /// # Panics
    ///
    /// * `CARGO_PKG_VERSION` is not valid
    #[must_use]
    pub fn with_current_version(self) -> Builder<WantsOstype> {
        self.with_version_str(env!("CARGO_PKG_VERSION")).unwrap()
    }

    /// # Errors
    ///
    /// * `version_requirement` is not valid format
    pub fn with_version_str(
        self,
        version_requirement: &str,
    ) -> anyhow::Result<Builder<WantsOstype>> {
        semver::VersionReq::parse(version_requirement)
            .with_context(|| format!("version is not valid: '{version_requirement}'"))
            .map(|version_requirement| Builder::<WantsOstype> {
                state: WantsOstype {
                    parent: self.state,
                    version_requirement,
                },
            })
    }
}

impl Builder<WantsOstype> {
    /// Pick the OS-specific defaults selector.
    #[must_use]
    pub fn with_ostype(self, ostype: Ostype) -> Builder<WantsHost> {
        Builder::<WantsHost> {
            state: WantsHost {
                parent: self.state,
                ostype: Some(ostype),
            },
        }
    }

    /// Leave the `OSTYPE` line to an external fragment.
    #[must_use]
    pub fn without_ostype(self) -> Builder<WantsHost> {
        Builder::<WantsHost> {
            state: WantsHost {
                parent: self.state,
                ostype: None,
            },
        }
    }
}

impl Builder<WantsHost> {
    /// Keep sendmail's own host defaults.
    #[must_use]
    pub fn with_default_host(self) -> Builder<WantsDaemons> {
        self.with_host_settings(None, None, FieldSendmail::default_dont_probe_interfaces())
    }

    /// Override the local domain name, keep the other host defaults.
    #[must_use]
    pub fn with_domain_name(self, domain_name: &str) -> Builder<WantsDaemons> {
        self.with_host_settings(
            Some(domain_name.to_string()),
            None,
            FieldSendmail::default_dont_probe_interfaces(),
        )
    }

    ///
    #[must_use]
    pub fn with_host_settings(
        self,
        domain_name: Option<String>,
        max_message_size: Option<String>,
        dont_probe_interfaces: bool,
    ) -> Builder<WantsDaemons> {
        Builder::<WantsDaemons> {
            state: WantsDaemons {
                parent: self.state,
                domain_name,
                max_message_size,
                dont_probe_interfaces,
            },
        }
    }
}

impl Builder<WantsDaemons> {
    /// Nullclient mode: no main MTA listener on either family.
    #[must_use]
    pub fn without_daemons(self) -> Builder<WantsMailers> {
        self.with_daemons(false, false)
    }

    ///
    #[must_use]
    pub fn with_daemons(
        self,
        enable_ipv4_daemon: bool,
        enable_ipv6_daemon: bool,
    ) -> Builder<WantsMailers> {
        Builder::<WantsMailers> {
            state: WantsMailers {
                parent: self.state,
                enable_ipv4_daemon,
                enable_ipv6_daemon,
            },
        }
    }
}

impl Builder<WantsMailers> {
    ///
    #[must_use]
    pub fn without_mailers(self) -> Builder<WantsTrustedUsers> {
        self.with_mailers(&[])
    }

    ///
    #[must_use]
    pub fn with_mailers(self, mailers: &[&str]) -> Builder<WantsTrustedUsers> {
        Builder::<WantsTrustedUsers> {
            state: WantsTrustedUsers {
                parent: self.state,
                mailers: mailers.iter().map(ToString::to_string).collect(),
            },
        }
    }
}

impl Builder<WantsTrustedUsers> {
    ///
    #[must_use]
    pub fn without_trusted_users(self) -> Builder<WantsTls> {
        self.with_trusted_users(&[], false)
    }

    ///
    #[must_use]
    pub fn with_trusted_users(
        self,
        trusted_users: &[&str],
        enable_msp_trusted_users: bool,
    ) -> Builder<WantsTls> {
        Builder::<WantsTls> {
            state: WantsTls {
                parent: self.state,
                trusted_users: trusted_users.iter().map(ToString::to_string).collect(),
                enable_msp_trusted_users,
            },
        }
    }
}

impl Builder<WantsTls> {
    ///
    #[must_use]
    pub fn without_tls_support(self) -> Builder<WantsMsa> {
        self.with_tls(FieldTls::default())
    }

    ///
    #[must_use]
    pub fn with_tls(self, tls: FieldTls) -> Builder<WantsMsa> {
        Builder::<WantsMsa> {
            state: WantsMsa {
                parent: self.state,
                tls,
            },
        }
    }
}

impl Builder<WantsMsa> {
    /// Submission listeners on both families, default port, no modifiers.
    #[must_use]
    pub fn with_default_msa(self) -> Builder<WantsMailHub> {
        self.with_msa(FieldMsa::default())
    }

    /// Default families, custom submission port.
    ///
    /// Shortcut over [`Self::with_msa`]: every other field keeps its
    /// default. Combining a custom port with other overrides requires
    /// [`Self::with_msa`].
    #[must_use]
    pub fn with_msa_port(self, port: &str) -> Builder<WantsMailHub> {
        self.with_msa(FieldMsa {
            port: port.to_string(),
            ..FieldMsa::default()
        })
    }

    /// Default families and port, with `Modify=` flags.
    ///
    /// Shortcut over [`Self::with_msa`], exclusive with the other
    /// shortcuts of this stage.
    #[must_use]
    pub fn with_port_option_modify(self, modify: &str) -> Builder<WantsMailHub> {
        self.with_msa(FieldMsa {
            port_option_modify: Some(modify.to_string()),
            ..FieldMsa::default()
        })
    }

    /// IPv6-only submission.
    #[must_use]
    pub fn without_ipv4_msa(self) -> Builder<WantsMailHub> {
        self.with_msa(FieldMsa {
            enable_ipv4: false,
            ..FieldMsa::default()
        })
    }

    /// IPv4-only submission.
    #[must_use]
    pub fn without_ipv6_msa(self) -> Builder<WantsMailHub> {
        self.with_msa(FieldMsa {
            enable_ipv6: false,
            ..FieldMsa::default()
        })
    }

    ///
    #[must_use]
    pub fn with_msa(self, msa: FieldMsa) -> Builder<WantsMailHub> {
        Builder::<WantsMailHub> {
            state: WantsMailHub {
                parent: self.state,
                msa,
            },
        }
    }
}

impl Builder<WantsMailHub> {
    ///
    #[must_use]
    pub fn without_mail_hub(self) -> Builder<WantsValidate> {
        Builder::<WantsValidate> {
            state: WantsValidate {
                parent: self.state,
                mail_hub: None,
            },
        }
    }

    /// Relay all outbound mail to this smart host.
    #[must_use]
    pub fn with_mail_hub(self, mail_hub: &str) -> Builder<WantsValidate> {
        Builder::<WantsValidate> {
            state: WantsValidate {
                parent: self.state,
                mail_hub: Some(mail_hub.to_string()),
            },
        }
    }
}
